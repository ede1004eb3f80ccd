use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// Returns the underlying `std::io::ErrorKind` for filesystem errors,
    /// `None` for all other kinds.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self.kind() {
            ErrorKind::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }

    pub fn is_retries_exhausted(&self) -> bool {
        matches!(self.kind(), ErrorKind::RetriesExhausted { .. })
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn retries_exhausted(template: impl Into<String>, attempts: u64) -> Error {
        Error(
            ErrorKind::RetriesExhausted {
                template: template.into(),
                attempts,
            }
            .into(),
        )
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Error {
        Error(
            ErrorKind::Io {
                context: context.into(),
                source,
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    /// Every candidate produced from the template collided with an existing entry.
    #[error("over max retry count: '{template}' collided on all {attempts} attempts")]
    RetriesExhausted { template: String, attempts: u64 },

    #[error("IO error for '{context}': {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
