//! Common utilities for mktemp-cmd

use tracing_subscriber::EnvFilter;

/// Parses permission bits written in octal, e.g. "600" or "0o755".
pub fn parse_octal_mode(value: &str) -> Result<u32, String> {
    let digits = value.strip_prefix("0o").unwrap_or(value);
    let mode = u32::from_str_radix(digits, 8)
        .map_err(|e| format!("invalid octal mode '{value}': {e}"))?;
    if mode > 0o7777 {
        return Err(format!("mode '{value}' exceeds 7777"));
    }
    Ok(mode)
}

/// Filter used when `RUST_LOG` is not set (or cannot be parsed): warnings
/// only, `-v` adds debug output and `-vv` adds trace output.
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Builds the log filter; a valid `RUST_LOG` value takes precedence over the
/// verbosity flags.
fn build_filter(rust_log: Option<&str>, verbose: u8) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbose)))
}

/// Installs a stderr subscriber. Records emitted through the `log` facade by
/// the library are forwarded to it.
pub fn init_logging(verbose: u8) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(rust_log.as_deref(), verbose);

    // Logging may be already initialized when running under tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_octal_mode() {
        assert_eq!(parse_octal_mode("600"), Ok(0o600));
        assert_eq!(parse_octal_mode("0o755"), Ok(0o755));
        assert_eq!(parse_octal_mode("4755"), Ok(0o4755));
        assert!(parse_octal_mode("8").is_err());
        assert!(parse_octal_mode("10000").is_err());
        assert!(parse_octal_mode("").is_err());
    }

    fn filter_str(rust_log: Option<&str>, verbose: u8) -> String {
        build_filter(rust_log, verbose).to_string().to_lowercase()
    }

    #[test]
    fn test_filter_from_verbosity() {
        assert_eq!(filter_str(None, 0), "warn");
        assert_eq!(filter_str(None, 1), "debug");
        assert_eq!(filter_str(None, 5), "trace");
    }

    #[test]
    fn test_filter_prefers_rust_log() {
        assert_eq!(filter_str(Some("mktemp=trace"), 0), "mktemp=trace");
        assert_eq!(filter_str(Some("mktemp=nonsense"), 1), "debug");
    }
}
