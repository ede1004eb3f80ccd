//! File and directory creation commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use mktemp::{CreateOptions, EntryKind};

use crate::CreateArgs;

pub fn run(kind: EntryKind, args: CreateArgs) -> Result<()> {
    let path = create(kind, &args)?;
    println!("{}", path.display());
    Ok(())
}

fn create(kind: EntryKind, args: &CreateArgs) -> Result<PathBuf> {
    let template = match &args.tmpdir {
        Some(dir) => PathBuf::from(dir).join(&args.template),
        None => PathBuf::from(&args.template),
    };

    let mut options = CreateOptions::new().with_budget_multiplier(args.multiplier);
    if let Some(mode) = args.mode {
        options = options.with_mode(mode);
    }

    let result = match kind {
        EntryKind::File => mktemp::create_file_blocking_with(&template, options),
        EntryKind::Dir => mktemp::create_dir_blocking_with(&template, options),
    };
    result.with_context(|| {
        format!(
            "Failed to create {kind:?} from template: {}",
            template.display()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(template: &str, tmpdir: &std::path::Path) -> CreateArgs {
        CreateArgs {
            template: template.to_string(),
            mode: None,
            tmpdir: Some(tmpdir.to_str().unwrap().to_string()),
            multiplier: 1,
        }
    }

    #[test]
    fn test_create_in_tmpdir() {
        let dir = tempfile::tempdir().unwrap();

        let file = create(EntryKind::File, &args("XXXXX.tmp", dir.path())).unwrap();
        assert_eq!(file.parent().unwrap(), dir.path());
        assert!(file.is_file());

        let sub = create(EntryKind::Dir, &args("d-XXXX", dir.path())).unwrap();
        assert!(sub.is_dir());
    }

    #[test]
    fn test_create_reports_exhaustion() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("fixed"), b"").unwrap();

        let err = create(EntryKind::File, &args("fixed", dir.path())).unwrap_err();
        let cause = err.downcast_ref::<mktemp::Error>().unwrap();
        assert!(cause.is_retries_exhausted());
    }
}
