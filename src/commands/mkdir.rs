//! `mkdir` — create a directory, mode 0755. Non-recursive.

use std::fs::DirBuilder;
use std::os::unix::fs::DirBuilderExt;

use super::types::{Command, CommandContext, OpError};

pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn narration(&self) -> &'static str {
        "Making a directory"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<(), OpError> {
        let path = ctx.next_arg("path")?;
        DirBuilder::new()
            .mode(0o755)
            .create(&path)
            .map_err(|e| OpError::io("mkdir", &path, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::run_utf8;

    #[test]
    fn test_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub");

        let (result, _) = run_utf8(&MkdirCommand, path.to_str().unwrap());
        assert!(result.is_ok());
        assert!(path.is_dir());
    }

    #[test]
    fn test_existing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let (result, _) = run_utf8(&MkdirCommand, dir.path().to_str().unwrap());
        assert!(matches!(result, Err(OpError::Io { .. })));
    }

    #[test]
    fn test_missing_parent_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/parent");
        let (result, _) = run_utf8(&MkdirCommand, path.to_str().unwrap());
        assert!(result.is_err());
    }
}
