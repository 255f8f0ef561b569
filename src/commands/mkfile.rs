//! `mkfile` — create a new empty file, mode 0644. Refuses to overwrite.

use std::fs::OpenOptions;
use std::os::unix::fs::OpenOptionsExt;

use super::types::{Command, CommandContext, OpError};

pub struct MkfileCommand;

impl Command for MkfileCommand {
    fn name(&self) -> &'static str {
        "mkfile"
    }

    fn narration(&self) -> &'static str {
        "Making a file"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<(), OpError> {
        let path = ctx.next_arg("path")?;
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .mode(0o644)
            .open(&path)
            .map_err(|e| OpError::io("create", &path, e))?;
        Ok(())
    }
}
