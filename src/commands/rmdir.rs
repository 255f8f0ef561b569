//! `rmdir` — remove an empty directory.

use std::fs;

use super::types::{Command, CommandContext, OpError};

pub struct RmdirCommand;

impl Command for RmdirCommand {
    fn name(&self) -> &'static str {
        "rmdir"
    }

    fn narration(&self) -> &'static str {
        "Removing directory"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<(), OpError> {
        let path = ctx.next_arg("path")?;
        fs::remove_dir(&path).map_err(|e| OpError::io("rmdir", &path, e))?;
        Ok(())
    }
}
