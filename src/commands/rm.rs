//! `rm` — unlink a single file.

use std::fs;

use super::types::{Command, CommandContext, OpError};

pub struct RmCommand;

impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn narration(&self) -> &'static str {
        "Removing file"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<(), OpError> {
        let path = ctx.next_arg("path")?;
        fs::remove_file(&path).map_err(|e| OpError::io("unlink", &path, e))?;
        Ok(())
    }
}
