//! `cat` — stream a file's bytes to the shell's output.

use std::fs::File;
use std::io::{Read, Write};

use super::types::{Command, CommandContext, OpError};

/// Chunk size for streaming file contents.
pub const READ_BUF_LEN: usize = 64 * 1024;

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn narration(&self) -> &'static str {
        "Reading from file:"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<(), OpError> {
        let path = ctx.next_arg("path")?;
        let mut file = File::open(&path).map_err(|e| OpError::io("open", &path, e))?;

        // Output already written before a mid-stream failure stays written.
        let mut buf = vec![0u8; READ_BUF_LEN];
        loop {
            let n = file
                .read(&mut buf)
                .map_err(|e| OpError::io("read", &path, e))?;
            if n == 0 {
                break;
            }
            ctx.out.write_all(&buf[..n]).map_err(OpError::Output)?;
        }
        Ok(())
    }
}
