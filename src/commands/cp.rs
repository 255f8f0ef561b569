//! `cp` — copy one file's contents to another path.

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::os::unix::fs::OpenOptionsExt;

use super::types::{Command, CommandContext, OpError};

/// Bytes read per iteration of the copy loop.
pub const COPY_CHUNK: usize = 50;

pub struct CpCommand;

impl Command for CpCommand {
    fn name(&self) -> &'static str {
        "cp"
    }

    fn narration(&self) -> &'static str {
        "Copying"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<(), OpError> {
        let src = ctx.next_arg("source path")?;
        let dest = ctx.next_arg("destination path")?;

        let mut from = File::open(&src).map_err(|e| OpError::io("open", &src, e))?;
        let mut to = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o644)
            .open(&dest)
            .map_err(|e| OpError::io("open", &dest, e))?;

        let mut buf = [0u8; COPY_CHUNK];
        loop {
            let n = from
                .read(&mut buf)
                .map_err(|e| OpError::io("read", &src, e))?;
            if n == 0 {
                break;
            }
            to.write_all(&buf[..n])
                .map_err(|e| OpError::io("write", &dest, e))?;
        }
        Ok(())
    }
}
