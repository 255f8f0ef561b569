//! `insert` — overwrite bytes in place at a given offset.
//!
//! Despite the name this is a fixed-size overwrite, not a content-shifting
//! insertion: the word's bytes replace whatever was at the offset and trailing
//! content is untouched.

use std::fs::OpenOptions;
use std::io::{Seek, SeekFrom, Write};

use super::types::{Command, CommandContext, OpError};

pub struct InsertCommand;

impl Command for InsertCommand {
    fn name(&self) -> &'static str {
        "insert"
    }

    fn narration(&self) -> &'static str {
        "Inserting word"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<(), OpError> {
        let word = ctx.next_arg("word")?;
        let offset_tok = ctx.next_arg("offset")?;
        let offset: u64 = match offset_tok.parse() {
            Ok(n) => n,
            Err(_) => return Err(OpError::InvalidOffset(offset_tok)),
        };
        let path = ctx.next_arg("path")?;

        let mut file = OpenOptions::new()
            .write(true)
            .open(&path)
            .map_err(|e| OpError::io("open", &path, e))?;
        file.seek(SeekFrom::Start(offset))
            .map_err(|e| OpError::io("seek", &path, e))?;
        file.write_all(word.as_bytes())
            .map_err(|e| OpError::io("write", &path, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::run_utf8;

    #[test]
    fn test_overwrites_at_start() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f");
        std::fs::write(&path, b"xxxxx rest").unwrap();

        let input = format!("hello 0 {}", path.display());
        let (result, _) = run_utf8(&InsertCommand, &input);
        assert!(result.is_ok());
        assert_eq!(std::fs::read(&path).unwrap(), b"hello rest");
    }

    #[test]
    fn test_overwrites_mid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f");
        std::fs::write(&path, b"abcdefgh").unwrap();

        let input = format!("XY 3 {}", path.display());
        let (result, _) = run_utf8(&InsertCommand, &input);
        assert!(result.is_ok());
        assert_eq!(std::fs::read(&path).unwrap(), b"abcXYfgh");
    }

    #[test]
    fn test_offset_past_end_extends_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f");
        std::fs::write(&path, b"ab").unwrap();

        let input = format!("Z 4 {}", path.display());
        let (result, _) = run_utf8(&InsertCommand, &input);
        assert!(result.is_ok());
        assert_eq!(std::fs::read(&path).unwrap(), b"ab\0\0Z");
    }

    #[test]
    fn test_non_numeric_offset_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f");
        std::fs::write(&path, b"abc").unwrap();

        let input = format!("word ten {}", path.display());
        let (result, _) = run_utf8(&InsertCommand, &input);
        assert!(matches!(result, Err(OpError::InvalidOffset(_))));
        assert_eq!(std::fs::read(&path).unwrap(), b"abc");
    }

    #[test]
    fn test_missing_target_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope");
        let input = format!("word 0 {}", path.display());
        let (result, _) = run_utf8(&InsertCommand, &input);
        assert!(matches!(result, Err(OpError::Io { .. })));
    }
}
