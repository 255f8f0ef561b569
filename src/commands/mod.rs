// src/commands/mod.rs
pub mod cat;
pub mod cp;
pub mod info;
pub mod insert;
pub mod mkdir;
pub mod mkfile;
pub mod registry;
pub mod rm;
pub mod rmdir;
pub mod types;

pub use registry::{create_registry, CommandRegistry};
pub use types::{Command, CommandContext, OpError};

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::Cursor;

    use super::types::{Command, CommandContext, OpError};
    use crate::tokenizer::TokenReader;

    /// Run one command against a scripted argument stream, capturing output.
    pub fn run(cmd: &dyn Command, input: &str) -> (Result<(), OpError>, Vec<u8>) {
        let mut tokens = TokenReader::new(Cursor::new(input.to_owned()));
        let mut out: Vec<u8> = Vec::new();
        let result = cmd.execute(&mut CommandContext {
            tokens: &mut tokens,
            out: &mut out,
        });
        (result, out)
    }

    pub fn run_utf8(cmd: &dyn Command, input: &str) -> (Result<(), OpError>, String) {
        let (result, out) = run(cmd, input);
        (result, String::from_utf8_lossy(&out).into_owned())
    }
}
