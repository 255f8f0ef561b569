//! Core types shared by every shell command.

use std::io::{self, Write};

use thiserror::Error;

use crate::tokenizer::TokenSource;

/// Failure raised by a command. The shell reports every variant the same way,
/// prefixed with a generic failure line.
#[derive(Error, Debug)]
pub enum OpError {
    #[error("{operation} '{path}': {source}")]
    Io {
        path: String,
        operation: &'static str,
        source: io::Error,
    },

    #[error("missing {0} argument")]
    MissingArgument(&'static str),

    #[error("invalid byte offset '{0}'")]
    InvalidOffset(String),

    #[error("no passwd entry for uid {0}")]
    UnknownOwner(u32),

    #[error("no group entry for gid {0}")]
    UnknownGroup(u32),

    #[error("reading input: {0}")]
    Input(#[source] io::Error),

    #[error("writing output: {0}")]
    Output(#[source] io::Error),
}

impl OpError {
    pub fn io(operation: &'static str, path: &str, source: io::Error) -> Self {
        OpError::Io {
            path: path.to_string(),
            operation,
            source,
        }
    }
}

/// Execution context handed to a command: the shared token stream its
/// arguments come from, and the shell's output sink.
pub struct CommandContext<'a> {
    pub tokens: &'a mut dyn TokenSource,
    pub out: &'a mut dyn Write,
}

impl CommandContext<'_> {
    /// Pull the next argument token; the stream running dry mid-command is a
    /// command failure, not a shell exit.
    pub fn next_arg(&mut self, what: &'static str) -> Result<String, OpError> {
        self.tokens
            .next_token()
            .map_err(OpError::Input)?
            .ok_or(OpError::MissingArgument(what))
    }
}

/// A dispatchable file operation.
pub trait Command {
    /// Keyword the dispatcher matches on.
    fn name(&self) -> &'static str;

    /// Line printed before the operation runs.
    fn narration(&self) -> &'static str;

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<(), OpError>;
}
