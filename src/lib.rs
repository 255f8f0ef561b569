//! fshell - an interactive filesystem command shell
//!
//! A read-eval loop over standard input that dispatches whitespace-delimited
//! command keywords to a fixed set of file operations and reports a uniform
//! Success/failure outcome for each one.

pub mod commands;
pub mod shell;
pub mod tokenizer;

pub use commands::{Command, CommandContext, CommandRegistry, OpError};
pub use shell::Shell;
pub use tokenizer::{TokenReader, TokenSource, MAX_TOKEN_LEN};
