//! Read-eval loop: banner, prompt, keyword dispatch, uniform outcome
//! reporting.

use std::io::{self, BufRead, Write};

use crate::commands::registry::{create_registry, CommandRegistry};
use crate::commands::types::{CommandContext, OpError};
use crate::tokenizer::{TokenReader, TokenSource, MAX_TOKEN_LEN};

const PROMPT: &str = "% ";

/// Interactive shell over a token stream. Generic over its streams so tests
/// can drive it with in-memory cursors.
pub struct Shell<R, W> {
    tokens: TokenReader<R>,
    out: W,
    registry: CommandRegistry,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            tokens: TokenReader::new(input),
            out,
            registry: create_registry(),
        }
    }

    /// Drive read -> dispatch -> report cycles until `exit` or end of input.
    ///
    /// An `Err` here means the shell's own streams failed; command failures
    /// are reported inline and never abort the loop.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "Do not use more than {} characters for file names.",
            MAX_TOKEN_LEN
        )?;
        self.prompt()?;

        while let Some(keyword) = self.tokens.next_token()? {
            if keyword == "exit" {
                return self.farewell();
            }
            match self.registry.get(&keyword) {
                Some(cmd) => {
                    writeln!(self.out, "{}", cmd.narration())?;
                    let outcome = cmd.execute(&mut CommandContext {
                        tokens: &mut self.tokens,
                        out: &mut self.out,
                    });
                    self.report(outcome)?;
                }
                None => writeln!(self.out, "Unknown command: {}", keyword)?,
            }
            // re-print the prompt only when the command ended its line
            if self.tokens.consume_line_break()? {
                self.prompt()?;
            }
        }
        self.farewell()
    }

    fn report(&mut self, outcome: Result<(), OpError>) -> io::Result<()> {
        match outcome {
            Ok(()) => writeln!(self.out, "Success"),
            Err(e) => writeln!(self.out, "Something went wrong: {}", e),
        }
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "{}", PROMPT)?;
        self.out.flush()
    }

    fn farewell(&mut self) -> io::Result<()> {
        writeln!(self.out, "Exiting...Goodbye!")
    }
}
