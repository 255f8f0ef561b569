//! Whitespace-delimited token scanning over the shell's input stream.
//!
//! Command keywords and argument tokens share one stream: commands pull their
//! own arguments through [`TokenSource`] after the dispatcher consumes the
//! keyword.

use std::io::{self, BufRead};

/// Longest token the shell accepts. A longer run of non-whitespace bytes is
/// split at this boundary and the remainder becomes the next token.
pub const MAX_TOKEN_LEN: usize = 50;

/// Source of whitespace-delimited tokens.
pub trait TokenSource {
    /// Next token, or `None` once the input is exhausted.
    fn next_token(&mut self) -> io::Result<Option<String>>;

    /// Consume exactly one byte and report whether it was a line break.
    /// Returns `false` at end of input.
    fn consume_line_break(&mut self) -> io::Result<bool>;
}

/// Byte-level token scanner over any buffered reader.
pub struct TokenReader<R> {
    input: R,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        let buf = self.input.fill_buf()?;
        Ok(buf.first().copied())
    }
}

impl<R: BufRead> TokenSource for TokenReader<R> {
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            match self.peek_byte()? {
                Some(b) if b.is_ascii_whitespace() => self.input.consume(1),
                Some(_) => break,
                None => return Ok(None),
            }
        }

        let mut token = Vec::with_capacity(16);
        while token.len() < MAX_TOKEN_LEN {
            match self.peek_byte()? {
                Some(b) if !b.is_ascii_whitespace() => {
                    token.push(b);
                    self.input.consume(1);
                }
                _ => break,
            }
        }
        Ok(Some(String::from_utf8_lossy(&token).into_owned()))
    }

    fn consume_line_break(&mut self) -> io::Result<bool> {
        match self.peek_byte()? {
            Some(b) => {
                self.input.consume(1);
                Ok(b == b'\n')
            }
            None => Ok(false),
        }
    }
}
