//! Line-oriented prompting.
//!
//! [`Prompter`] is generic over its input and output so a session can run
//! against the terminal or against canned text in tests.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::SessionError;

/// Writes questions to `W` and reads one-line answers from `R`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a new prompter.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show `prompt` and return the reply without its line terminator.
    ///
    /// Nothing else is trimmed; `" 3"` comes back as `" 3"`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InputClosed`] at end of input and
    /// [`SessionError::Io`] if reading or writing fails.
    pub fn ask(&mut self, prompt: &str) -> Result<String, SessionError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Ask until `accept` returns `Some`, printing `retry` after each miss.
    ///
    /// There is no attempt limit.
    ///
    /// # Errors
    ///
    /// Same as [`Prompter::ask`].
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        retry: &str,
        mut accept: impl FnMut(&str) -> Option<T>,
    ) -> Result<T, SessionError> {
        loop {
            let reply = self.ask(prompt)?;
            if let Some(value) = accept(&reply) {
                return Ok(value);
            }
            self.say(retry)?;
        }
    }

    /// Print one line.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] if writing fails.
    pub fn say(&mut self, message: impl Display) -> Result<(), SessionError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Give back the input and output.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
