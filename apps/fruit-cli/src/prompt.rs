//! Line-oriented console I/O.
//!
//! [`Console`] pairs an input reader with an output writer so actions can be
//! driven by a real terminal or by a scripted buffer in tests.

use std::io::{self, BufRead, Write};

use crate::error::{ActionError, ActionResult};

/// Interactive input and output for the menu.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Prints `label`, then reads one line without its line terminator.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Like [`prompt`](Self::prompt), but end of input aborts the action.
    pub fn ask(&mut self, label: &str) -> ActionResult<String> {
        self.prompt(label)?.ok_or(ActionError::InputClosed)
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
