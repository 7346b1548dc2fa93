//! Line-oriented console over any reader/writer pair.
//!
//! The binary wires this to stdin/stdout; tests feed it scripted input.

use std::io::{BufRead, Write};

use crate::{
    Result,
    error::Error,
    ports::Console,
    tictactoe::{Board, Player},
};

/// Console that reads answers line by line and re-prompts on bad input.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn write_prompt(&mut self, prompt: &str) -> Result<()> {
        write!(self.output, "{prompt}")
            .and_then(|_| self.output.flush())
            .map_err(|source| Error::Io {
                operation: "write prompt".to_string(),
                source,
            })
    }

    /// Read one line, failing once input is exhausted.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected, so such a
    /// line simply fails to parse and the caller asks again.
    fn read_line(&mut self) -> Result<String> {
        let mut line = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .map_err(|source| Error::Io {
                operation: "read input".to_string(),
                source,
            })?;
        if read == 0 {
            return Err(Error::Io {
                operation: "read input".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "input closed"),
            });
        }
        Ok(String::from_utf8_lossy(&line).into_owned())
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn prompt_side(&mut self) -> Result<Player> {
        loop {
            self.write_prompt("Do you want to be X or O? ")?;
            if let Ok(player) = self.read_line()?.parse::<Player>() {
                return Ok(player);
            }
        }
    }

    fn prompt_move(&mut self, board: &Board) -> Result<usize> {
        let legal = board.legal_actions();
        if legal.is_empty() {
            return Err(Error::NoLegalActions);
        }
        loop {
            self.write_prompt("Your move (0-8): ")?;
            match self.read_line()?.trim().parse::<usize>() {
                Ok(position) if legal.contains(&position) => return Ok(position),
                Ok(position) => log::debug!("rejected move {position}: not an empty cell"),
                Err(e) => log::debug!("rejected move input: {e}"),
            }
        }
    }

    fn show_board(&mut self, board: &Board) -> Result<()> {
        writeln!(self.output, "{board}").map_err(|source| Error::Io {
            operation: "render board".to_string(),
            source,
        })
    }

    fn show_message(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").map_err(|source| Error::Io {
            operation: "write message".to_string(),
            source,
        })
    }
}
