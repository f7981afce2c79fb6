//! Interactive player driven by a line-based input stream

use std::io::{self, BufRead, Write};

use super::Agent;
use crate::{
    Result,
    board::{Board, Mark, SIZE},
};

const PROMPT: &str = "Enter your move (row and column from 0 to 2, separated by a space): ";
const GUIDE_PARSE: &str = "Invalid input. Please enter two numbers from 0 to 2.";
const GUIDE_OCCUPIED: &str = "That cell is already taken.";

/// Agent whose moves come from an external line-based input source.
///
/// Re-prompts until it reads two integers in range denoting an empty
/// cell; malformed or occupied-cell input never escapes as an error. The
/// loop is unbounded, so the only failure path is the stream itself
/// failing or reaching end of input.
pub struct HumanAgent<R, W> {
    mark: Mark,
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(name: String, mark: Mark, input: R, output: W) -> Self {
        HumanAgent {
            mark,
            name,
            input,
            output,
        }
    }

    /// Read one line and parse it as a (row, col) pair.
    ///
    /// Returns `None` for malformed or out-of-range input. Fails only when
    /// the stream errors or is exhausted; a closed input is not "malformed
    /// input" and cannot be re-prompted away.
    fn read_coordinates(&mut self) -> Result<Option<(usize, usize)>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed before a move was entered",
            )
            .into());
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 2 {
            return Ok(None);
        }
        let (Ok(row), Ok(col)) = (fields[0].parse::<usize>(), fields[1].parse::<usize>()) else {
            return Ok(None);
        };
        if row >= SIZE || col >= SIZE {
            return Ok(None);
        }

        Ok(Some((row, col)))
    }
}

impl<R: BufRead + Send, W: Write + Send> Agent for HumanAgent<R, W> {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn select_move(&mut self, board: &Board) -> Result<(usize, usize)> {
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let Some((row, col)) = self.read_coordinates()? else {
                writeln!(self.output, "{GUIDE_PARSE}")?;
                continue;
            };
            if !board.is_cell_empty(row, col) {
                writeln!(self.output, "{GUIDE_OCCUPIED}")?;
                continue;
            }
            return Ok((row, col));
        }
    }
}
