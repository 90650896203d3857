//! Human player reading 1-based coordinates from a text console.

use super::MoveSource;
use crate::error::{InputError, MoveSourceError};
use crate::position::Position;
use crate::types::{Board, Mark};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Prompt for the symbol choice.
pub const MARK_PROMPT: &str = "Please, choose your symbol (X/O): ";
/// Prompt after an invalid symbol.
pub const INVALID_MARK_PROMPT: &str =
    "You entered an invalid symbol. Please, repeat the entry (X/O): ";
/// Prompt for a move.
pub const MOVE_PROMPT: &str = "Enter row number and column number: ";
/// Prompt after choosing a taken square.
pub const OCCUPIED_PROMPT: &str = "The field is taken, enter new values: ";

/// Parses a symbol choice, ignoring case and surrounding whitespace.
#[instrument]
pub fn parse_mark(line: &str) -> Result<Mark, InputError> {
    let trimmed = line.trim();
    Mark::from_str(trimmed).map_err(|_| InputError::InvalidMarkChoice(trimmed.to_string()))
}

/// Parses `"<row> <column>"` with 1-based values into a position.
#[instrument]
pub fn parse_coordinates(line: &str) -> Result<Position, InputError> {
    let trimmed = line.trim();
    let numbers: Vec<i64> = trimmed
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|_| InputError::InvalidMoveFormat(trimmed.to_string()))?;

    let [row, col] = numbers[..] else {
        return Err(InputError::InvalidMoveFormat(trimmed.to_string()));
    };

    let to_zero_based = |n: i64| n.checked_sub(1).and_then(|z| usize::try_from(z).ok());
    to_zero_based(row)
        .zip(to_zero_based(col))
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .ok_or(InputError::OutOfRange { row, col })
}

/// Human player driven by line-based input.
///
/// Malformed lines and taken squares are answered with a new prompt; only
/// the end of input or an I/O failure is surfaced as an error.
pub struct HumanMoveSource<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanMoveSource<R, W> {
    /// Creates a human source over the given input and prompt output.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Returns the prompt output.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Asks for X or O until a valid symbol is entered.
    #[instrument(skip(self), fields(source = %self.name))]
    pub fn choose_mark(&mut self) -> Result<Mark, MoveSourceError> {
        self.prompt(MARK_PROMPT)?;
        loop {
            let line = self.read_line()?;
            match parse_mark(&line) {
                Ok(mark) => {
                    info!(%mark, "Symbol chosen");
                    return Ok(mark);
                }
                Err(e) => {
                    debug!(error = %e, "Rejected symbol");
                    self.prompt(INVALID_MARK_PROMPT)?;
                }
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<(), MoveSourceError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads one line. Bytes that are not UTF-8 are replaced with U+FFFD so
    /// the line fails parsing and the caller re-prompts.
    fn read_line(&mut self) -> Result<String, MoveSourceError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(MoveSourceError::InputClosed);
        }
        Ok(String::from_utf8(buf).unwrap_or_else(|e| {
            debug!(error = %e, "Input line is not valid UTF-8");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }))
    }
}

impl<R: BufRead, W: Write> MoveSource for HumanMoveSource<R, W> {
    #[instrument(skip(self, board), fields(source = %self.name))]
    fn request_move(&mut self, board: &Board) -> Result<Position, MoveSourceError> {
        self.prompt(MOVE_PROMPT)?;
        loop {
            let line = self.read_line()?;
            match parse_coordinates(&line) {
                Ok(pos) if board.is_free(pos) => {
                    debug!(row = pos.row(), col = pos.col(), "Human move accepted");
                    return Ok(pos);
                }
                Ok(pos) => {
                    debug!(row = pos.row(), col = pos.col(), "Square taken");
                    self.prompt(OCCUPIED_PROMPT)?;
                }
                Err(e) => {
                    debug!(error = %e, "Rejected move input");
                    let retry = format!("{}. {}", e, MOVE_PROMPT);
                    self.prompt(&retry)?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
