use std::fmt;
use std::io;

use ship_core::{Position, StationError};

/// Errors that can occur while loading a station.
///
/// Line numbers are 1-based and count every input line, including blank and
/// comment lines.
#[derive(Debug)]
pub enum LoadError {
    /// The underlying reader failed.
    Io(io::Error),
    /// The input holds nothing but blank lines.
    EmptyInput,
    /// The mode line starts with something other than `M` or `L`.
    UnknownMode { line: usize, found: char },
    /// The size line is missing or is not two non-negative integers.
    BadSize { line: usize, text: String },
    /// The input ended before every row of every level was read.
    UnexpectedEof { level: usize, row: usize },
    /// A map row does not have exactly `size` characters.
    WrongWidth {
        line: usize,
        level: usize,
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside `S`, `H`, `E`, `#`, `.`.
    InvalidChar { line: usize, ch: char, pos: Position },
    /// A list entry not of the form `(level,row,col,symbol)`.
    MalformedEntry { line: usize, text: String },
    /// A list entry addressing a cell outside the station.
    OutOfRange {
        line: usize,
        level: i64,
        row: i64,
        col: i64,
    },
    /// Start/hangar markers are duplicated or missing.
    Station(StationError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read input: {e}"),
            Self::EmptyInput => write!(f, "empty input"),
            Self::UnknownMode { line, found } => {
                write!(f, "invalid input mode \u{201c}{found}\u{201d} on line {line}")
            }
            Self::BadSize { line, text } => {
                write!(f, "invalid map size format on line {line}: {text:?}")
            }
            Self::UnexpectedEof { level, row } => {
                write!(f, "unexpected end of input before level {level}, row {row}")
            }
            Self::WrongWidth {
                line,
                level,
                row,
                expected,
                found,
            } => write!(
                f,
                "incorrect map width on level {level}, row {row} (line {line}): \
                 expected {expected}, found {found}"
            ),
            Self::InvalidChar { line, ch, pos } => {
                write!(f, "invalid character \u{201c}{ch}\u{201d} at {pos} (line {line})")
            }
            Self::MalformedEntry { line, text } => {
                write!(f, "invalid coordinate format on line {line}: {text:?}")
            }
            Self::OutOfRange {
                line,
                level,
                row,
                col,
            } => write!(
                f,
                "coordinate ({level},{row},{col}) outside station (line {line})"
            ),
            Self::Station(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Station(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<StationError> for LoadError {
    fn from(e: StationError) -> Self {
        Self::Station(e)
    }
}
