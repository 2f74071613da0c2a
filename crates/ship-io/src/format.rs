use std::fmt;
use std::str::FromStr;

/// Input format, chosen by the first character of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputMode {
    /// `M`: every level drawn row by row.
    Map,
    /// `L`: `(level,row,col,symbol)` entries.
    List,
}

impl InputMode {
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'M' => Some(Self::Map),
            'L' => Some(Self::List),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Map => 'M',
            Self::List => 'L',
        }
    }
}

/// Report format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutputFormat {
    /// `M`: the whole station with the route marked on it.
    #[default]
    Map,
    /// `L`: only the cells on the route, in order.
    List,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Map => f.write_str("M"),
            Self::List => f.write_str("L"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ParseOutputFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Self::Map),
            "L" => Ok(Self::List),
            _ => Err(ParseOutputFormatError(s.to_string())),
        }
    }
}

/// An output format other than `M` or `L` was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutputFormatError(pub String);

impl fmt::Display for ParseOutputFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid output mode {:?} (expected M or L)", self.0)
    }
}

impl std::error::Error for ParseOutputFormatError {}
