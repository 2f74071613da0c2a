use std::io::BufRead;

use ship_core::{Dims, Station};

use crate::error::LoadError;
use crate::format::InputMode;
use crate::{list, map};

/// Largest station, in cells, that [`load`] accepts.
pub const MAX_CELLS: usize = 1 << 24;

/// Line reader that tracks line numbers and skips ignorable lines.
pub(crate) struct Source<R> {
    reader: R,
    buf: String,
    line: usize,
}

impl<R: BufRead> Source<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            line: 0,
        }
    }

    /// The number of the line most recently returned.
    #[inline]
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    /// Next line with surrounding whitespace removed, or `None` at EOF.
    fn next_trimmed(&mut self) -> Result<Option<&str>, LoadError> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        Ok(Some(self.buf.trim()))
    }

    /// Next line that is neither blank nor a `//` comment, with its number.
    pub(crate) fn next_content(&mut self) -> Result<Option<(usize, &str)>, LoadError> {
        loop {
            match self.next_trimmed()? {
                None => return Ok(None),
                Some(l) if l.is_empty() || l.starts_with("//") => continue,
                Some(_) => break,
            }
        }
        Ok(Some((self.line, self.buf.trim())))
    }

    /// Next non-blank line, with its number. Comments are not skipped here:
    /// the mode line must come first.
    fn next_non_blank(&mut self) -> Result<Option<(usize, &str)>, LoadError> {
        loop {
            match self.next_trimmed()? {
                None => return Ok(None),
                Some("") => continue,
                Some(_) => break,
            }
        }
        Ok(Some((self.line, self.buf.trim())))
    }
}

/// Read a station in either input format.
///
/// The first non-blank line selects the format by its first character; the
/// next content line must hold the level count and level size.
pub fn load<R: BufRead>(reader: R) -> Result<Station, LoadError> {
    let mut src = Source::new(reader);

    let Some((line, mode_line)) = src.next_non_blank()? else {
        return Err(LoadError::EmptyInput);
    };
    let found = mode_line.chars().next().unwrap_or_default();
    let Some(mode) = InputMode::from_char(found) else {
        return Err(LoadError::UnknownMode { line, found });
    };

    let dims = read_dims(&mut src)?;
    log::debug!("loading {mode:?} station of {dims}");

    let station = match mode {
        InputMode::Map => map::read(&mut src, dims)?,
        InputMode::List => list::read(&mut src, dims)?,
    };
    log::info!(
        "loaded station of {} with start {} and hangar {}",
        station.dims(),
        station.start(),
        station.hangar()
    );
    Ok(station)
}

/// Read a station from a string.
pub fn load_str(s: &str) -> Result<Station, LoadError> {
    load(s.as_bytes())
}

fn read_dims<R: BufRead>(src: &mut Source<R>) -> Result<Dims, LoadError> {
    let Some((line, text)) = src.next_content()? else {
        return Err(LoadError::BadSize {
            line: src.line() + 1,
            text: String::new(),
        });
    };
    let bad = || LoadError::BadSize {
        line,
        text: text.to_string(),
    };
    let mut fields = text.split_whitespace().map(str::parse::<usize>);
    let dims = match (fields.next(), fields.next(), fields.next()) {
        (Some(Ok(levels)), Some(Ok(size)), None) => Dims::new(levels, size),
        _ => return Err(bad()),
    };
    match dims.checked_len() {
        Some(n) if n <= MAX_CELLS => Ok(dims),
        _ => Err(bad()),
    }
}
