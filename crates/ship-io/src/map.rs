//! Map-mode body: every level drawn row by row.

use std::io::BufRead;

use ship_core::{Dims, Position, Station, StationBuilder, Tile};

use crate::error::LoadError;
use crate::load::Source;

pub(crate) fn read<R: BufRead>(src: &mut Source<R>, dims: Dims) -> Result<Station, LoadError> {
    let mut builder = StationBuilder::new(dims);

    for level in 0..dims.levels {
        for row in 0..dims.size {
            let Some((line, text)) = src.next_content()? else {
                return Err(LoadError::UnexpectedEof { level, row });
            };
            let found = text.chars().count();
            if found != dims.size {
                return Err(LoadError::WrongWidth {
                    line,
                    level,
                    row,
                    expected: dims.size,
                    found,
                });
            }
            for (col, ch) in text.chars().enumerate() {
                let pos = Position::new(level, row, col);
                let Some(tile) = Tile::from_symbol(ch) else {
                    return Err(LoadError::InvalidChar { line, ch, pos });
                };
                builder.place(pos, tile)?;
            }
        }
    }

    let mut extra = 0;
    while src.next_content()?.is_some() {
        extra += 1;
    }
    if extra > 0 {
        log::warn!("ignoring {extra} lines after the last level");
    }

    Ok(builder.finish()?)
}
