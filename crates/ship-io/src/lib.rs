//! Text adapters for stations.
//!
//! Two input formats describe a station, selected by the first character of
//! the first non-blank line:
//!
//! - **Map** (`M`): a `levels size` line, then every level drawn row by row.
//! - **List** (`L`): a `levels size` line, then `(level,row,col,symbol)`
//!   entries; unlisted cells are floor.
//!
//! In both formats blank lines and lines starting with `//` are ignored.
//! [`load`] reads either format into a [`Station`](ship_core::Station);
//! [`write_report`] renders the outcome of a search in either output format,
//! and [`encode_map`] / [`encode_list`] write a station back out as input.

mod encode;
mod error;
mod format;
mod list;
mod load;
mod map;
mod report;

pub use encode::{encode_list, encode_map};
pub use error::LoadError;
pub use format::{InputMode, OutputFormat, ParseOutputFormatError};
pub use load::{MAX_CELLS, load, load_str};
pub use report::{NO_ROUTE, write_report};
