//! Ship — plans a route from the start to the hangar of a multi-level
//! station read from standard input.

mod app;
mod cli;

pub use app::{exit_status, run};
pub use cli::Cli;
