//! Route search for multi-level stations.
//!
//! This crate finds a route from a station's start to its hangar by
//! expanding cells from a [`Frontier`]:
//!
//! - **Queue mode** (breadth-first) finds a route with the fewest moves,
//!   counting an elevator ride as a single move.
//! - **Stack mode** (depth-first) follows one branch at a time and returns
//!   the first route it reaches.
//!
//! All searches run through [`Traversal`], which owns the discovered flags,
//! parent links and frontier so that repeated searches reuse their buffers.
//! [`plan_route`] is the one-shot entry point: it searches, rebuilds the
//! path and marks it onto the station with [`annotate`].
//!
//! # Expansion order
//!
//! Cells are expanded north, south, west, east, then elevator rides in
//! ascending level order. Together with the frontier discipline this fixes
//! which route is returned when several exist.

mod annotate;
mod frontier;
mod neighbors;
mod route;
mod search;
mod traits;
mod traversal;

pub use annotate::annotate;
pub use frontier::{Frontier, SearchMode};
pub use neighbors::{push_cardinal, push_shaft};
pub use route::{Route, plan_route};
pub use traits::Pather;
pub use traversal::Traversal;
