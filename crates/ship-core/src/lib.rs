//! **ship-core** — station grid types.
//!
//! This crate provides the foundational types shared by the route planner
//! and its text adapters: three-dimensional positions and bounds, cell
//! tiles (including the trail marks written onto a solved route), and the
//! [`Station`] grid store with its start and hangar markers.

pub mod geom;
pub mod station;
pub mod tile;

pub use geom::{Dims, Position};
pub use station::{Station, StationBuilder, StationError};
pub use tile::{Step, Tile};
