//! The station grid store.
//!
//! A [`Station`] owns one [`Tile`] per cell in a flat, level-major buffer
//! and remembers where its single start and hangar are. Stations are only
//! obtained through [`StationBuilder`], which enforces that exactly one of
//! each marker exists.

use std::fmt;

use crate::geom::{Dims, Position};
use crate::tile::Tile;

/// A multi-level grid of tiles with one start and one hangar.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    dims: Dims,
    tiles: Vec<Tile>,
    start: Position,
    hangar: Position,
}

impl Station {
    /// Station dimensions.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Position of the `S` cell.
    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Position of the `H` cell.
    #[inline]
    pub fn hangar(&self) -> Position {
        self.hangar
    }

    /// The tile at `p`, or `None` if `p` lies outside the station.
    #[inline]
    pub fn get(&self, p: Position) -> Option<Tile> {
        self.dims.index(p).map(|i| self.tiles[i])
    }

    /// The tile at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` lies outside the station.
    #[inline]
    pub fn tile(&self, p: Position) -> Tile {
        match self.get(p) {
            Some(t) => t,
            None => panic!("position {p} outside station of {}", self.dims),
        }
    }

    /// Overwrite the tile at `p`.
    ///
    /// The start and hangar positions are not re-derived; this is meant for
    /// marking trails, not for moving markers.
    ///
    /// # Panics
    ///
    /// Panics if `p` lies outside the station.
    #[inline]
    pub fn set_tile(&mut self, p: Position, tile: Tile) {
        match self.dims.index(p) {
            Some(i) => self.tiles[i] = tile,
            None => panic!("position {p} outside station of {}", self.dims),
        }
    }

    /// One row of a level, west to east.
    ///
    /// # Panics
    ///
    /// Panics if `level` or `row` is out of range.
    pub fn row(&self, level: usize, row: usize) -> &[Tile] {
        let first = self.dims.index(Position::new(level, row, 0));
        match first {
            Some(i) => &self.tiles[i..i + self.dims.size],
            None => panic!("row {row} of level {level} outside station of {}", self.dims),
        }
    }

    /// Iterate over all positions and their tiles, level-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.dims.iter().zip(self.tiles.iter().copied())
    }

    /// Turn every trail mark back into floor.
    ///
    /// Returns the number of cells cleared.
    pub fn clear_trails(&mut self) -> usize {
        let mut cleared = 0;
        for t in self.tiles.iter_mut() {
            if matches!(t, Tile::Trail(_)) {
                *t = Tile::Floor;
                cleared += 1;
            }
        }
        cleared
    }
}

// ---------------------------------------------------------------------------
// StationBuilder
// ---------------------------------------------------------------------------

/// Incrementally places tiles and validates the start/hangar markers.
///
/// Every cell starts out as [`Tile::Floor`]. Each marker may be declared
/// once. Overwriting a marker's cell removes the marker without freeing the
/// declaration, so the final check in [`finish`](Self::finish) reflects what
/// the grid actually contains.
#[derive(Debug, Clone)]
pub struct StationBuilder {
    dims: Dims,
    tiles: Vec<Tile>,
    start: Option<Position>,
    hangar: Option<Position>,
    // first declarations, kept after the marker itself is overwritten
    start_declared: Option<Position>,
    hangar_declared: Option<Position>,
}

impl StationBuilder {
    /// Create a builder with every cell set to floor.
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            tiles: vec![Tile::Floor; dims.len()],
            start: None,
            hangar: None,
            start_declared: None,
            hangar_declared: None,
        }
    }

    /// Dimensions being built.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Place a tile.
    ///
    /// Any second declaration of a marker is an error, even at the same
    /// position or after the first one was overwritten.
    pub fn place(&mut self, p: Position, tile: Tile) -> Result<(), StationError> {
        let Some(i) = self.dims.index(p) else {
            return Err(StationError::OutOfBounds { pos: p, dims: self.dims });
        };
        match tile {
            Tile::Start => {
                if let Some(first) = self.start_declared {
                    return Err(StationError::DuplicateStart { first, second: p });
                }
                self.start_declared = Some(p);
                self.start = Some(p);
            }
            Tile::Hangar => {
                if let Some(first) = self.hangar_declared {
                    return Err(StationError::DuplicateHangar { first, second: p });
                }
                self.hangar_declared = Some(p);
                self.hangar = Some(p);
            }
            _ => {}
        }
        if tile != Tile::Start && self.start == Some(p) {
            self.start = None;
        }
        if tile != Tile::Hangar && self.hangar == Some(p) {
            self.hangar = None;
        }
        self.tiles[i] = tile;
        Ok(())
    }

    /// Validate markers and produce the station.
    pub fn finish(self) -> Result<Station, StationError> {
        let start = self.start.ok_or(StationError::MissingStart)?;
        let hangar = self.hangar.ok_or(StationError::MissingHangar)?;
        Ok(Station {
            dims: self.dims,
            tiles: self.tiles,
            start,
            hangar,
        })
    }
}

/// Errors raised while assembling a [`Station`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StationError {
    /// A second `S` was placed.
    DuplicateStart { first: Position, second: Position },
    /// A second `H` was placed.
    DuplicateHangar { first: Position, second: Position },
    /// No `S` in the finished grid.
    MissingStart,
    /// No `H` in the finished grid.
    MissingHangar,
    /// A tile was placed outside the station.
    OutOfBounds { pos: Position, dims: Dims },
}

impl fmt::Display for StationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateStart { first, second } => {
                write!(f, "multiple start positions found: {first} and {second}")
            }
            Self::DuplicateHangar { first, second } => {
                write!(f, "multiple hangar positions found: {first} and {second}")
            }
            Self::MissingStart => write!(f, "missing start position"),
            Self::MissingHangar => write!(f, "missing hangar position"),
            Self::OutOfBounds { pos, dims } => {
                write!(f, "position {pos} outside station of {dims}")
            }
        }
    }
}

impl std::error::Error for StationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Step;

    fn small() -> Station {
        let mut b = StationBuilder::new(Dims::new(2, 3));
        b.place(Position::new(0, 0, 0), Tile::Start).unwrap();
        b.place(Position::new(1, 2, 2), Tile::Hangar).unwrap();
        b.place(Position::new(0, 1, 1), Tile::Wall).unwrap();
        b.finish().unwrap()
    }

    #[test]
    fn builder_defaults_to_floor() {
        let s = small();
        assert_eq!(s.start(), Position::new(0, 0, 0));
        assert_eq!(s.hangar(), Position::new(1, 2, 2));
        assert_eq!(s.tile(Position::new(0, 1, 1)), Tile::Wall);
        assert_eq!(s.tile(Position::new(1, 0, 0)), Tile::Floor);
        assert_eq!(s.iter().filter(|&(_, t)| t == Tile::Floor).count(), 15);
    }

    #[test]
    fn get_out_of_bounds_is_none() {
        let s = small();
        assert_eq!(s.get(Position::new(2, 0, 0)), None);
        assert_eq!(s.get(Position::new(0, 0, 3)), None);
    }

    #[test]
    #[should_panic]
    fn tile_out_of_bounds_panics() {
        small().tile(Position::new(0, 3, 0));
    }

    #[test]
    #[should_panic]
    fn set_tile_out_of_bounds_panics() {
        small().set_tile(Position::new(5, 0, 0), Tile::Wall);
    }

    #[test]
    fn row_slices() {
        let s = small();
        let r: String = s.row(0, 1).iter().map(|t| t.symbol()).collect();
        assert_eq!(r, ".#.");
        let r: String = s.row(1, 2).iter().map(|t| t.symbol()).collect();
        assert_eq!(r, "..H");
    }

    #[test]
    fn duplicate_markers_rejected() {
        let mut b = StationBuilder::new(Dims::new(1, 2));
        b.place(Position::new(0, 0, 0), Tile::Start).unwrap();
        let err = b.place(Position::new(0, 1, 1), Tile::Start).unwrap_err();
        assert_eq!(
            err,
            StationError::DuplicateStart {
                first: Position::new(0, 0, 0),
                second: Position::new(0, 1, 1),
            }
        );

        b.place(Position::new(0, 0, 1), Tile::Hangar).unwrap();
        assert!(matches!(
            b.place(Position::new(0, 1, 0), Tile::Hangar),
            Err(StationError::DuplicateHangar { .. })
        ));
    }

    #[test]
    fn redeclaring_same_marker_is_rejected() {
        let mut b = StationBuilder::new(Dims::new(1, 2));
        let p = Position::new(0, 0, 0);
        b.place(p, Tile::Start).unwrap();
        assert_eq!(
            b.place(p, Tile::Start).unwrap_err(),
            StationError::DuplicateStart { first: p, second: p }
        );

        let h = Position::new(0, 1, 1);
        b.place(h, Tile::Hangar).unwrap();
        assert_eq!(
            b.place(h, Tile::Hangar).unwrap_err(),
            StationError::DuplicateHangar { first: h, second: h }
        );
    }

    #[test]
    fn overwriting_marker_clears_it() {
        let mut b = StationBuilder::new(Dims::new(1, 2));
        b.place(Position::new(0, 0, 0), Tile::Start).unwrap();
        b.place(Position::new(0, 1, 1), Tile::Hangar).unwrap();
        b.place(Position::new(0, 0, 0), Tile::Floor).unwrap();
        assert_eq!(b.clone().finish().unwrap_err(), StationError::MissingStart);

        // The declaration outlives the overwritten marker.
        assert_eq!(
            b.place(Position::new(0, 1, 0), Tile::Start).unwrap_err(),
            StationError::DuplicateStart {
                first: Position::new(0, 0, 0),
                second: Position::new(0, 1, 0),
            }
        );
        b.place(Position::new(0, 1, 1), Tile::Wall).unwrap();
        assert_eq!(b.finish().unwrap_err(), StationError::MissingStart);
    }

    #[test]
    fn missing_markers() {
        let b = StationBuilder::new(Dims::new(1, 1));
        assert_eq!(b.finish().unwrap_err(), StationError::MissingStart);

        let mut b = StationBuilder::new(Dims::new(1, 1));
        b.place(Position::new(0, 0, 0), Tile::Start).unwrap();
        assert_eq!(b.finish().unwrap_err(), StationError::MissingHangar);
    }

    #[test]
    fn place_out_of_bounds() {
        let mut b = StationBuilder::new(Dims::new(1, 2));
        let err = b.place(Position::new(1, 0, 0), Tile::Wall).unwrap_err();
        assert!(matches!(err, StationError::OutOfBounds { .. }));
        assert_eq!(err.to_string(), "position (1,0,0) outside station of 1 x 2x2");
    }

    #[test]
    fn clear_trails_restores_floor() {
        let mut s = small();
        s.set_tile(Position::new(0, 0, 1), Tile::Trail(Step::East));
        s.set_tile(Position::new(1, 0, 0), Tile::Trail(Step::Lift(1)));
        assert_eq!(s.clear_trails(), 2);
        assert_eq!(s.tile(Position::new(0, 0, 1)), Tile::Floor);
        assert_eq!(s, small());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn station_round_trip() {
        let mut b = StationBuilder::new(Dims::new(2, 2));
        b.place(Position::new(0, 0, 0), Tile::Start).unwrap();
        b.place(Position::new(1, 1, 1), Tile::Hangar).unwrap();
        b.place(Position::new(0, 1, 1), Tile::Elevator).unwrap();
        let s = b.finish().unwrap();
        let json = serde_json::to_string(&s).unwrap();
        let back: Station = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
