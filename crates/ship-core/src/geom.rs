//! Geometry primitives: [`Position`] and [`Dims`].
//!
//! A station is a stack of square levels. Positions address a single cell
//! by level, row and column; rows grow downwards (north is `row - 1`).

use std::fmt;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A cell address: level, row and column.
///
/// Ordering is level-major, then row, then column, which is also the order
/// in which [`Dims::iter`] visits cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub level: usize,
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(level: usize, row: usize, col: usize) -> Self {
        Self { level, row, col }
    }

    /// Return the position shifted by (drow, dcol) on the same level.
    ///
    /// Returns `None` if either coordinate would become negative. The upper
    /// bound is not checked here; see [`Dims::contains`].
    #[inline]
    pub fn shift(self, drow: isize, dcol: isize) -> Option<Self> {
        Some(Self {
            level: self.level,
            row: self.row.checked_add_signed(drow)?,
            col: self.col.checked_add_signed(dcol)?,
        })
    }

    /// The same row and column on another level.
    #[inline]
    pub const fn on_level(self, level: usize) -> Self {
        Self {
            level,
            row: self.row,
            col: self.col,
        }
    }

    /// The four same-level neighbours in search order: north, south, west,
    /// east. Neighbours that would leave the non-negative quadrant are `None`.
    #[inline]
    pub fn neighbors_4(self) -> [Option<Position>; 4] {
        [
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
        ]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.level, self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Dims
// ---------------------------------------------------------------------------

/// Station dimensions: `levels` square levels of `size` × `size` cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dims {
    pub levels: usize,
    pub size: usize,
}

impl Dims {
    /// Create new dimensions.
    #[inline]
    pub const fn new(levels: usize, size: usize) -> Self {
        Self { levels, size }
    }

    /// Number of cells on one level.
    #[inline]
    pub const fn level_len(self) -> usize {
        self.size * self.size
    }

    /// Total number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        self.levels * self.level_len()
    }

    /// Total number of cells, or `None` if it does not fit in a `usize`.
    #[inline]
    pub const fn checked_len(self) -> Option<usize> {
        match self.size.checked_mul(self.size) {
            Some(n) => n.checked_mul(self.levels),
            None => None,
        }
    }

    /// Whether the station has no cells at all.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Whether `p` lies inside the station.
    #[inline]
    pub const fn contains(self, p: Position) -> bool {
        p.level < self.levels && p.row < self.size && p.col < self.size
    }

    /// Flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, p: Position) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.level * self.level_len() + p.row * self.size + p.col)
    }

    /// Convert a flat index back to a position.
    ///
    /// The index must come from [`index`](Self::index) on the same dims.
    #[inline]
    pub fn position(self, idx: usize) -> Position {
        let level = idx / self.level_len();
        let rem = idx % self.level_len();
        Position::new(level, rem / self.size, rem % self.size)
    }

    /// Level-major iterator over every position.
    #[inline]
    pub fn iter(self) -> DimsIter {
        DimsIter { dims: self, next: 0 }
    }
}

impl IntoIterator for Dims {
    type Item = Position;
    type IntoIter = DimsIter;
    #[inline]
    fn into_iter(self) -> DimsIter {
        self.iter()
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}x{}", self.levels, self.size, self.size)
    }
}

// ---------------------------------------------------------------------------
// DimsIter
// ---------------------------------------------------------------------------

/// Level-major iterator over the positions in a [`Dims`].
#[derive(Clone, Debug)]
pub struct DimsIter {
    dims: Dims,
    next: usize,
}

impl Iterator for DimsIter {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Position> {
        if self.next >= self.dims.len() {
            return None;
        }
        let p = self.dims.position(self.next);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.dims.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DimsIter {}
