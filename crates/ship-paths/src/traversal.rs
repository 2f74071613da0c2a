use ship_core::{Dims, Position};

use crate::frontier::{Frontier, SearchMode};

// ---------------------------------------------------------------------------
// Traversal
// ---------------------------------------------------------------------------

/// Search state for one station: discovered flags, parent links and the
/// frontier.
///
/// `Traversal` owns all of its buffers so that repeated searches over
/// stations of the same size incur no allocations after the first one.
/// Every search resets the state before it starts; after it returns, the
/// state describes that search until the next one.
#[derive(Debug, Clone)]
pub struct Traversal {
    pub(crate) dims: Dims,
    pub(crate) discovered: Vec<bool>,
    pub(crate) parent: Vec<Option<usize>>,
    pub(crate) frontier: Frontier<usize>,
    pub(crate) expanded: usize,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Position>,
}

impl Traversal {
    /// Create a new `Traversal` for stations of the given size.
    pub fn new(dims: Dims, mode: SearchMode) -> Self {
        let len = dims.len();
        Self {
            dims,
            discovered: vec![false; len],
            parent: vec![None; len],
            frontier: Frontier::new(mode),
            expanded: 0,
            nbuf: Vec::with_capacity(4 + dims.levels),
        }
    }

    /// Replace the station size, reallocating buffers as needed.
    ///
    /// State from the previous search is discarded either way.
    pub fn set_dims(&mut self, dims: Dims) {
        let len = dims.len();
        self.dims = dims;
        self.discovered.clear();
        self.discovered.resize(len, false);
        self.parent.clear();
        self.parent.resize(len, None);
        self.frontier.clear();
        self.expanded = 0;
    }

    /// The station size being searched.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// The frontier discipline.
    #[inline]
    pub fn mode(&self) -> SearchMode {
        self.frontier.mode()
    }

    /// Change the frontier discipline for subsequent searches.
    pub fn set_mode(&mut self, mode: SearchMode) {
        self.frontier.set_mode(mode);
    }

    /// Number of cells taken off the frontier by the last search.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Whether the last search discovered `p`. Out-of-range cells never are.
    pub fn is_discovered(&self, p: Position) -> bool {
        self.idx(p).is_some_and(|i| self.discovered[i])
    }

    /// The cell from which the last search discovered `p`.
    ///
    /// `None` for the search origin and for undiscovered cells.
    pub fn parent_of(&self, p: Position) -> Option<Position> {
        let i = self.idx(p)?;
        self.parent[i].map(|pi| self.point(pi))
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Position` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Position) -> Option<usize> {
        self.dims.index(p)
    }

    /// Convert a flat index back to a `Position`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Position {
        self.dims.position(idx)
    }

    /// Clear discovered flags, parents and frontier before a search.
    pub(crate) fn reset(&mut self) {
        for v in self.discovered.iter_mut() {
            *v = false;
        }
        for v in self.parent.iter_mut() {
            *v = None;
        }
        self.frontier.clear();
        self.expanded = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_clean() {
        let t = Traversal::new(Dims::new(2, 3), SearchMode::Stack);
        assert_eq!(t.discovered.len(), 18);
        assert_eq!(t.mode(), SearchMode::Stack);
        assert_eq!(t.expanded(), 0);
        assert!(!t.is_discovered(Position::new(0, 0, 0)));
        assert_eq!(t.parent_of(Position::new(1, 2, 2)), None);
    }

    #[test]
    fn set_dims_resizes() {
        let mut t = Traversal::new(Dims::new(1, 2), SearchMode::Queue);
        t.discovered[3] = true;
        t.set_dims(Dims::new(2, 4));
        assert_eq!(t.dims(), Dims::new(2, 4));
        assert_eq!(t.discovered.len(), 32);
        assert_eq!(t.parent.len(), 32);
        assert!(t.discovered.iter().all(|&d| !d));

        t.set_dims(Dims::new(1, 1));
        assert_eq!(t.discovered.len(), 1);
    }

    #[test]
    fn out_of_range_queries() {
        let t = Traversal::new(Dims::new(1, 2), SearchMode::Queue);
        assert!(!t.is_discovered(Position::new(0, 2, 0)));
        assert_eq!(t.parent_of(Position::new(1, 0, 0)), None);
    }
}
