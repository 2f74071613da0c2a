use ship_core::{Position, Station, Tile};

use crate::annotate::annotate;
use crate::frontier::SearchMode;
use crate::neighbors::{push_cardinal, push_shaft};
use crate::traits::Pather;
use crate::traversal::Traversal;

/// Stations move orthogonally through any non-wall cell, and from an
/// elevator to every elevator in the same shaft.
impl Pather for Station {
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        let dims = self.dims();
        push_cardinal(p, dims, |n| self.tile(n).is_passable(), buf);
        if self.tile(p) == Tile::Elevator {
            push_shaft(p, dims, |n| self.tile(n) == Tile::Elevator, buf);
        }
    }
}

/// A route found from a station's start to its hangar.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    path: Vec<Position>,
    mode: SearchMode,
    expanded: usize,
}

impl Route {
    /// Cells from start to hangar, both included.
    #[inline]
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Number of cells on the route.
    #[inline]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Always `false`; a route holds at least its start.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of moves, counting an elevator ride as one.
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Number of elevator rides.
    pub fn rides(&self) -> usize {
        self.path
            .windows(2)
            .filter(|w| w[0].level != w[1].level)
            .count()
    }

    /// The search discipline that produced this route.
    #[inline]
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Cells expanded while searching.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub fn into_path(self) -> Vec<Position> {
        self.path
    }
}

impl Traversal {
    /// Search `station` from its start to its hangar, and on success mark
    /// the route onto it.
    ///
    /// Buffers are resized first if `station` differs in size from the last
    /// one searched.
    pub fn plan_route(&mut self, station: &mut Station) -> Option<Route> {
        if self.dims != station.dims() {
            self.set_dims(station.dims());
        }
        let (start, hangar) = (station.start(), station.hangar());
        if !self.search(&*station, start, hangar) {
            log::info!("no route from {start} to {hangar}");
            return None;
        }
        let path = self.path_to(start, hangar)?;
        let marked = annotate(station, &path);
        let route = Route {
            path,
            mode: self.mode(),
            expanded: self.expanded,
        };
        log::info!(
            "route of {} moves ({} by elevator), {marked} cells marked",
            route.moves(),
            route.rides()
        );
        Some(route)
    }
}

/// Plan a route across `station` with a fresh [`Traversal`].
///
/// Returns `None` when the hangar cannot be reached; the station is then
/// left untouched.
pub fn plan_route(station: &mut Station, mode: SearchMode) -> Option<Route> {
    Traversal::new(station.dims(), mode).plan_route(station)
}
