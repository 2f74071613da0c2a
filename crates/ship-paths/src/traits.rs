use ship_core::Position;

/// Minimal search interface — provides neighbor enumeration.
///
/// Implementations report every cell reachable in one move, in the order
/// they should be discovered. The search itself skips cells outside its
/// bounds and cells it has already discovered.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>);
}
