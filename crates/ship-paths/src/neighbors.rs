use ship_core::{Dims, Position};

/// Push the same-level neighbours of `p` (north, south, west, east) that lie
/// inside `dims` and for which `keep` returns `true`.
pub fn push_cardinal(
    p: Position,
    dims: Dims,
    keep: impl Fn(Position) -> bool,
    buf: &mut Vec<Position>,
) {
    for n in p.neighbors_4().into_iter().flatten() {
        if dims.contains(n) && keep(n) {
            buf.push(n);
        }
    }
}

/// Push the cells directly above and below `p` on every other level, in
/// ascending level order, for which `keep` returns `true`.
///
/// Levels need not be adjacent: a shaft links every level at once.
pub fn push_shaft(
    p: Position,
    dims: Dims,
    keep: impl Fn(Position) -> bool,
    buf: &mut Vec<Position>,
) {
    for level in 0..dims.levels {
        if level == p.level {
            continue;
        }
        let n = p.on_level(level);
        if dims.contains(n) && keep(n) {
            buf.push(n);
        }
    }
}
