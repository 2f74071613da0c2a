use ship_core::{Position, Station, Step, Tile};

/// Mark a route onto the station.
///
/// `path` runs start to hangar. Every floor cell on it after the first is
/// overwritten with the [`Step`] that entered it; start, hangar and elevator
/// cells keep their symbols. Returns the number of cells marked.
///
/// # Panics
///
/// Panics if the path leaves the station.
pub fn annotate(station: &mut Station, path: &[Position]) -> usize {
    let mut marked = 0;
    for pair in path.windows(2) {
        let (prev, cur) = (pair[0], pair[1]);
        if station.tile(cur) != Tile::Floor {
            continue;
        }
        if let Some(step) = Step::between(prev, cur) {
            station.set_tile(cur, Tile::Trail(step));
            marked += 1;
        }
    }
    marked
}
