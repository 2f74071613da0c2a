//! The [`Tile`] type — what a single station cell holds.

use std::fmt;

use crate::geom::Position;

/// A single station cell.
///
/// The first five variants are the symbols an input may contain. [`Trail`]
/// marks only appear after a route has been annotated onto the station.
///
/// [`Trail`]: Tile::Trail
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// `S`, the route origin.
    Start,
    /// `H`, the route destination.
    Hangar,
    /// `E`, connects to every other `E` in the same row and column.
    Elevator,
    /// `#`, impassable.
    Wall,
    /// `.`, open floor.
    #[default]
    Floor,
    /// A floor cell lying on the annotated route.
    Trail(Step),
}

impl Tile {
    /// Characters accepted in station input.
    pub const INPUT_SYMBOLS: &'static str = "SHE#.";

    /// Decode an input symbol. Trail marks are not valid input.
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'S' => Some(Self::Start),
            'H' => Some(Self::Hangar),
            'E' => Some(Self::Elevator),
            '#' => Some(Self::Wall),
            '.' => Some(Self::Floor),
            _ => None,
        }
    }

    /// The character used to render this tile.
    pub fn symbol(self) -> char {
        match self {
            Self::Start => 'S',
            Self::Hangar => 'H',
            Self::Elevator => 'E',
            Self::Wall => '#',
            Self::Floor => '.',
            Self::Trail(step) => step.symbol(),
        }
    }

    /// Whether a route may enter this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// How a route arrived at a cell from its predecessor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    North,
    South,
    West,
    East,
    /// Arrived by elevator on the given level.
    Lift(usize),
}

impl Step {
    /// The step that leads from `prev` to `cur`, or `None` when the two are
    /// neither orthogonal neighbours nor on different levels.
    pub fn between(prev: Position, cur: Position) -> Option<Self> {
        if prev.level != cur.level {
            return Some(Self::Lift(cur.level));
        }
        if cur.col == prev.col {
            if cur.row + 1 == prev.row {
                return Some(Self::North);
            }
            if cur.row == prev.row + 1 {
                return Some(Self::South);
            }
        }
        if cur.row == prev.row {
            if cur.col + 1 == prev.col {
                return Some(Self::West);
            }
            if cur.col == prev.col + 1 {
                return Some(Self::East);
            }
        }
        None
    }

    /// `n`, `s`, `w`, `e`, or the destination level as a digit.
    ///
    /// Levels above 9 continue past `'9'` in character order.
    pub fn symbol(self) -> char {
        match self {
            Self::North => 'n',
            Self::South => 's',
            Self::West => 'w',
            Self::East => 'e',
            Self::Lift(level) => u32::try_from(level)
                .ok()
                .and_then(|l| l.checked_add(u32::from(b'0')))
                .and_then(char::from_u32)
                .unwrap_or('?'),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_symbols_round_trip() {
        for ch in Tile::INPUT_SYMBOLS.chars() {
            let t = Tile::from_symbol(ch).unwrap();
            assert_eq!(t.symbol(), ch);
        }
        assert_eq!(Tile::from_symbol('x'), None);
        assert_eq!(Tile::from_symbol('n'), None);
    }

    #[test]
    fn only_walls_block() {
        assert!(!Tile::Wall.is_passable());
        assert!(Tile::Floor.is_passable());
        assert!(Tile::Elevator.is_passable());
        assert!(Tile::Hangar.is_passable());
        assert!(Tile::Trail(Step::East).is_passable());
    }

    #[test]
    fn step_between_same_level() {
        let p = Position::new(0, 2, 2);
        assert_eq!(Step::between(p, Position::new(0, 1, 2)), Some(Step::North));
        assert_eq!(Step::between(p, Position::new(0, 3, 2)), Some(Step::South));
        assert_eq!(Step::between(p, Position::new(0, 2, 1)), Some(Step::West));
        assert_eq!(Step::between(p, Position::new(0, 2, 3)), Some(Step::East));
        assert_eq!(Step::between(p, Position::new(0, 3, 3)), None);
        assert_eq!(Step::between(p, p), None);
    }

    #[test]
    fn lift_uses_destination_level() {
        let from = Position::new(0, 1, 1);
        let to = Position::new(3, 1, 1);
        assert_eq!(Step::between(from, to), Some(Step::Lift(3)));
        assert_eq!(Step::Lift(3).symbol(), '3');
        assert_eq!(Step::between(to, from).map(Step::symbol), Some('0'));
    }

    #[test]
    fn trail_symbols() {
        assert_eq!(Tile::Trail(Step::North).to_string(), "n");
        assert_eq!(Tile::Trail(Step::South).to_string(), "s");
        assert_eq!(Tile::Trail(Step::West).to_string(), "w");
        assert_eq!(Tile::Trail(Step::East).to_string(), "e");
        assert_eq!(Tile::Trail(Step::Lift(9)).to_string(), "9");
        assert_eq!(Tile::Trail(Step::Lift(10)).to_string(), ":");
    }
}
