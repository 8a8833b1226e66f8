//! Pure relationships between two grid locations.
//!
//! Everything here is side-effect free: classifying a pair of locations
//! as a slide, a jump, or neither, and locating the cell a jump passes over.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::types::Location;

/// Direction of travel between two locations.
///
/// `North` is towards higher rows, `East` towards higher columns. Identical
/// and non-aligned pairs are both `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Direction {
    /// Increasing row.
    North,
    /// Decreasing row.
    South,
    /// Increasing column.
    East,
    /// Decreasing column.
    West,
    /// Not a straight line, or no movement at all.
    Unknown,
}

impl Direction {
    /// Returns the reverse direction. `Unknown` stays `Unknown`.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Unknown => Direction::Unknown,
        }
    }
}

/// Classification of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveType {
    /// One cell in a straight line.
    Slide,
    /// Two cells in a straight line, over the cell between.
    Jump,
    /// Anything else.
    Unknown,
}

impl MoveType {
    /// Classifies a straight-line distance.
    pub fn from_distance(distance: i16) -> Self {
        match distance {
            1 => MoveType::Slide,
            2 => MoveType::Jump,
            _ => MoveType::Unknown,
        }
    }
}

/// Result of comparing two locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Description {
    /// Direction from source to destination.
    pub direction: Direction,
    /// Step classification.
    pub move_type: MoveType,
    /// The cell passed over, present for jumps only.
    pub jumped: Option<Location>,
}

impl Description {
    fn unknown() -> Self {
        Self {
            direction: Direction::Unknown,
            move_type: MoveType::Unknown,
            jumped: None,
        }
    }
}

/// Describes the step from `src` to `dst`.
#[instrument(level = "trace")]
pub fn compare(src: Location, dst: Location) -> Description {
    let (direction, distance, jumped) = if src.row == dst.row && src.col != dst.col {
        let distance = i16::from(dst.col) - i16::from(src.col);
        let direction = if distance > 0 { Direction::East } else { Direction::West };
        (direction, distance, Location::new(src.row, midpoint(src.col, dst.col)))
    } else if src.col == dst.col && src.row != dst.row {
        let distance = i16::from(dst.row) - i16::from(src.row);
        let direction = if distance > 0 { Direction::North } else { Direction::South };
        (direction, distance, Location::new(midpoint(src.row, dst.row), src.col))
    } else {
        return Description::unknown();
    };

    let move_type = MoveType::from_distance(distance.abs());
    Description {
        direction,
        move_type,
        jumped: (move_type == MoveType::Jump).then_some(jumped),
    }
}

fn midpoint(a: i8, b: i8) -> i8 {
    // Lies between a and b, so it always fits back into an i8.
    ((i16::from(a) + i16::from(b)) / 2) as i8
}

/// Returns true if the location is inside the central 4x4 region.
pub fn in_middle(location: Location) -> bool {
    (2..=5).contains(&location.row) && (2..=5).contains(&location.col)
}

/// Converts a column letter (either case) to its 0-based index.
pub fn to_int(value: char) -> Option<i8> {
    let upper = value.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| (upper as u8 - b'A') as i8)
}

/// Converts a 0-based column index to its uppercase letter.
pub fn to_char(value: i8) -> Option<char> {
    u8::try_from(value)
        .ok()
        .filter(|v| *v < 26)
        .map(|v| char::from(b'A' + v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn loc(row: i8, col: i8) -> Location {
        Location::new(row, col)
    }

    fn check(
        src: Location,
        dst: Location,
        direction: Direction,
        move_type: MoveType,
        jumped: Option<Location>,
    ) {
        assert_eq!(
            compare(src, dst),
            Description { direction, move_type, jumped },
            "{src} -> {dst}"
        );
    }

    #[test]
    fn test_jumps() {
        check(loc(4, 4), loc(6, 4), Direction::North, MoveType::Jump, Some(loc(5, 4)));
        check(loc(4, 4), loc(2, 4), Direction::South, MoveType::Jump, Some(loc(3, 4)));
        check(loc(4, 4), loc(4, 6), Direction::East, MoveType::Jump, Some(loc(4, 5)));
        check(loc(4, 4), loc(4, 2), Direction::West, MoveType::Jump, Some(loc(4, 3)));
        check(loc(2, 4), loc(0, 4), Direction::South, MoveType::Jump, Some(loc(1, 4)));
        check(loc(2, 4), loc(2, 6), Direction::East, MoveType::Jump, Some(loc(2, 5)));
    }

    #[test]
    fn test_slides() {
        check(loc(4, 4), loc(5, 4), Direction::North, MoveType::Slide, None);
        check(loc(4, 4), loc(3, 4), Direction::South, MoveType::Slide, None);
        check(loc(4, 4), loc(4, 5), Direction::East, MoveType::Slide, None);
        check(loc(4, 4), loc(4, 3), Direction::West, MoveType::Slide, None);
    }

    #[test]
    fn test_long_moves_keep_direction() {
        check(loc(0, 0), loc(7, 0), Direction::North, MoveType::Unknown, None);
        check(loc(7, 0), loc(0, 0), Direction::South, MoveType::Unknown, None);
        check(loc(0, 0), loc(0, 7), Direction::East, MoveType::Unknown, None);
        check(loc(0, 7), loc(0, 0), Direction::West, MoveType::Unknown, None);
    }

    #[test]
    fn test_identical_and_diagonal_are_unknown() {
        check(loc(4, 4), loc(4, 4), Direction::Unknown, MoveType::Unknown, None);
        check(loc(4, 4), loc(5, 5), Direction::Unknown, MoveType::Unknown, None);
        check(loc(4, 4), loc(3, 3), Direction::Unknown, MoveType::Unknown, None);
        check(loc(4, 4), loc(5, 3), Direction::Unknown, MoveType::Unknown, None);
        check(loc(4, 4), loc(3, 5), Direction::Unknown, MoveType::Unknown, None);
    }

    #[test]
    fn test_opposite_reverses_every_direction() {
        for direction in Direction::iter() {
            assert_eq!(direction.opposite().opposite(), direction);
            let reversed = direction.opposite();
            assert_eq!(reversed == direction, direction == Direction::Unknown);
        }
        let centre = loc(4, 4);
        let neighbours = [loc(5, 4), loc(3, 4), loc(4, 5), loc(4, 3)];
        for (direction, neighbour) in Direction::iter().zip(neighbours) {
            assert_eq!(compare(centre, neighbour).direction, direction);
            assert_eq!(compare(neighbour, centre).direction, direction.opposite());
        }
    }

    #[test]
    fn test_move_type_from_distance() {
        assert_eq!(MoveType::from_distance(-1), MoveType::Unknown);
        assert_eq!(MoveType::from_distance(0), MoveType::Unknown);
        assert_eq!(MoveType::from_distance(1), MoveType::Slide);
        assert_eq!(MoveType::from_distance(2), MoveType::Jump);
        assert_eq!(MoveType::from_distance(3), MoveType::Unknown);
    }

    #[test]
    fn test_in_middle() {
        for location in Location::all() {
            let expected = (2..=5).contains(&location.row) && (2..=5).contains(&location.col);
            assert_eq!(in_middle(location), expected, "{location}");
        }
    }

    #[test]
    fn test_letters() {
        for (index, letter) in "ABCDEFGH".chars().enumerate() {
            assert_eq!(to_int(letter), Some(index as i8));
            assert_eq!(to_int(letter.to_ascii_lowercase()), Some(index as i8));
            assert_eq!(to_char(index as i8), Some(letter));
        }
        assert_eq!(to_int('1'), None);
        assert_eq!(to_char(-1), None);
        assert_eq!(to_char(26), None);
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let description = compare(loc(0, i8::MIN), loc(0, i8::MAX));
        assert_eq!(description.direction, Direction::East);
        assert_eq!(description.move_type, MoveType::Unknown);
    }
}
