//! Text notation for locations: a column letter followed by a 1-based row.
//!
//! `A1` is row 0, column 0. A move is written as a comma and/or
//! whitespace separated list, e.g. `C2 C3` or `c3,c5,e5`.

use std::str::FromStr;

use derive_more::{Display, Error};
use tracing::instrument;

use crate::geometry::to_int;
use crate::types::Location;

/// Text that could not be read as a location list.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum NotationError {
    /// Nothing but separators.
    #[display("No locations given")]
    Empty,
    /// A token that is not a letter followed by a row number.
    #[display("Invalid location '{token}': expected a column letter and row number, like C3")]
    InvalidToken {
        /// The offending token.
        #[error(not(source))]
        token: String,
    },
}

impl FromStr for Location {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let invalid = || NotationError::InvalidToken {
            token: token.to_string(),
        };

        let mut chars = token.chars();
        let col = chars.next().and_then(to_int).ok_or_else(invalid)?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let row_number: i16 = digits.parse().map_err(|_| invalid())?;
        let row = i8::try_from(row_number - 1).map_err(|_| invalid())?;
        Ok(Location::new(row, col))
    }
}

/// Parses a separated list of locations.
#[instrument]
pub fn parse_locations(text: &str) -> Result<Vec<Location>, NotationError> {
    let locations = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect::<Result<Vec<Location>, _>>()?;

    if locations.is_empty() {
        Err(NotationError::Empty)
    } else {
        Ok(locations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single() {
        assert_eq!("A1".parse(), Ok(Location::new(0, 0)));
        assert_eq!("h8".parse(), Ok(Location::new(7, 7)));
        assert_eq!(" c2 ".parse(), Ok(Location::new(1, 2)));
    }

    #[test]
    fn test_parse_keeps_off_board_values() {
        assert_eq!("I9".parse(), Ok(Location::new(8, 8)));
        assert_eq!("A0".parse(), Ok(Location::new(-1, 0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "1A", "A", "AA1", "A-1", "A1x", "#3", "A999"] {
            assert!(bad.parse::<Location>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_parse_list() {
        let expected = vec![Location::new(2, 2), Location::new(2, 4), Location::new(4, 4)];
        assert_eq!(parse_locations("C3 E3 E5"), Ok(expected.clone()));
        assert_eq!(parse_locations("c3,e3,e5"), Ok(expected.clone()));
        assert_eq!(parse_locations("  C3 ,  E3,E5\n"), Ok(expected));
    }

    #[test]
    fn test_parse_list_errors() {
        assert_eq!(parse_locations(" , "), Err(NotationError::Empty));
        assert_eq!(
            parse_locations("C3 Z"),
            Err(NotationError::InvalidToken {
                token: "Z".to_string()
            })
        );
    }

    #[test]
    fn test_display_round_trip() {
        for location in Location::all() {
            assert_eq!(location.to_string().parse(), Ok(location));
        }
    }
}
