//! Board coordinates and the algebraic position codec.
//!
//! A [`Square`] is a packed `rank * 8 + file` index, a1 = 0 through h8 = 63.
//! Files and ranks are plain zero-based numbers; only the codec deals in the
//! letters `a`-`h` and digits `1`-`8`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing algebraic square notation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SquareError {
    #[error("invalid square '{0}': expected a file and a rank, e.g. \"e4\"")]
    InvalidLength(String),

    #[error("invalid file in square '{0}': expected 'a'-'h'")]
    InvalidFile(String),

    #[error("invalid rank in square '{0}': expected '1'-'8'")]
    InvalidRank(String),
}

/// A board square. Serialized as its algebraic name.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square(u8);

impl Square {
    /// Creates a square from its packed index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Creates a square from zero-based file and rank coordinates.
    #[inline]
    pub const fn from_coords(file: i8, rank: i8) -> Option<Self> {
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            return None;
        }
        Some(Square(rank as u8 * 8 + file as u8))
    }

    /// Parses a position such as `"e4"`. The file letter may be upper case.
    pub fn from_algebraic(s: &str) -> Result<Self, SquareError> {
        let &[file, rank] = s.as_bytes() else {
            return Err(SquareError::InvalidLength(s.to_string()));
        };
        let file = match file.to_ascii_lowercase() {
            f @ b'a'..=b'h' => f - b'a',
            _ => return Err(SquareError::InvalidFile(s.to_string())),
        };
        let rank = match rank {
            r @ b'1'..=b'8' => r - b'1',
            _ => return Err(SquareError::InvalidRank(s.to_string())),
        };
        Ok(Square(rank * 8 + file))
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Zero-based file, 0 for the a-file.
    #[inline]
    pub const fn file_index(self) -> u8 {
        self.0 % 8
    }

    /// Zero-based rank, 0 for the first rank.
    #[inline]
    pub const fn rank_index(self) -> u8 {
        self.0 / 8
    }

    /// Returns the square `file_delta` files and `rank_delta` ranks away, or
    /// `None` if that falls off the board.
    #[inline]
    pub const fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        Square::from_coords(
            self.file_index() as i8 + file_delta,
            self.rank_index() as i8 + rank_delta,
        )
    }

    /// Returns (file delta, rank delta) from `self` to `other`.
    #[inline]
    pub const fn delta_to(self, other: Square) -> (i8, i8) {
        (
            other.file_index() as i8 - self.file_index() as i8,
            other.rank_index() as i8 - self.rank_index() as i8,
        )
    }

    /// Formats the square as a lower-case file letter followed by a rank digit.
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.file_index()) as char;
        let rank = (b'1' + self.rank_index()) as char;
        [file, rank].iter().collect()
    }

    /// Iterates over all 64 squares from a1 to h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s)
    }
}

impl TryFrom<String> for Square {
    type Error = SquareError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Square::from_algebraic(&s)
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> Self {
        sq.to_algebraic()
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(file: i8, rank: i8) -> Square {
        Square::from_coords(file, rank).unwrap()
    }

    #[test]
    fn coordinates() {
        let e4 = at(4, 3);
        assert_eq!(e4.file_index(), 4);
        assert_eq!(e4.rank_index(), 3);
        assert_eq!(e4.index(), 28);
        assert_eq!(Square::from_index(64), None);
        assert_eq!(Square::from_coords(8, 0), None);
        assert_eq!(Square::from_coords(0, -1), None);
    }

    #[test]
    fn parse() {
        assert_eq!(Square::from_algebraic("a1"), Ok(at(0, 0)));
        assert_eq!("e4".parse::<Square>(), Ok(at(4, 3)));
        assert_eq!("H8".parse::<Square>(), Ok(at(7, 7)));
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(Square::from_algebraic("i1"), Err(SquareError::InvalidFile(_))));
        assert!(matches!(Square::from_algebraic("a9"), Err(SquareError::InvalidRank(_))));
        assert!(matches!(Square::from_algebraic("a0"), Err(SquareError::InvalidRank(_))));
        assert!(matches!(Square::from_algebraic(""), Err(SquareError::InvalidLength(_))));
        assert!(matches!(Square::from_algebraic("e44"), Err(SquareError::InvalidLength(_))));
        // Two characters but three bytes.
        assert!(matches!(Square::from_algebraic("é4"), Err(SquareError::InvalidLength(_))));
    }

    #[test]
    fn format() {
        assert_eq!(at(0, 0).to_algebraic(), "a1");
        assert_eq!(at(7, 7).to_algebraic(), "h8");
        assert_eq!(at(4, 3).to_string(), "e4");
        assert_eq!(format!("{:?}", at(4, 3)), "Square(e4)");
    }

    #[test]
    fn offsets_and_deltas() {
        let e4 = at(4, 3);
        assert_eq!(e4.offset(1, 2), Some(at(5, 5)));
        assert_eq!(e4.offset(-4, -3), Some(at(0, 0)));
        assert_eq!(e4.offset(4, 0), None);
        assert_eq!(e4.offset(0, -4), None);
        assert_eq!(at(0, 0).delta_to(at(2, 1)), (2, 1));
        assert_eq!(at(2, 1).delta_to(at(0, 0)), (-2, -1));
    }

    #[test]
    fn all_squares() {
        assert_eq!(Square::all().count(), 64);
        assert_eq!(Square::all().last().map(|s| s.to_algebraic()), Some("h8".into()));
    }

    proptest! {
        #[test]
        fn algebraic_round_trip(index in 0u8..64) {
            let sq = Square::from_index(index).unwrap();
            prop_assert_eq!(Square::from_algebraic(&sq.to_algebraic()), Ok(sq));
        }

        #[test]
        fn offset_then_back(index in 0u8..64, df in -7i8..=7, dr in -7i8..=7) {
            let sq = Square::from_index(index).unwrap();
            if let Some(moved) = sq.offset(df, dr) {
                prop_assert_eq!(sq.delta_to(moved), (df, dr));
                prop_assert_eq!(moved.offset(-df, -dr), Some(sq));
            }
        }
    }
}
