//! Chess piece representation.
//!
//! Every piece is a single concrete [`Piece`] tagged with a [`PieceType`].
//! Per-type behavior lives in small tables keyed by the tag: the default
//! [`MovementProfile`] and the reach rewrites applied on a piece's first move.

use crate::{Color, MoveDirection, MovementProfile, Reach};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when building pieces from external input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PieceError {
    #[error("invalid piece type: '{0}'")]
    InvalidPieceType(String),
}

/// The six types of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PieceType {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceType {
    /// All piece types in order.
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// Returns the index of this piece type (0-5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the symbol for this piece type: upper case for White, lower case for Black.
    pub const fn symbol(self, color: Color) -> char {
        let c = match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parses a piece symbol into a type and color.
    pub const fn from_symbol(c: char) -> Option<(PieceType, Color)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece_type = match c.to_ascii_lowercase() {
            'p' => PieceType::Pawn,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'r' => PieceType::Rook,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            _ => return None,
        };
        Some((piece_type, color))
    }

    /// The movement profile a freshly created piece of this type starts with.
    pub fn default_profile(self) -> MovementProfile {
        use MoveDirection::*;

        match self {
            PieceType::Pawn => MovementProfile::from_entries([
                (Forward, Reach::Limited(2)),
                (ForwardRightDiag, Reach::Limited(1)),
                (ForwardLeftDiag, Reach::Limited(1)),
            ]),
            PieceType::Knight => MovementProfile::from_entries([(LShape, Reach::Jump)]),
            PieceType::Bishop => MoveDirection::DIAGONALS
                .iter()
                .map(|&d| (d, Reach::Unbounded))
                .collect(),
            PieceType::Rook => MoveDirection::ORTHOGONALS
                .iter()
                .map(|&d| (d, Reach::Unbounded))
                .collect(),
            PieceType::Queen => MoveDirection::ORTHOGONALS
                .iter()
                .chain(MoveDirection::DIAGONALS.iter())
                .map(|&d| (d, Reach::Unbounded))
                .collect(),
            PieceType::King => MovementProfile::from_entries([
                (Forward, Reach::Limited(1)),
                (ForwardRightDiag, Reach::Limited(1)),
                (Right, Reach::Limited(2)),
                (BackwardRightDiag, Reach::Limited(1)),
                (Backward, Reach::Limited(1)),
                (BackwardLeftDiag, Reach::Limited(1)),
                (Left, Reach::Limited(2)),
                (ForwardLeftDiag, Reach::Limited(1)),
            ]),
        }
    }

    /// Reach rewrites applied once a piece of this type has moved.
    ///
    /// Pawns lose the double step. Kings lose the two-square sideways move
    /// that stands in for castling.
    pub const fn first_move_rewrites(self) -> &'static [(MoveDirection, Reach)] {
        match self {
            PieceType::Pawn => &[(MoveDirection::Forward, Reach::Limited(1))],
            PieceType::King => &[
                (MoveDirection::Left, Reach::Limited(1)),
                (MoveDirection::Right, Reach::Limited(1)),
            ],
            _ => &[],
        }
    }

    /// Returns true if the piece ignores pieces standing between its source
    /// and destination.
    #[inline]
    pub const fn jumps(self) -> bool {
        matches!(self, PieceType::Knight)
    }

    /// Returns true if moving in `direction` is only allowed onto an enemy piece.
    ///
    /// Pawn diagonals are capture-only. There is no en passant.
    #[inline]
    pub const fn capture_only(self, direction: MoveDirection) -> bool {
        matches!(self, PieceType::Pawn) && direction.is_diagonal()
    }

    /// Returns true if a move in `direction` may end on an enemy piece.
    ///
    /// Pawns never capture straight ahead.
    #[inline]
    pub const fn captures_in(self, direction: MoveDirection) -> bool {
        !matches!(self, PieceType::Pawn) || direction.is_diagonal()
    }
}

impl std::fmt::Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceType::Pawn => "Pawn",
            PieceType::Knight => "Knight",
            PieceType::Bishop => "Bishop",
            PieceType::Rook => "Rook",
            PieceType::Queen => "Queen",
            PieceType::King => "King",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for PieceType {
    type Err = PieceError;

    /// Accepts full names in any case ("pawn", "Knight") or a single symbol
    /// letter ("p", "N").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return PieceType::from_symbol(c)
                .map(|(t, _)| t)
                .ok_or_else(|| PieceError::InvalidPieceType(s.to_string()));
        }
        match s.to_ascii_lowercase().as_str() {
            "pawn" => Ok(PieceType::Pawn),
            "knight" => Ok(PieceType::Knight),
            "bishop" => Ok(PieceType::Bishop),
            "rook" => Ok(PieceType::Rook),
            "queen" => Ok(PieceType::Queen),
            "king" => Ok(PieceType::King),
            _ => Err(PieceError::InvalidPieceType(s.to_string())),
        }
    }
}

/// A single chess piece and its mutable game state.
///
/// Capturing a piece only flips its flag; the record itself stays around so
/// move history can be reconstructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    piece_type: PieceType,
    color: Color,
    captured: bool,
    has_moved: bool,
    profile: MovementProfile,
}

impl Piece {
    /// Creates an unmoved, uncaptured piece with its type's default profile.
    pub fn new(piece_type: PieceType, color: Color) -> Self {
        Piece {
            piece_type,
            color,
            captured: false,
            has_moved: false,
            profile: piece_type.default_profile(),
        }
    }

    /// Creates a piece from a type tag such as `"queen"` or `"Q"`.
    pub fn from_tag(tag: &str, color: Color) -> Result<Self, PieceError> {
        Ok(Piece::new(tag.parse()?, color))
    }

    /// Returns the piece color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the piece type.
    #[inline]
    pub fn piece_type(&self) -> PieceType {
        self.piece_type
    }

    /// Returns true if the piece has been captured.
    #[inline]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Returns true if the piece has moved at least once.
    #[inline]
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// Returns a snapshot of the current movement profile.
    #[inline]
    pub fn movement_profile(&self) -> MovementProfile {
        self.profile
    }

    /// Returns the one-letter symbol of the piece (`P`, `n`, ...).
    #[inline]
    pub fn symbol(&self) -> char {
        self.piece_type.symbol(self.color)
    }

    /// Marks the piece as captured or restores it.
    ///
    /// Never touches the movement profile.
    pub fn set_captured(&mut self, captured: bool) {
        self.captured = captured;
    }

    /// Records whether the piece has moved.
    ///
    /// Setting `true` also applies the type's first-move rewrites to the
    /// profile (pawn forward 2 -> 1, king left/right 2 -> 1). The rewrite is
    /// not undone by setting `false` again; callers that need to roll a move
    /// back must keep a copy of the piece from before the move.
    pub fn apply_has_moved(&mut self, moved: bool) {
        self.has_moved = moved;
        if moved {
            for &(direction, reach) in self.piece_type.first_move_rewrites() {
                self.profile.set(direction, reach);
            }
        }
    }
}
