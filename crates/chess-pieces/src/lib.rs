//! Chess pieces and their movement rules.
//!
//! This crate provides the piece-level model used by the game crate:
//! - [`Color`] and [`PieceType`] for piece identity
//! - [`MoveDirection`] and [`Reach`], the vocabulary of piece-relative movement
//! - [`MovementProfile`], the per-piece mapping from direction to reach
//! - [`Piece`], one concrete piece whose profile changes after its first move
//! - [`Square`] for board coordinates and algebraic notation
//!
//! # Example
//!
//! ```
//! use chess_pieces::{Color, MoveDirection, Piece, PieceType, Reach};
//!
//! let mut pawn = Piece::new(PieceType::Pawn, Color::White);
//! assert_eq!(pawn.movement_profile().get(MoveDirection::Forward), Some(Reach::Limited(2)));
//!
//! pawn.apply_has_moved(true);
//! assert_eq!(pawn.movement_profile().get(MoveDirection::Forward), Some(Reach::Limited(1)));
//! ```

mod color;
mod direction;
mod piece;
mod profile;
mod square;

pub use color::Color;
pub use direction::{MoveDirection, Reach};
pub use piece::{Piece, PieceError, PieceType};
pub use profile::MovementProfile;
pub use square::{Square, SquareError};
