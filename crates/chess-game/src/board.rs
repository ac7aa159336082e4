//! Board occupancy and piece-placement notation.

use chess_pieces::{Color, Piece, PieceError, PieceType, Square};
use thiserror::Error;

/// Errors that can occur when parsing piece-placement notation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid placement: expected 8 ranks, got {0}")]
    InvalidRankCount(usize),

    #[error("invalid placement: rank {rank} covers {squares} squares instead of 8")]
    InvalidRankWidth { rank: u8, squares: u32 },

    #[error("invalid placement: {0}")]
    InvalidPiece(#[from] PieceError),

    #[error("invalid placement: {color} has {count} kings, expected 1")]
    InvalidKingCount { color: Color, count: usize },
}

/// Mapping from square to the piece standing on it.
///
/// A game never leaves a captured piece on the board. One placed here by
/// hand with [`Board::put`] is refused as a move source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Piece placement of the standard starting position.
    pub const STANDARD_PLACEMENT: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Board {
            squares: std::array::from_fn(|_| None),
        }
    }

    /// Creates a board in the standard starting position.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];
        for color in Color::ALL {
            let (home, pawns) = match color {
                Color::White => (0, 1),
                Color::Black => (7, 6),
            };
            for (file, &piece_type) in back_rank.iter().enumerate() {
                let file = file as i8;
                if let Some(sq) = Square::from_coords(file, home) {
                    board.put(sq, Piece::new(piece_type, color));
                }
                if let Some(sq) = Square::from_coords(file, pawns) {
                    board.put(sq, Piece::new(PieceType::Pawn, color));
                }
            }
        }
        board
    }

    /// Parses the piece-placement field of a FEN string.
    ///
    /// Ranks are listed from 8 down to 1, separated by `/`. Digits stand for
    /// runs of empty squares. A pawn found off its color's starting rank is
    /// marked as having moved. Each color must have exactly one king.
    pub fn from_placement(placement: &str) -> Result<Self, BoardError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(BoardError::InvalidRankCount(ranks.len()));
        }

        let mut board = Board::empty();
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as u8;
            let mut file = 0u32;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    file += digit;
                    continue;
                }
                let (piece_type, color) = PieceType::from_symbol(c)
                    .ok_or_else(|| PieceError::InvalidPieceType(c.to_string()))?;
                if let Some(sq) = Square::from_coords(file as i8, rank as i8) {
                    let mut piece = Piece::new(piece_type, color);
                    if piece_type == PieceType::Pawn && rank != color.pawn_rank() {
                        piece.apply_has_moved(true);
                    }
                    board.put(sq, piece);
                }
                file += 1;
            }

            if file != 8 {
                return Err(BoardError::InvalidRankWidth {
                    rank: rank + 1,
                    squares: file,
                });
            }
        }

        for color in Color::ALL {
            let count = board.kings(color).count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }
        Ok(board)
    }

    /// Formats the board as the piece-placement field of a FEN string.
    pub fn to_placement(&self) -> String {
        let mut placement = String::new();
        for rank in (0..8).rev() {
            let mut empty_count = 0;
            for file in 0..8 {
                let piece = Square::from_coords(file, rank).and_then(|sq| self.get(sq));
                match piece {
                    Some(piece) => {
                        if empty_count > 0 {
                            placement.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        placement.push(piece.symbol());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                placement.push_str(&empty_count.to_string());
            }
            if rank > 0 {
                placement.push('/');
            }
        }
        placement
    }

    /// Returns the piece on `sq`, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<&Piece> {
        self.squares[sq.index() as usize].as_ref()
    }

    /// Returns a mutable reference to the piece on `sq`, if any.
    #[inline]
    pub fn get_mut(&mut self, sq: Square) -> Option<&mut Piece> {
        self.squares[sq.index() as usize].as_mut()
    }

    /// Returns true if a piece stands on `sq`.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index() as usize].is_some()
    }

    /// Places `piece` on `sq`, returning whatever stood there before.
    pub fn put(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.squares[sq.index() as usize].replace(piece)
    }

    /// Removes and returns the piece on `sq`.
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize].take()
    }

    /// Iterates over occupied squares and their pieces, from a1 to h8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    /// Returns the square of the first king of `color` on the board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kings(color).next()
    }

    /// Iterates over the squares holding an uncaptured king of `color`.
    pub fn kings(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, p)| {
                p.piece_type() == PieceType::King && p.color() == color && !p.is_captured()
            })
            .map(|(sq, _)| sq)
    }
}
