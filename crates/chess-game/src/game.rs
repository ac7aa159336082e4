//! Turn-based game state machine.
//!
//! [`Game`] owns the board, the side to move and the outcome. A move is
//! checked in full against the moving piece's current movement profile and
//! the board before anything is changed, so a rejected move leaves the game
//! exactly as it was.

use crate::board::{Board, BoardError};
use crate::config::{ConfigError, GameConfig};
use crate::outcome::{GameResults, Outcome};
use chess_pieces::{Color, MoveDirection, Piece, PieceType, Reach, Square, SquareError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a move request is refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("invalid position: {0}")]
    InvalidPosition(#[from] SquareError),

    #[error("game has already ended")]
    GameOver,

    #[error("no piece on {0}")]
    NoPieceAtSource(Square),

    #[error("the piece on {square} is {color}, but it is not {color}'s turn")]
    WrongTurn { square: Square, color: Color },

    #[error("the piece on {from} cannot move in the direction of {to}")]
    IllegalDirection { from: Square, to: Square },

    #[error("cannot move {steps} squares {direction}: reach is {reach}")]
    IllegalDistance {
        direction: MoveDirection,
        steps: u8,
        reach: Reach,
    },

    #[error("path is blocked on {0}")]
    BlockedPath(Square),

    #[error("cannot capture own piece on {0}")]
    FriendlyCapture(Square),

    #[error("no move to undo")]
    NothingToUndo,
}

/// What happened when a move was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Color of the side that moved.
    pub color: Color,
    /// Type of the moved piece.
    pub piece_type: PieceType,
    pub from: Square,
    pub to: Square,
    /// Type of the captured piece, if any.
    pub captured: Option<PieceType>,
    /// Outcome after the move.
    pub outcome: Outcome,
}

impl MoveResult {
    /// Returns true if the move captured a piece.
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// State needed to take a move back.
#[derive(Debug, Clone)]
struct HistoryEntry {
    result: MoveResult,
    /// The moved piece as it was before moving, profile included.
    mover_before: Piece,
    outcome_before: Outcome,
}

/// A chess game driven by piece movement profiles.
///
/// Check, checkmate, stalemate, castling, en passant and promotion are not
/// modelled. A side left without a king has lost. Otherwise a game ends by
/// resignation or by agreement to a draw.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Color,
    outcome: Outcome,
    /// Pieces taken so far, in capture order.
    captured: Vec<Piece>,
    history: Vec<HistoryEntry>,
    record_history: bool,
    ply: usize,
    /// Set when the outcome came from `resign` or `agree_draw` rather than a move.
    settled: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game in the standard starting position, White to move.
    pub fn new() -> Self {
        Self::with_board(Board::standard(), Color::White)
    }

    /// Creates a game from an arbitrary board and side to move.
    ///
    /// The board is not validated. A side that starts without a king has
    /// already lost, and a board with no kings at all is a draw.
    pub fn with_board(board: Board, active: Color) -> Self {
        let outcome = outcome_on(&board);
        if outcome.is_terminal() {
            tracing::info!("Game starts decided: {}", outcome);
        }
        Game {
            board,
            active,
            outcome,
            captured: Vec::new(),
            history: Vec::new(),
            record_history: true,
            ply: 0,
            settled: false,
        }
    }

    /// Creates a game from FEN piece-placement notation.
    pub fn from_placement(placement: &str, active: Color) -> Result<Self, BoardError> {
        Ok(Self::with_board(Board::from_placement(placement)?, active))
    }

    /// Creates a game as described by `config`.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        let mut game = Self::with_board(config.board()?, config.first_player);
        game.record_history = config.record_history;
        Ok(game)
    }

    /// Returns the color whose turn it is.
    #[inline]
    pub fn current_player(&self) -> Color {
        self.active
    }

    /// Returns the current outcome.
    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the outcome together with the winner, if there is one.
    pub fn results(&self) -> GameResults {
        GameResults::from(self.outcome)
    }

    /// Returns true once the game has a terminal outcome.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the piece on `sq`, if any.
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.board.get(sq)
    }

    /// Returns every piece captured so far, oldest first.
    pub fn captured_pieces(&self) -> &[Piece] {
        &self.captured
    }

    /// Returns the recorded moves, oldest first.
    ///
    /// Empty when the game was configured not to record history.
    pub fn history(&self) -> impl Iterator<Item = &MoveResult> + '_ {
        self.history.iter().map(|entry| &entry.result)
    }

    /// Returns the number of half-moves played.
    pub fn ply_count(&self) -> usize {
        self.ply
    }

    /// Returns true if moving the piece on `from` to `to` would be accepted.
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        self.check_move(from, to).is_ok()
    }

    /// Returns every square the piece on `from` may move to right now.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        Square::all().filter(|&to| self.is_legal(from, to)).collect()
    }

    /// Moves a piece given both squares in algebraic notation (e.g. `"e2"`, `"e4"`).
    ///
    /// Malformed squares are reported as [`MoveError::InvalidPosition`].
    pub fn apply_move_algebraic(
        &mut self,
        from: &str,
        to: &str,
    ) -> Result<MoveResult, MoveError> {
        let from: Square = from.parse()?;
        let to: Square = to.parse()?;
        self.apply_move(from, to)
    }

    /// Moves the piece on `from` to `to`.
    ///
    /// On success the piece is marked as moved (which may shrink its movement
    /// profile), any enemy piece on `to` is captured, the turn passes to the
    /// other side and the outcome is recomputed. On failure nothing changes.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<MoveResult, MoveError> {
        let captured_type = match self.check_move(from, to) {
            Ok(captured) => captured,
            Err(e) => {
                tracing::debug!("Rejected move {}{}: {}", from, to, e);
                return Err(e);
            }
        };

        let Some(mut mover) = self.board.take(from) else {
            return Err(MoveError::NoPieceAtSource(from));
        };
        let mover_before = mover.clone();
        let outcome_before = self.outcome;

        if let Some(mut taken) = self.board.take(to) {
            taken.set_captured(true);
            self.captured.push(taken);
        }

        mover.apply_has_moved(true);
        let color = mover.color();
        let piece_type = mover.piece_type();
        self.board.put(to, mover);

        self.active = color.opposite();
        self.ply += 1;
        if self.board.king_square(color.opposite()).is_none() {
            self.outcome = Outcome::win_for(color);
        }

        let result = MoveResult {
            color,
            piece_type,
            from,
            to,
            captured: captured_type,
            outcome: self.outcome,
        };
        if self.record_history {
            self.history.push(HistoryEntry {
                result,
                mover_before,
                outcome_before,
            });
        }

        tracing::debug!("{} {} {}{}", color, piece_type, from, to);
        if self.outcome.is_terminal() {
            tracing::info!("Game over after {} plies: {}", self.ply, self.outcome);
        }
        Ok(result)
    }

    /// Takes back the last recorded move.
    ///
    /// Restores the moved piece exactly as it was (including its movement
    /// profile), returns any captured piece to the board uncaptured, and
    /// restores the side to move and the outcome from before the move.
    ///
    /// A game ended by resignation or agreement stays ended and fails with
    /// [`MoveError::GameOver`].
    pub fn undo(&mut self) -> Result<MoveResult, MoveError> {
        if self.settled {
            return Err(MoveError::GameOver);
        }
        let entry = self.history.pop().ok_or(MoveError::NothingToUndo)?;
        let MoveResult { from, to, .. } = entry.result;

        self.board.take(to);
        self.board.put(from, entry.mover_before);
        if entry.result.is_capture() {
            if let Some(mut piece) = self.captured.pop() {
                piece.set_captured(false);
                self.board.put(to, piece);
            }
        }

        self.active = entry.result.color;
        self.outcome = entry.outcome_before;
        self.ply -= 1;

        tracing::debug!("Took back {}{}", from, to);
        Ok(entry.result)
    }

    /// The side to move resigns; the opponent wins.
    pub fn resign(&mut self) -> Result<Outcome, MoveError> {
        self.finish(Outcome::win_for(self.active.opposite()))
    }

    /// Both sides agree to a draw.
    pub fn agree_draw(&mut self) -> Result<Outcome, MoveError> {
        self.finish(Outcome::Draw)
    }

    fn finish(&mut self, outcome: Outcome) -> Result<Outcome, MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver);
        }
        self.outcome = outcome;
        self.settled = true;
        tracing::info!("Game over after {} plies: {}", self.ply, outcome);
        Ok(outcome)
    }

    /// Validates a move without changing anything.
    ///
    /// Returns the type of the piece that would be captured, if any.
    fn check_move(&self, from: Square, to: Square) -> Result<Option<PieceType>, MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let piece = self
            .board
            .get(from)
            .filter(|p| !p.is_captured())
            .ok_or(MoveError::NoPieceAtSource(from))?;
        if piece.color() != self.active {
            return Err(MoveError::WrongTurn {
                square: from,
                color: piece.color(),
            });
        }

        let color = piece.color();
        let piece_type = piece.piece_type();
        let (file_delta, rank_delta) = from.delta_to(to);
        let (direction, steps) = MoveDirection::from_delta(color, file_delta, rank_delta)
            .ok_or(MoveError::IllegalDirection { from, to })?;

        // Profiles can change after a move, so always read the current one.
        let reach = piece
            .movement_profile()
            .get(direction)
            .ok_or(MoveError::IllegalDirection { from, to })?;
        if !reach.allows(steps) {
            return Err(MoveError::IllegalDistance {
                direction,
                steps,
                reach,
            });
        }

        if !piece_type.jumps() {
            if let Some((step_file, step_rank)) = direction.step(color) {
                for i in 1..steps as i8 {
                    let Some(sq) = from.offset(step_file * i, step_rank * i) else {
                        break;
                    };
                    if self.board.is_occupied(sq) {
                        return Err(MoveError::BlockedPath(sq));
                    }
                }
            }
        }

        match self.board.get(to) {
            None if piece_type.capture_only(direction) => {
                Err(MoveError::IllegalDirection { from, to })
            }
            None => Ok(None),
            Some(target) if target.color() == color => Err(MoveError::FriendlyCapture(to)),
            Some(_) if !piece_type.captures_in(direction) => Err(MoveError::BlockedPath(to)),
            Some(target) => Ok(Some(target.piece_type())),
        }
    }
}

/// Outcome implied by which kings are left on `board`.
fn outcome_on(board: &Board) -> Outcome {
    match (
        board.king_square(Color::White),
        board.king_square(Color::Black),
    ) {
        (Some(_), Some(_)) => Outcome::InProgress,
        (Some(_), None) => Outcome::WhiteWins,
        (None, Some(_)) => Outcome::BlackWins,
        (None, None) => Outcome::Draw,
    }
}
