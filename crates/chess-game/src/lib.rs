//! Turn-based chess game built on piece movement profiles.
//!
//! This crate provides:
//! - [`Board`] - square-to-piece occupancy with FEN placement notation
//! - [`Game`] - the state machine that validates and applies moves, passes
//!   the turn and tracks the [`Outcome`]
//! - [`MoveResult`] and [`MoveError`] - what a move request produced
//! - [`GameConfig`] - game setup loaded from TOML
//!
//! Moves are validated against the moving piece's current
//! [`MovementProfile`](chess_pieces::MovementProfile) and the board. A game is
//! decided when a side has no king left, by resignation, or drawn by
//! agreement. Check detection is not modelled.
//!
//! # Example
//!
//! ```
//! use chess_game::{Game, MoveError, Outcome};
//! use chess_pieces::Color;
//!
//! let mut game = Game::new();
//! game.apply_move_algebraic("e2", "e4").unwrap();
//! assert_eq!(game.current_player(), Color::Black);
//!
//! // Black pawns move towards rank 1 and may only double-step once.
//! game.apply_move_algebraic("e7", "e5").unwrap();
//! game.apply_move_algebraic("g1", "f3").unwrap();
//! assert!(matches!(
//!     game.apply_move_algebraic("e5", "e3"),
//!     Err(MoveError::IllegalDistance { .. })
//! ));
//! assert_eq!(game.results().outcome, Outcome::InProgress);
//! ```

mod board;
mod config;
mod game;
mod outcome;

pub use board::{Board, BoardError};
pub use config::{ConfigError, GameConfig};
pub use game::{Game, MoveError, MoveResult};
pub use outcome::{GameResults, Outcome};
