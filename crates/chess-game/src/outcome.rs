//! Game outcome.

use chess_pieces::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a game: still being played, or finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Moves are still accepted.
    #[default]
    InProgress,
    /// White captured the black king or Black resigned.
    WhiteWins,
    /// Black captured the white king or White resigned.
    BlackWins,
    /// Drawn by agreement.
    Draw,
}

impl Outcome {
    /// The outcome in which `color` wins.
    #[inline]
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => Outcome::WhiteWins,
            Color::Black => Outcome::BlackWins,
        }
    }

    /// Returns true once no more moves are accepted.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winning color, if the game was decided.
    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::WhiteWins => Some(Color::White),
            Outcome::BlackWins => Some(Color::Black),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::WhiteWins => write!(f, "1-0"),
            Outcome::BlackWins => write!(f, "0-1"),
            Outcome::Draw => write!(f, "1/2-1/2"),
        }
    }
}

/// Snapshot of a game's result, as reported to front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResults {
    pub outcome: Outcome,
    pub winner: Option<Color>,
}

impl From<Outcome> for GameResults {
    fn from(outcome: Outcome) -> Self {
        GameResults {
            outcome,
            winner: outcome.winner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::WhiteWins.is_terminal());
        assert!(Outcome::BlackWins.is_terminal());
        assert!(Outcome::Draw.is_terminal());
    }

    #[test]
    fn winners() {
        assert_eq!(Outcome::win_for(Color::Black), Outcome::BlackWins);
        assert_eq!(Outcome::WhiteWins.winner(), Some(Color::White));
        assert_eq!(Outcome::Draw.winner(), None);
        assert_eq!(Outcome::InProgress.winner(), None);
    }

    #[test]
    fn results_from_outcome() {
        let results = GameResults::from(Outcome::BlackWins);
        assert_eq!(results.outcome, Outcome::BlackWins);
        assert_eq!(results.winner, Some(Color::Black));
        assert_eq!(GameResults::from(Outcome::Draw).winner, None);
    }

    #[test]
    fn display() {
        assert_eq!(Outcome::WhiteWins.to_string(), "1-0");
        assert_eq!(Outcome::Draw.to_string(), "1/2-1/2");
    }
}
