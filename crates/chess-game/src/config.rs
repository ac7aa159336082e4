//! Game setup configuration loaded from TOML.
//!
//! ```toml
//! placement = "4k3/8/8/8/8/8/8/4K2R"
//! first_player = "black"
//! record_history = false
//! ```
//!
//! Every key is optional; missing keys fall back to a standard game.

use crate::board::{Board, BoardError};
use chess_pieces::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or applying a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    /// Failed to parse the configuration as valid TOML.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// The configured placement is not valid notation.
    #[error("invalid starting board: {0}")]
    Board(#[from] BoardError),
}

/// How a [`Game`](crate::Game) is set up.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GameConfig {
    /// Starting piece placement in FEN placement notation.
    /// Defaults to the standard starting position.
    #[serde(default = "default_placement")]
    pub placement: String,
    /// Color that makes the first move. Defaults to White.
    #[serde(default = "default_first_player")]
    pub first_player: Color,
    /// Whether moves are recorded for [`Game::history`](crate::Game::history)
    /// and [`Game::undo`](crate::Game::undo). Defaults to true.
    #[serde(default = "default_record_history")]
    pub record_history: bool,
}

fn default_placement() -> String {
    Board::STANDARD_PLACEMENT.to_string()
}

fn default_first_player() -> Color {
    Color::White
}

fn default_record_history() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            placement: default_placement(),
            first_player: default_first_player(),
            record_history: default_record_history(),
        }
    }
}

impl GameConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if it is not valid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Builds the starting board described by [`placement`](Self::placement).
    pub fn board(&self) -> Result<Board, ConfigError> {
        Ok(Board::from_placement(&self.placement)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_is_a_standard_game() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.board().unwrap(), Board::standard());
    }

    #[test]
    fn parse_all_fields() {
        let config = GameConfig::from_toml_str(
            r#"
placement = "4k3/8/8/8/8/8/8/4K2R"
first_player = "black"
record_history = false
"#,
        )
        .unwrap();
        assert_eq!(config.placement, "4k3/8/8/8/8/8/8/4K2R");
        assert_eq!(config.first_player, Color::Black);
        assert!(!config.record_history);
        assert_eq!(config.board().unwrap().pieces().count(), 3);
    }

    #[test]
    fn invalid_toml() {
        assert!(matches!(
            GameConfig::from_toml_str("first_player = 3"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GameConfig::from_toml_str("first_player = \"green\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn invalid_placement() {
        let config = GameConfig::from_toml_str("placement = \"8/8\"").unwrap();
        assert!(matches!(
            config.board(),
            Err(ConfigError::Board(BoardError::InvalidRankCount(2)))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "first_player = \"black\"").unwrap();
        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.first_player, Color::Black);
        assert_eq!(config.placement, Board::STANDARD_PLACEMENT);
    }

    #[test]
    fn load_missing_file() {
        assert!(matches!(
            GameConfig::load("/definitely/not/here/game.toml"),
            Err(ConfigError::Read(_))
        ));
    }
}
