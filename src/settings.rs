//! Game settings: titles, outcome messages, player colors.

use crate::games::tictactoe::{GameStatus, Player};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Placeholder replaced by the winning mark in [`GameSettings::win_message`].
pub const PLAYER_PLACEHOLDER: &str = "{player}";

/// Presentation settings for a game.
///
/// Every field has a default, so a settings file only needs the keys it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSettings {
    /// Title shown above the board.
    #[serde(default = "default_title")]
    game_title: String,

    /// Short description shown under the title.
    #[serde(default = "default_description")]
    game_description: String,

    /// Message shown when a player wins; `{player}` is replaced by the mark.
    #[serde(default = "default_win_message")]
    win_message: String,

    /// Message shown on a draw.
    #[serde(default = "default_draw_message")]
    draw_message: String,

    /// CSS hex color for X marks.
    #[serde(default = "default_x_color")]
    player_x_color: String,

    /// CSS hex color for O marks.
    #[serde(default = "default_o_color")]
    player_o_color: String,

    /// Whether move and outcome sounds are enabled.
    #[serde(default = "default_enable_sound")]
    enable_sound: bool,
}

fn default_title() -> String {
    "Tic-Tac-Toe".to_string()
}

fn default_description() -> String {
    "Can you beat the unbeatable AI?".to_string()
}

fn default_win_message() -> String {
    format!("Player {} wins!", PLAYER_PLACEHOLDER)
}

fn default_draw_message() -> String {
    "It's a draw!".to_string()
}

fn default_x_color() -> String {
    "#3b82f6".to_string()
}

fn default_o_color() -> String {
    "#ef4444".to_string()
}

fn default_enable_sound() -> bool {
    true
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            game_title: default_title(),
            game_description: default_description(),
            win_message: default_win_message(),
            draw_message: default_draw_message(),
            player_x_color: default_x_color(),
            player_o_color: default_o_color(),
            enable_sound: default_enable_sound(),
        }
    }
}

impl GameSettings {
    /// Loads settings from a TOML file and validates them.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!(title = %settings.game_title, "Settings loaded successfully");
        Ok(settings)
    }

    /// Parses and validates settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks that both player colors are `#rgb` or `#rrggbb` hex.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("player_x_color", &self.player_x_color),
            ("player_o_color", &self.player_o_color),
        ] {
            if !is_hex_color(value) {
                return Err(ConfigError::new(format!(
                    "{} must be a hex color like #1e90ff, got {:?}",
                    key, value
                )));
            }
        }
        Ok(())
    }

    /// Color configured for `player`.
    pub fn player_color(&self, player: Player) -> &str {
        match player {
            Player::X => &self.player_x_color,
            Player::O => &self.player_o_color,
        }
    }

    /// Message announcing `status`, or `None` while the game is running.
    pub fn outcome_message(&self, status: &GameStatus) -> Option<String> {
        match status {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(
                self.win_message
                    .replace(PLAYER_PLACEHOLDER, &player.to_string()),
            ),
            GameStatus::Draw => Some(self.draw_message.clone()),
        }
    }
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
