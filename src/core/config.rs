//! Game and display configuration.
//!
//! Configuration is passed explicitly to the pieces that need it:
//! - `GameConfig`: limits enforced by `Game`
//! - `DisplayConfig`: presentation choices applied when a scoreboard snapshot is taken

use serde::{Deserialize, Serialize};

/// Limits applied when players are added to a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Maximum number of players in one game.
    pub max_players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { max_players: 6 }
    }
}

impl GameConfig {
    /// Set the maximum player count (builder pattern).
    #[must_use]
    pub fn with_max_players(mut self, max_players: usize) -> Self {
        self.max_players = max_players;
        self
    }
}

/// Presentation settings for scoreboard snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Player names longer than this many characters are truncated.
    pub name_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { name_width: 10 }
    }
}

impl DisplayConfig {
    /// Set the name column width (builder pattern).
    #[must_use]
    pub fn with_name_width(mut self, width: usize) -> Self {
        self.name_width = width;
        self
    }

    /// Truncate a name to the configured width, on character boundaries.
    #[must_use]
    pub fn display_name(&self, name: &str) -> String {
        name.chars().take(self.name_width).collect()
    }
}
