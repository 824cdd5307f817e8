//! The game: players in turn order.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{DisplayConfig, GameConfig, Mark, PlayerId};
use crate::error::ScoreError;
use crate::scoring::{FrameStatus, Player};

use super::snapshot::ScoreboardSnapshot;

/// An ordered collection of players.
///
/// Turn order is insertion order and players are never removed. The game
/// does no scoring of its own; rolls are passed straight to the player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    players: Vec<Player>,
}

impl Game {
    /// Create an empty game with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty game with custom limits.
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            config,
            players: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Append a player to the turn order and return their id.
    pub fn add_player(&mut self, player: Player) -> Result<PlayerId, ScoreError> {
        let max = self.config.max_players.min(u8::MAX as usize);
        if self.players.len() >= max {
            return Err(ScoreError::TooManyPlayers { max });
        }

        let id = PlayerId::new(self.players.len() as u8);
        debug!(%id, name = player.name(), "player added");
        self.players.push(player);
        Ok(id)
    }

    /// Players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Iterate over `(PlayerId, &Player)` pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        PlayerId::all(self.players.len()).zip(self.players.iter())
    }

    /// Record a roll for one player.
    pub fn record_roll(
        &mut self,
        id: PlayerId,
        frame_index: usize,
        mark: Mark,
    ) -> Result<FrameStatus, ScoreError> {
        let player = self
            .players
            .get_mut(id.index())
            .ok_or(ScoreError::UnknownPlayer(id))?;
        trace!(%id, frame = frame_index, %mark, "routing roll");
        player.record_roll(frame_index, mark)
    }

    /// Parse a mark symbol and record it for one player.
    pub fn record_char(
        &mut self,
        id: PlayerId,
        frame_index: usize,
        c: char,
    ) -> Result<FrameStatus, ScoreError> {
        let mark = Mark::parse(c)?;
        self.record_roll(id, frame_index, mark)
    }

    /// Check whether every player has completed the tenth frame.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.players.is_empty() && self.players.iter().all(Player::is_finished)
    }

    /// Each player's display data, in turn order.
    #[must_use]
    pub fn display_data(&self) -> Vec<Vec<String>> {
        self.players.iter().map(Player::display_data).collect()
    }

    /// Owned, serializable view of the scoreboard.
    #[must_use]
    pub fn snapshot(&self, config: &DisplayConfig) -> ScoreboardSnapshot {
        ScoreboardSnapshot::capture(self, config)
    }
}
