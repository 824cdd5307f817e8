//! Scoreboard snapshots for display collaborators.
//!
//! A snapshot is an owned copy of everything a renderer needs: names, each
//! frame's marks so far and its score if resolved. Unthrown balls are simply
//! absent from `marks`, and unresolved scores are `None`, so partially played
//! frames render without special cases.

use serde::{Deserialize, Serialize};

use crate::core::{DisplayConfig, PlayerId};
use crate::frames::Frame;
use crate::scoring::Player;

use super::state::Game;

/// One frame as shown on the sheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Marks recorded so far, e.g. `"7/"`, `"X"` or `""`.
    pub marks: String,
    /// Cumulative score at the end of the frame, `None` until resolved.
    pub score: Option<u16>,
    pub complete: bool,
}

impl From<&Frame> for FrameSnapshot {
    fn from(frame: &Frame) -> Self {
        Self {
            marks: frame.to_string(),
            score: frame.score(),
            complete: frame.is_complete(),
        }
    }
}

/// One row of the scoreboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    /// Name truncated to the configured width.
    pub name: String,
    pub frames: Vec<FrameSnapshot>,
    /// Cumulative score as advanced by the scoring protocol.
    pub score: u16,
    /// Latest resolved frame total.
    pub total: u16,
    pub finished: bool,
}

impl PlayerSnapshot {
    /// Capture one player's row.
    #[must_use]
    pub fn capture(id: PlayerId, player: &Player, config: &DisplayConfig) -> Self {
        Self {
            id,
            name: config.display_name(player.name()),
            frames: player.frames().iter().map(FrameSnapshot::from).collect(),
            score: player.score(),
            total: player.total_score(),
            finished: player.is_finished(),
        }
    }
}

/// The whole scoreboard, rows in turn order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreboardSnapshot {
    pub players: Vec<PlayerSnapshot>,
}

impl ScoreboardSnapshot {
    /// Capture every player in the game.
    #[must_use]
    pub fn capture(game: &Game, config: &DisplayConfig) -> Self {
        Self {
            players: game
                .iter()
                .map(|(id, player)| PlayerSnapshot::capture(id, player, config))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_frames() {
        let mut game = Game::new();
        let id = game.add_player(Player::new("Maximilian Bowler")).unwrap();
        game.record_char(id, 0, '7').unwrap();
        game.record_char(id, 0, '/').unwrap();
        game.record_char(id, 1, '4').unwrap();

        let snapshot = game.snapshot(&DisplayConfig::default());
        let row = &snapshot.players[0];

        assert_eq!(row.name, "Maximilian");
        assert_eq!(row.frames.len(), 10);
        assert_eq!(row.frames[0].marks, "7/");
        assert_eq!(row.frames[0].score, None);
        assert!(row.frames[0].complete);
        assert_eq!(row.frames[1].marks, "4");
        assert!(!row.frames[1].complete);
        assert_eq!(row.frames[2].marks, "");
        assert!(!row.finished);
    }

    #[test]
    fn test_frame_snapshot_from_scored_frame() {
        let mut frame = Frame::regular();
        frame.record_char('5').unwrap();
        frame.record_char('3').unwrap();
        frame.update_score(10, None, None);

        let snap = FrameSnapshot::from(&frame);
        assert_eq!(snap.marks, "53");
        assert_eq!(snap.score, Some(18));
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut game = Game::new();
        let id = game.add_player(Player::new("Bob")).unwrap();
        game.record_char(id, 0, 'X').unwrap();

        let snapshot = game.snapshot(&DisplayConfig::default());
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: ScoreboardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}
