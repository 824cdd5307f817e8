//! A bowler and their ten frames.
//!
//! `Player` routes each roll to the frame it belongs to and runs the deferred
//! scoring protocol: when a frame completes, any earlier strike or spare
//! waiting on it is resolved first, then the new frame is either scored on
//! the spot or registered against the frames that will supply its bonus.
//!
//! ```
//! use bowling_score::core::Mark;
//! use bowling_score::scoring::{FrameStatus, Player};
//!
//! let mut player = Player::new("Bob");
//! assert_eq!(player.record_roll(0, Mark::Strike).unwrap(), FrameStatus::Complete);
//! assert_eq!(player.frames()[0].score(), None);
//!
//! player.record_roll(1, Mark::Pins(3)).unwrap();
//! player.record_roll(1, Mark::Pins(4)).unwrap();
//! assert_eq!(player.frames()[0].score(), Some(17));
//! assert_eq!(player.frames()[1].score(), Some(24));
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{Mark, Roll};
use crate::error::ScoreError;
use crate::frames::{Frame, FRAME_COUNT, TENTH_FRAME};

use super::pending::PendingResolutions;

/// Whether the frame that just took a roll needs more balls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameStatus {
    /// The frame accepts further rolls.
    Open,
    /// The frame is finished; move on to the next frame or player.
    Complete,
}

impl FrameStatus {
    #[must_use]
    pub fn is_complete(self) -> bool {
        self == FrameStatus::Complete
    }
}

/// A named bowler with exactly ten frames.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    frames: [Frame; FRAME_COUNT],
    /// Cumulative score carried into the most recently completed frame.
    score: u16,
    pending: PendingResolutions,
}

impl Player {
    /// Create a player with nine regular frames and a tenth frame.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frames: std::array::from_fn(|i| {
                if i == TENTH_FRAME {
                    Frame::tenth()
                } else {
                    Frame::regular()
                }
            }),
            score: 0,
            pending: PendingResolutions::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All ten frames in order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[must_use]
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Cumulative score as last advanced by the scoring protocol.
    ///
    /// This is the total through the frame before the most recently
    /// completed one, or further when deferred frames resolved. Use
    /// [`Player::total_score`] for the latest total on the sheet.
    #[must_use]
    pub fn score(&self) -> u16 {
        self.score
    }

    /// The most recent resolved frame total, 0 before any frame is scored.
    #[must_use]
    pub fn total_score(&self) -> u16 {
        self.frames
            .iter()
            .rev()
            .find_map(Frame::score)
            .unwrap_or(0)
    }

    /// Frames still waiting for bonus balls, keyed by the frame that will
    /// complete them.
    #[must_use]
    pub fn pending(&self) -> &PendingResolutions {
        &self.pending
    }

    /// Index of the first frame that can still take a roll.
    #[must_use]
    pub fn current_frame(&self) -> Option<usize> {
        self.frames.iter().position(|f| !f.is_complete())
    }

    /// Check whether the tenth frame is complete.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.frames[TENTH_FRAME].is_complete()
    }

    /// Parse a mark symbol and record it in the given frame.
    pub fn record_char(&mut self, frame_index: usize, c: char) -> Result<FrameStatus, ScoreError> {
        let mark = Mark::parse(c)?;
        self.record_roll(frame_index, mark)
    }

    /// Record a roll in the given frame and resolve whatever it unlocks.
    ///
    /// Validation errors from the frame are returned unchanged and leave the
    /// player untouched. Frames must be played in order; the engine does not
    /// check that.
    pub fn record_roll(&mut self, frame_index: usize, mark: Mark) -> Result<FrameStatus, ScoreError> {
        let frame = self
            .frames
            .get_mut(frame_index)
            .ok_or(ScoreError::FrameOutOfRange(frame_index))?;
        frame.record(mark)?;
        let complete = frame.is_complete();

        trace!(player = %self.name, frame = frame_index, %mark, "roll recorded");

        if !complete {
            return Ok(FrameStatus::Open);
        }

        for waiting in self.pending.take(frame_index) {
            if let Some(score) = self.resolve(waiting) {
                self.score = score;
            }
        }

        if frame_index > 0 {
            self.score = self.frames[frame_index - 1].score().unwrap_or(self.score);
        }

        let frame = &self.frames[frame_index];
        let strike = frame.roll1().is_some_and(Roll::is_strike);
        let spare = frame.roll2().is_some_and(Roll::is_spare);

        if frame.is_tenth() || !(strike || spare) {
            self.resolve(frame_index);
        } else if strike {
            for trigger in [frame_index + 1, frame_index + 2] {
                if trigger < FRAME_COUNT {
                    self.pending.register(trigger, frame_index);
                }
            }
            debug!(player = %self.name, frame = frame_index, "strike deferred");
        } else {
            self.pending.register(frame_index + 1, frame_index);
            debug!(player = %self.name, frame = frame_index, "spare deferred");
        }

        Ok(FrameStatus::Complete)
    }

    /// Try to score `index` against the current cumulative score.
    fn resolve(&mut self, index: usize) -> Option<u16> {
        let (head, tail) = self.frames.split_at_mut(index + 1);
        let frame = head.last_mut()?;
        let resolved = frame.update_score(self.score, tail.first(), tail.get(1));

        if let Some(score) = resolved {
            debug!(player = %self.name, frame = index, score, "frame resolved");
        }
        resolved
    }

    /// Name followed by the notation of each complete frame, stopping at the
    /// first incomplete one.
    #[must_use]
    pub fn display_data(&self) -> Vec<String> {
        std::iter::once(self.name.clone())
            .chain(
                self.frames
                    .iter()
                    .take_while(|f| f.is_complete())
                    .map(ToString::to_string),
            )
            .collect()
    }
}
