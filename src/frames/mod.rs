//! Frames: roll validation, completion and local scoring.
//!
//! A frame is one turn at the lane. Frames one to nine follow the regular
//! rules (a strike ends the frame, otherwise two balls). The tenth frame
//! allows a third ball when the first two clear the deck with a strike or
//! spare, and it scores itself without look-ahead.
//!
//! ## Design
//!
//! Both kinds share one `Frame` type carrying a `FrameKind` tag. Rules live in
//! the `regular` and `tenth` submodules and are selected by matching on the
//! tag. Rolls are appended left to right and never overwritten.
//!
//! ## Example
//!
//! ```
//! use bowling_score::frames::Frame;
//!
//! let mut frame = Frame::regular();
//! frame.record_char('6').unwrap();
//! frame.record_char('/').unwrap();
//! assert!(frame.is_complete());
//!
//! let mut next = Frame::regular();
//! next.record_char('X').unwrap();
//!
//! assert_eq!(frame.update_score(0, Some(&next), None), Some(20));
//! assert_eq!(frame.to_string(), "6/");
//! ```

mod regular;
mod tenth;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Mark, Roll, PINS};
use crate::error::{ScoreError, SpareViolation};

/// Number of frames in a game.
pub const FRAME_COUNT: usize = 10;

/// Index of the tenth frame.
pub const TENTH_FRAME: usize = FRAME_COUNT - 1;

/// Which rule set a frame follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameKind {
    /// Frames one to nine.
    Regular,
    /// The last frame, with up to three balls.
    Tenth,
}

impl FrameKind {
    /// Most balls a frame of this kind can hold.
    #[must_use]
    pub const fn max_rolls(self) -> usize {
        match self {
            FrameKind::Regular => 2,
            FrameKind::Tenth => 3,
        }
    }
}

/// One frame of a player's game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    kind: FrameKind,
    rolls: SmallVec<[Roll; 3]>,
    /// Cumulative score at the end of this frame, once known.
    score: Option<u16>,
}

impl Frame {
    /// Create an empty frame of the given kind.
    #[must_use]
    pub fn new(kind: FrameKind) -> Self {
        Self {
            kind,
            rolls: SmallVec::new(),
            score: None,
        }
    }

    /// Create an empty regular frame.
    #[must_use]
    pub fn regular() -> Self {
        Self::new(FrameKind::Regular)
    }

    /// Create an empty tenth frame.
    #[must_use]
    pub fn tenth() -> Self {
        Self::new(FrameKind::Tenth)
    }

    #[must_use]
    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    #[must_use]
    pub fn is_tenth(&self) -> bool {
        self.kind == FrameKind::Tenth
    }

    /// Rolls recorded so far, in order.
    #[must_use]
    pub fn rolls(&self) -> &[Roll] {
        &self.rolls
    }

    #[must_use]
    pub fn roll1(&self) -> Option<Roll> {
        self.rolls.first().copied()
    }

    #[must_use]
    pub fn roll2(&self) -> Option<Roll> {
        self.rolls.get(1).copied()
    }

    /// Third ball. Only a tenth frame ever fills it.
    #[must_use]
    pub fn roll3(&self) -> Option<Roll> {
        self.rolls.get(2).copied()
    }

    /// Cumulative score at the end of this frame, `None` until resolved.
    #[must_use]
    pub fn score(&self) -> Option<u16> {
        self.score
    }

    /// Check whether the frame can take no more rolls.
    ///
    /// A frame is complete once it holds its kind's maximum, or earlier when
    /// its rules close it (a strike, or an open tenth frame).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.rolls.len() >= self.kind.max_rolls()
            || match self.kind {
                FrameKind::Regular => regular::closes_early(&self.rolls),
                FrameKind::Tenth => tenth::closes_early(&self.rolls),
            }
    }

    /// Parse a mark symbol and record it.
    ///
    /// An unknown symbol fails with `InvalidMark` before any frame rule is
    /// consulted.
    pub fn record_char(&mut self, c: char) -> Result<(), ScoreError> {
        let mark = Mark::parse(c)?;
        self.record(mark)
    }

    /// Validate a mark against the frame's rules and append it.
    ///
    /// The mark is normalized first, so `Mark::Pins(0)` is stored as a
    /// gutter and a count above nine fails with `InvalidPinCount`. On error
    /// the frame is left untouched.
    pub fn record(&mut self, mark: Mark) -> Result<(), ScoreError> {
        let mark = mark.normalize()?;
        if self.is_complete() {
            return Err(ScoreError::FrameComplete);
        }

        let roll = Roll::new(mark);
        match self.kind {
            FrameKind::Regular => regular::validate(&self.rolls, roll)?,
            FrameKind::Tenth => tenth::validate(&self.rolls, roll)?,
        }

        self.rolls.push(roll);
        Ok(())
    }

    /// Resolve the frame's cumulative score if enough is known.
    ///
    /// `prior` is the cumulative score before this frame. `next` and
    /// `next_next` are the following frames, needed for strike and spare
    /// bonuses. Returns the score only when this call resolved it; a frame
    /// that is incomplete, already scored, or still waiting for look-ahead is
    /// left as it is and yields `None`.
    pub fn update_score(
        &mut self,
        prior: u16,
        next: Option<&Frame>,
        next_next: Option<&Frame>,
    ) -> Option<u16> {
        if self.score.is_some() || !self.is_complete() {
            return None;
        }

        let total = match self.kind {
            FrameKind::Regular => regular::frame_total(&self.rolls, next, next_next)?,
            FrameKind::Tenth => tenth::frame_total(&self.rolls)?,
        };

        let score = prior.saturating_add(total);
        self.score = Some(score);
        Some(score)
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for roll in &self.rolls {
            write!(f, "{}", roll)?;
        }
        Ok(())
    }
}

/// Rejects a spare as the first ball of a frame.
fn check_first_roll(roll: Roll) -> Result<(), ScoreError> {
    if roll.is_spare() {
        return Err(ScoreError::IllegalSpare(SpareViolation::FirstRoll));
    }
    Ok(())
}

/// Pin-count rules for a ball thrown at the pins left by `previous`.
///
/// The pair may not exceed ten pins, and clearing exactly ten must be
/// written as a spare.
fn check_pair(previous: Roll, roll: Roll) -> Result<(), ScoreError> {
    let sum = u16::from(previous.value()) + u16::from(roll.value());
    if sum > u16::from(PINS) {
        return Err(ScoreError::PinCountExceeded {
            first: previous.value(),
            second: roll.value(),
        });
    }
    if sum == u16::from(PINS) && !roll.is_spare() {
        return Err(ScoreError::SpareNotationRequired);
    }
    Ok(())
}
