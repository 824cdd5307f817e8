//! Rule violations reported by the scoring engine.
//!
//! Every error is local and recoverable: the frame or player that rejected a
//! roll keeps exactly the state it had before the call, so an input loop can
//! show the message and ask again.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Why a spare was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum SpareViolation {
    /// A spare was given as the first roll of a frame.
    #[display("Spare on first roll is not allowed.")]
    FirstRoll,

    /// A spare immediately followed a strike in the tenth frame.
    #[display("Can't have a spare after a strike.")]
    AfterStrike,

    /// A spare immediately followed another spare in the tenth frame.
    #[display("Can't have a spare after a spare.")]
    AfterSpare,
}

/// Error returned when a mark, roll or routing request breaks the rules.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum ScoreError {
    /// The submitted character is not a recognized mark.
    #[display("'{}' is not a valid bowling score mark", _0)]
    InvalidMark(char),

    /// A pin-count mark outside 1-9.
    #[display("{} is not a valid pin count for a single ball", _0)]
    InvalidPinCount(u8),

    /// The frame already holds all the rolls it can take.
    #[display("Cannot add a roll to a complete frame.")]
    FrameComplete,

    /// A spare was used where no spare is possible.
    #[display("{}", _0)]
    IllegalSpare(SpareViolation),

    /// A strike followed a plain numeric roll.
    #[display("Strike cannot follow a single numeric roll.")]
    IllegalStrike,

    /// Two rolls knocked down more than ten pins between them.
    #[display("Pin values of rolls may not exceed 10 ({} + {})", first, second)]
    PinCountExceeded {
        /// Pins from the earlier roll of the pair.
        first: u8,
        /// Pins from the roll being recorded.
        second: u8,
    },

    /// Two rolls cleared all ten pins but the second was not written as a spare.
    #[display("Please use spare notation")]
    SpareNotationRequired,

    /// The frame index is outside `0..10`.
    #[display("Frame index {} is out of range", _0)]
    FrameOutOfRange(usize),

    /// No player with this id is registered in the game.
    #[display("{} is not registered in this game", _0)]
    UnknownPlayer(PlayerId),

    /// The game already holds its configured maximum of players.
    #[display("A game supports at most {} players", max)]
    TooManyPlayers {
        /// The configured limit.
        max: usize,
    },
}

impl std::error::Error for ScoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_rule_wording() {
        assert_eq!(
            ScoreError::InvalidMark('q').to_string(),
            "'q' is not a valid bowling score mark"
        );
        assert_eq!(
            ScoreError::FrameComplete.to_string(),
            "Cannot add a roll to a complete frame."
        );
        assert_eq!(
            ScoreError::IllegalSpare(SpareViolation::FirstRoll).to_string(),
            "Spare on first roll is not allowed."
        );
        assert!(ScoreError::IllegalSpare(SpareViolation::AfterStrike)
            .to_string()
            .contains("spare after a strike"));
        assert!(ScoreError::IllegalSpare(SpareViolation::AfterSpare)
            .to_string()
            .contains("spare after a spare"));
        assert!(ScoreError::PinCountExceeded { first: 6, second: 6 }
            .to_string()
            .contains("may not exceed 10"));
        assert!(ScoreError::SpareNotationRequired
            .to_string()
            .contains("spare notation"));
    }

    #[test]
    fn test_pin_count_message() {
        assert_eq!(
            ScoreError::InvalidPinCount(42).to_string(),
            "42 is not a valid pin count for a single ball"
        );
    }

    #[test]
    fn test_routing_messages() {
        assert_eq!(
            ScoreError::UnknownPlayer(PlayerId::new(3)).to_string(),
            "Player 3 is not registered in this game"
        );
        assert_eq!(
            ScoreError::TooManyPlayers { max: 6 }.to_string(),
            "A game supports at most 6 players"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&ScoreError::IllegalStrike);
    }
}
