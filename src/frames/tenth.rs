//! Rules for the tenth frame.
//!
//! A strike or spare within the first two balls earns a third ball. Since
//! every bonus ball lives inside the frame, its score never waits on
//! anything else.

use crate::core::{Roll, PINS};
use crate::error::{ScoreError, SpareViolation};

use super::{check_first_roll, check_pair};

/// Two balls that leave pins standing close the frame without a third.
pub(super) fn closes_early(rolls: &[Roll]) -> bool {
    match rolls {
        [first, second] => first.is_not_strike_nor_spare() && second.is_not_strike_nor_spare(),
        _ => false,
    }
}

/// Checks `roll` against the balls already in an incomplete tenth frame.
pub(super) fn validate(rolls: &[Roll], roll: Roll) -> Result<(), ScoreError> {
    let first = match rolls.first() {
        Some(first) => *first,
        None => return check_first_roll(roll),
    };
    let second = rolls.get(1).copied();

    if second.is_none() {
        check_pair(first, roll)?;
    }

    // After a first-ball strike the pins are reset, so the second and third
    // balls form their own pair.
    if first.is_strike() {
        let previous = second.map_or(0, Roll::value);
        let sum = u16::from(previous) + u16::from(roll.value());
        if sum > u16::from(PINS) {
            return Err(ScoreError::PinCountExceeded {
                first: previous,
                second: roll.value(),
            });
        }
        if sum == u16::from(PINS) && !roll.is_spare() {
            return Err(ScoreError::SpareNotationRequired);
        }
    }

    if roll.is_spare() {
        let after_strike = match second {
            None => first.is_strike(),
            Some(second) => second.is_strike(),
        };
        if after_strike {
            return Err(ScoreError::IllegalSpare(SpareViolation::AfterStrike));
        }
        if second.is_some_and(Roll::is_spare) {
            return Err(ScoreError::IllegalSpare(SpareViolation::AfterSpare));
        }
    }

    if roll.is_strike() && second.is_none() && !first.is_strike() {
        return Err(ScoreError::IllegalStrike);
    }

    Ok(())
}

/// Points earned by the complete tenth frame.
pub(super) fn frame_total(rolls: &[Roll]) -> Option<u16> {
    let (first, second) = match rolls {
        [first, second, ..] => (*first, *second),
        _ => return None,
    };

    let mut total = first.bonus_pins();

    if second.is_strike() {
        total += PINS as u16;
    } else if second.is_spare() {
        total = PINS as u16;
    } else {
        total += second.value() as u16;
    }

    if let Some(third) = rolls.get(2) {
        if third.is_strike() {
            total += PINS as u16;
        } else if third.is_spare() {
            total = total - second.value() as u16 + PINS as u16;
        } else {
            total += third.value() as u16;
        }
    }

    Some(total)
}

#[cfg(test)]
mod tests {
    use super::super::Frame;
    use super::*;

    fn frame(marks: &str) -> Frame {
        let mut frame = Frame::tenth();
        for c in marks.chars() {
            frame.record_char(c).unwrap();
        }
        frame
    }

    fn rejected(marks: &str, next: char) -> ScoreError {
        let mut f = frame(marks);
        let before = f.clone();
        let err = f.record_char(next).unwrap_err();
        assert_eq!(f, before, "rejected roll must not change the frame");
        err
    }

    #[test]
    fn test_third_roll_without_strike_or_spare_fails() {
        let f = frame("33");
        assert!(f.is_complete());
        let err = rejected("33", '1');
        assert!(err.to_string().contains("complete frame"));
    }

    #[test]
    fn test_strike_num_num() {
        let f = frame("X31");
        assert_eq!(f.roll1().unwrap().value(), 0);
        assert_eq!(f.roll2().unwrap().value(), 3);
        assert_eq!(f.roll3().unwrap().value(), 1);
        assert!(f.is_complete());
        assert_eq!(f.to_string(), "X31");
    }

    #[test]
    fn test_valid_three_ball_frames() {
        for marks in ["X3/", "XX1", "XXX", "3/1", "3/X", "X-/", "-/-", "XX-"] {
            let f = frame(marks);
            assert!(f.is_complete(), "{} should be complete", marks);
            assert_eq!(f.to_string(), marks);
        }
    }

    #[test]
    fn test_strike_opens_third_ball() {
        let f = frame("X");
        assert!(!f.is_complete());
        let f = frame("X4");
        assert!(!f.is_complete());
        let f = frame("4/");
        assert!(!f.is_complete());
    }

    #[test]
    fn test_spare_after_strike_fails() {
        let err = rejected("X", '/');
        assert_eq!(err, ScoreError::IllegalSpare(SpareViolation::AfterStrike));
        assert!(err.to_string().contains("spare after a strike"));
    }

    #[test]
    fn test_spare_after_second_strike_fails() {
        let err = rejected("XX", '/');
        assert!(err.to_string().contains("spare after a strike"));
    }

    #[test]
    fn test_spare_after_spare_fails() {
        let err = rejected("4/", '/');
        assert_eq!(err, ScoreError::IllegalSpare(SpareViolation::AfterSpare));
        assert!(err.to_string().contains("spare after a spare"));
    }

    #[test]
    fn test_strike_after_numeric_fails() {
        let err = rejected("4", 'X');
        assert_eq!(err, ScoreError::IllegalStrike);
        assert!(err.to_string().contains("Strike cannot follow"));
        assert_eq!(rejected("-", 'X'), ScoreError::IllegalStrike);
    }

    #[test]
    fn test_strike_after_strike_and_numeric_accepted() {
        let mut f = frame("X3X");
        assert!(f.is_complete());
        assert_eq!(f.to_string(), "X3X");
        assert_eq!(f.update_score(0, None, None), Some(23));

        let mut f = frame("X-X");
        assert_eq!(f.update_score(0, None, None), Some(20));
    }

    #[test]
    fn test_strike_num_num_above_ten_fails() {
        let err = rejected("X6", '6');
        assert_eq!(err, ScoreError::PinCountExceeded { first: 6, second: 6 });
        assert!(err.to_string().contains("exceed 10"));
    }

    #[test]
    fn test_strike_num_num_equal_ten_fails() {
        let err = rejected("X5", '5');
        assert!(err.to_string().contains("spare notation"));
    }

    #[test]
    fn test_first_pair_rules_apply() {
        assert_eq!(
            rejected("", '/'),
            ScoreError::IllegalSpare(SpareViolation::FirstRoll)
        );
        assert_eq!(rejected("7", '7'), ScoreError::PinCountExceeded { first: 7, second: 7 });
        assert_eq!(rejected("7", '3'), ScoreError::SpareNotationRequired);
    }

    #[test]
    fn test_scoring_num_num() {
        let mut f = frame("62");
        assert_eq!(f.score(), None);
        f.update_score(0, None, None);
        assert_eq!(f.score(), Some(8));
    }

    #[test]
    fn test_scoring_spare() {
        let mut f = frame("6/7");
        f.update_score(0, None, None);
        assert_eq!(f.score(), Some(17));

        let mut f = frame("X6/");
        f.update_score(0, None, None);
        assert_eq!(f.score(), Some(20));
    }

    #[test]
    fn test_scoring_strike() {
        let mut f = frame("XX4");
        f.update_score(0, None, None);
        assert_eq!(f.score(), Some(24));

        let mut f = frame("XXX");
        f.update_score(270, None, None);
        assert_eq!(f.score(), Some(300));
    }

    #[test]
    fn test_scoring_spare_strike() {
        let mut f = frame("3/X");
        assert_eq!(f.update_score(0, None, None), Some(20));
    }

    #[test]
    fn test_scoring_strike_gutter_spare() {
        let mut f = frame("X-/");
        assert_eq!(f.update_score(0, None, None), Some(20));
    }
}
