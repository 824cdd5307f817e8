//! Rules for frames one to nine.

use crate::core::{Roll, PINS};
use crate::error::ScoreError;

use super::{check_first_roll, check_pair, Frame};

/// A first-ball strike ends the frame.
pub(super) fn closes_early(rolls: &[Roll]) -> bool {
    rolls.first().is_some_and(|first| first.is_strike())
}

/// Checks `roll` against the balls already in an incomplete frame.
pub(super) fn validate(rolls: &[Roll], roll: Roll) -> Result<(), ScoreError> {
    match rolls {
        [] => check_first_roll(roll),
        // A second-ball `X` passes: it carries no pins of its own.
        [first] => check_pair(*first, roll),
        _ => Err(ScoreError::FrameComplete),
    }
}

/// Points earned by a complete frame, or `None` while a bonus is unknown.
pub(super) fn frame_total(
    rolls: &[Roll],
    next: Option<&Frame>,
    next_next: Option<&Frame>,
) -> Option<u16> {
    match rolls {
        [first] if first.is_strike() => strike_bonus(next, next_next).map(|b| PINS as u16 + b),
        [_, second] if second.is_spare() => spare_bonus(next).map(|b| PINS as u16 + b),
        [first, second] => Some(first.value() as u16 + second.value() as u16),
        _ => None,
    }
}

/// The next two balls, which may span two frames after a double.
fn strike_bonus(next: Option<&Frame>, next_next: Option<&Frame>) -> Option<u16> {
    let next = next.filter(|f| f.is_complete())?;
    let first = next.roll1()?;

    match next.roll2() {
        // Both balls together cleared the deck.
        Some(second) if second.is_spare() => Some(PINS as u16),
        // A second-ball strike is a fresh rack only after a first-ball strike.
        Some(second) if first.is_strike() => Some(first.bonus_pins() + second.bonus_pins()),
        Some(second) => Some(first.bonus_pins() + second.value() as u16),
        None => {
            let after = next_next.filter(|f| f.is_complete())?;
            Some(first.bonus_pins() + after.roll1()?.bonus_pins())
        }
    }
}

fn spare_bonus(next: Option<&Frame>) -> Option<u16> {
    let next = next.filter(|f| f.is_complete())?;
    next.roll1().map(Roll::bonus_pins)
}
