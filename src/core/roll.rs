//! Marks and rolls.
//!
//! A `Mark` is the symbol written on a score sheet for one ball: a digit,
//! `-` for a gutter, `/` for a spare or `X` for a strike. Parsing normalizes
//! the symbol so that `0` and `-` are the same mark, as are `x` and `X`.
//!
//! ```
//! use bowling_score::core::{Mark, Roll};
//!
//! let roll = Roll::parse('x').unwrap();
//! assert!(roll.is_strike());
//! assert_eq!(roll.to_string(), "X");
//!
//! assert_eq!(Mark::parse('0').unwrap(), Mark::Gutter);
//! assert!(Mark::parse('?').is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

/// Canonical strike symbol.
pub const STRIKE: char = 'X';
/// Spare symbol.
pub const SPARE: char = '/';
/// Gutter symbol.
pub const GUTTER: char = '-';

/// Pins standing at the start of a frame.
pub const PINS: u8 = 10;

/// The symbol recorded for a single ball.
///
/// Serialized as its symbol and deserialized through [`Mark::parse`], so a
/// stored mark is always in canonical form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum Mark {
    /// One to nine pins. Frames store zero as `Gutter`, see [`Mark::normalize`].
    Pins(u8),
    /// No pins knocked down.
    Gutter,
    /// The rest of the pins after the previous ball.
    Spare,
    /// All ten pins on one ball.
    Strike,
}

impl Mark {
    /// Check whether `c` is a recognized mark symbol.
    #[must_use]
    pub fn is_valid(c: char) -> bool {
        matches!(c, 'x' | 'X' | '/' | '-' | '0'..='9')
    }

    /// Parse and normalize a mark symbol.
    pub fn parse(c: char) -> Result<Self, ScoreError> {
        match c {
            'x' | 'X' => Ok(Mark::Strike),
            '/' => Ok(Mark::Spare),
            '-' | '0' => Ok(Mark::Gutter),
            '1'..='9' => Ok(Mark::Pins(c as u8 - b'0')),
            _ => Err(ScoreError::InvalidMark(c)),
        }
    }

    /// Build a mark from a pin count, as written after an ordinary ball.
    ///
    /// Returns `None` above nine; ten pins is a strike or a spare and
    /// depends on context.
    #[must_use]
    pub fn from_pins(pins: u8) -> Option<Self> {
        match pins {
            0 => Some(Mark::Gutter),
            1..=9 => Some(Mark::Pins(pins)),
            _ => None,
        }
    }

    /// Canonical form of a mark built in code.
    ///
    /// `Pins(0)` becomes `Gutter`; a pin count above nine is rejected.
    pub fn normalize(self) -> Result<Self, ScoreError> {
        match self {
            Mark::Pins(0) => Ok(Mark::Gutter),
            Mark::Pins(n) if n >= PINS => Err(ScoreError::InvalidPinCount(n)),
            mark => Ok(mark),
        }
    }

    /// Pin value of the mark: the digit, or 0 for strike, spare and gutter.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Mark::Pins(n) => n,
            Mark::Gutter | Mark::Spare | Mark::Strike => 0,
        }
    }

    /// Canonical symbol for this mark.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Mark::Pins(n) => match char::from_digit(n as u32, 10) {
                Some(c) => c,
                None => '?',
            },
            Mark::Gutter => GUTTER,
            Mark::Spare => SPARE,
            Mark::Strike => STRIKE,
        }
    }
}

impl TryFrom<char> for Mark {
    type Error = ScoreError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Mark::parse(c)
    }
}

impl From<Mark> for char {
    fn from(mark: Mark) -> Self {
        mark.symbol()
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One ball thrown.
///
/// A roll exists only once its mark is known and never changes afterwards.
/// An unthrown ball is the absence of a `Roll` in its frame slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roll {
    mark: Mark,
}

impl Roll {
    /// Create a roll from an already parsed mark.
    #[must_use]
    pub const fn new(mark: Mark) -> Self {
        Self { mark }
    }

    /// Parse a mark symbol into a roll.
    pub fn parse(c: char) -> Result<Self, ScoreError> {
        Mark::parse(c).map(Self::new)
    }

    /// The normalized mark.
    #[must_use]
    pub const fn mark(self) -> Mark {
        self.mark
    }

    /// Pin value: the digit, or 0 for strike, spare and gutter.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.mark.value()
    }

    #[must_use]
    pub const fn is_strike(self) -> bool {
        matches!(self.mark, Mark::Strike)
    }

    #[must_use]
    pub const fn is_spare(self) -> bool {
        matches!(self.mark, Mark::Spare)
    }

    #[must_use]
    pub const fn is_gutter(self) -> bool {
        matches!(self.mark, Mark::Gutter)
    }

    /// True for digits and gutters.
    #[must_use]
    pub const fn is_not_strike_nor_spare(self) -> bool {
        !self.is_strike() && !self.is_spare()
    }

    /// Pins this ball is worth as a bonus ball: a strike counts ten.
    ///
    /// Spares are resolved against the previous ball by the frame.
    #[must_use]
    pub(crate) const fn bonus_pins(self) -> u16 {
        if self.is_strike() {
            PINS as u16
        } else {
            self.value() as u16
        }
    }
}

impl From<Mark> for Roll {
    fn from(mark: Mark) -> Self {
        Self::new(mark)
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.mark, f)
    }
}
