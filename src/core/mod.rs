//! Core types: marks, rolls, player ids and configuration.
//!
//! These are the leaves of the engine. Frames, players and games are built
//! from them but nothing here knows about frames.

pub mod config;
pub mod player;
pub mod roll;

pub use config::{DisplayConfig, GameConfig};
pub use player::PlayerId;
pub use roll::{Mark, Roll, GUTTER, PINS, SPARE, STRIKE};
