//! Per-player scoring with deferred strike and spare resolution.
//!
//! ## Key Components
//!
//! - [`Player`]: ten frames, the cumulative score and the roll entry point
//! - [`PendingResolutions`]: which earlier frames each frame's completion unlocks
//! - [`FrameStatus`]: whether a frame needs more balls after a roll
//!
//! ## Resolution Protocol
//!
//! When a frame completes, the player first resolves every frame registered
//! against it, in registration order, advancing the cumulative score as each
//! one resolves. The cumulative score is then carried over from the previous
//! frame. Finally the new frame is scored immediately (open frames and the
//! tenth) or registered against the frames that hold its bonus balls.

mod pending;
mod player;

pub use pending::{PendingResolutions, Waiting};
pub use player::{FrameStatus, Player};
