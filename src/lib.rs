//! # bowling-score
//!
//! A ten-pin bowling scoring engine.
//!
//! ## Design Principles
//!
//! 1. **Rules at the frame**: Every mark is validated by the frame it lands
//!    in. A rejected mark leaves all state exactly as it was.
//!
//! 2. **Explicit deferral**: Strikes and spares are scored once their bonus
//!    balls are known. The frames waiting on each future frame are kept in
//!    an inspectable index rather than callbacks.
//!
//! 3. **No presentation in the core**: Rendering and input loops sit outside
//!    the crate. They read state or a serializable snapshot and submit marks.
//!
//! ## Modules
//!
//! - `core`: Marks, rolls, player ids, configuration
//! - `frames`: Regular and tenth frame rules and local scoring
//! - `scoring`: Players and the deferred resolution protocol
//! - `game`: Turn order, roll routing and scoreboard snapshots
//! - `error`: The `ScoreError` taxonomy
//!
//! ## Example
//!
//! ```
//! use bowling_score::{Game, Player};
//!
//! let mut game = Game::new();
//! let id = game.add_player(Player::new("Bob")).unwrap();
//!
//! game.record_char(id, 0, '6').unwrap();
//! game.record_char(id, 0, '/').unwrap();
//! game.record_char(id, 1, '1').unwrap();
//! game.record_char(id, 1, '-').unwrap();
//!
//! let bob = game.player(id).unwrap();
//! assert_eq!(bob.frames()[0].score(), Some(11));
//! assert_eq!(bob.total_score(), 12);
//! ```

pub mod core;
pub mod error;
pub mod frames;
pub mod game;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{DisplayConfig, GameConfig, Mark, PlayerId, Roll};
pub use crate::error::{ScoreError, SpareViolation};
pub use crate::frames::{Frame, FrameKind, FRAME_COUNT, TENTH_FRAME};
pub use crate::game::{FrameSnapshot, Game, PlayerSnapshot, ScoreboardSnapshot};
pub use crate::scoring::{FrameStatus, PendingResolutions, Player};
