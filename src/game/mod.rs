//! Games and scoreboard snapshots.
//!
//! A [`Game`] holds players in turn order and routes rolls to them by
//! [`PlayerId`](crate::core::PlayerId). A [`ScoreboardSnapshot`] is the
//! read-only view handed to whatever draws the scoreboard.
//!
//! ## Example
//!
//! ```
//! use bowling_score::core::DisplayConfig;
//! use bowling_score::game::Game;
//! use bowling_score::scoring::Player;
//!
//! let mut game = Game::new();
//! let bob = game.add_player(Player::new("Bob")).unwrap();
//! let amy = game.add_player(Player::new("Amy")).unwrap();
//!
//! for frame in 0..10 {
//!     for id in [bob, amy] {
//!         while !game.record_char(id, frame, '-').unwrap().is_complete() {}
//!     }
//! }
//!
//! assert!(game.is_finished());
//! let board = game.snapshot(&DisplayConfig::default());
//! assert!(board.players.iter().all(|p| p.total == 0));
//! ```

mod snapshot;
mod state;

pub use snapshot::{FrameSnapshot, PlayerSnapshot, ScoreboardSnapshot};
pub use state::Game;
