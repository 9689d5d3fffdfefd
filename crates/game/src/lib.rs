//! # Guess Game
//!
//! Session layer around the hint engine: picks the winning number, owns the
//! hint pool for the game's lifetime and keeps the guess count.
//!
//! ```rust
//! use guess_game::{Game, GuessOutcome};
//!
//! let mut game = Game::start(36, 7).unwrap();
//! match game.submit_guess(20).unwrap() {
//!     GuessOutcome::Wrong { remaining, .. } => assert_eq!(remaining, 9),
//!     other => panic!("{other:?}"),
//! }
//! assert_eq!(game.given_hints().len(), 1);
//! ```

mod config;
mod error;
mod game;

pub use config::GameConfig;
pub use error::{GameError, Result};
pub use game::{Game, GuessOutcome, HintResponse};
pub use guess_hints::{Direction, Feedback};
