pub mod config;
pub mod error;
pub mod events;
pub mod game;
pub mod models;
pub mod session;

use std::time::Duration;

/// Placement attempts per word before it is dropped from the puzzle
pub const PLACEMENT_ATTEMPTS: usize = 100;
/// Points awarded per letter of a matched word
pub const POINTS_PER_LETTER: u32 = 10;
/// The time bonus starts here and decays one point per elapsed second
pub const TIME_BONUS_CEILING: u32 = 100;
/// Deduction from match points per hint used so far (total, not per word)
pub const HINT_PENALTY: u32 = 20;
/// Floor for the points awarded on any successful match
pub const MIN_MATCH_POINTS: u32 = 10;
/// Flat score cost of taking a hint
pub const HINT_COST: u32 = 20;
/// How long a hint keeps the revealed cell selected before clearing itself
pub const HINT_REVEAL_DURATION: Duration = Duration::from_secs(2);
/// Interval of the elapsed-time clock while a puzzle is being played
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

pub use config::{Difficulty, DifficultySettings};
pub use error::EngineError;
pub use events::EngineEvent;
pub use session::{PuzzleSession, SessionRegistry};
