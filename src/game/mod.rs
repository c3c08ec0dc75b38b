// Word-search engine modules

pub mod generator;
pub mod matcher;
pub mod scorer;
pub mod selection;
pub mod state;

pub use generator::{GeneratedPuzzle, GridGenerator};
pub use matcher::WordMatcher;
pub use scorer::Scorer;
pub use selection::SelectionTracker;
pub use state::{GameState, HintOutcome, MatchOutcome};
