use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced to the host. Everything inside a running puzzle degrades
/// gracefully instead of erroring; these only cover session bookkeeping and
/// generation runs that produced nothing playable.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no session with id {0}")]
    SessionNotFound(Uuid),

    #[error("word list is empty")]
    EmptyWordList,

    #[error("none of the requested words could be placed on the grid")]
    NoWordsPlaced,
}
