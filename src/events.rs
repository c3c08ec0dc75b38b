use serde::{Deserialize, Serialize};

use crate::models::Position;

/// Events emitted to the host UI over a session's event channel
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineEvent {
    WordFound {
        word: String,
        points_awarded: u32,
        score: u32,
    },
    HintUsed {
        /// First cell of the revealed word, shown as a one-cell selection
        word_start: Position,
        remaining_score: u32,
        hints_used: u32,
    },
    Complete {
        score: u32,
        time_elapsed_seconds: u32,
        hints_used: u32,
    },
}
