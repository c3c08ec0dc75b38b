use serde::{Deserialize, Serialize};

use crate::models::Direction;

/// Preset difficulty tiers offered by the host UI
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Easy
    }
}

/// Parameters of one puzzle: grid side length, how many words the host
/// should pick, and the placement directions the generator may use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifficultySettings {
    pub grid_size: usize,
    /// Advisory for the host's word selection; the engine places whatever
    /// list it is handed
    pub word_count: usize,
    pub directions: Vec<Direction>,
}

impl Difficulty {
    pub fn settings(&self) -> DifficultySettings {
        match self {
            Difficulty::Easy => DifficultySettings {
                grid_size: 10,
                word_count: 6,
                directions: vec![Direction::Horizontal, Direction::Vertical],
            },
            Difficulty::Medium => DifficultySettings {
                grid_size: 12,
                word_count: 8,
                directions: vec![
                    Direction::Horizontal,
                    Direction::Vertical,
                    Direction::Diagonal,
                ],
            },
            Difficulty::Hard => DifficultySettings {
                grid_size: 15,
                word_count: 10,
                directions: vec![
                    Direction::Horizontal,
                    Direction::Vertical,
                    Direction::Diagonal,
                    Direction::ReverseHorizontal,
                ],
            },
        }
    }
}
