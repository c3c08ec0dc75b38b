use serde::{Deserialize, Serialize};

/// A cell coordinate on the grid, 0-indexed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Check if two positions are adjacent (including diagonals)
    pub fn is_adjacent(&self, other: &Position) -> bool {
        let row_diff = (self.row as i32 - other.row as i32).abs();
        let col_diff = (self.col as i32 - other.col as i32).abs();

        row_diff <= 1 && col_diff <= 1 && (row_diff + col_diff > 0)
    }
}

/// How a word's letters advance across the grid
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Horizontal,
    Vertical,
    Diagonal,
    ReverseHorizontal,
}

impl Direction {
    /// Per-letter (row, col) offset when walking a word along this direction
    pub fn step(&self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::ReverseHorizontal => (0, -1),
        }
    }
}

/// One grid cell: a letter plus word-membership metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub letter: char,
    pub is_part_of_word: bool,
    /// Text of the word this cell belongs to; first placer wins on a crossing
    pub word_id: Option<String>,
}

pub type Grid = Vec<Vec<Cell>>;

/// A word as supplied by the host (sourced from a flashcard collection)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordEntry {
    pub text: String,
    pub definition: String,
}

/// An active target word in a running puzzle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    pub definition: String,
    pub found: bool,
}

/// Lifecycle of one puzzle instance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Idle,
    Playing,
    Complete,
}
