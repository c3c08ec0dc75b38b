use crate::models::{Grid, Position, Word};

pub struct WordMatcher;

impl WordMatcher {
    /// Resolve a finished selection against the target words. Returns the
    /// index of the first unfound word whose text equals the selected
    /// letters read forward or backward; exact full-length matches only.
    pub fn check(grid: &Grid, words: &[Word], path: &[Position]) -> Option<usize> {
        if path.is_empty() {
            return None;
        }

        let forward = Self::extract_word(grid, path);
        let backward: String = forward.chars().rev().collect();

        words
            .iter()
            .position(|word| !word.found && (word.text == forward || word.text == backward))
    }

    /// Concatenate the letters at each path cell, in order
    pub fn extract_word(grid: &Grid, path: &[Position]) -> String {
        path.iter().map(|pos| grid[pos.row][pos.col].letter).collect()
    }
}
