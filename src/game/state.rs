use std::collections::{HashMap, HashSet};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game::generator::GeneratedPuzzle;
use crate::game::{Scorer, SelectionTracker, WordMatcher};
use crate::models::{GameStatus, Grid, Position, Word, WordEntry};
use crate::HINT_COST;

/// Outcome of resolving one finished gesture
#[derive(Debug, Clone, Default)]
pub struct MatchOutcome {
    pub matched: Option<MatchedWord>,
    /// True exactly once, on the match that found the last word
    pub completed: bool,
}

#[derive(Debug, Clone)]
pub struct MatchedWord {
    pub word: String,
    pub points_awarded: u32,
}

/// Outcome of a hint: which word was revealed and where it starts
#[derive(Debug, Clone)]
pub struct HintOutcome {
    pub word: String,
    pub position: Position,
    pub remaining_score: u32,
    pub hints_used: u32,
}

/// The whole state of one puzzle instance. All transitions are plain
/// methods returning outcomes; timers and event delivery live in the
/// session layer so this stays deterministic and directly testable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Grid,
    /// Placed words only; membership is fixed for the life of the puzzle
    pub words: Vec<Word>,
    pub word_positions: HashMap<String, Vec<Position>>,
    pub selection: SelectionTracker,
    pub found_words: HashSet<String>,
    pub score: u32,
    pub hints_used: u32,
    pub time_elapsed_secs: u32,
    pub status: GameStatus,
}

impl GameState {
    /// Build a fresh state from a generation run. Words the generator had to
    /// drop are excluded from the active list.
    pub fn new(entries: &[WordEntry], puzzle: GeneratedPuzzle) -> Self {
        let words = entries
            .iter()
            .map(|entry| Word {
                text: entry.text.to_uppercase(),
                definition: entry.definition.clone(),
                found: false,
            })
            .filter(|word| puzzle.positions.contains_key(&word.text))
            .collect();

        Self {
            grid: puzzle.grid,
            words,
            word_positions: puzzle.positions,
            selection: SelectionTracker::new(),
            found_words: HashSet::new(),
            score: 0,
            hints_used: 0,
            time_elapsed_secs: 0,
            status: GameStatus::Idle,
        }
    }

    pub fn start(&mut self) {
        if self.status == GameStatus::Idle {
            self.status = GameStatus::Playing;
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn pointer_down(&mut self, pos: Position) {
        if self.is_playing() {
            self.selection.begin(pos);
        }
    }

    pub fn pointer_move(&mut self, pos: Position) {
        if self.is_playing() {
            self.selection.extend(pos);
        }
    }

    /// Take the current gesture's path out of the tracker
    pub fn finish_selection(&mut self) -> Vec<Position> {
        self.selection.finish()
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Resolve a finished gesture. The selection is cleared whatever the
    /// outcome; every pointer-up consumes its gesture exactly once.
    pub fn apply_match(&mut self, path: &[Position]) -> MatchOutcome {
        self.selection.clear();
        if !self.is_playing() {
            return MatchOutcome::default();
        }

        let Some(index) = WordMatcher::check(&self.grid, &self.words, path) else {
            return MatchOutcome::default();
        };

        self.words[index].found = true;
        let text = self.words[index].text.clone();
        let points =
            Scorer::match_points(text.chars().count(), self.time_elapsed_secs, self.hints_used);
        self.score += points;
        self.found_words.insert(text.clone());

        let completed = self.found_words.len() == self.words.len();
        if completed {
            self.status = GameStatus::Complete;
        }

        MatchOutcome {
            matched: Some(MatchedWord {
                word: text,
                points_awarded: points,
            }),
            completed,
        }
    }

    /// Reveal the first cell of a uniformly random unfound word for a flat
    /// score cost. The revealed cell becomes a one-cell selection; the
    /// session layer schedules its clearing. No-op when nothing is unfound
    /// or the puzzle is not being played.
    pub fn apply_hint(&mut self, rng: &mut impl Rng) -> Option<HintOutcome> {
        if !self.is_playing() {
            return None;
        }

        let mut unfound: Vec<String> = self
            .words
            .iter()
            .filter(|word| !word.found)
            .map(|word| word.text.clone())
            .collect();
        if unfound.is_empty() {
            return None;
        }

        let word = unfound.swap_remove(rng.random_range(0..unfound.len()));
        let position = *self.word_positions.get(&word)?.first()?;

        self.selection.set(vec![position]);
        self.hints_used += 1;
        self.score = self.score.saturating_sub(HINT_COST);

        Some(HintOutcome {
            word,
            position,
            remaining_score: self.score,
            hints_used: self.hints_used,
        })
    }

    /// Advance the clock one second. Returns false once the clock should
    /// stop running.
    pub fn tick(&mut self) -> bool {
        if self.is_playing() {
            self.time_elapsed_secs += 1;
            true
        } else {
            false
        }
    }
}
