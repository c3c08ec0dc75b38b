use crate::{HINT_PENALTY, MIN_MATCH_POINTS, POINTS_PER_LETTER, TIME_BONUS_CEILING};

pub struct Scorer;

impl Scorer {
    /// Calculate the points awarded for a successful match.
    ///
    /// Scoring rules:
    /// - 10 points per letter
    /// - time bonus of `100 - elapsed seconds`, never negative
    /// - minus 20 per hint used so far (the running total, not per word)
    /// - never less than 10 points for a real match
    pub fn match_points(word_len: usize, elapsed_secs: u32, hints_used: u32) -> u32 {
        let base = word_len as i64 * POINTS_PER_LETTER as i64;
        let time_bonus = (TIME_BONUS_CEILING as i64 - elapsed_secs as i64).max(0);
        let hint_penalty = hints_used as i64 * HINT_PENALTY as i64;

        (base + time_bonus - hint_penalty).max(MIN_MATCH_POINTS as i64) as u32
    }
}
