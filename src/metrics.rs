use std::time::Duration;

use crate::difficulty::Difficulty;

pub const ERROR_PENALTY: f64 = 5.0;
const SPEED_BONUS_SECS: f64 = 50.0;
const SPEED_BONUS_FACTOR: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundResult {
    pub error_count: usize,
    pub elapsed_secs: f64,
    pub wpm: f64,
    pub score: i64,
}

impl RoundResult {
    pub fn compute(original: &str, typed: &str, elapsed: Duration, difficulty: Difficulty) -> Self {
        let error_count = count_errors(original, typed);
        let elapsed_secs = elapsed.as_secs_f64();
        Self {
            error_count,
            elapsed_secs,
            wpm: words_per_minute(original, elapsed_secs / 60.0),
            score: score(difficulty, error_count, elapsed_secs),
        }
    }
}

/// Positional mismatches over the shared prefix plus the length difference.
///
/// Independent of the diff scan: there is no resynchronization here, so an
/// inserted or dropped character counts against every position after it.
pub fn count_errors(original: &str, typed: &str) -> usize {
    let original_len = original.chars().count();
    let typed_len = typed.chars().count();

    let mismatches = original
        .chars()
        .zip(typed.chars())
        .filter(|(o, t)| o != t)
        .count();

    mismatches + original_len.abs_diff(typed_len)
}

/// Words of the original sentence per elapsed minute; zero for a
/// non-positive timer.
pub fn words_per_minute(original: &str, elapsed_minutes: f64) -> f64 {
    if elapsed_minutes.is_nan() || elapsed_minutes <= 0.0 {
        return 0.0;
    }
    original.split_whitespace().count() as f64 / elapsed_minutes
}

pub fn score(difficulty: Difficulty, error_count: usize, elapsed_secs: f64) -> i64 {
    let speed_bonus = if elapsed_secs > 0.0 {
        (SPEED_BONUS_SECS / elapsed_secs) * SPEED_BONUS_FACTOR
    } else {
        0.0
    };

    // `as` truncates toward zero
    (difficulty.base_score() as f64 - error_count as f64 * ERROR_PENALTY + speed_bonus) as i64
}
