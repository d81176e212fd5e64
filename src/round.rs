use std::time::{Duration, Instant};

use crate::diff::{compute_diff, DiffSegment};
use crate::difficulty::Difficulty;
use crate::metrics::RoundResult;

/// Everything the results screen needs from a finished round
#[derive(Debug, Clone, PartialEq)]
pub struct RoundReport {
    pub original: String,
    pub typed: String,
    pub result: RoundResult,
    pub diff: Vec<DiffSegment>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RoundOutcome {
    /// nothing but whitespace was submitted; no metrics
    Aborted,
    Completed(RoundReport),
}

/// Scores a submitted attempt. `typed` is trimmed first.
pub fn evaluate(
    original: &str,
    typed: &str,
    elapsed: Duration,
    difficulty: Difficulty,
) -> RoundOutcome {
    let typed = typed.trim();
    if typed.is_empty() {
        return RoundOutcome::Aborted;
    }

    RoundOutcome::Completed(RoundReport {
        original: original.to_string(),
        typed: typed.to_string(),
        result: RoundResult::compute(original, typed, elapsed, difficulty),
        diff: compute_diff(original, typed),
    })
}

/// represents an attempt being typed by the user
#[derive(Debug, Clone)]
pub struct Round {
    pub prompt: String,
    pub difficulty: Difficulty,
    pub input: String,
    pub started_at: Option<Instant>,
}

impl Round {
    pub fn new(prompt: String, difficulty: Difficulty) -> Self {
        Self {
            prompt,
            difficulty,
            input: String::new(),
            started_at: None,
        }
    }

    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn write(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn elapsed_at(&self, now: Instant) -> Duration {
        self.started_at
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or_default()
    }

    pub fn submit(&self) -> RoundOutcome {
        self.submit_at(Instant::now())
    }

    pub fn submit_at(&self, now: Instant) -> RoundOutcome {
        evaluate(
            &self.prompt,
            &self.input,
            self.elapsed_at(now),
            self.difficulty,
        )
    }
}
