// Library surface for the binary and for headless/integration tests.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod diff;
pub mod difficulty;
pub mod error;
pub mod generator;
pub mod logging;
pub mod metrics;
pub mod prompt;
pub mod round;
pub mod runtime;
pub mod sentences;
pub mod ui;

pub use app::{App, AppState, Control, Settings};
pub use diff::{compute_diff, DiffSegment};
pub use difficulty::Difficulty;
pub use metrics::{count_errors, score, words_per_minute, RoundResult};
pub use round::{evaluate, RoundOutcome, RoundReport};
