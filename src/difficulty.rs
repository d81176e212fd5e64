use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Difficulty tier picked once per round
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Points a round starts from before penalties and the speed bonus
    pub fn base_score(&self) -> i64 {
        match self {
            Difficulty::Easy => 100,
            Difficulty::Medium => 200,
            Difficulty::Hard => 350,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Difficulty::Easy => "short sentences",
            Difficulty::Medium => "technical terms",
            Difficulty::Hard => "complex sentences",
        }
    }

    pub fn menu_key(&self) -> char {
        match self {
            Difficulty::Easy => '1',
            Difficulty::Medium => '2',
            Difficulty::Hard => '3',
        }
    }

    pub fn from_menu_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.menu_key() == key)
    }
}
