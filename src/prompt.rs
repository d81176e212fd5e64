use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{difficulty::Difficulty, generator::SentenceGenerator, sentences};

/// Where round sentences come from
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SentenceSource {
    /// fixed sentences for the chosen difficulty
    #[default]
    Pool,
    /// sentences built by the template generator
    Generated,
}

/// Configuration for prompt selection
#[derive(Debug, Clone, Default)]
pub struct PromptConfig {
    pub source: SentenceSource,
    pub custom_prompt: Option<String>,
}

/// Handles picking the sentence for each round
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    config: PromptConfig,
    generator: SentenceGenerator,
}

impl PromptBuilder {
    pub fn new(config: PromptConfig) -> Self {
        Self {
            config,
            generator: SentenceGenerator::default(),
        }
    }

    pub fn source(&self) -> SentenceSource {
        self.config.source
    }

    /// Custom prompt first, then the configured source
    pub fn generate_prompt<R: Rng + ?Sized>(&self, difficulty: Difficulty, rng: &mut R) -> String {
        if let Some(ref custom_prompt) = self.config.custom_prompt {
            return custom_prompt.clone();
        }

        match self.config.source {
            SentenceSource::Pool => sentences::pick(difficulty, rng).to_string(),
            SentenceSource::Generated => self.generator.generate(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_custom_prompt() {
        let builder = PromptBuilder::new(PromptConfig {
            source: SentenceSource::Generated,
            custom_prompt: Some("custom test prompt".to_string()),
        });
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(
            builder.generate_prompt(Difficulty::Hard, &mut rng),
            "custom test prompt"
        );
    }

    #[test]
    fn test_pool_source_respects_difficulty() {
        let builder = PromptBuilder::default();
        let mut rng = StdRng::seed_from_u64(8);

        for difficulty in Difficulty::ALL {
            let prompt = builder.generate_prompt(difficulty, &mut rng);
            assert!(sentences::pool(difficulty).contains(&prompt.as_str()));
        }
    }

    #[test]
    fn test_generated_source() {
        let builder = PromptBuilder::new(PromptConfig {
            source: SentenceSource::Generated,
            custom_prompt: None,
        });
        let mut rng = StdRng::seed_from_u64(8);

        let prompt = builder.generate_prompt(Difficulty::Easy, &mut rng);
        assert!(prompt.ends_with('.'));
        assert!(!sentences::pool(Difficulty::Easy).contains(&prompt.as_str()));
    }
}
