use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;

use crate::{
    config::{Config, DEFAULT_PLACEHOLDER},
    difficulty::Difficulty,
    prompt::{PromptBuilder, PromptConfig},
    round::{Round, RoundOutcome},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// waiting for a difficulty key
    Menu,
    /// sentence shown, timer not running yet
    Preview,
    Typing,
    /// results or the empty-input notice, plus the play-again prompt
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Effective settings for a session after merging config and CLI flags
#[derive(Debug, Clone)]
pub struct Settings {
    pub difficulty: Option<Difficulty>,
    pub prompt: PromptConfig,
    pub placeholder: char,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: None,
            prompt: PromptConfig::default(),
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }
}

impl From<&Config> for Settings {
    fn from(cfg: &Config) -> Self {
        Self {
            difficulty: cfg.difficulty,
            prompt: PromptConfig {
                source: cfg.sentence_source,
                custom_prompt: None,
            },
            placeholder: cfg.placeholder,
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub settings: Settings,
    pub state: AppState,
    pub round: Option<Round>,
    pub outcome: Option<RoundOutcome>,
    prompts: PromptBuilder,
    rng: StdRng,
}

impl App {
    pub fn new(settings: Settings, rng: StdRng) -> Self {
        let prompts = PromptBuilder::new(settings.prompt.clone());
        let mut app = Self {
            settings,
            state: AppState::Menu,
            round: None,
            outcome: None,
            prompts,
            rng,
        };
        if let Some(difficulty) = app.settings.difficulty {
            app.begin_round(difficulty);
        }
        app
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.round.as_ref().map(|r| r.difficulty)
    }

    /// Draw a fresh sentence and show it
    pub fn begin_round(&mut self, difficulty: Difficulty) {
        let prompt = self.prompts.generate_prompt(difficulty, &mut self.rng);
        tracing::debug!(%difficulty, source = ?self.prompts.source(), %prompt, "sentence drawn");
        self.show(Round::new(prompt, difficulty));
    }

    /// Same sentence again with a clean slate
    pub fn retry(&mut self) {
        if let Some(round) = self.round.take() {
            self.show(Round::new(round.prompt, round.difficulty));
        }
    }

    fn show(&mut self, round: Round) {
        self.round = Some(round);
        self.outcome = None;
        self.state = AppState::Preview;
    }

    pub fn play_again(&mut self) {
        match self.settings.difficulty {
            Some(difficulty) => self.begin_round(difficulty),
            None => {
                self.round = None;
                self.outcome = None;
                self.state = AppState::Menu;
            }
        }
    }

    pub fn submit(&mut self) {
        let Some(round) = self.round.as_ref() else {
            return;
        };
        let outcome = round.submit();
        match &outcome {
            RoundOutcome::Aborted => tracing::info!("round aborted: nothing typed"),
            RoundOutcome::Completed(report) => tracing::info!(
                difficulty = %round.difficulty,
                errors = report.result.error_count,
                elapsed_secs = report.result.elapsed_secs,
                wpm = report.result.wpm,
                score = report.result.score,
                "round completed"
            ),
        }
        self.outcome = Some(outcome);
        self.state = AppState::Summary;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Control::Quit;
        }
        // AltGr arrives as ctrl+alt on windows and still types a char
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT)
        {
            return Control::Continue;
        }

        if key.code == KeyCode::Esc {
            return Control::Quit;
        }

        match self.state {
            AppState::Menu => {
                if let KeyCode::Char(c) = key.code {
                    if let Some(difficulty) = Difficulty::from_menu_key(c) {
                        self.begin_round(difficulty);
                    }
                }
            }
            AppState::Preview => {
                if let Some(round) = self.round.as_mut() {
                    round.start();
                    self.state = AppState::Typing;
                }
            }
            AppState::Typing => match key.code {
                KeyCode::Enter => self.submit(),
                KeyCode::Backspace => {
                    if let Some(round) = self.round.as_mut() {
                        round.backspace();
                    }
                }
                KeyCode::Char(c) => {
                    if let Some(round) = self.round.as_mut() {
                        round.write(c);
                    }
                }
                _ => {}
            },
            AppState::Summary => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => self.play_again(),
                KeyCode::Char('r') | KeyCode::Left => self.retry(),
                KeyCode::Char('n') | KeyCode::Char('N') => return Control::Quit,
                _ => {}
            },
        }

        Control::Continue
    }
}
