use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    io::{self, stdin},
    time::Duration,
};

use typemaster::{
    app::{App, Control, Settings},
    config::{Config, ConfigStore, FileConfigStore},
    difficulty::Difficulty,
    error::Result,
    logging,
    prompt::SentenceSource,
    runtime::{ChannelEventSource, Runner, SessionEvent},
};

const TICK_RATE_MS: u64 = 100;

/// type the sentence, then see your errors, speed, and score
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal typing drill: pick a difficulty, retype the sentence shown, and get your time, errors, words per minute, and a score with a character-level error analysis."
)]
pub struct Cli {
    /// difficulty to play; skips the difficulty menu
    #[clap(short = 'd', long, value_enum)]
    difficulty: Option<Difficulty>,

    /// where sentences come from: the fixed sets or the sentence generator
    #[clap(short = 's', long, value_enum)]
    source: Option<SentenceSource>,

    /// custom sentence to type
    #[clap(short = 'p', long)]
    prompt: Option<String>,

    /// seed for sentence selection, for reproducible sessions
    #[clap(long)]
    seed: Option<u64>,

    /// glyph marking characters the typed text never reached
    #[clap(long)]
    placeholder: Option<char>,

    /// store the effective difficulty, source, and placeholder as defaults
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// CLI flags override stored config
    fn to_settings(&self, cfg: &Config) -> Settings {
        let mut settings = Settings::from(cfg);
        if let Some(difficulty) = self.difficulty {
            settings.difficulty = Some(difficulty);
        }
        if let Some(source) = self.source {
            settings.prompt.source = source;
        }
        if let Some(placeholder) = self.placeholder {
            settings.placeholder = placeholder;
        }
        settings.prompt.custom_prompt = self.prompt.clone();
        settings
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    logging::init();

    let store = FileConfigStore::new();
    let settings = cli.to_settings(&store.load());
    if cli.save_config {
        match store.save(&Config::from(&settings)) {
            Ok(()) => println!("saved defaults to {}", store.path().display()),
            Err(err) => {
                tracing::warn!(path = %store.path().display(), %err, "could not save config")
            }
        }
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(settings, cli.rng());
    let res = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref err) = res {
        tracing::error!(%err, "session ended with an error");
    }
    res
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let runner = Runner::new(
        ChannelEventSource::terminal(),
        Duration::from_millis(TICK_RATE_MS),
    );

    terminal.draw(|f| f.render_widget(&*app, f.area()))?;

    loop {
        match runner.step() {
            SessionEvent::Tick => {}
            SessionEvent::Closed => {
                tracing::warn!("terminal input closed, ending session");
                break;
            }
            SessionEvent::Resize => {
                terminal.draw(|f| f.render_widget(&*app, f.area()))?;
            }
            SessionEvent::Key(key) => {
                if app.handle_key(key) == Control::Quit {
                    break;
                }
                terminal.draw(|f| f.render_widget(&*app, f.area()))?;
            }
        }
    }

    Ok(())
}
