use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{app::Settings, app_dirs::AppDirs, difficulty::Difficulty, prompt::SentenceSource};

pub const DEFAULT_PLACEHOLDER: char = '_';

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// skips the difficulty menu when set
    pub difficulty: Option<Difficulty>,
    pub sentence_source: SentenceSource,
    /// glyph shown for characters the typed text never reached
    pub placeholder: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: None,
            sentence_source: SentenceSource::Pool,
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }
}

impl From<&Settings> for Config {
    fn from(s: &Settings) -> Self {
        Self {
            difficulty: s.difficulty,
            sentence_source: s.prompt.source,
            placeholder: s.placeholder,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> crate::error::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        let path = AppDirs::config_path().unwrap_or_else(|| PathBuf::from("typemaster_config.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let Ok(bytes) = fs::read(&self.path) else {
            return Config::default();
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "ignoring unreadable config");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> crate::error::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)?;
        tracing::info!(path = %self.path.display(), "config saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn roundtrip_default_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config::default();
        store.save(&cfg).unwrap();
        let loaded = store.load();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config {
            difficulty: Some(Difficulty::Hard),
            sentence_source: SentenceSource::Generated,
            placeholder: '·',
        };
        store.save(&cfg).unwrap();
        assert_eq!(store.path(), path);
        assert!(store.path().exists());
        assert_eq!(store.load(), cfg);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("absent.json"));
        assert_eq!(store.load(), Config::default());
    }

    #[test]
    fn corrupt_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, b"{ not json").unwrap();
        assert_eq!(FileConfigStore::with_path(&path).load(), Config::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, br#"{ "difficulty": "medium" }"#).unwrap();
        let cfg = FileConfigStore::with_path(&path).load();
        assert_eq!(cfg.difficulty, Some(Difficulty::Medium));
        assert_eq!(cfg.sentence_source, SentenceSource::Pool);
        assert_eq!(cfg.placeholder, DEFAULT_PLACEHOLDER);
    }
}
