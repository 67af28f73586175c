use super::keymap::KeyConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_DIR: &str = "passview";
const DEFAULT_PROGRAM: &str = "pass";
const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// `~/.config/passview/config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub store_dir: Option<PathBuf>,
    pub program: Option<String>,
    pub debounce_ms: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub keys: KeyConfig,
}

impl Config {
    pub fn load() -> Self {
        match get_config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Config>(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "malformed config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable config, using defaults");
                Self::default()
            }
        }
    }

    pub fn program(&self) -> &str {
        self.program.as_deref().unwrap_or(DEFAULT_PROGRAM)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS))
    }

    /// `PASSWORD_STORE_DIR` wins over the config file, then `~/.password-store`.
    pub fn store_dir(&self) -> PathBuf {
        resolve_store_dir(
            std::env::var_os("PASSWORD_STORE_DIR").map(PathBuf::from),
            self.store_dir.clone(),
            home::home_dir(),
        )
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| config_dir().map(|dir| dir.join("passview.log")))
    }
}

fn resolve_store_dir(
    env: Option<PathBuf>,
    configured: Option<PathBuf>,
    home: Option<PathBuf>,
) -> PathBuf {
    env.filter(|p| !p.as_os_str().is_empty())
        .or(configured)
        .unwrap_or_else(|| {
            home.unwrap_or_else(|| PathBuf::from("."))
                .join(".password-store")
        })
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push(APP_DIR);
        path
    })
}

pub fn get_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
