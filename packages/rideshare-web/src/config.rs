use std::rc::Rc;
use std::str::FromStr;

use dioxus_history::{History, MemoryHistory};
use serde::Deserialize;
use tracing::Level;

use crate::error::ConfigError;
use crate::table::resolve;

/// The config bundled into the binary at compile time.
const BUNDLED_CONFIG: &str = include_str!("../Rideshare.toml");

/// How the router keeps track of the current location.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum HistoryMode {
    /// Use the platform's history. On the web this is the browser history with clean urls.
    #[default]
    Browser,

    /// Keep navigation in memory, starting at `initial_path`.
    Memory {
        #[serde(default = "default_initial_path")]
        initial_path: String,
    },
}

impl HistoryMode {
    /// An in-memory history starting at `initial_path`.
    pub fn memory(initial_path: impl Into<String>) -> Self {
        Self::Memory {
            initial_path: initial_path.into(),
        }
    }
}

fn default_initial_path() -> String {
    "/".to_string()
}

/// Application configuration, injected into the root component's context at launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: Level,
    /// Prefix every route is served under, e.g. `/app`. Only applied to the memory history.
    pub base_path: Option<String>,
    pub history: HistoryMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            base_path: None,
            history: HistoryMode::Browser,
        }
    }
}

/// The on-disk shape of [`AppConfig`].
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    log_level: Option<String>,
    base_path: Option<String>,
    history: HistoryMode,
}

impl AppConfig {
    /// Load the config bundled with the application.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_toml(BUNDLED_CONFIG)
    }

    /// Parse a config from TOML. Missing keys take their default values.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(source)?;

        let log_level = match file.log_level {
            Some(level) => {
                Level::from_str(&level).map_err(|_| ConfigError::InvalidLogLevel(level))?
            }
            None => Level::INFO,
        };

        Self::default()
            .with_log_level(log_level)
            .with_history(file.history)
            .with_base_path(file.base_path.unwrap_or_default())
            .checked()
    }

    pub fn with_log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }

    /// Set the prefix routes are served under. An empty prefix or `/` clears it.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        let base_path = base_path.into();
        let trimmed = base_path.trim_matches('/');
        self.base_path = match trimmed.is_empty() {
            true => None,
            false => Some(format!("/{trimmed}")),
        };
        self
    }

    pub fn with_history(mut self, history: HistoryMode) -> Self {
        self.history = history;
        self
    }

    /// Make sure every setting takes effect: a memory history starts on a route that exists, and
    /// a base path is only given where a history will apply it.
    fn checked(self) -> Result<Self, ConfigError> {
        match &self.history {
            HistoryMode::Memory { initial_path } => {
                resolve(initial_path).map_err(|source| ConfigError::InvalidInitialPath {
                    path: initial_path.clone(),
                    source,
                })?;
            }
            HistoryMode::Browser => {
                if let Some(base_path) = &self.base_path {
                    return Err(ConfigError::BasePathRequiresMemoryHistory(base_path.clone()));
                }
            }
        }
        Ok(self)
    }

    /// The history the root component should provide, or `None` to keep the platform's own.
    pub(crate) fn history_provider(&self) -> Option<Rc<dyn History>> {
        match &self.history {
            HistoryMode::Browser => None,
            HistoryMode::Memory { initial_path } => {
                let mut history = MemoryHistory::with_initial_path(initial_path);
                if let Some(prefix) = &self.base_path {
                    history = history.with_prefix(prefix);
                }
                Some(Rc::new(history))
            }
        }
    }
}
