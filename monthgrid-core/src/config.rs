//! Global monthgrid configuration.

use std::path::{Path, PathBuf};

use chrono::NaiveTime;
use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{MonthGridError, MonthGridResult};
use crate::event::{EventColor, parse_time};
use crate::storage::FileStorage;
use crate::store::{DEFAULT_SLOT, EventStore};

static DEFAULT_DATA_PATH: &str = "~/.local/share/monthgrid";
static DEFAULT_START: &str = "09:00";
static DEFAULT_END: &str = "10:00";

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}

fn default_start() -> String {
    DEFAULT_START.to_string()
}

fn default_end() -> String {
    DEFAULT_END.to_string()
}

fn default_color() -> Option<EventColor> {
    Some(EventColor::Work)
}

/// Global configuration at ~/.config/monthgrid/config.toml
///
/// Every key can also be set through a `MONTHGRID_` prefixed environment
/// variable, e.g. `MONTHGRID_DATA_DIR`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MonthGridConfig {
    #[serde(default = "default_data_path")]
    pub data_dir: PathBuf,

    /// Name of the storage slot holding the event list.
    #[serde(default = "default_slot")]
    pub storage_slot: String,

    #[serde(default = "default_start")]
    pub default_start: String,

    #[serde(default = "default_end")]
    pub default_end: String,

    #[serde(default = "default_color")]
    pub default_color: Option<EventColor>,
}

impl Default for MonthGridConfig {
    fn default() -> Self {
        MonthGridConfig {
            data_dir: default_data_path(),
            storage_slot: default_slot(),
            default_start: default_start(),
            default_end: default_end(),
            default_color: default_color(),
        }
    }
}

impl MonthGridConfig {
    pub fn config_path() -> MonthGridResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| MonthGridError::Config("Could not determine config directory".into()))?
            .join("monthgrid");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, creating a commented-out config file
    /// on first run.
    pub fn load() -> MonthGridResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path` (missing file allowed) layered with environment
    /// overrides.
    pub fn load_from(path: &Path) -> MonthGridResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("MONTHGRID"))
            .build()
            .map_err(|e| MonthGridError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| MonthGridError::Config(e.to_string()))
    }

    /// Directory holding the storage slots, with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Default start and end time for new events.
    pub fn default_times(&self) -> MonthGridResult<(NaiveTime, NaiveTime)> {
        let start = parse_time(&self.default_start)
            .map_err(|e| MonthGridError::Config(format!("default_start: {e}")))?;
        let end = parse_time(&self.default_end)
            .map_err(|e| MonthGridError::Config(format!("default_end: {e}")))?;
        Ok((start, end))
    }

    /// The event store described by this config.
    pub fn event_store(&self) -> EventStore<FileStorage> {
        EventStore::with_slot(FileStorage::new(self.data_path()), self.storage_slot.clone())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> MonthGridResult<()> {
        let contents = format!(
            "\
# monthgrid configuration

# Where events are stored:
# data_dir = \"{}\"

# Storage slot (file name without .json) holding the event list:
# storage_slot = \"{}\"

# Defaults for new events:
# default_start = \"{}\"
# default_end = \"{}\"
# default_color = \"work\"
",
            DEFAULT_DATA_PATH, DEFAULT_SLOT, DEFAULT_START, DEFAULT_END
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                MonthGridError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| MonthGridError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
