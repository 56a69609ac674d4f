//! Settings file loading: where the database lives.
//!
//! Lookup order:
//! 1. an explicit path (the `--config` flag)
//! 2. `$RODADA_CONFIG`
//! 3. `~/.config/rodada/config.toml` (platform config dir)
//!
//! An explicit or env path must exist; a missing default file means default settings.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_ENV: &str = "RODADA_CONFIG";
pub const DATABASE: &str = "rodada.db";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse settings {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// SQLite database file. Defaults to [`default_database_path`].
    #[serde(default)]
    pub database: Option<PathBuf>,
}

impl Settings {
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if let Some(path) = env::var_os(CONFIG_ENV) {
            return Self::from_file(Path::new(&path));
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings = toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn database_path(&self) -> PathBuf {
        self.database.clone().unwrap_or_else(default_database_path)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rodada").join("config.toml"))
}

/// `<data dir>/rodada/rodada.db`, or `./rodada.db` when the platform has no data dir
pub fn default_database_path() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("rodada").join(DATABASE),
        None => PathBuf::from(DATABASE),
    }
}
