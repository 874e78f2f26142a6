use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub const DEFAULT_STORAGE_KEY: &str = "clockState";
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Persistence medium for the clock record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Json,
    Sqlite,
}

impl Backend {
    pub fn file_extension(&self) -> &'static str {
        match self {
            Backend::Json => "json",
            Backend::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Backend::Json => "json",
            Backend::Sqlite => "sqlite",
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage file; `None` means the default file inside the config dir.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    pub backend: Backend,
    pub storage_key: String,
    /// chrono format used when a timestamp is shown to the user.
    pub time_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: None,
            backend: Backend::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rclockin")
        } else {
            let home = dirs::home_dir()
                .or_else(|| env::var("HOME").ok().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".rclockin")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rclockin.conf")
    }

    /// Default storage file for a backend
    pub fn default_storage_file(backend: Backend) -> PathBuf {
        Self::config_dir().join(format!("rclockin.{}", backend.file_extension()))
    }

    /// Effective storage path: the configured one (with `~/` expanded) or
    /// the backend default.
    pub fn storage_path(&self) -> PathBuf {
        match &self.storage {
            Some(p) => expand_tilde(p),
            None => Self::default_storage_file(self.backend),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.storage_key.trim().is_empty() {
            return Err(AppError::Config("storage_key must not be empty".into()));
        }
        if self.time_format.trim().is_empty() {
            return Err(AppError::Config("time_format must not be empty".into()));
        }
        Ok(())
    }

    /// Write this configuration to the config file, creating its directory.
    pub fn save(&self) -> AppResult<PathBuf> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)?;
        let path = Self::config_file();
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(path)
    }
}
