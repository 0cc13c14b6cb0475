//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `SKILLMATCH_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_EMBED_CACHE_CAPACITY, DEFAULT_RESULT_LIMIT};
use crate::encoding::EncoderConfig;

/// Engine configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SKILLMATCH_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to a skill vocabulary JSON file. `None` uses the builtin vocabulary.
    pub vocabulary_path: Option<PathBuf>,

    /// Directory holding the sentence encoder model (BERT weights + tokenizer).
    /// `None` runs the deterministic stub encoder.
    pub model_dir: Option<PathBuf>,

    /// Directory for persisted match sets. Default: `./.matches`.
    pub store_path: PathBuf,

    /// Max entries in the embedding cache. Default: `10_000`.
    pub embed_cache_capacity: u64,

    /// Result limit applied when a caller does not pass one. Default: `10`.
    pub default_limit: usize,
}

/// Store directory used when `SKILLMATCH_STORE_PATH` is not set.
pub const DEFAULT_STORE_PATH: &str = "./.matches";

impl Default for Config {
    fn default() -> Self {
        Self {
            vocabulary_path: None,
            model_dir: None,
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            embed_cache_capacity: DEFAULT_EMBED_CACHE_CAPACITY,
            default_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

impl Config {
    const ENV_VOCABULARY_PATH: &'static str = "SKILLMATCH_VOCABULARY_PATH";
    const ENV_MODEL_DIR: &'static str = "SKILLMATCH_MODEL_DIR";
    const ENV_STORE_PATH: &'static str = "SKILLMATCH_STORE_PATH";
    const ENV_EMBED_CACHE_CAPACITY: &'static str = "SKILLMATCH_EMBED_CACHE_CAPACITY";
    const ENV_DEFAULT_LIMIT: &'static str = "SKILLMATCH_DEFAULT_LIMIT";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let vocabulary_path = Self::parse_optional_path_from_env(Self::ENV_VOCABULARY_PATH);
        let model_dir = Self::parse_optional_path_from_env(Self::ENV_MODEL_DIR);
        let store_path = Self::parse_path_from_env(Self::ENV_STORE_PATH, defaults.store_path);
        let embed_cache_capacity = Self::parse_u64_from_env(
            Self::ENV_EMBED_CACHE_CAPACITY,
            defaults.embed_cache_capacity,
        );
        let default_limit = Self::parse_limit_from_env(defaults.default_limit)?;

        Ok(Self {
            vocabulary_path,
            model_dir,
            store_path,
            embed_cache_capacity,
            default_limit,
        })
    }

    /// Validates paths and basic invariants (does not create directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_limit == 0 {
            return Err(ConfigError::InvalidLimit {
                value: self.default_limit.to_string(),
            });
        }

        if self.store_path.exists() && !self.store_path.is_dir() {
            return Err(ConfigError::NotADirectory {
                path: self.store_path.clone(),
            });
        }

        if let Some(ref path) = self.vocabulary_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        if let Some(ref path) = self.model_dir {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Builds the encoder configuration these settings describe.
    pub fn encoder_config(&self) -> EncoderConfig {
        let base = match &self.model_dir {
            Some(dir) => EncoderConfig::new(dir),
            None => EncoderConfig::stub(),
        };
        base.with_cache_capacity(self.embed_cache_capacity)
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    fn parse_limit_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_DEFAULT_LIMIT) {
            Ok(value) => {
                let limit: usize = value.parse().map_err(|e| ConfigError::LimitParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if limit == 0 {
                    return Err(ConfigError::InvalidLimit { value });
                }

                Ok(limit)
            }
            Err(_) => Ok(default),
        }
    }
}
