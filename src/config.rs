// src/config.rs

use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::debug;
use url::Url;

use crate::derive::DivisionPolicy;
use crate::error::{AcsError, Result};

pub const API_KEY_ENV: &str = "CENSUS_API_KEY";
pub const CACHE_DIR_ENV: &str = "ACSREPORT_CACHE_DIR";

/// Runtime settings. Every field has a default, so an empty YAML file (or no
/// file at all) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// ACS product, e.g. `acs5` or `acs1`.
    pub dataset: String,
    pub year: u16,
    pub api_base: String,
    pub api_key: Option<String>,
    /// Per-call timeout for the statistical service.
    pub timeout_secs: u64,
    /// Persist fetch results here as parquet; memory-only when unset.
    pub cache_dir: Option<PathBuf>,
    /// Coverage-rate sheet exported as CSV.
    pub coverage_path: Option<PathBuf>,
    pub division: DivisionPolicy,
    pub max_retries: u32,
    pub retry_backoff_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: "acs5".into(),
            year: 2019,
            api_base: "https://api.census.gov/data".into(),
            api_key: None,
            timeout_secs: 30,
            cache_dir: None,
            coverage_path: None,
            division: DivisionPolicy::default(),
            max_retries: 2,
            retry_backoff_ms: 500,
        }
    }
}

impl Config {
    /// Defaults, overlaid by the YAML file at `path` if given, overlaid by the
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(p) => {
                let text = fs::read_to_string(p)
                    .map_err(|e| AcsError::Config(format!("reading {}: {}", p.display(), e)))?;
                debug!(path = %p.display(), "loaded config file");
                Self::from_yaml(&text)?
            }
            None => Self::default(),
        };
        let config = config.with_overrides(
            env::var(API_KEY_ENV).ok().filter(|v| !v.is_empty()),
            env::var(CACHE_DIR_ENV).ok().filter(|v| !v.is_empty()).map(PathBuf::from),
        );
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn with_overrides(mut self, api_key: Option<String>, cache_dir: Option<PathBuf>) -> Self {
        if api_key.is_some() {
            self.api_key = api_key;
        }
        if cache_dir.is_some() {
            self.cache_dir = cache_dir;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.dataset.trim().is_empty() {
            return Err(AcsError::Config("dataset must not be empty".into()));
        }
        // first ACS 5-year release
        if self.year < 2009 {
            return Err(AcsError::Config(format!("no ACS data for {}", self.year)));
        }
        if self.timeout_secs == 0 {
            return Err(AcsError::Config("timeout_secs must be positive".into()));
        }
        Url::parse(&self.api_base)
            .map_err(|e| AcsError::Config(format!("api_base `{}`: {}", self.api_base, e)))?;
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }
}
