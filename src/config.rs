use crate::calendar::DuplicatePolicy;
use crate::errors::SetupError;
use std::{env, path::PathBuf};

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub seed_path: Option<PathBuf>,
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            seed_path: None,
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, SetupError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SetupError> {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let seed_path = lookup("APP_SEED_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let duplicate_policy = match lookup("APP_DUPLICATE_POLICY") {
            Some(value) => value.parse()?,
            None => DuplicatePolicy::default(),
        };

        Ok(Self {
            port,
            seed_path,
            duplicate_policy,
        })
    }
}
