//! Runtime configuration, loaded from environment variables.

/// Environment variable holding the store actor's channel capacity.
pub const STORE_BUFFER_ENV: &str = "ORDER_TRACKER_STORE_BUFFER";

const DEFAULT_STORE_BUFFER: usize = 32;

/// Settings for an [`OrderSystem`](super::OrderSystem).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Capacity of the store actor's request channel. Always greater than zero.
    pub store_buffer: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_buffer: DEFAULT_STORE_BUFFER,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let store_buffer = match lookup(STORE_BUFFER_ENV) {
            Some(raw) => parse_buffer(STORE_BUFFER_ENV, &raw)?,
            None => DEFAULT_STORE_BUFFER,
        };
        Ok(Self { store_buffer })
    }
}

fn parse_buffer(key: &str, raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}
