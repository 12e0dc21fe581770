//! Configuration loading and representation.

use thiserror::Error;

use playground_invoicing::MapperStrategy;

pub const MAPPER_VAR: &str = "PLAYGROUND_MAPPER";
pub const NORMALIZE_VAR: &str = "PLAYGROUND_NORMALIZE_SNAPSHOTS";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}

/// Settings of the snapshot persistence path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistenceConfig {
    /// Strategy used to turn invoices into snapshots.
    pub mapper: MapperStrategy,
    /// Sort snapshot items by product code before encoding.
    pub normalize_snapshots: bool,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            mapper: MapperStrategy::Visitor,
            normalize_snapshots: true,
        }
    }
}

impl PersistenceConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through `lookup`; unset variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let mapper = match lookup(MAPPER_VAR) {
            Some(raw) => raw.parse().map_err(|e| ConfigError::InvalidValue {
                var: MAPPER_VAR,
                reason: format!("{e}"),
            })?,
            None => {
                tracing::warn!("{MAPPER_VAR} not set; using {}", defaults.mapper);
                defaults.mapper
            }
        };

        let normalize_snapshots = match lookup(NORMALIZE_VAR) {
            Some(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::InvalidValue {
                var: NORMALIZE_VAR,
                reason: format!("expected a boolean, got '{raw}'"),
            })?,
            None => {
                tracing::warn!(
                    "{NORMALIZE_VAR} not set; using {}",
                    defaults.normalize_snapshots
                );
                defaults.normalize_snapshots
            }
        };

        Ok(Self {
            mapper,
            normalize_snapshots,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
