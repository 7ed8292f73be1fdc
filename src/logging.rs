use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::ConfigError;

/// `[logging]` section of the config file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of "off", "error", "warn", "info", "debug", "trace"
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        parse_level(&self.level)
    }
}

pub fn parse_level(level: &str) -> Result<LevelFilter, ConfigError> {
    level.parse().map_err(|_| {
        ConfigError::Validation(format!(
            "logging.level must be one of off, error, warn, info, debug, trace (got '{level}')"
        ))
    })
}

/// Install a compact fmt subscriber filtered at `level`.
///
/// Fails if a global subscriber is already set.
pub fn init(level: LevelFilter) -> Result<(), tracing_subscriber::util::TryInitError> {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .try_init()
}
