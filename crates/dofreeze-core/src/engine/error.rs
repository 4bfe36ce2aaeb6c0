use super::config::ConfigError;
use crate::core::coords::ConversionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Coordinate conversion failed: {source}")]
    Conversion {
        #[from]
        source: ConversionError,
    },
}
