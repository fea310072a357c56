/// Errors from the configuration layer.
///
/// The reducer, the layout engine and the chart state machine never fail;
/// only reading or writing chart documents can.
use crate::model::ColorParseError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot access chart document '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed chart document '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    InvalidColor(#[from] ColorParseError),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
