use std::path::PathBuf;

use stockdash_core::{ApiError, CoreError, LookupError, ValidationError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Lookup(LookupError::EmptyTicker | LookupError::Validation(_)) => 2,
            Self::Lookup(LookupError::Api(_)) => 3,
            Self::Api(_) => 3,
            Self::Core(CoreError::Validation(_)) => 2,
            Self::Core(CoreError::Api(_)) => 3,
            Self::Core(CoreError::Serialization(_)) => 4,
            Self::Serialization(_) => 4,
            Self::ReadInput { .. } => 10,
            Self::Io(_) => 10,
        }
    }
}
