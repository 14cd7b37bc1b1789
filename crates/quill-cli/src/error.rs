use std::path::PathBuf;

use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] quill_core::ValidationError),

    #[error(transparent)]
    Config(quill_core::ConfigError),

    #[error(transparent)]
    Core(quill_core::CoreError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error("i/o error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<quill_core::ConfigError> for CliError {
    fn from(error: quill_core::ConfigError) -> Self {
        match error {
            quill_core::ConfigError::Validation(error) => Self::Validation(error),
            other => Self::Config(other),
        }
    }
}

impl From<quill_core::CoreError> for CliError {
    fn from(error: quill_core::CoreError) -> Self {
        match error {
            quill_core::CoreError::Validation(error) => Self::Validation(error),
            quill_core::CoreError::Config(error) => Self::from(error),
            quill_core::CoreError::PreferenceIo { path, source } => Self::Io { path, source },
            other => Self::Core(other),
        }
    }
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Config(_) => 3,
            Self::Core(_) => 3,
            Self::Serialization(_) => 4,
            Self::Io { .. } => 10,
        }
    }
}
