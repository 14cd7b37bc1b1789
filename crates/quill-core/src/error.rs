use std::path::PathBuf;

use thiserror::Error;

/// Validation and contract errors exposed by `quill-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("quote text cannot be empty")]
    EmptyQuoteText,

    #[error("category slug cannot be empty")]
    EmptyCategorySlug,

    #[error("invalid source '{value}', expected one of quotable, typefit")]
    InvalidSource { value: String },

    #[error("invalid theme '{value}', expected one of dark, light")]
    InvalidTheme { value: String },

    #[error("background index {index} is out of range, expected 0..{count}")]
    BackgroundOutOfRange { index: u32, count: u32 },

    #[error("retry budget must allow at least one attempt per adapter")]
    ZeroRetryBudget,
}

/// Errors raised while locating or parsing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the user configuration directory")]
    NoConfigDir,

    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("preference store error at {path}: {source}")]
    PreferenceIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("preference file {path} is malformed: {source}")]
    PreferenceParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to encode preferences: {0}")]
    PreferenceEncode(#[from] toml::ser::Error),
}
