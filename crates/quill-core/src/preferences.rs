//! Cosmetic preference store (theme and background index).
//!
//! Preferences live in a small TOML file with two fixed keys, `theme` and
//! `background`. They are read once at startup and written back on every
//! change.

use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, CoreError};
use crate::ValidationError;

/// Number of background presets the index cycles through.
pub const BACKGROUND_COUNT: u32 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ValidationError::InvalidTheme {
                value: other.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: Theme,
    pub background: u32,
}

impl Preferences {
    /// Selects a background preset; `index` must be below [`BACKGROUND_COUNT`].
    pub fn set_background(&mut self, index: u32) -> Result<(), ValidationError> {
        if index >= BACKGROUND_COUNT {
            return Err(ValidationError::BackgroundOutOfRange {
                index,
                count: BACKGROUND_COUNT,
            });
        }
        self.background = index;
        Ok(())
    }

    /// Advances to the next preset. A stored index outside the preset range
    /// is folded back into it first.
    pub fn next_background(&mut self) -> u32 {
        self.background = (self.background % BACKGROUND_COUNT + 1) % BACKGROUND_COUNT;
        self.background
    }
}

/// File-backed key-value store for [`Preferences`].
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<config_dir>/quill/preferences.toml`.
    pub fn at_default_location() -> Result<Self, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::new(config_dir.join("quill").join("preferences.toml")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads stored preferences; a missing file yields defaults.
    pub fn load(&self) -> Result<Preferences, CoreError> {
        if !self.path.exists() {
            return Ok(Preferences::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| CoreError::PreferenceIo {
            path: self.path.clone(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| CoreError::PreferenceParse {
            path: self.path.clone(),
            source,
        })
    }

    pub fn save(&self, preferences: &Preferences) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| CoreError::PreferenceIo {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string(preferences)?;
        fs::write(&self.path, content).map_err(|source| CoreError::PreferenceIo {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(
            theme = %preferences.theme,
            background = preferences.background,
            "saved preferences to {}",
            self.path.display()
        );
        Ok(())
    }

    /// Load, apply `change`, save, and return the stored result.
    pub fn update<F>(&self, change: F) -> Result<Preferences, CoreError>
    where
        F: FnOnce(&mut Preferences),
    {
        let mut preferences = self.load()?;
        change(&mut preferences);
        self.save(&preferences)?;
        Ok(preferences)
    }
}
