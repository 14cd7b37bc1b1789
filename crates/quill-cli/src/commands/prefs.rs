use std::path::PathBuf;

use serde::Serialize;

use quill_core::{PreferenceStore, Preferences, Theme};

use crate::cli::{PrefsArgs, PrefsCommand};
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct PrefsResponseData {
    path: PathBuf,
    preferences: Preferences,
}

pub fn run(args: &PrefsArgs, store: &PreferenceStore) -> Result<CommandResult, CliError> {
    let preferences = match &args.command {
        PrefsCommand::Show => store.load()?,
        PrefsCommand::Theme(theme_args) => {
            let theme = theme_args.theme.parse::<Theme>()?;
            store.update(|preferences| preferences.theme = theme)?
        }
        PrefsCommand::ToggleTheme => {
            store.update(|preferences| preferences.theme = preferences.theme.toggled())?
        }
        PrefsCommand::Background(background_args) => {
            let mut preferences = store.load()?;
            preferences.set_background(background_args.index)?;
            store.save(&preferences)?;
            preferences
        }
        PrefsCommand::NextBackground => store.update(|preferences| {
            preferences.next_background();
        })?,
    };

    let data = serde_json::to_value(PrefsResponseData {
        path: store.path().to_path_buf(),
        preferences,
    })?;

    Ok(CommandResult::ok(data))
}
