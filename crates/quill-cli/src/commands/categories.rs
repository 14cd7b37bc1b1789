use serde::Serialize;

use quill_core::{builtin_categories, Category, QuillContext};

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct CategoriesResponseData {
    categories: Vec<Category>,
}

pub async fn run(context: &QuillContext) -> Result<CommandResult, CliError> {
    let categories = context.directory.refresh().await;
    let is_builtin = categories == builtin_categories();

    let data = serde_json::to_value(CategoriesResponseData { categories })?;
    let result = CommandResult::ok(data);

    if is_builtin {
        return Ok(result.with_warning("showing the built-in category set"));
    }
    Ok(result)
}
