use serde::Serialize;

use quill_core::{clipboard_text, share_url, Category, QuillContext, Quote, QuoteOrigin};

use crate::cli::QuoteArgs;
use crate::envelope::EnvelopeError;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct QuoteEntry {
    quote: Quote,
    origin: QuoteOrigin,
    #[serde(skip_serializing_if = "Option::is_none")]
    clipboard: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    share_url: Option<String>,
}

#[derive(Debug, Serialize)]
struct QuoteResponseData {
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<Category>,
    quotes: Vec<QuoteEntry>,
}

pub async fn run(args: &QuoteArgs, context: &mut QuillContext) -> Result<CommandResult, CliError> {
    let mut warnings = Vec::new();
    let category = match args.category.as_deref() {
        Some(slug) => Some(resolve_category(slug, context, &mut warnings).await?),
        None => None,
    };

    let mut quotes = Vec::with_capacity(args.count as usize);
    let mut source_chain = Vec::new();
    let mut errors = Vec::new();
    let mut latency_ms = 0_u64;

    for _ in 0..args.count {
        let outcome = context.pipeline.fetch_quote(category.as_ref()).await;

        source_chain.extend(outcome.source_chain);
        warnings.extend(outcome.warnings);
        errors.extend(outcome.failures.into_iter().map(EnvelopeError::from));
        latency_ms = latency_ms.saturating_add(outcome.latency_ms);

        quotes.push(QuoteEntry {
            clipboard: args.copy.then(|| clipboard_text(&outcome.quote)),
            share_url: args.share.then(|| share_url(&outcome.quote)),
            quote: outcome.quote,
            origin: outcome.origin,
        });
    }

    let data = serde_json::to_value(QuoteResponseData { category, quotes })?;

    Ok(CommandResult::ok(data)
        .with_source_chain(source_chain)
        .with_warnings(warnings)
        .with_errors(errors)
        .with_latency(latency_ms))
}

async fn resolve_category(
    slug: &str,
    context: &QuillContext,
    warnings: &mut Vec<String>,
) -> Result<Category, CliError> {
    context.directory.refresh().await;
    if let Some(category) = context.directory.lookup(slug) {
        return Ok(category);
    }

    let category = Category::from_slug(slug)?;
    tracing::warn!(
        slug = category.slug(),
        "category is not in the directory; using it as given"
    );
    warnings.push(format!(
        "category '{}' is not in the directory; passing it to sources as given",
        category.slug()
    ));
    Ok(category)
}
