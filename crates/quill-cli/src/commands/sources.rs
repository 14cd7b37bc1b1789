use serde::Serialize;

use quill_core::{CategoryFilter, FallbackCatalog, ProviderId, QuillContext};

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct SourceStatus {
    id: ProviderId,
    position: usize,
    category_filter: CategoryFilter,
    supports_category_filter: bool,
}

#[derive(Debug, Serialize)]
struct RetryStatus {
    max_retries_per_adapter: u32,
    delay_ms: u64,
    failure_threshold: u32,
    reset_failures_on_success: bool,
}

#[derive(Debug, Serialize)]
struct SourcesResponseData {
    sources: Vec<SourceStatus>,
    retry: RetryStatus,
    fallback_quotes: usize,
}

pub fn run(context: &QuillContext) -> Result<CommandResult, CliError> {
    let pipeline = &context.pipeline;
    let policy = pipeline.policy();

    let sources = pipeline
        .adapters()
        .iter()
        .enumerate()
        .map(|(position, adapter)| SourceStatus {
            id: adapter.id(),
            position: position + 1,
            category_filter: adapter.category_filter(),
            supports_category_filter: adapter.supports_category_filter(),
        })
        .collect::<Vec<_>>();

    let data = serde_json::to_value(SourcesResponseData {
        retry: RetryStatus {
            max_retries_per_adapter: policy.max_retries_per_adapter,
            delay_ms: u64::try_from(policy.delay.as_millis()).unwrap_or(u64::MAX),
            failure_threshold: policy.failure_threshold(sources.len()),
            reset_failures_on_success: policy.reset_failures_on_success,
        },
        sources,
        fallback_quotes: FallbackCatalog.quotes().len(),
    })?;

    Ok(CommandResult::ok(data))
}
