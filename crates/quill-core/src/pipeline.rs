use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use crate::adapters::{QuotableAdapter, TypeFitAdapter};
use crate::categories::CategoryDirectory;
use crate::config::QuillConfig;
use crate::data_source::{QuoteRequest, QuoteSource, SourceError};
use crate::fallback::FallbackCatalog;
use crate::http_client::{HttpClient, NoopHttpClient, ReqwestHttpClient};
use crate::retry::{RetryPolicy, Sleeper, TokioSleeper};
use crate::{Category, ProviderId, Quote};

/// Where a returned quote came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "source", rename_all = "snake_case")]
pub enum QuoteOrigin {
    Live(ProviderId),
    Fallback,
}

impl QuoteOrigin {
    pub const fn provider(self) -> ProviderId {
        match self {
            Self::Live(provider) => provider,
            Self::Fallback => ProviderId::Fallback,
        }
    }

    pub const fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback)
    }
}

/// One failed adapter call inside a fetch chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttemptFailure {
    pub source: ProviderId,
    pub code: &'static str,
    pub message: String,
}

impl AttemptFailure {
    fn new(source: ProviderId, error: &SourceError) -> Self {
        Self {
            source,
            code: error.code(),
            message: error.message().to_owned(),
        }
    }
}

/// Result of a fetch chain. Always carries a quote.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub quote: Quote,
    pub origin: QuoteOrigin,
    pub source_chain: Vec<ProviderId>,
    pub failures: Vec<AttemptFailure>,
    pub warnings: Vec<String>,
    pub latency_ms: u64,
}

/// Mutable failover state owned by one pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineState {
    pub active_adapter_index: usize,
    pub consecutive_failure_count: u32,
}

/// Sequential failover across quote sources with an offline safety net.
pub struct QuotePipeline {
    adapters: Vec<Arc<dyn QuoteSource>>,
    policy: RetryPolicy,
    sleeper: Arc<dyn Sleeper>,
    fallback: FallbackCatalog,
    state: PipelineState,
}

impl QuotePipeline {
    pub fn new(adapters: Vec<Arc<dyn QuoteSource>>, policy: RetryPolicy) -> Self {
        Self::with_sleeper(adapters, policy, Arc::new(TokioSleeper))
    }

    pub fn with_sleeper(
        adapters: Vec<Arc<dyn QuoteSource>>,
        policy: RetryPolicy,
        sleeper: Arc<dyn Sleeper>,
    ) -> Self {
        Self {
            adapters,
            policy,
            sleeper,
            fallback: FallbackCatalog,
            state: PipelineState::default(),
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub fn adapters(&self) -> &[Arc<dyn QuoteSource>] {
        &self.adapters
    }

    /// Fetches one quote, failing over between adapters and finally serving
    /// the fallback catalog. Never fails.
    pub async fn fetch_quote(&mut self, category: Option<&Category>) -> FetchOutcome {
        let started = Instant::now();
        let mut source_chain = Vec::new();
        let mut failures = Vec::new();
        let mut warnings = Vec::new();

        let adapter_count = self.adapters.len();
        let threshold = self.policy.failure_threshold(adapter_count);
        let max_attempts = if adapter_count == 0 {
            0
        } else {
            threshold.saturating_sub(self.state.consecutive_failure_count) + 1
        };

        for attempt in 1..=max_attempts {
            let index = self.state.active_adapter_index % adapter_count;
            let adapter = Arc::clone(&self.adapters[index]);
            let provider = adapter.id();
            source_chain.push(provider);

            let request = match category {
                Some(category) if adapter.category_filter().accepts_category() => {
                    QuoteRequest::in_category(category.clone())
                }
                _ => QuoteRequest::any(),
            };

            tracing::debug!(
                attempt,
                source = %provider,
                category = category.map(Category::slug),
                "fetching quote"
            );

            match adapter.fetch(request).await {
                Ok(quote) => {
                    if self.policy.reset_failures_on_success {
                        self.state.consecutive_failure_count = 0;
                    }
                    if !failures.is_empty() {
                        warnings.push(format!(
                            "source failover succeeded with '{}' after {} failed attempt(s)",
                            provider,
                            failures.len()
                        ));
                    }

                    return FetchOutcome {
                        quote,
                        origin: QuoteOrigin::Live(provider),
                        source_chain,
                        failures,
                        warnings,
                        latency_ms: elapsed_ms(started),
                    };
                }
                Err(error) => {
                    tracing::warn!(source = %provider, code = error.code(), "{}", error.message());
                    failures.push(AttemptFailure::new(provider, &error));
                    self.state.consecutive_failure_count =
                        self.state.consecutive_failure_count.saturating_add(1);

                    if self.state.consecutive_failure_count > threshold {
                        break;
                    }

                    self.state.active_adapter_index = (index + 1) % adapter_count;
                    let status = format!(
                        "trying alternative source... ({}/{})",
                        self.state.active_adapter_index + 1,
                        adapter_count
                    );
                    tracing::info!("{status}");
                    warnings.push(status);

                    self.sleeper.sleep(self.policy.delay).await;
                }
            }
        }

        tracing::warn!(
            failures = self.state.consecutive_failure_count,
            "using offline quotes due to source connection issues"
        );
        warnings.push(String::from(
            "all remote sources failed; serving a quote from the offline catalog",
        ));
        source_chain.push(ProviderId::Fallback);

        FetchOutcome {
            quote: self.fallback.pick_random(),
            origin: QuoteOrigin::Fallback,
            source_chain,
            failures,
            warnings,
            latency_ms: elapsed_ms(started),
        }
    }
}

/// Pipeline plus the category directory its adapters share.
pub struct QuillContext {
    pub pipeline: QuotePipeline,
    pub directory: Arc<CategoryDirectory>,
}

/// Builder wiring adapters, transport and retry policy from a [`QuillConfig`].
///
/// # Example
///
/// ```rust,ignore
/// use quill_core::{PipelineBuilder, QuillConfig};
///
/// let mut context = PipelineBuilder::new()
///     .with_config(QuillConfig::load_default()?)
///     .build();
/// let outcome = context.pipeline.fetch_quote(None).await;
/// println!("{}", outcome.quote);
/// ```
#[derive(Default)]
pub struct PipelineBuilder {
    config: QuillConfig,
    http_client: Option<Arc<dyn HttpClient>>,
    sleeper: Option<Arc<dyn Sleeper>>,
    offline: bool,
    only: Option<ProviderId>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: QuillConfig) -> Self {
        self.config = config;
        self
    }

    /// Every request fails locally, so fetches resolve from the fallback
    /// catalog and categories from the built-in set.
    pub fn with_offline_mode(mut self) -> Self {
        self.offline = true;
        self
    }

    pub fn with_http_client(mut self, http_client: Arc<dyn HttpClient>) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = Some(sleeper);
        self
    }

    /// Restrict the pipeline to a single remote source.
    pub fn with_source(mut self, provider: ProviderId) -> Self {
        self.only = Some(provider);
        self
    }

    pub fn build(self) -> QuillContext {
        let http_client: Arc<dyn HttpClient> = if self.offline {
            Arc::new(NoopHttpClient)
        } else {
            self.http_client
                .unwrap_or_else(|| Arc::new(ReqwestHttpClient::new()))
        };
        let sources = &self.config.sources;

        let directory = Arc::new(
            CategoryDirectory::new(Arc::clone(&http_client), &sources.tags_url)
                .with_timeout_ms(sources.timeout_ms),
        );

        let mut adapters: Vec<Arc<dyn QuoteSource>> = Vec::with_capacity(2);
        if self.only.map_or(true, |only| only == ProviderId::Quotable) {
            adapters.push(Arc::new(
                QuotableAdapter::with_http_client(Arc::clone(&http_client), &sources.quotable_url)
                    .with_timeout_ms(sources.timeout_ms),
            ));
        }
        if self.only.map_or(true, |only| only == ProviderId::Typefit) {
            adapters.push(Arc::new(
                TypeFitAdapter::with_http_client(
                    Arc::clone(&http_client),
                    &sources.typefit_url,
                    Arc::clone(&directory),
                )
                .with_timeout_ms(sources.timeout_ms),
            ));
        }

        let sleeper = self.sleeper.unwrap_or_else(|| Arc::new(TokioSleeper));
        let pipeline = QuotePipeline::with_sleeper(adapters, self.config.retry_policy(), sleeper);

        QuillContext {
            pipeline,
            directory,
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis().min(u128::from(u64::MAX)) as u64
}
