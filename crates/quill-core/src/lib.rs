//! # Quill Core
//!
//! Random-quote acquisition with multi-source failover and an offline
//! safety net.
//!
//! ## Overview
//!
//! - **Domain models** for quotes and categories
//! - **Source adapters** translating provider payloads into [`Quote`]
//! - **Pipeline** with sequential failover and a fixed retry delay
//! - **Fallback catalog** served when every remote source is exhausted
//! - **Category directory** with a built-in set when the tags endpoint is down
//! - **Share helpers** producing clipboard text and share-intent links
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Provider adapters (Quotable, type.fit) |
//! | [`categories`] | Category listing with built-in fallback |
//! | [`config`] | TOML configuration |
//! | [`data_source`] | Source trait and request/error types |
//! | [`domain`] | Domain models (Quote, Category) |
//! | [`error`] | Core error types |
//! | [`fallback`] | Static offline quote catalog |
//! | [`http_client`] | HTTP client abstraction |
//! | [`pipeline`] | Failover pipeline and builder |
//! | [`preferences`] | Theme and background preference store |
//! | [`retry`] | Retry budget and sleeper |
//! | [`share`] | Clipboard and share-link text |
//! | [`source`] | Provider identifiers |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quill_core::{PipelineBuilder, QuillConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut context = PipelineBuilder::new()
//!         .with_config(QuillConfig::load_default()?)
//!         .build();
//!
//!     let life = context.directory.lookup("life");
//!     let outcome = context.pipeline.fetch_quote(life.as_ref()).await;
//!     println!("{}", outcome.quote);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  CLI / User     │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │  QuotePipeline  │────▶│ FallbackCatalog  │
//! └────────┬────────┘     └──────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Quote Source    │────▶│ HTTP Client      │
//! │ (Adapter Trait) │     │ (reqwest/none)   │
//! └─────────────────┘     └──────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Adapters report [`SourceError`]s; the pipeline absorbs them and always
//! returns a quote:
//!
//! ```rust
//! use quill_core::{SourceError, SourceErrorKind};
//!
//! fn describe(error: &SourceError) -> &'static str {
//!     match error.kind() {
//!         SourceErrorKind::Transport => "network or status failure",
//!         SourceErrorKind::Schema => "unexpected payload",
//!     }
//! }
//!
//! assert_eq!(describe(&SourceError::schema("missing content")), "unexpected payload");
//! ```

pub mod adapters;
pub mod categories;
pub mod config;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod fallback;
pub mod http_client;
pub mod pipeline;
pub mod preferences;
pub mod retry;
pub mod share;
pub mod source;

#[cfg(test)]
mod test_support;

// Adapter implementations
pub use adapters::{QuotableAdapter, TypeFitAdapter, DEFAULT_QUOTABLE_URL, DEFAULT_TYPEFIT_URL};

// Categories
pub use categories::{builtin_categories, CategoryDirectory, DEFAULT_TAGS_URL};

// Configuration
pub use config::{QuillConfig, RetryConfig, SourcesConfig};

// Source trait and types
pub use data_source::{CategoryFilter, QuoteRequest, QuoteSource, SourceError, SourceErrorKind};

// Domain models
pub use domain::{Category, Quote, UNKNOWN_AUTHOR};

// Error types
pub use error::{ConfigError, CoreError, ValidationError};

// Offline catalog
pub use fallback::FallbackCatalog;

// HTTP client types
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};

// Pipeline
pub use pipeline::{
    AttemptFailure, FetchOutcome, PipelineBuilder, PipelineState, QuillContext, QuoteOrigin,
    QuotePipeline,
};

// Preferences
pub use preferences::{PreferenceStore, Preferences, Theme, BACKGROUND_COUNT};

// Retry
pub use retry::{RetryPolicy, Sleeper, TokioSleeper};

// Sharing
pub use share::{clipboard_text, share_url, truncate_for_share, MAX_SHARE_TEXT_CHARS};

// Source identifiers
pub use source::ProviderId;
