//! Quote source trait and request/error types.
//!
//! This module defines the adapter contract (`QuoteSource`) that every quote
//! provider implements. Adapters normalize a provider's payload into
//! [`Quote`] and classify failures as transport or schema errors.
//!
//! # Category filtering
//!
//! | Filter | Meaning | Example |
//! |--------|---------|---------|
//! | [`CategoryFilter::Server`] | Provider filters by tag server-side | Quotable |
//! | [`CategoryFilter::Approximate`] | Adapter filters the full list locally | type.fit |
//! | [`CategoryFilter::Unsupported`] | Category is ignored | - |
//!
//! # Example
//!
//! ```rust,ignore
//! use quill_core::{QuotableAdapter, QuoteRequest, QuoteSource};
//!
//! async fn print_one(adapter: &QuotableAdapter) -> Result<(), quill_core::SourceError> {
//!     let quote = adapter.fetch(QuoteRequest::any()).await?;
//!     println!("{quote}");
//!     Ok(())
//! }
//! ```

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::http_client::HttpError;
use crate::{Category, ProviderId, Quote};

/// How an adapter honours a requested category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    Server,
    Approximate,
    Unsupported,
}

impl CategoryFilter {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Server => "server",
            Self::Approximate => "approximate",
            Self::Unsupported => "unsupported",
        }
    }

    /// Whether a requested category should reach the adapter at all.
    pub const fn accepts_category(self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Adapter-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// Network failure or non-success status.
    Transport,
    /// Payload did not match the expected shape.
    Schema,
}

/// Structured source error consumed by the pipeline's failure budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
}

impl SourceError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Transport,
            message: message.into(),
        }
    }

    pub fn schema(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Schema,
            message: message.into(),
        }
    }

    pub(crate) fn from_http(provider: ProviderId, error: HttpError) -> Self {
        Self::transport(format!("{provider} transport error: {}", error.message()))
    }

    pub(crate) fn from_status(provider: ProviderId, status: u16) -> Self {
        Self::transport(format!("{provider} upstream returned status {status}"))
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Transport => "source.transport",
            SourceErrorKind::Schema => "source.schema",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Request payload for a single quote fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteRequest {
    pub category: Option<Category>,
}

impl QuoteRequest {
    pub fn any() -> Self {
        Self { category: None }
    }

    pub fn in_category(category: Category) -> Self {
        Self {
            category: Some(category),
        }
    }
}

/// Quote source adapter contract.
///
/// Implementations must be `Send + Sync`; the pipeline holds them as
/// `Arc<dyn QuoteSource>`.
pub trait QuoteSource: Send + Sync {
    /// Returns the unique provider identifier.
    fn id(&self) -> ProviderId;

    /// Returns how this source handles a requested category.
    fn category_filter(&self) -> CategoryFilter;

    /// True when the provider filters by category server-side.
    fn supports_category_filter(&self) -> bool {
        self.category_filter() == CategoryFilter::Server
    }

    /// Fetches one normalized quote.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] of kind `Transport` when the request fails or
    /// the status is not 2xx, and `Schema` when the body cannot be decoded.
    fn fetch<'a>(
        &'a self,
        req: QuoteRequest,
    ) -> Pin<Box<dyn Future<Output = Result<Quote, SourceError>> + Send + 'a>>;
}
