use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;

use crate::data_source::{CategoryFilter, QuoteRequest, QuoteSource, SourceError};
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient, DEFAULT_TIMEOUT_MS};
use crate::{ProviderId, Quote};

pub const DEFAULT_QUOTABLE_URL: &str = "https://api.quotable.io/random";

/// Quotable adapter: single random quote, server-side tag filter.
#[derive(Clone)]
pub struct QuotableAdapter {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    timeout_ms: u64,
}

impl Default for QuotableAdapter {
    fn default() -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::new()), DEFAULT_QUOTABLE_URL)
    }
}

impl QuotableAdapter {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, req: &QuoteRequest) -> String {
        match &req.category {
            Some(category) => {
                let separator = if self.base_url.contains('?') { '&' } else { '?' };
                format!(
                    "{}{separator}tags={}",
                    self.base_url,
                    urlencoding::encode(category.slug())
                )
            }
            None => self.base_url.clone(),
        }
    }

    fn parse_quote_response(&self, body: &str) -> Result<Quote, SourceError> {
        let payload: QuotablePayload = serde_json::from_str(body)
            .map_err(|e| SourceError::schema(format!("failed to parse quotable response: {e}")))?;

        Quote::new(
            payload.content,
            payload.author.as_deref(),
            payload.tags.unwrap_or_default(),
        )
        .map_err(|e| SourceError::schema(format!("quotable returned an unusable quote: {e}")))
    }
}

impl QuoteSource for QuotableAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Quotable
    }

    fn category_filter(&self) -> CategoryFilter {
        CategoryFilter::Server
    }

    fn fetch<'a>(
        &'a self,
        req: QuoteRequest,
    ) -> Pin<Box<dyn Future<Output = Result<Quote, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            let request = HttpRequest::get(self.endpoint(&req))
                .with_header("accept", "application/json")
                .with_timeout_ms(self.timeout_ms);

            let response = self
                .http_client
                .execute(request)
                .await
                .map_err(|error| SourceError::from_http(self.id(), error))?;

            if !response.is_success() {
                return Err(SourceError::from_status(self.id(), response.status));
            }

            self.parse_quote_response(&response.body)
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
struct QuotablePayload {
    content: String,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
}
