use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;

use crate::categories::CategoryDirectory;
use crate::data_source::{CategoryFilter, QuoteRequest, QuoteSource, SourceError};
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient, DEFAULT_TIMEOUT_MS};
use crate::{Category, ProviderId, Quote};

pub const DEFAULT_TYPEFIT_URL: &str = "https://type.fit/api/quotes";

/// type.fit adapter: downloads the whole list and picks one entry locally.
///
/// The provider has no tag concept, so a requested category is matched as a
/// case-insensitive substring of the quote text and every quote carries an
/// empty tag list.
#[derive(Clone)]
pub struct TypeFitAdapter {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    timeout_ms: u64,
    directory: Arc<CategoryDirectory>,
}

impl Default for TypeFitAdapter {
    fn default() -> Self {
        Self::with_http_client(
            Arc::new(ReqwestHttpClient::new()),
            DEFAULT_TYPEFIT_URL,
            Arc::new(CategoryDirectory::builtin()),
        )
    }
}

impl TypeFitAdapter {
    pub fn with_http_client(
        http_client: Arc<dyn HttpClient>,
        base_url: impl Into<String>,
        directory: Arc<CategoryDirectory>,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            directory,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn parse_list_response(&self, body: &str) -> Result<Vec<TypeFitEntry>, SourceError> {
        let entries: Vec<TypeFitEntry> = serde_json::from_str(body)
            .map_err(|e| SourceError::schema(format!("failed to parse type.fit response: {e}")))?;

        let candidates = entries
            .into_iter()
            .filter(|entry| {
                entry
                    .text
                    .as_deref()
                    .is_some_and(|text| !text.trim().is_empty())
            })
            .collect::<Vec<_>>();

        if candidates.is_empty() {
            return Err(SourceError::schema("type.fit returned no usable quotes"));
        }
        Ok(candidates)
    }

    /// Display name for the requested slug, or the raw slug when unknown.
    fn resolve_name(&self, category: &Category) -> String {
        self.directory
            .lookup(category.slug())
            .map(|known| known.name().to_owned())
            .unwrap_or_else(|| category.slug().to_owned())
    }
}

impl QuoteSource for TypeFitAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Typefit
    }

    fn category_filter(&self) -> CategoryFilter {
        CategoryFilter::Approximate
    }

    fn fetch<'a>(
        &'a self,
        req: QuoteRequest,
    ) -> Pin<Box<dyn Future<Output = Result<Quote, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            let request = HttpRequest::get(&self.base_url)
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

            let entries = self.parse_list_response(&response.body)?;
            let pool = match &req.category {
                Some(category) => {
                    let name = self.resolve_name(category);
                    let matches = filter_by_category(&entries, category.slug(), &name);
                    if matches.is_empty() {
                        tracing::debug!(
                            slug = category.slug(),
                            "no type.fit quote mentions the category; widening to the full list"
                        );
                        entries.iter().collect()
                    } else {
                        matches
                    }
                }
                None => entries.iter().collect(),
            };

            let picked = pool[fastrand::usize(..pool.len())];
            Quote::new(
                picked.text.as_deref().unwrap_or_default(),
                picked.author.as_deref(),
                Vec::new(),
            )
            .map_err(|e| SourceError::schema(format!("type.fit returned an unusable quote: {e}")))
        })
    }
}

/// Entries whose text mentions the slug or the display name, ignoring case.
fn filter_by_category<'e>(
    entries: &'e [TypeFitEntry],
    slug: &str,
    name: &str,
) -> Vec<&'e TypeFitEntry> {
    let slug = slug.to_lowercase();
    let name = name.to_lowercase();

    entries
        .iter()
        .filter(|entry| {
            let text = entry.text.as_deref().unwrap_or_default().to_lowercase();
            text.contains(&slug) || text.contains(&name)
        })
        .collect()
}

#[derive(Debug, Clone, Deserialize)]
struct TypeFitEntry {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    author: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::DEFAULT_TAGS_URL;
    use crate::data_source::SourceErrorKind;
    use crate::http_client::HttpResponse;
    use crate::test_support::{block_on, ScriptedHttpClient};

    const LIST: &str = r#"[
        {"text": "Genius is one percent inspiration.", "author": "Thomas Edison"},
        {"text": "Happiness depends upon ourselves.", "author": "Aristotle"},
        {"text": "Well begun is half done.", "author": null}
    ]"#;

    fn adapter_with(body: &str) -> TypeFitAdapter {
        let client = Arc::new(ScriptedHttpClient::new(vec![Ok(HttpResponse::ok_json(body))]));
        TypeFitAdapter::with_http_client(
            client,
            DEFAULT_TYPEFIT_URL,
            Arc::new(CategoryDirectory::builtin()),
        )
    }

    #[test]
    fn category_match_uses_resolved_display_name() {
        let tags = Arc::new(ScriptedHttpClient::new(vec![Ok(HttpResponse::ok_json(
            r#"[{"name": "Famous Quotes", "slug": "famous-quotes"}]"#,
        ))]));
        let directory = Arc::new(CategoryDirectory::new(tags, DEFAULT_TAGS_URL));
        block_on(directory.refresh());

        let list = r#"[
            {"text": "One of my famous quotes is this one.", "author": "Somebody"},
            {"text": "Well begun is half done.", "author": "Aristotle"}
        ]"#;
        let client = Arc::new(ScriptedHttpClient::new(vec![Ok(HttpResponse::ok_json(list))]));
        let adapter = TypeFitAdapter::with_http_client(client, DEFAULT_TYPEFIT_URL, directory);
        let category = Category::from_slug("famous-quotes").expect("valid category");

        for _ in 0..20 {
            let quote = block_on(adapter.fetch(QuoteRequest::in_category(category.clone())))
                .expect("fetch succeeds");
            assert_eq!(quote.author(), "Somebody");
        }
    }

    #[test]
    fn category_match_on_slug_ignores_case() {
        let adapter = adapter_with(LIST);
        let category = Category::from_slug("happiness").expect("valid category");

        for _ in 0..20 {
            let quote = block_on(adapter.fetch(QuoteRequest::in_category(category.clone())))
                .expect("fetch succeeds");
            assert_eq!(quote.author(), "Aristotle");
            assert!(quote.tags().is_empty());
        }
    }

    #[test]
    fn missing_author_becomes_unknown() {
        let adapter = adapter_with(r#"[{"text": "Well begun is half done.", "author": null}]"#);
        let quote = block_on(adapter.fetch(QuoteRequest::any())).expect("fetch succeeds");
        assert_eq!(quote.author(), "Unknown");
    }

    #[test]
    fn list_without_text_is_a_schema_error() {
        let adapter = adapter_with(r#"[{"author": "Nobody"}, {"text": "  "}]"#);
        let error = block_on(adapter.fetch(QuoteRequest::any())).expect_err("must fail");
        assert_eq!(error.kind(), SourceErrorKind::Schema);
    }

    #[test]
    fn object_payload_is_a_schema_error() {
        let adapter = adapter_with(r#"{"content": "quotable shape"}"#);
        let error = block_on(adapter.fetch(QuoteRequest::any())).expect_err("must fail");
        assert_eq!(error.kind(), SourceErrorKind::Schema);
    }

    #[test]
    fn filter_matches_slug_or_name_ignoring_case() {
        let entries: Vec<TypeFitEntry> = serde_json::from_str(LIST).expect("valid list");

        assert_eq!(filter_by_category(&entries, "genius", "Genius").len(), 1);
        assert_eq!(filter_by_category(&entries, "half", "HALF").len(), 1);
        assert!(filter_by_category(&entries, "courage", "Courage").is_empty());
    }
}
