//! Category (tag) directory backed by the Quotable tags endpoint.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use serde::Deserialize;

use crate::http_client::{HttpClient, HttpRequest, DEFAULT_TIMEOUT_MS};
use crate::Category;

pub const DEFAULT_TAGS_URL: &str = "https://api.quotable.io/tags";

/// Built-in categories substituted whenever the tags endpoint fails.
pub const BUILTIN_CATEGORIES: [(&str, &str); 5] = [
    ("Wisdom", "wisdom"),
    ("Success", "success"),
    ("Happiness", "happiness"),
    ("Motivational", "motivational"),
    ("Life", "life"),
];

/// Holds the most recently refreshed category set.
///
/// Refresh never fails upward: any transport, status or decode problem
/// swaps in [`BUILTIN_CATEGORIES`].
pub struct CategoryDirectory {
    http_client: Arc<dyn HttpClient>,
    tags_url: String,
    timeout_ms: u64,
    current: RwLock<Vec<Category>>,
}

impl CategoryDirectory {
    pub fn new(http_client: Arc<dyn HttpClient>, tags_url: impl Into<String>) -> Self {
        Self {
            http_client,
            tags_url: tags_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            current: RwLock::new(Vec::new()),
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Directory pre-populated with the built-in set and no usable endpoint.
    pub fn builtin() -> Self {
        let directory = Self::new(Arc::new(crate::NoopHttpClient), DEFAULT_TAGS_URL);
        directory.replace(builtin_categories());
        directory
    }

    /// Re-fetches the category set, replacing the stored one wholesale.
    pub async fn refresh(&self) -> Vec<Category> {
        let categories = match self.fetch_remote().await {
            Ok(categories) if !categories.is_empty() => {
                tracing::info!(
                    count = categories.len(),
                    "loaded categories from {}",
                    self.tags_url
                );
                categories
            }
            Ok(_) => {
                tracing::warn!("tags endpoint returned no usable categories; using built-in set");
                builtin_categories()
            }
            Err(reason) => {
                tracing::warn!(%reason, "category refresh failed; using built-in set");
                builtin_categories()
            }
        };

        let categories = sort_and_dedupe(categories);
        self.replace(categories.clone());
        categories
    }

    /// Exact slug match against the most recent set.
    pub fn lookup(&self, slug: &str) -> Option<Category> {
        let slug = Category::normalize_slug(slug).ok()?;
        self.current
            .read()
            .expect("category directory lock is not poisoned")
            .iter()
            .find(|category| category.slug() == slug)
            .cloned()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.current
            .read()
            .expect("category directory lock is not poisoned")
            .clone()
    }

    fn replace(&self, categories: Vec<Category>) {
        *self
            .current
            .write()
            .expect("category directory lock is not poisoned") = categories;
    }

    async fn fetch_remote(&self) -> Result<Vec<Category>, String> {
        let request = HttpRequest::get(&self.tags_url)
            .with_header("accept", "application/json")
            .with_timeout_ms(self.timeout_ms);

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|error| error.to_string())?;

        if !response.is_success() {
            return Err(format!("tags endpoint returned status {}", response.status));
        }

        let payload: Vec<TagPayload> = serde_json::from_str(&response.body)
            .map_err(|error| format!("failed to parse tags response: {error}"))?;

        Ok(payload
            .into_iter()
            .filter_map(|tag| Category::new(&tag.name, &tag.slug).ok())
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct TagPayload {
    #[serde(default)]
    name: String,
    slug: String,
}

pub fn builtin_categories() -> Vec<Category> {
    sort_and_dedupe(
        BUILTIN_CATEGORIES
            .iter()
            .filter_map(|(name, slug)| Category::new(name, slug).ok())
            .collect(),
    )
}

/// Sorts by display name, case-insensitive, keeping the first entry per slug.
fn sort_and_dedupe(categories: Vec<Category>) -> Vec<Category> {
    let mut seen = HashSet::new();
    let mut unique = categories
        .into_iter()
        .filter(|category| seen.insert(category.slug().to_owned()))
        .collect::<Vec<_>>();

    unique.sort_by(|left, right| {
        left.name()
            .to_lowercase()
            .cmp(&right.name().to_lowercase())
            .then_with(|| left.name().cmp(right.name()))
    });
    unique
}
