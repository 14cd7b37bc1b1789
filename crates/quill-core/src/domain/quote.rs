use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Author used when a provider omits attribution.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Normalized quote produced by one adapter call or the fallback catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    text: String,
    author: String,
    tags: Vec<String>,
}

impl Quote {
    /// Builds a quote, trimming text and author.
    ///
    /// A missing or blank author becomes [`UNKNOWN_AUTHOR`]. Tags are kept in
    /// provider order without normalization.
    pub fn new(
        text: impl AsRef<str>,
        author: Option<&str>,
        tags: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyQuoteText);
        }

        let author = author
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(UNKNOWN_AUTHOR);

        Ok(Self {
            text: text.to_owned(),
            author: author.to_owned(),
            tags,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Display for Quote {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" - {}", self.text, self.author)
    }
}
