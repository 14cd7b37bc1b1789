use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Quote category (tag) with a display label and a lowercase filter key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    name: String,
    slug: String,
}

impl Category {
    /// Builds a category, normalizing the slug to trimmed lowercase.
    ///
    /// A blank name falls back to the normalized slug.
    pub fn new(name: impl AsRef<str>, slug: impl AsRef<str>) -> Result<Self, ValidationError> {
        let slug = Self::normalize_slug(slug.as_ref())?;
        let name = name.as_ref().trim();
        let name = if name.is_empty() {
            slug.clone()
        } else {
            name.to_owned()
        };

        Ok(Self { name, slug })
    }

    /// Category known only by its slug, used when the directory has no entry.
    pub fn from_slug(slug: impl AsRef<str>) -> Result<Self, ValidationError> {
        Self::new("", slug)
    }

    pub fn normalize_slug(input: &str) -> Result<String, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyCategorySlug);
        }
        Ok(trimmed.to_lowercase())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
