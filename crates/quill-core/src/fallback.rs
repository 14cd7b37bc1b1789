//! Embedded quotes served once every remote source has been exhausted.

use std::sync::OnceLock;

use crate::Quote;

const FALLBACK_QUOTES: [(&str, &str); 7] = [
    (
        "Life is what happens when you're busy making other plans.",
        "John Lennon",
    ),
    (
        "The greatest glory in living lies not in never falling, but in rising every time we fall.",
        "Nelson Mandela",
    ),
    (
        "The way to get started is to quit talking and begin doing.",
        "Walt Disney",
    ),
    (
        "Your time is limited, so don't waste it living someone else's life.",
        "Steve Jobs",
    ),
    (
        "If life were predictable it would cease to be life, and be without flavor.",
        "Eleanor Roosevelt",
    ),
    (
        "If you look at what you have in life, you'll always have more. If you look at what you don't have in life, you'll never have enough.",
        "Oprah Winfrey",
    ),
    (
        "If you set your goals ridiculously high and it's a failure, you will fail above everyone else's success.",
        "James Cameron",
    ),
];

/// Read-only catalog of offline quotes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackCatalog;

impl FallbackCatalog {
    pub fn quotes(&self) -> &'static [Quote] {
        static QUOTES: OnceLock<Vec<Quote>> = OnceLock::new();
        QUOTES.get_or_init(|| {
            FALLBACK_QUOTES
                .iter()
                .map(|&(text, author)| {
                    Quote::new(text, Some(author), Vec::new()).expect("fallback quotes are valid")
                })
                .collect()
        })
    }

    /// Uniformly random member of the catalog.
    pub fn pick_random(&self) -> Quote {
        let quotes = self.quotes();
        quotes[fastrand::usize(..quotes.len())].clone()
    }

    pub fn contains(&self, quote: &Quote) -> bool {
        self.quotes().contains(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_at_least_five_attributed_quotes() {
        let quotes = FallbackCatalog.quotes();
        assert!(quotes.len() >= 5);
        assert!(quotes
            .iter()
            .all(|quote| !quote.author().is_empty() && quote.tags().is_empty()));
    }

    #[test]
    fn random_pick_is_a_catalog_member() {
        for _ in 0..50 {
            assert!(FallbackCatalog.contains(&FallbackCatalog.pick_random()));
        }
    }
}
