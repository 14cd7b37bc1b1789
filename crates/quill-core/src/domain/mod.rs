//! # Domain Models
//!
//! Canonical domain types shared by every quote source.
//!
//! ## Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Quote`] | Quote text, author and tag list |
//! | [`Category`] | Display label plus normalized filter slug |
//!
//! ## Validation
//!
//! Both types enforce their invariants at construction time:
//!
//! ```rust
//! use quill_core::{Category, Quote, ValidationError};
//!
//! let quote = Quote::new("Stay hungry.", None, Vec::new()).unwrap();
//! assert_eq!(quote.author(), "Unknown");
//!
//! let empty = Quote::new("   ", Some("Anon"), Vec::new());
//! assert!(matches!(empty, Err(ValidationError::EmptyQuoteText)));
//!
//! let category = Category::new("Famous Quotes", " Famous-Quotes ").unwrap();
//! assert_eq!(category.slug(), "famous-quotes");
//! ```

mod category;
mod quote;

pub use category::Category;
pub use quote::{Quote, UNKNOWN_AUTHOR};
