pub mod quotable;
pub mod typefit;

pub use quotable::{QuotableAdapter, DEFAULT_QUOTABLE_URL};
pub use typefit::{TypeFitAdapter, DEFAULT_TYPEFIT_URL};
