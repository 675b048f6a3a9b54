#![forbid(unsafe_code)]

pub mod json;
pub mod source;

pub use json::JsonCatalog;
pub use source::{CatalogError, InMemoryCatalog, QuestionSource};
