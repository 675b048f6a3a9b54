//! Shared error types for the services crate.

use thiserror::Error;

use catalog::CatalogError;

/// Errors emitted while bootstrapping a quiz session.
///
/// Once a session is running there are no fatal conditions: missing
/// landmarks and unmatched gestures are ordinary per-frame outcomes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
