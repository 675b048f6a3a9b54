//! Question-catalog boundary.
//!
//! The session engine is constructed against a plain `Vec<Question>`; this
//! trait is where those questions come from. Loader failures surface here,
//! before any session exists, and never touch engine state.

use thiserror::Error;

use quiz_core::model::{MediaRefError, Question, QuestionError, QuestionId};

/// Errors emitted while loading a question catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("failed to read question catalog")]
    Io(#[from] std::io::Error),

    #[error("malformed question catalog")]
    Parse(#[from] serde_json::Error),

    #[error("question {id}: answer must be one of A/B/C/D, got {raw:?}")]
    InvalidAnswer { id: u64, raw: String },

    #[error("question {id}: {source}")]
    InvalidOptions {
        id: u64,
        #[source]
        source: QuestionError,
    },

    #[error("question {id}: {source}")]
    InvalidMedia {
        id: u64,
        #[source]
        source: MediaRefError,
    },

    #[error("duplicate question id {0}")]
    DuplicateId(QuestionId),
}

/// Read-only source of question records.
pub trait QuestionSource {
    /// Load the full ordered catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when the backing data is unreadable or any
    /// record fails validation.
    fn load(&self) -> Result<Vec<Question>, CatalogError>;
}

/// Wraps an already-built question list; for tests and embedded demos.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    questions: Vec<Question>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl QuestionSource for InMemoryCatalog {
    fn load(&self) -> Result<Vec<Question>, CatalogError> {
        Ok(self.questions.clone())
    }
}
