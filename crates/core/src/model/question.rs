use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::media::MediaRef;
use crate::model::symbol::AnswerSymbol;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("option {symbol} text cannot be empty")]
    EmptyOptionText { symbol: AnswerSymbol },
}

//
// ─── ANSWER OPTIONS ────────────────────────────────────────────────────────────
//

/// Display text for each of the four answer symbols.
///
/// One non-empty entry per symbol by construction, so "the correct answer is
/// always a key of the options" holds structurally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOptions {
    a: String,
    b: String,
    c: String,
    d: String,
}

impl AnswerOptions {
    /// Creates validated answer options.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyOptionText` if any text is blank.
    pub fn new(
        a: impl Into<String>,
        b: impl Into<String>,
        c: impl Into<String>,
        d: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let options = Self {
            a: a.into().trim().to_string(),
            b: b.into().trim().to_string(),
            c: c.into().trim().to_string(),
            d: d.into().trim().to_string(),
        };
        for symbol in AnswerSymbol::ALL {
            if options.text_for(symbol).is_empty() {
                return Err(QuestionError::EmptyOptionText { symbol });
            }
        }
        Ok(options)
    }

    /// Display text for the given symbol.
    #[must_use]
    pub fn text_for(&self, symbol: AnswerSymbol) -> &str {
        match symbol {
            AnswerSymbol::A => &self.a,
            AnswerSymbol::B => &self.b,
            AnswerSymbol::C => &self.c,
            AnswerSymbol::D => &self.d,
        }
    }

    /// Iterate the options in display order.
    pub fn iter(&self) -> impl Iterator<Item = (AnswerSymbol, &str)> {
        AnswerSymbol::ALL
            .into_iter()
            .map(move |symbol| (symbol, self.text_for(symbol)))
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Unvalidated question data as it arrives from a catalog source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub image: MediaRef,
    pub audio: MediaRef,
    pub options: AnswerOptions,
    pub answer: AnswerSymbol,
}

impl QuestionDraft {
    /// Seal the draft into an immutable `Question`.
    ///
    /// `AnswerOptions` and `MediaRef` already carry their own validation, so
    /// this is where any future cross-field checks belong.
    #[must_use]
    pub fn build(self) -> Question {
        Question {
            id: self.id,
            image: self.image,
            audio: self.audio,
            options: self.options,
            answer: self.answer,
        }
    }
}

/// A single quiz question, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    image: MediaRef,
    audio: MediaRef,
    options: AnswerOptions,
    answer: AnswerSymbol,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn image(&self) -> &MediaRef {
        &self.image
    }

    #[must_use]
    pub fn audio(&self) -> &MediaRef {
        &self.audio
    }

    #[must_use]
    pub fn options(&self) -> &AnswerOptions {
        &self.options
    }

    #[must_use]
    pub fn answer(&self) -> AnswerSymbol {
        self.answer
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
