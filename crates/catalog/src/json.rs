//! JSON flat-file catalog.
//!
//! The file is an array of raw records; each record is validated into a
//! domain `Question` on load. Answer labels are trimmed and uppercased
//! before parsing so hand-edited files stay forgiving.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use quiz_core::model::{AnswerOptions, MediaRef, Question, QuestionDraft, QuestionId};

use crate::source::{CatalogError, QuestionSource};

/// Raw catalog record as it appears on disk.
#[derive(Debug, Clone, Deserialize)]
struct QuestionRecord {
    id: u64,
    image: String,
    audio: String,
    option_a: String,
    option_b: String,
    option_c: String,
    option_d: String,
    answer: String,
}

impl QuestionRecord {
    fn into_question(self) -> Result<Question, CatalogError> {
        let id = self.id;

        let answer = self
            .answer
            .trim()
            .to_uppercase()
            .parse()
            .map_err(|_| CatalogError::InvalidAnswer {
                id,
                raw: self.answer.clone(),
            })?;

        let options = AnswerOptions::new(self.option_a, self.option_b, self.option_c, self.option_d)
            .map_err(|source| CatalogError::InvalidOptions { id, source })?;

        let image =
            MediaRef::parse(&self.image).map_err(|source| CatalogError::InvalidMedia { id, source })?;
        let audio =
            MediaRef::parse(&self.audio).map_err(|source| CatalogError::InvalidMedia { id, source })?;

        Ok(QuestionDraft {
            id: QuestionId::new(id),
            image,
            audio,
            options,
            answer,
        }
        .build())
    }
}

fn records_into_questions(records: Vec<QuestionRecord>) -> Result<Vec<Question>, CatalogError> {
    let mut seen = HashSet::new();
    let mut questions = Vec::with_capacity(records.len());

    for record in records {
        let question = record.into_question()?;
        if !seen.insert(question.id()) {
            return Err(CatalogError::DuplicateId(question.id()));
        }
        questions.push(question);
    }

    Ok(questions)
}

/// Parse a catalog from any reader.
///
/// # Errors
///
/// Returns `CatalogError` on malformed JSON or invalid records.
pub fn parse_reader(reader: impl Read) -> Result<Vec<Question>, CatalogError> {
    let records: Vec<QuestionRecord> = serde_json::from_reader(reader)?;
    records_into_questions(records)
}

/// Parse a catalog from an in-memory string; keeps tests off the filesystem.
///
/// # Errors
///
/// Returns `CatalogError` on malformed JSON or invalid records.
pub fn parse_str(raw: &str) -> Result<Vec<Question>, CatalogError> {
    let records: Vec<QuestionRecord> = serde_json::from_str(raw)?;
    records_into_questions(records)
}

/// Question catalog backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuestionSource for JsonCatalog {
    fn load(&self) -> Result<Vec<Question>, CatalogError> {
        let file = File::open(&self.path)?;
        parse_reader(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::AnswerSymbol;

    fn record(id: u64, answer: &str) -> String {
        format!(
            r#"{{
                "id": {id},
                "image": "assets/images/{id}.jpg",
                "audio": "assets/audio/{id}.wav",
                "option_a": "Alien",
                "option_b": "Blade Runner",
                "option_c": "Casablanca",
                "option_d": "Dune",
                "answer": "{answer}"
            }}"#
        )
    }

    #[test]
    fn parses_a_valid_catalog() {
        let raw = format!("[{},{}]", record(1, "A"), record(2, "D"));
        let questions = parse_str(&raw).unwrap();

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id(), QuestionId::new(1));
        assert_eq!(questions[0].answer(), AnswerSymbol::A);
        assert_eq!(questions[1].answer(), AnswerSymbol::D);
        assert_eq!(
            questions[0].options().text_for(AnswerSymbol::B),
            "Blade Runner"
        );
    }

    #[test]
    fn answer_labels_are_normalized() {
        let raw = format!("[{}]", record(1, " b "));
        let questions = parse_str(&raw).unwrap();
        assert_eq!(questions[0].answer(), AnswerSymbol::B);
    }

    #[test]
    fn url_media_references_are_accepted() {
        let raw = r#"[{
            "id": 7,
            "image": "https://example.com/poster.jpg",
            "audio": "assets/audio/7.wav",
            "option_a": "Alien",
            "option_b": "Blade Runner",
            "option_c": "Casablanca",
            "option_d": "Dune",
            "answer": "C"
        }]"#;
        let questions = parse_str(raw).unwrap();
        assert!(questions[0].image().as_url().is_some());
        assert!(questions[0].audio().as_path().is_some());
    }

    #[test]
    fn rejects_unknown_answer_label() {
        let raw = format!("[{}]", record(3, "E"));
        let err = parse_str(&raw).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidAnswer { id: 3, .. }));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let raw = format!("[{},{}]", record(5, "A"), record(5, "B"));
        let err = parse_str(&raw).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == QuestionId::new(5)));
    }

    #[test]
    fn rejects_blank_option_text() {
        let raw = r#"[{
            "id": 9,
            "image": "assets/images/9.jpg",
            "audio": "assets/audio/9.wav",
            "option_a": "Alien",
            "option_b": "   ",
            "option_c": "Casablanca",
            "option_d": "Dune",
            "answer": "A"
        }]"#;
        let err = parse_str(raw).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidOptions { id: 9, .. }));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            parse_str("not json").unwrap_err(),
            CatalogError::Parse(_)
        ));
    }
}
