mod ids;
mod landmark;
mod media;
mod question;
mod symbol;

pub use ids::QuestionId;
pub use landmark::{LANDMARK_COUNT, Landmark, LandmarkError, LandmarkSet, landmark_index};
pub use media::{MediaRef, MediaRefError};
pub use question::{AnswerOptions, Question, QuestionDraft, QuestionError};
pub use symbol::{AnswerSymbol, ParseSymbolError};
