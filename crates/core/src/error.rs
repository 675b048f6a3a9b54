use thiserror::Error;

use crate::model::{LandmarkError, MediaRefError, QuestionError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    MediaRef(#[from] MediaRefError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Landmark(#[from] LandmarkError),
}
