#![forbid(unsafe_code)]

pub mod error;
pub mod loop_service;

pub use quiz_core::Clock;

pub use error::SessionError;
pub use loop_service::{FrameOutcome, QuizLoopService};
