#![forbid(unsafe_code)]

pub mod classifier;
pub mod debounce;
pub mod provider;

pub use classifier::{ClassifierConfig, GestureClassifier};
pub use debounce::GestureHold;
pub use provider::{LandmarkProvider, ScriptedProvider};
