use tracing::debug;

use catalog::QuestionSource;
use quiz_core::Clock;
use quiz_core::engine::{AnswerOutcome, QuizEngine, QuizPhase};
use quiz_core::model::{AnswerSymbol, LandmarkSet};
use vision::{GestureClassifier, GestureHold};

use crate::error::SessionError;

//
// ─── FRAME OUTCOME ─────────────────────────────────────────────────────────────
//

/// What a single frame tick did to the session.
///
/// The presentation layer uses this to stop question audio on a timeout and
/// to switch to the result or game-over screens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutcome {
    /// The live question's deadline lapsed this frame and was consumed.
    pub timed_out: bool,
    /// A held gesture fired and was scored.
    pub submitted: Option<AnswerOutcome>,
    /// The session has no questions left.
    pub game_over: bool,
}

//
// ─── LOOP SERVICE ──────────────────────────────────────────────────────────────
//

/// Frame-driven orchestration of one quiz session.
///
/// Wires landmark frames through classifier and debounce into the engine,
/// and maps user intents (manual keys, result dismissal, retry, menu) onto
/// engine transitions. Owns the clock so the engine itself stays free of
/// ambient time.
#[derive(Debug, Clone)]
pub struct QuizLoopService {
    clock: Clock,
    engine: QuizEngine,
    classifier: GestureClassifier,
    hold: GestureHold,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, engine: QuizEngine) -> Self {
        Self {
            clock,
            engine,
            classifier: GestureClassifier::default(),
            hold: GestureHold::new(),
        }
    }

    /// Build a service by loading the catalog from the given source.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Catalog` when the source fails to load.
    pub fn from_source(clock: Clock, source: &dyn QuestionSource) -> Result<Self, SessionError> {
        let questions = source.load()?;
        Ok(Self::new(clock, QuizEngine::new(questions)))
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: GestureClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    #[must_use]
    pub fn with_hold(mut self, hold: GestureHold) -> Self {
        self.hold = hold;
        self
    }

    //
    // ─── INTENTS ───────────────────────────────────────────────────────────────
    //

    /// Menu-start intent.
    pub fn start_session(&mut self) {
        self.hold.clear();
        self.engine.start_session(self.clock.now());
        debug!(
            total = self.engine.total_questions(),
            "session started"
        );
    }

    /// Per-frame drive: timeout check, then classify, debounce, submit.
    pub fn frame(&mut self, landmarks: Option<LandmarkSet>) -> FrameOutcome {
        let now = self.clock.now();

        let timed_out = self.engine.tick(now);
        if timed_out {
            // A hold aimed at the lapsed question must not carry into the next.
            self.hold.clear();
            debug!(
                question = self.engine.current_question_number(),
                "question timed out"
            );
        }

        let mut submitted = None;
        if self.engine.phase() == QuizPhase::WaitingAnswer {
            let gesture = self.classifier.classify(landmarks.as_ref());
            if let Some(symbol) = self.hold.observe(gesture, now) {
                submitted = self.engine.submit_answer(symbol);
                if let Some(outcome) = submitted {
                    debug!(
                        symbol = %outcome.submitted,
                        correct = outcome.is_correct,
                        "gesture answer submitted"
                    );
                }
            }
        }

        FrameOutcome {
            timed_out,
            submitted,
            game_over: self.engine.is_game_over(),
        }
    }

    /// Key-press answer path; bypasses the gesture debounce.
    pub fn submit_manual(&mut self, symbol: AnswerSymbol) -> Option<AnswerOutcome> {
        self.hold.clear();
        self.engine.submit_answer(symbol)
    }

    /// Result-screen-dismissed intent.
    pub fn dismiss_result(&mut self) {
        self.engine.advance(self.clock.now());
    }

    /// Retry intent: fresh shuffle, immediate restart.
    pub fn retry(&mut self) {
        self.engine.reset();
        self.start_session();
    }

    /// Return-to-menu intent: abandon the session, stay idle.
    pub fn return_to_menu(&mut self) {
        self.engine.reset();
        self.hold.clear();
    }

    //
    // ─── QUERIES ───────────────────────────────────────────────────────────────
    //

    /// Read-only engine access for rendering queries.
    #[must_use]
    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    /// The gesture currently being held, for on-screen feedback.
    #[must_use]
    pub fn held_gesture(&self) -> Option<AnswerSymbol> {
        self.hold.current()
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Mutable clock access; lets tests step a fixed clock between frames.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
