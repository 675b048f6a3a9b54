use chrono::{DateTime, Duration, Utc};
use rand::rng;
use rand::seq::SliceRandom;

use crate::model::{AnswerSymbol, Question};

/// Default per-question time budget, in seconds.
pub const DEFAULT_QUESTION_DURATION_SECS: i64 = 10;

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// The engine's current discrete mode of operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Before a session starts.
    Idle,
    /// A question is live and accepting input.
    WaitingAnswer,
    /// Feedback for the last submission is on screen.
    ShowingResult,
    /// All questions exhausted.
    GameOver,
}

impl QuizPhase {
    /// Name for stats display.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::WaitingAnswer => "WaitingAnswer",
            Self::ShowingResult => "ShowingResult",
            Self::GameOver => "GameOver",
        }
    }
}

//
// ─── RESULTS & STATS ───────────────────────────────────────────────────────────
//

/// Outcome of a single answer submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub correct_answer: AnswerSymbol,
    pub submitted: AnswerSymbol,
}

/// Aggregate snapshot of session progress, useful for UI.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStats {
    pub total_questions: usize,
    pub answered_count: u32,
    pub score: u32,
    pub percentage: f64,
    pub phase: &'static str,
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Finite-state progression of one quiz attempt.
///
/// Owns its shuffled copy of the question catalog and steps through it via
/// `start_session` / `submit_answer` / `advance` / `tick`. Scoring and
/// progression are deliberately split: `submit_answer` never moves the
/// cursor, so the driving loop can hold a result screen before calling
/// `advance`. The timeout path in `tick` reuses the same cursor logic, so
/// manual and timed progression cannot diverge.
///
/// All deadline-touching transitions take an explicit `now`; the engine
/// never reads a clock.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: Vec<Question>,
    cursor: usize,
    score: u32,
    answered_count: u32,
    phase: QuizPhase,
    deadline: Option<DateTime<Utc>>,
    question_duration: Duration,
    shuffle: bool,
}

impl QuizEngine {
    /// Create an engine over the given catalog, idle until `start_session`.
    ///
    /// The engine owns its copy of the questions; the order is randomized on
    /// every `start_session`/`reset` unless disabled via `with_shuffle`.
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            cursor: 0,
            score: 0,
            answered_count: 0,
            phase: QuizPhase::Idle,
            deadline: None,
            question_duration: Duration::seconds(DEFAULT_QUESTION_DURATION_SECS),
            shuffle: true,
        }
    }

    /// Enable or disable shuffling of the question order.
    ///
    /// Tests and fixed-order demos turn this off.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Override the per-question time budget.
    #[must_use]
    pub fn with_question_duration(mut self, duration: Duration) -> Self {
        self.question_duration = duration;
        self
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────────
    //

    /// Start (or restart) a session: zeroed counters, reshuffled questions,
    /// first deadline armed at `now + question_duration`.
    ///
    /// Valid from any phase. With an empty catalog the session is complete
    /// before it begins, so the engine goes straight to `GameOver`.
    pub fn start_session(&mut self, now: DateTime<Utc>) {
        self.cursor = 0;
        self.score = 0;
        self.answered_count = 0;
        self.shuffle_questions();

        if self.questions.is_empty() {
            self.phase = QuizPhase::GameOver;
            self.deadline = None;
        } else {
            self.phase = QuizPhase::WaitingAnswer;
            self.deadline = Some(now + self.question_duration);
        }
    }

    /// Score a submission against the current question.
    ///
    /// Returns `None` (state unchanged) unless a question is live. On a live
    /// question: score bumped iff correct, `answered_count` always bumped,
    /// deadline disarmed, phase moves to `ShowingResult`. The cursor does
    /// NOT advance here.
    pub fn submit_answer(&mut self, symbol: AnswerSymbol) -> Option<AnswerOutcome> {
        if self.phase != QuizPhase::WaitingAnswer {
            return None;
        }
        let correct_answer = self.current_question()?.answer();

        let is_correct = symbol == correct_answer;
        if is_correct {
            self.score += 1;
        }
        self.answered_count += 1;
        self.phase = QuizPhase::ShowingResult;
        self.deadline = None;

        Some(AnswerOutcome {
            is_correct,
            correct_answer,
            submitted: symbol,
        })
    }

    /// Move to the next question after a result screen.
    ///
    /// No-op outside `ShowingResult`; the timeout path in `tick` shares the
    /// underlying cursor logic instead of calling this.
    pub fn advance(&mut self, now: DateTime<Utc>) {
        if self.phase != QuizPhase::ShowingResult {
            return;
        }
        self.advance_cursor(now);
    }

    /// Per-frame timeout check.
    ///
    /// Effective only in `WaitingAnswer` with an armed deadline. When `now`
    /// has reached the deadline the question is consumed without score
    /// credit and the cursor advances; returns true so the driving loop can
    /// stop question audio. Calling repeatedly with the same pre-deadline
    /// `now` changes nothing.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        if self.phase != QuizPhase::WaitingAnswer {
            return false;
        }
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }

        // Time is up: the question counts toward completion, not correctness.
        self.answered_count += 1;
        self.advance_cursor(now);
        true
    }

    /// Return to a freshly-seeded idle state, ready for `start_session`.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.score = 0;
        self.answered_count = 0;
        self.phase = QuizPhase::Idle;
        self.deadline = None;
        self.shuffle_questions();
    }

    fn advance_cursor(&mut self, now: DateTime<Utc>) {
        self.cursor += 1;

        if self.cursor >= self.questions.len() {
            self.phase = QuizPhase::GameOver;
            self.deadline = None;
        } else {
            self.phase = QuizPhase::WaitingAnswer;
            self.deadline = Some(now + self.question_duration);
        }
    }

    fn shuffle_questions(&mut self) {
        if self.shuffle {
            let mut rng = rng();
            self.questions.as_mut_slice().shuffle(&mut rng);
        }
    }

    //
    // ─── QUERIES ───────────────────────────────────────────────────────────────
    //

    /// The question currently being presented, if any.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_game_over() {
            return None;
        }
        self.questions.get(self.cursor)
    }

    /// 1-indexed number of the current question.
    #[must_use]
    pub fn current_question_number(&self) -> usize {
        self.cursor + 1
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.cursor >= self.questions.len()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn answered_count(&self) -> u32 {
        self.answered_count
    }

    /// Share of answered questions that were correct, as 0..=100.
    ///
    /// Zero when nothing has been answered yet.
    #[must_use]
    pub fn accuracy_percentage(&self) -> f64 {
        if self.answered_count == 0 {
            return 0.0;
        }
        100.0 * f64::from(self.score) / f64::from(self.answered_count)
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// Deadline of the live question; armed only while `WaitingAnswer`.
    #[must_use]
    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    #[must_use]
    pub fn question_duration(&self) -> Duration {
        self.question_duration
    }

    /// Returns a snapshot of the current session progress.
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            total_questions: self.total_questions(),
            answered_count: self.answered_count,
            score: self.score,
            percentage: self.accuracy_percentage(),
            phase: self.phase.name(),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
