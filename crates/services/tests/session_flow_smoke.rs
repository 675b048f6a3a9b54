use catalog::{InMemoryCatalog, QuestionSource};
use quiz_core::engine::QuizPhase;
use quiz_core::model::landmark_index::{INDEX_TIP, LITTLE_TIP, MIDDLE_TIP, RING_TIP, THUMB_TIP};
use quiz_core::model::{
    AnswerOptions, AnswerSymbol, LandmarkSet, MediaRef, Question, QuestionDraft, QuestionId,
};
use quiz_core::time::fixed_clock;
use services::QuizLoopService;
use vision::provider::{LandmarkProvider, ScriptedProvider};

fn build_question(id: u64, answer: AnswerSymbol) -> Question {
    QuestionDraft {
        id: QuestionId::new(id),
        image: MediaRef::from_file(format!("assets/images/{id}.jpg")).unwrap(),
        audio: MediaRef::from_file(format!("assets/audio/{id}.wav")).unwrap(),
        options: AnswerOptions::new("Alien", "Blade Runner", "Casablanca", "Dune").unwrap(),
        answer,
    }
    .build()
}

fn hand(thumb: i32, index: i32, middle: i32, ring: i32, little: i32) -> LandmarkSet {
    let mut points = vec![(0, 400); 21];
    points[THUMB_TIP] = (10, thumb);
    points[INDEX_TIP] = (20, index);
    points[MIDDLE_TIP] = (30, middle);
    points[RING_TIP] = (40, ring);
    points[LITTLE_TIP] = (50, little);
    LandmarkSet::from_points(&points).unwrap()
}

fn thumbs_up() -> LandmarkSet {
    hand(40, 200, 210, 220, 230)
}

fn fist() -> LandmarkSet {
    hand(90, 100, 102, 98, 101)
}

#[test]
fn gesture_session_runs_end_to_end() {
    let catalog = InMemoryCatalog::new(vec![
        build_question(1, AnswerSymbol::A),
        build_question(2, AnswerSymbol::B),
    ]);

    let questions = catalog.load().unwrap();
    let engine = quiz_core::QuizEngine::new(questions).with_shuffle(false);
    let mut svc = QuizLoopService::new(fixed_clock(), engine);
    svc.start_session();

    // Question 1: hold thumbs-up (A) until the debounce fires. Correct.
    let mut provider = ScriptedProvider::new();
    provider.push_repeated(Some(thumbs_up()), 3);

    let mut outcome = None;
    for _ in 0..3 {
        let frame = svc.frame(provider.next_frame());
        outcome = frame.submitted;
        svc.clock_mut().advance(chrono::Duration::milliseconds(300));
        if outcome.is_some() {
            break;
        }
    }
    let first = outcome.expect("held gesture should have submitted");
    assert!(first.is_correct);
    assert_eq!(first.submitted, AnswerSymbol::A);

    svc.dismiss_result();
    assert_eq!(svc.engine().current_question_number(), 2);

    // Question 2: hold a fist (D) against correct answer B. Wrong.
    let mut provider = ScriptedProvider::new();
    provider.push_repeated(Some(fist()), 3);

    let mut outcome = None;
    for _ in 0..3 {
        let frame = svc.frame(provider.next_frame());
        outcome = frame.submitted;
        svc.clock_mut().advance(chrono::Duration::milliseconds(300));
        if outcome.is_some() {
            break;
        }
    }
    let second = outcome.expect("held gesture should have submitted");
    assert!(!second.is_correct);
    assert_eq!(second.submitted, AnswerSymbol::D);
    assert_eq!(second.correct_answer, AnswerSymbol::B);

    svc.dismiss_result();
    assert!(svc.engine().is_game_over());

    let stats = svc.engine().stats();
    assert_eq!(stats.total_questions, 2);
    assert_eq!(stats.answered_count, 2);
    assert_eq!(stats.score, 1);
    assert_eq!(stats.percentage, 50.0);
    assert_eq!(stats.phase, "GameOver");
}

#[test]
fn session_times_out_to_game_over_without_input() {
    let catalog = InMemoryCatalog::new(vec![build_question(1, AnswerSymbol::C)]);
    let mut svc = QuizLoopService::from_source(fixed_clock(), &catalog).unwrap();
    svc.start_session();

    // No hand ever appears; step past the deadline one second at a time.
    let mut timed_out = false;
    for _ in 0..12 {
        let frame = svc.frame(None);
        timed_out |= frame.timed_out;
        svc.clock_mut().advance_secs(1);
    }

    assert!(timed_out);
    assert!(svc.engine().is_game_over());
    assert_eq!(svc.engine().answered_count(), 1);
    assert_eq!(svc.engine().score(), 0);
    assert_eq!(svc.engine().accuracy_percentage(), 0.0);
}

#[test]
fn empty_catalog_session_is_game_over_at_start() {
    let catalog = InMemoryCatalog::default();
    let mut svc = QuizLoopService::from_source(fixed_clock(), &catalog).unwrap();
    svc.start_session();

    assert_eq!(svc.engine().phase(), QuizPhase::GameOver);
    let frame = svc.frame(None);
    assert!(frame.game_over);
    assert!(!frame.timed_out);
}
