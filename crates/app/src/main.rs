use std::fmt;
use std::io::{self, BufRead, Write};

use chrono::Duration;

use catalog::{JsonCatalog, QuestionSource};
use quiz_core::engine::{QuizEngine, QuizPhase};
use quiz_core::model::{AnswerSymbol, LandmarkSet};
use services::{Clock, QuizLoopService};
use vision::GestureClassifier;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDuration { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDuration { raw } => {
                write!(f, "invalid --duration-secs value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- play    [--questions <path>] [--duration-secs <n>] [--no-shuffle]");
    eprintln!("  cargo run -p app -- gesture   # classify landmark JSON lines from stdin");
    eprintln!();
    eprintln!("Defaults for play:");
    eprintln!("  --questions data/questions.json");
    eprintln!("  --duration-secs 10");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS, QUIZ_DURATION_SECS");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Play,
    Gesture,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "play" => Some(Self::Play),
            "gesture" => Some(Self::Gesture),
            _ => None,
        }
    }
}

struct Args {
    questions: String,
    duration_secs: i64,
    shuffle: bool,
}

impl Args {
    fn parse_play(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut questions =
            std::env::var("QUIZ_QUESTIONS").unwrap_or_else(|_| "data/questions.json".into());
        let mut duration_secs = std::env::var("QUIZ_DURATION_SECS")
            .ok()
            .and_then(|value| value.parse::<i64>().ok())
            .unwrap_or(10);
        let mut shuffle = true;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    questions = require_value(args, "--questions")?;
                }
                "--duration-secs" => {
                    let value = require_value(args, "--duration-secs")?;
                    duration_secs = value
                        .parse()
                        .ok()
                        .filter(|n| *n > 0)
                        .ok_or(ArgsError::InvalidDuration { raw: value })?;
                }
                "--no-shuffle" => {
                    shuffle = false;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            questions,
            duration_secs,
            shuffle,
        })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: play when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Play,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Play,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            io::Error::new(io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    match cmd {
        Command::Play => {
            let mut iter = argv.into_iter();
            let parsed = Args::parse_play(&mut iter).map_err(|e| {
                eprintln!("{e}");
                print_usage();
                e
            })?;
            run_play(&parsed)
        }
        Command::Gesture => run_gesture(),
    }
}

/// Interactive terminal quiz using the manual key-answer path.
fn run_play(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = JsonCatalog::from_path(&args.questions);
    let questions = catalog.load()?;

    let engine = QuizEngine::new(questions)
        .with_shuffle(args.shuffle)
        .with_question_duration(Duration::seconds(args.duration_secs));
    let mut svc = QuizLoopService::new(Clock::default_clock(), engine);
    svc.start_session();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        match svc.engine().phase() {
            QuizPhase::WaitingAnswer => {
                let Some(question) = svc.engine().current_question() else {
                    break;
                };
                println!(
                    "\nQuestion {}/{}  (image: {:?}, audio: {:?})",
                    svc.engine().current_question_number(),
                    svc.engine().total_questions(),
                    question.image(),
                    question.audio(),
                );
                for (symbol, text) in question.options().iter() {
                    println!("  {symbol}) {text}");
                }
                print!("answer [a/b/c/d, q to quit] ({}s)> ", args.duration_secs);
                io::stdout().flush()?;

                let Some(line) = lines.next() else {
                    break;
                };
                let line = line?;
                let trimmed = line.trim();
                if trimmed.eq_ignore_ascii_case("q") {
                    break;
                }

                // An answer that arrives after the deadline is consumed
                // through the engine's timeout path, not scored.
                if svc.frame(None).timed_out {
                    println!("Time's up! The question counts as skipped.");
                    continue;
                }

                match trimmed.parse::<AnswerSymbol>() {
                    Ok(symbol) => {
                        if let Some(outcome) = svc.submit_manual(symbol) {
                            if outcome.is_correct {
                                println!("Correct!");
                            } else {
                                println!(
                                    "Wrong — the answer was {}.",
                                    outcome.correct_answer
                                );
                            }
                        }
                    }
                    Err(_) => println!("Please answer a, b, c or d."),
                }
            }
            QuizPhase::ShowingResult => {
                svc.dismiss_result();
            }
            QuizPhase::GameOver => break,
            QuizPhase::Idle => break,
        }
    }

    let stats = svc.engine().stats();
    println!(
        "\nFinished: {} correct out of {} answered ({} questions, {:.0}%).",
        stats.score, stats.answered_count, stats.total_questions, stats.percentage
    );
    Ok(())
}

/// Classify landmark sets read from stdin, one JSON array of 21 [x, y]
/// pairs per line. Prints the matched symbol or "none".
fn run_gesture() -> Result<(), Box<dyn std::error::Error>> {
    let classifier = GestureClassifier::default();
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let points: Vec<(i32, i32)> = match serde_json::from_str(trimmed) {
            Ok(points) => points,
            Err(err) => {
                eprintln!("skipping malformed line: {err}");
                continue;
            }
        };

        match LandmarkSet::from_points(&points) {
            Ok(set) => {
                let symbol = classifier.classify(Some(&set));
                println!("{}", symbol.map_or("none", |s| s.as_str()));
            }
            Err(err) => eprintln!("skipping line: {err}"),
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
