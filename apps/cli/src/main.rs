//! hanci — terminal companion for studying Chinese vocabulary.
//!
//! Browses the word list, runs flashcard/quiz/speech practice, and keeps
//! study state in a local SQLite key-value store.

mod commands;
mod db;
mod platform;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hanci_core::types::QuizKind;
use hanci_core::{MemoryStore, PronunciationScorer, ScoreWeights, WordRecordStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use db::SqliteStore;
use platform::{ArgSpeechSource, LocalAudioPlayer, LogReminderScheduler};

/// Word list bundled as a fallback so the tool works out of the box.
const BUNDLED_WORDS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.csv"));

#[derive(Parser, Debug)]
#[command(name = "hanci")]
#[command(version, about = "Chinese vocabulary study tool", long_about = None)]
struct Cli {
    /// Word list CSV (defaults to the data dir, then the bundled list)
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Study state database (defaults to the local data dir)
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Directory holding per-word audio files
    #[arg(long, global = true, value_name = "DIR")]
    audio_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List words
    List {
        /// Only words not yet studied
        #[arg(long, conflicts_with = "favorites")]
        unstudied: bool,
        /// Only favorited words
        #[arg(long)]
        favorites: bool,
    },
    /// Search words by any text field
    Search { query: String },
    /// Show one word in full
    Show {
        /// 1-based sequence index
        seq: usize,
        /// Play the word audio
        #[arg(long)]
        play: bool,
        /// Play the example-sentence audio
        #[arg(long)]
        play_example: bool,
    },
    /// Mark words studied, favorite them, or review flashcards
    Study {
        #[command(subcommand)]
        action: StudyAction,
    },
    /// Daily and practice quizzes
    Quiz {
        #[command(subcommand)]
        action: QuizAction,
    },
    /// Score a spoken attempt against a word
    Speak {
        /// 1-based sequence index
        seq: usize,
        /// Recognized text from the speech recognizer
        #[arg(long)]
        recognized: String,
        /// Recognizer confidence in [0, 1]
        #[arg(long, default_value_t = 1.0)]
        confidence: f64,
        /// Score against the example sentence instead of the headword
        #[arg(long)]
        example: bool,
        /// Weight on text similarity (confidence gets the remainder)
        #[arg(long, default_value_t = 0.6)]
        similarity_weight: f64,
    },
    /// Show study statistics
    Stats,
    /// Read or change settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand, Debug)]
enum StudyAction {
    /// Mark a word as studied
    Mark { seq: usize },
    /// Toggle a word's favorite flag
    Favorite { seq: usize },
    /// Record a flashcard review
    Card {
        seq: usize,
        /// The card was answered correctly
        #[arg(long, conflicts_with = "wrong", required_unless_present = "wrong")]
        correct: bool,
        /// The card was answered incorrectly
        #[arg(long)]
        wrong: bool,
    },
}

#[derive(Subcommand, Debug)]
enum QuizAction {
    /// Today's quiz (same question all day)
    Daily {
        /// Answer by option number (1-4)
        #[arg(long)]
        answer: Option<usize>,
    },
    /// A fresh practice question
    Practice {
        /// Question kind: meaning-to-word, word-to-meaning,
        /// pronunciation-to-word, example-to-meaning
        #[arg(long, default_value = "word-to-meaning")]
        kind: String,
        /// Answer by option number (1-4)
        #[arg(long)]
        answer: Option<usize>,
    },
}

#[derive(Subcommand, Debug)]
enum SettingsAction {
    /// Show or set the theme (light, dark, toggle)
    Theme { value: Option<String> },
    /// Show or set the daily reminder time (HH:MM)
    Remind {
        time: Option<String>,
        /// Disable the reminder
        #[arg(long)]
        off: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut store = open_store(cli.data.as_deref(), cli.db.as_deref());
    let audio = LocalAudioPlayer::new(
        cli.audio_dir
            .clone()
            .unwrap_or_else(|| data_dir().join("audio")),
    );

    match cli.command {
        Command::List {
            unstudied,
            favorites,
        } => commands::words::list(&store, unstudied, favorites),
        Command::Search { query } => commands::words::search(&store, &query),
        Command::Show {
            seq,
            play,
            play_example,
        } => commands::words::show(&store, seq, play, play_example, &audio),
        Command::Study { action } => match action {
            StudyAction::Mark { seq } => commands::study::mark(&mut store, seq),
            StudyAction::Favorite { seq } => commands::study::favorite(&mut store, seq),
            StudyAction::Card { seq, correct, .. } => {
                commands::study::card(&mut store, seq, correct)
            }
        },
        Command::Quiz { action } => match action {
            QuizAction::Daily { answer } => commands::quiz::daily(&mut store, answer),
            QuizAction::Practice { kind, answer } => {
                let kind = QuizKind::from_str(&kind)
                    .ok_or_else(|| anyhow::anyhow!("unknown quiz kind {kind:?}"))?;
                commands::quiz::practice(&mut store, kind, answer)
            }
        },
        Command::Speak {
            seq,
            recognized,
            confidence,
            example,
            similarity_weight,
        } => {
            let weights = ScoreWeights::new(similarity_weight, 1.0 - similarity_weight);
            let scorer = PronunciationScorer::new(weights);
            let mut speech = ArgSpeechSource::new(recognized, confidence);
            commands::speech::speak(&mut store, &scorer, &mut speech, seq, example)
        }
        Command::Stats => commands::stats::show(&store),
        Command::Settings { action } => match action {
            SettingsAction::Theme { value } => {
                commands::settings::theme(store.kv(), value.as_deref())
            }
            SettingsAction::Remind { time, off } => commands::settings::remind(
                store.kv(),
                &LogReminderScheduler,
                time.as_deref(),
                off,
            ),
        },
    }
}

fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hanci")
}

/// Open the word store: explicit paths win, then the data dir, then the
/// bundled word list with an in-memory state store. Construction never
/// fails; a missing word file just means an empty or bundled list.
fn open_store(data: Option<&std::path::Path>, db: Option<&std::path::Path>) -> WordRecordStore {
    let db_path = db
        .map(PathBuf::from)
        .unwrap_or_else(|| data_dir().join("study.db"));
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }

    let kv: Box<dyn hanci_core::KeyValueStore> = match SqliteStore::open(&db_path) {
        Ok(store) => Box::new(store),
        Err(err) => {
            tracing::warn!(%err, ?db_path, "falling back to in-memory study state");
            Box::new(MemoryStore::new())
        }
    };

    match data {
        Some(path) => {
            if !path.exists() {
                tracing::warn!(?path, "word list not found, starting empty");
            }
            WordRecordStore::from_file(path, kv)
        }
        None => {
            let default_path = data_dir().join("words.csv");
            if default_path.exists() {
                WordRecordStore::from_file(default_path, kv)
            } else {
                WordRecordStore::from_content(BUNDLED_WORDS, kv)
            }
        }
    }
}
