//! Core library for the hanci vocabulary study tools.
//!
//! Provides:
//! - Fixed-schema word list parser (comma-delimited, never fails)
//! - Word record store with navigation, filtering, and studied/favorite sets
//! - Pronunciation scorer (Levenshtein similarity + recognizer confidence)
//! - Deterministic daily quiz selection and practice questions
//! - Key-value persistence port with an in-memory implementation

pub mod error;
pub mod parser;
pub mod platform;
pub mod quiz;
pub mod scorer;
pub mod segment;
pub mod settings;
pub mod state;
pub mod store;
pub mod types;

pub use error::{PlatformError, Result, StoreError};
pub use parser::{parse_records, parse_row};
pub use quiz::{practice_question, select_for_day, todays_quiz, DayRng};
pub use scorer::{levenshtein_distance, similarity, PronunciationScorer, ScoreWeights};
pub use segment::segment;
pub use settings::{ReminderSettings, Theme};
pub use state::{KeyValueStore, MemoryStore, StudyState};
pub use store::WordRecordStore;
pub use types::{
    DailyQuiz, FlashcardStats, Grade, PracticeQuestion, PronunciationResult, QuizKind, QuizStats,
    RecordId, SpeechStats, TokenFeedback, TokenScore, WordRecord,
};
