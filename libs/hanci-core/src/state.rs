//! Persisted study state behind an abstract key-value port.
//!
//! The original application kept studied/favorite sets and per-mode counters
//! in a flat key-value store. The port here mirrors that shape: string keys,
//! JSON-encoded structured values, and a read policy of "corrupt or missing
//! decodes to the default" so persistence problems never surface as errors.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::types::{FlashcardStats, QuizKind, QuizStats, RecordId, SpeechStats};

/// Keys used by the core for persisted entries.
pub mod keys {
    pub const STUDIED_WORDS: &str = "studied_words";
    pub const FAVORITE_WORDS: &str = "favorite_words";
    pub const QUIZ_STATS: &str = "quiz_stats";
    pub const SPEECH_STATS: &str = "speech_practice_stats";
    pub const FLASHCARD_STATS: &str = "flashcard_stats";
    pub const DAILY_QUIZ: &str = "daily_quiz";
    pub const THEME: &str = "selected_theme";
    pub const REMINDER: &str = "reminder_settings";
}

/// Flat key-value persistence port. Any embedded or file-backed store
/// satisfies it; values are opaque strings at this level.
pub trait KeyValueStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>>;
    fn set_raw(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Read a structured value, treating any read or decode failure as absence.
pub fn get_value<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    store
        .get_raw(key)
        .ok()
        .flatten()
        .and_then(|raw| serde_json::from_str(&raw).ok())
}

/// Write a structured value as JSON.
pub fn set_value<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    store.set_raw(key, &serde_json::to_string(value)?)
}

/// In-memory store for tests and as a fallback when no database is wanted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().expect("store lock").get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .expect("store lock")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().expect("store lock").remove(key);
        Ok(())
    }
}

/// Mutable study state: studied/favorite sets plus per-mode counters.
/// Loaded once from the store, flushed back after every mutation.
pub struct StudyState {
    studied: HashSet<RecordId>,
    favorites: HashSet<RecordId>,
    quiz: QuizStats,
    speech: SpeechStats,
    flashcards: FlashcardStats,
    store: Box<dyn KeyValueStore>,
}

impl StudyState {
    /// Load prior state from the store; anything unreadable falls back to
    /// empty sets and zero counters.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let studied = get_value(store.as_ref(), keys::STUDIED_WORDS).unwrap_or_default();
        let favorites = get_value(store.as_ref(), keys::FAVORITE_WORDS).unwrap_or_default();
        let quiz = get_value(store.as_ref(), keys::QUIZ_STATS).unwrap_or_default();
        let speech = get_value(store.as_ref(), keys::SPEECH_STATS).unwrap_or_default();
        let flashcards = get_value(store.as_ref(), keys::FLASHCARD_STATS).unwrap_or_default();

        Self {
            studied,
            favorites,
            quiz,
            speech,
            flashcards,
            store,
        }
    }

    /// Access the underlying key-value store (shared with the daily-quiz
    /// cache and settings).
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Mark a record studied. Idempotent; the set only grows.
    pub fn mark_studied(&mut self, id: RecordId) -> Result<()> {
        if self.studied.insert(id) {
            set_value(self.store.as_ref(), keys::STUDIED_WORDS, &self.studied)?;
        }
        Ok(())
    }

    pub fn is_studied(&self, id: RecordId) -> bool {
        self.studied.contains(&id)
    }

    /// Toggle a record's favorite flag, returning the new state.
    pub fn toggle_favorite(&mut self, id: RecordId) -> Result<bool> {
        let now_favorite = if self.favorites.contains(&id) {
            self.favorites.remove(&id);
            false
        } else {
            self.favorites.insert(id);
            true
        };
        set_value(self.store.as_ref(), keys::FAVORITE_WORDS, &self.favorites)?;
        Ok(now_favorite)
    }

    pub fn is_favorite(&self, id: RecordId) -> bool {
        self.favorites.contains(&id)
    }

    pub fn studied_count(&self) -> usize {
        self.studied.len()
    }

    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    /// Record a quiz answer under its kind.
    pub fn record_quiz_answer(
        &mut self,
        kind: QuizKind,
        correct: bool,
        now: DateTime<Utc>,
    ) -> Result<()> {
        self.quiz.total_questions += 1;
        if correct {
            self.quiz.correct_answers += 1;
        }
        match kind {
            QuizKind::MeaningToWord => self.quiz.meaning_to_word += 1,
            QuizKind::WordToMeaning => self.quiz.word_to_meaning += 1,
            QuizKind::PronunciationToWord => self.quiz.pronunciation_to_word += 1,
            QuizKind::ExampleToMeaning => self.quiz.example_to_meaning += 1,
        }
        self.quiz.last_activity = Some(now);
        set_value(self.store.as_ref(), keys::QUIZ_STATS, &self.quiz)
    }

    /// Record a spoken-practice attempt with its accuracy in [0, 1].
    pub fn record_speech_attempt(&mut self, accuracy: f64, now: DateTime<Utc>) -> Result<()> {
        self.speech.total_attempts += 1;
        self.speech.accuracy_sum += accuracy;
        self.speech.last_activity = Some(now);
        set_value(self.store.as_ref(), keys::SPEECH_STATS, &self.speech)
    }

    /// Record a flashcard review.
    pub fn record_flashcard(&mut self, correct: bool, now: DateTime<Utc>) -> Result<()> {
        self.flashcards.total_cards += 1;
        if correct {
            self.flashcards.correct_cards += 1;
        }
        self.flashcards.last_activity = Some(now);
        set_value(self.store.as_ref(), keys::FLASHCARD_STATS, &self.flashcards)
    }

    pub fn quiz_stats(&self) -> &QuizStats {
        &self.quiz
    }

    pub fn speech_stats(&self) -> &SpeechStats {
        &self.speech
    }

    pub fn flashcard_stats(&self) -> &FlashcardStats {
        &self.flashcards
    }

    /// Consecutive-day study streak ending today, counted over the three
    /// practice modes' last-activity dates.
    pub fn study_streak(&self, today: NaiveDate) -> u32 {
        let mut streak = 0;
        let mut day = today;
        loop {
            if !self.studied_on(day) {
                break;
            }
            streak += 1;
            match day.pred_opt() {
                Some(prev) => day = prev,
                None => break,
            }
        }
        streak
    }

    fn studied_on(&self, day: NaiveDate) -> bool {
        [
            self.quiz.last_activity,
            self.speech.last_activity,
            self.flashcards.last_activity,
        ]
        .iter()
        .any(|activity| activity.map(|at| at.date_naive()) == Some(day))
    }
}
