//! Core types for the vocabulary study library.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Namespace for deriving record identities. Identities are UUIDv5 values of
/// the record's sequence index under this namespace, so they stay stable
/// across sessions without depending on field content.
const RECORD_ID_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_d0a4_93b2_4e8f_9a07_52e1_8c4b_77d3);

/// Stable identity of a word record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Derive the identity for the record at the given 1-based file position.
    pub fn from_sequence_index(sequence_index: usize) -> Self {
        let bytes = (sequence_index as u64).to_be_bytes();
        Self(Uuid::new_v5(&RECORD_ID_NAMESPACE, &bytes))
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One parsed vocabulary entry.
///
/// `ordinal` is the declared row number from the source file and is
/// display-only; it carries no uniqueness guarantee. `sequence_index` is the
/// 1-based position in the file and is the authoritative key for external
/// per-record audio resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub id: RecordId,
    pub ordinal: String,
    pub headword: String,
    pub meaning: String,
    pub pronunciation: String,
    pub example: String,
    pub example_pronunciation: String,
    pub example_meaning: String,
    /// Optional free-text note; empty means no note.
    pub detail: String,
    pub sequence_index: usize,
}

/// Discrete grade assigned to a pronunciation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl Grade {
    /// Map a combined score to its grade band.
    pub fn from_combined(score: f64) -> Self {
        if score >= 0.90 {
            Self::Excellent
        } else if score >= 0.75 {
            Self::Good
        } else if score >= 0.50 {
            Self::Fair
        } else {
            Self::NeedsImprovement
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::NeedsImprovement => "needs improvement",
        }
    }
}

/// Feedback tier for a single aligned token pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenFeedback {
    Correct,
    Close,
    Unrecognized,
    NeedsPractice,
}

/// Per-token comparison of a reference token against what was spoken.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenScore {
    pub reference: String,
    pub spoken: String,
    pub similarity: f64,
    pub is_correct: bool,
    pub feedback: TokenFeedback,
}

/// Result of evaluating a pronunciation attempt. Transient, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PronunciationResult {
    pub similarity: f64,
    pub confidence: f64,
    pub combined_score: f64,
    pub grade: Grade,
    pub tokens: Vec<TokenScore>,
}

impl PronunciationResult {
    /// Whether the attempt is good enough to count the word as studied.
    pub fn is_passing(&self) -> bool {
        matches!(self.grade, Grade::Excellent | Grade::Good)
    }
}

/// Kind of practice quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizKind {
    MeaningToWord,
    WordToMeaning,
    PronunciationToWord,
    ExampleToMeaning,
}

impl QuizKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MeaningToWord => "meaning-to-word",
            Self::WordToMeaning => "word-to-meaning",
            Self::PronunciationToWord => "pronunciation-to-word",
            Self::ExampleToMeaning => "example-to-meaning",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "meaning-to-word" => Some(Self::MeaningToWord),
            "word-to-meaning" => Some(Self::WordToMeaning),
            "pronunciation-to-word" => Some(Self::PronunciationToWord),
            "example-to-meaning" => Some(Self::ExampleToMeaning),
            _ => None,
        }
    }
}

/// Multiple-choice quiz statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizStats {
    pub total_questions: u32,
    pub correct_answers: u32,
    pub meaning_to_word: u32,
    pub word_to_meaning: u32,
    pub pronunciation_to_word: u32,
    pub example_to_meaning: u32,
    pub last_activity: Option<DateTime<Utc>>,
}

impl QuizStats {
    pub fn accuracy(&self) -> f64 {
        if self.total_questions == 0 {
            0.0
        } else {
            f64::from(self.correct_answers) / f64::from(self.total_questions)
        }
    }
}

/// Spoken-practice statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeechStats {
    pub total_attempts: u32,
    pub accuracy_sum: f64,
    pub last_activity: Option<DateTime<Utc>>,
}

impl SpeechStats {
    pub fn average_accuracy(&self) -> f64 {
        if self.total_attempts == 0 {
            0.0
        } else {
            self.accuracy_sum / f64::from(self.total_attempts)
        }
    }
}

/// Flashcard review statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlashcardStats {
    pub total_cards: u32,
    pub correct_cards: u32,
    pub last_activity: Option<DateTime<Utc>>,
}

impl FlashcardStats {
    pub fn accuracy(&self) -> f64 {
        if self.total_cards == 0 {
            0.0
        } else {
            f64::from(self.correct_cards) / f64::from(self.total_cards)
        }
    }
}

/// The daily quiz: one question per calendar day, cached with its date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyQuiz {
    pub record_id: RecordId,
    pub headword: String,
    pub pronunciation: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub generated_on: NaiveDate,
}

impl DailyQuiz {
    pub fn check_answer(&self, selected: &str) -> bool {
        selected == self.correct_answer
    }
}

/// A practice quiz question of a given kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeQuestion {
    pub kind: QuizKind,
    pub record_id: RecordId,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl PracticeQuestion {
    pub fn check_answer(&self, selected: &str) -> bool {
        selected == self.correct_answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn record_id_is_stable_across_calls() {
        assert_eq!(
            RecordId::from_sequence_index(7),
            RecordId::from_sequence_index(7)
        );
        assert_ne!(
            RecordId::from_sequence_index(7),
            RecordId::from_sequence_index(8)
        );
    }

    #[test]
    fn grade_boundaries() {
        assert_eq!(Grade::from_combined(0.90), Grade::Excellent);
        assert_eq!(Grade::from_combined(0.899999), Grade::Good);
        assert_eq!(Grade::from_combined(0.75), Grade::Good);
        assert_eq!(Grade::from_combined(0.5), Grade::Fair);
        assert_eq!(Grade::from_combined(0.4999), Grade::NeedsImprovement);
    }

    #[test]
    fn stats_accuracy_handles_zero_counts() {
        assert_eq!(QuizStats::default().accuracy(), 0.0);
        assert_eq!(SpeechStats::default().average_accuracy(), 0.0);
        assert_eq!(FlashcardStats::default().accuracy(), 0.0);
    }

    #[test]
    fn quiz_kind_round_trips_through_str() {
        for kind in [
            QuizKind::MeaningToWord,
            QuizKind::WordToMeaning,
            QuizKind::PronunciationToWord,
            QuizKind::ExampleToMeaning,
        ] {
            assert_eq!(QuizKind::from_str(kind.as_str()), Some(kind));
        }
    }
}
