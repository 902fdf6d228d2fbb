//! Daily quiz selection and practice questions.
//!
//! The daily quiz is deterministic per calendar day: a linear-congruential
//! generator seeded from the day number picks the question record and the
//! three distractor meanings, so re-generation on the same day with the same
//! record set reproduces the same question. Only the final option ordering
//! uses a non-deterministic shuffle.

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::error::Result;
use crate::state::{self, keys, KeyValueStore};
use crate::types::{DailyQuiz, PracticeQuestion, QuizKind, WordRecord};

/// Options per quiz question (one correct answer plus three distractors).
const OPTION_COUNT: usize = 4;

/// Deterministic generator for per-day selection.
/// `state = state * 1103515245 + 12345 (mod 2^64)`.
#[derive(Debug, Clone)]
pub struct DayRng {
    state: u64,
}

impl DayRng {
    /// Seed from the number of days between the Unix epoch and `day`.
    pub fn for_day(day: NaiveDate) -> Self {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).expect("valid epoch");
        Self::seeded(day.signed_duration_since(epoch).num_days() as u64)
    }

    pub fn seeded(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        self.state
    }

    fn next_below(&mut self, bound: usize) -> usize {
        (self.next() % bound as u64) as usize
    }
}

/// Build the quiz for a calendar day. Returns `None` on an empty record set.
pub fn select_for_day(day: NaiveDate, records: &[WordRecord]) -> Option<DailyQuiz> {
    if records.is_empty() {
        return None;
    }

    let mut rng = DayRng::for_day(day);
    let chosen = rng.next_below(records.len());
    let record = &records[chosen];

    // Distractors come from the same seeded generator so the option set is
    // reproducible for the day; only the display order is shuffled freely.
    let mut pool: Vec<&str> = records
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != chosen)
        .map(|(_, r)| r.meaning.as_str())
        .collect();

    let mut options = vec![record.meaning.clone()];
    while options.len() < OPTION_COUNT && !pool.is_empty() {
        let pick = rng.next_below(pool.len());
        options.push(pool.swap_remove(pick).to_string());
    }
    options.shuffle(&mut thread_rng());

    Some(DailyQuiz {
        record_id: record.id,
        headword: record.headword.clone(),
        pronunciation: record.pronunciation.clone(),
        options,
        correct_answer: record.meaning.clone(),
        generated_on: day,
    })
}

/// Return the cached quiz when it was generated today, else generate a fresh
/// one and cache it.
pub fn todays_quiz(
    store: &dyn KeyValueStore,
    today: NaiveDate,
    records: &[WordRecord],
) -> Result<Option<DailyQuiz>> {
    if let Some(cached) = state::get_value::<DailyQuiz>(store, keys::DAILY_QUIZ) {
        if cached.generated_on == today {
            return Ok(Some(cached));
        }
    }

    let quiz = select_for_day(today, records);
    if let Some(ref quiz) = quiz {
        state::set_value(store, keys::DAILY_QUIZ, quiz)?;
    }
    Ok(quiz)
}

/// Build a practice question of the given kind from a uniform sample of
/// four records. Not deterministic; practice questions are throwaway.
pub fn practice_question(kind: QuizKind, records: &[WordRecord]) -> Option<PracticeQuestion> {
    let candidates: Vec<&WordRecord> = match kind {
        QuizKind::ExampleToMeaning => records
            .iter()
            .filter(|r| !r.example.is_empty() && !r.example_meaning.is_empty())
            .collect(),
        _ => records.iter().collect(),
    };
    if candidates.len() < OPTION_COUNT {
        return None;
    }

    let sample: Vec<&WordRecord> = candidates
        .choose_multiple(&mut thread_rng(), OPTION_COUNT)
        .copied()
        .collect();
    let record = sample[0];

    let (prompt, answer_of): (String, fn(&WordRecord) -> String) = match kind {
        QuizKind::MeaningToWord => (record.meaning.clone(), |r| r.headword.clone()),
        QuizKind::WordToMeaning => (record.headword.clone(), |r| r.meaning.clone()),
        QuizKind::PronunciationToWord => (record.pronunciation.clone(), |r| r.headword.clone()),
        QuizKind::ExampleToMeaning => (record.example.clone(), |r| r.example_meaning.clone()),
    };

    let correct_answer = answer_of(record);
    let mut options: Vec<String> = sample.iter().map(|&r| answer_of(r)).collect();
    options.shuffle(&mut thread_rng());

    Some(PracticeQuestion {
        kind,
        record_id: record.id,
        prompt,
        options,
        correct_answer,
    })
}
