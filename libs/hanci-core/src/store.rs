//! The word record store: an ordered, immutable record list with cursor
//! navigation, filtering, and the mutable study-state side table.

use std::path::Path;

use chrono::Utc;
use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::error::Result;
use crate::parser::parse_records;
use crate::state::{KeyValueStore, StudyState};
use crate::types::{FlashcardStats, QuizKind, QuizStats, RecordId, SpeechStats, WordRecord};

/// Session-scoped store over the parsed word list. Constructed once, records
/// immutable afterwards; only the study state mutates.
pub struct WordRecordStore {
    records: Vec<WordRecord>,
    cursor: usize,
    state: StudyState,
}

impl WordRecordStore {
    /// Load from a file. A missing or unreadable file yields an empty store;
    /// no error surfaces from construction.
    pub fn from_file<P: AsRef<Path>>(path: P, store: Box<dyn KeyValueStore>) -> Self {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        Self::from_content(&content, store)
    }

    pub fn from_content(content: &str, store: Box<dyn KeyValueStore>) -> Self {
        Self {
            records: parse_records(content),
            cursor: 0,
            state: StudyState::load(store),
        }
    }

    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record_at(&self, index: usize) -> Option<&WordRecord> {
        self.records.get(index)
    }

    /// Record at the current cursor position.
    pub fn current(&self) -> Option<&WordRecord> {
        self.records.get(self.cursor)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor to an absolute index. Out-of-range indexes are
    /// ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.records.len() {
            self.cursor = index;
        }
    }

    /// Advance the cursor, wrapping from the last index back to 0.
    pub fn next(&mut self) -> Option<&WordRecord> {
        if self.records.is_empty() {
            return None;
        }
        if self.cursor < self.records.len() - 1 {
            self.cursor += 1;
        } else {
            self.cursor = 0;
        }
        self.current()
    }

    /// Step the cursor back, wrapping from 0 to the last index.
    pub fn previous(&mut self) -> Option<&WordRecord> {
        if self.records.is_empty() {
            return None;
        }
        if self.cursor > 0 {
            self.cursor -= 1;
        } else {
            self.cursor = self.records.len() - 1;
        }
        self.current()
    }

    /// Case-insensitive substring filter across headword, meaning,
    /// pronunciation, example, and example meaning. An empty query returns
    /// every record in original order.
    pub fn filter(&self, query: &str) -> Vec<&WordRecord> {
        if query.is_empty() {
            return self.records.iter().collect();
        }
        let query = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| {
                [
                    &record.headword,
                    &record.meaning,
                    &record.pronunciation,
                    &record.example,
                    &record.example_meaning,
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// Uniform sample of `n` records without replacement.
    pub fn random_sample(&self, n: usize) -> Vec<&WordRecord> {
        self.records
            .choose_multiple(&mut thread_rng(), n)
            .collect()
    }

    /// Records not yet marked studied.
    pub fn unstudied(&self) -> Vec<&WordRecord> {
        self.records
            .iter()
            .filter(|record| !self.state.is_studied(record.id))
            .collect()
    }

    /// Currently favorited records.
    pub fn favorites(&self) -> Vec<&WordRecord> {
        self.records
            .iter()
            .filter(|record| self.state.is_favorite(record.id))
            .collect()
    }

    pub fn mark_studied(&mut self, id: RecordId) -> Result<()> {
        self.state.mark_studied(id)
    }

    pub fn is_studied(&self, id: RecordId) -> bool {
        self.state.is_studied(id)
    }

    pub fn toggle_favorite(&mut self, id: RecordId) -> Result<bool> {
        self.state.toggle_favorite(id)
    }

    pub fn is_favorite(&self, id: RecordId) -> bool {
        self.state.is_favorite(id)
    }

    pub fn record_quiz_answer(&mut self, kind: QuizKind, correct: bool) -> Result<()> {
        self.state.record_quiz_answer(kind, correct, Utc::now())
    }

    pub fn record_speech_attempt(&mut self, accuracy: f64) -> Result<()> {
        self.state.record_speech_attempt(accuracy, Utc::now())
    }

    pub fn record_flashcard(&mut self, correct: bool) -> Result<()> {
        self.state.record_flashcard(correct, Utc::now())
    }

    pub fn quiz_stats(&self) -> &QuizStats {
        self.state.quiz_stats()
    }

    pub fn speech_stats(&self) -> &SpeechStats {
        self.state.speech_stats()
    }

    pub fn flashcard_stats(&self) -> &FlashcardStats {
        self.state.flashcard_stats()
    }

    /// Consecutive-day study streak ending today (local calendar).
    pub fn study_streak(&self) -> u32 {
        self.state.study_streak(chrono::Local::now().date_naive())
    }

    pub fn state(&self) -> &StudyState {
        &self.state
    }

    /// The key-value store backing study state, shared with the daily-quiz
    /// cache and settings.
    pub fn kv(&self) -> &dyn KeyValueStore {
        self.state.store()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MemoryStore;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
1,你好,こんにちは,nǐ hǎo,你好吗,nǐ hǎo ma,お元気ですか,
2,谢谢,ありがとう,xiè xie,谢谢你,xiè xie nǐ,ありがとうございます,
3,再见,さようなら,zài jiàn,明天再见,míng tiān zài jiàn,また明日,
4,朋友,友達,péng you,他是我的朋友,tā shì wǒ de péng you,彼は私の友達です,
";

    fn store() -> WordRecordStore {
        WordRecordStore::from_content(SAMPLE, Box::new(MemoryStore::new()))
    }

    #[test]
    fn missing_file_yields_empty_store() {
        let store =
            WordRecordStore::from_file("/no/such/words.csv", Box::new(MemoryStore::new()));
        assert!(store.is_empty());
        assert!(store.current().is_none());
    }

    #[test]
    fn loads_records_in_order() {
        let store = store();
        assert_eq!(store.len(), 4);
        assert_eq!(store.record_at(0).unwrap().headword, "你好");
        assert_eq!(store.record_at(3).unwrap().sequence_index, 4);
    }

    #[test]
    fn navigation_wraps_at_both_ends() {
        let mut store = store();
        assert_eq!(store.cursor(), 0);

        let last = store.previous().unwrap().sequence_index;
        assert_eq!(last, 4);

        let first = store.next().unwrap().sequence_index;
        assert_eq!(first, 1);
    }

    #[test]
    fn next_walks_forward() {
        let mut store = store();
        assert_eq!(store.next().unwrap().sequence_index, 2);
        assert_eq!(store.next().unwrap().sequence_index, 3);
        store.select(3);
        assert_eq!(store.next().unwrap().sequence_index, 1);
    }

    #[test]
    fn navigation_on_empty_store_returns_none() {
        let mut store = WordRecordStore::from_content("", Box::new(MemoryStore::new()));
        assert!(store.next().is_none());
        assert!(store.previous().is_none());
    }

    #[test]
    fn empty_query_returns_all_records_in_order() {
        let store = store();
        let all = store.filter("");
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].sequence_index, 1);
        assert_eq!(all[3].sequence_index, 4);
    }

    #[test]
    fn filter_matches_any_of_the_five_fields() {
        let store = store();
        assert_eq!(store.filter("朋友").len(), 1);
        assert_eq!(store.filter("ありがとう").len(), 1);
        assert_eq!(store.filter("XIÈ").len(), 1); // case-insensitive
        assert_eq!(store.filter("明天").len(), 1); // example text
        assert_eq!(store.filter("また明日").len(), 1); // example meaning
    }

    #[test]
    fn filter_with_no_match_returns_empty() {
        let store = store();
        assert!(store.filter("存在しない").is_empty());
    }

    #[test]
    fn filter_does_not_search_detail_or_example_pronunciation() {
        let content = "1,你好,こんにちは,nǐ hǎo,你好吗,secretpron,お元気ですか,secretnote\n";
        let store = WordRecordStore::from_content(content, Box::new(MemoryStore::new()));
        assert!(store.filter("secretpron").is_empty());
        assert!(store.filter("secretnote").is_empty());
    }

    #[test]
    fn unstudied_shrinks_as_records_are_marked() {
        let mut store = store();
        assert_eq!(store.unstudied().len(), 4);

        let id = store.record_at(0).unwrap().id;
        store.mark_studied(id).unwrap();
        assert_eq!(store.unstudied().len(), 3);
        assert!(store.is_studied(id));
    }

    #[test]
    fn favorites_lists_only_toggled_records() {
        let mut store = store();
        let id = store.record_at(2).unwrap().id;

        assert!(store.toggle_favorite(id).unwrap());
        assert_eq!(store.favorites().len(), 1);
        assert_eq!(store.favorites()[0].headword, "再见");

        assert!(!store.toggle_favorite(id).unwrap());
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn random_sample_is_without_replacement() {
        let store = store();
        let sample = store.random_sample(3);
        assert_eq!(sample.len(), 3);
        let mut indexes: Vec<usize> = sample.iter().map(|r| r.sequence_index).collect();
        indexes.sort_unstable();
        indexes.dedup();
        assert_eq!(indexes.len(), 3);
    }

    #[test]
    fn random_sample_caps_at_record_count() {
        let store = store();
        assert_eq!(store.random_sample(10).len(), 4);
    }
}
