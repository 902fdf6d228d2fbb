//! Pronunciation scoring: edit-distance similarity plus recognizer
//! confidence, mapped to a discrete grade.
//!
//! Edit distance fits here because recognizer output is short (a word or one
//! sentence), so the O(n*m) table is cheap, and it tolerates the small
//! substitutions and omissions exact matching would reject.

use serde::{Deserialize, Serialize};

use crate::segment::segment;
use crate::types::{Grade, PronunciationResult, TokenFeedback, TokenScore};

/// Token similarity at or above this counts the token as correct.
const TOKEN_CORRECT_THRESHOLD: f64 = 0.8;
/// Token similarity at or above this is "close" rather than wrong.
const TOKEN_CLOSE_THRESHOLD: f64 = 0.6;

/// Weights for combining similarity with recognizer confidence.
/// Both observed revisions of the original used a fixed pair; this keeps it
/// configurable with the 0.6/0.4 revision as the default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub similarity: f64,
    pub confidence: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            similarity: 0.6,
            confidence: 0.4,
        }
    }
}

impl ScoreWeights {
    /// Weights must sum to 1.
    pub fn new(similarity: f64, confidence: f64) -> Self {
        debug_assert!((similarity + confidence - 1.0).abs() < 1e-9);
        Self {
            similarity,
            confidence,
        }
    }
}

/// Scores spoken attempts against a reference string.
#[derive(Debug, Clone, Copy, Default)]
pub struct PronunciationScorer {
    weights: ScoreWeights,
}

impl PronunciationScorer {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Evaluate a recognized attempt. Total on its domain: any two strings
    /// and any confidence in [0, 1] produce a result.
    pub fn evaluate(
        &self,
        reference: &str,
        candidate: &str,
        confidence: f64,
    ) -> PronunciationResult {
        let sim = similarity(reference, candidate);
        let combined = sim * self.weights.similarity + confidence * self.weights.confidence;

        PronunciationResult {
            similarity: sim,
            confidence,
            combined_score: combined,
            grade: Grade::from_combined(combined),
            tokens: token_breakdown(reference, candidate),
        }
    }
}

/// Normalized inverse edit distance in [0, 1].
pub fn similarity(reference: &str, candidate: &str) -> f64 {
    let reference = reference.trim();
    let candidate = candidate.trim();

    if reference.is_empty() && candidate.is_empty() {
        return 1.0;
    }
    if reference.is_empty() || candidate.is_empty() {
        return 0.0;
    }
    if reference == candidate {
        return 1.0;
    }

    let distance = levenshtein_distance(reference, candidate);
    let max_len = reference.chars().count().max(candidate.chars().count());
    1.0 - (distance as f64 / max_len as f64)
}

/// Levenshtein distance over character sequences with unit costs.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows instead of the full table.
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Align reference tokens against spoken tokens positionally, padding the
/// shorter side with empty tokens. Only reference tokens produce entries.
fn token_breakdown(reference: &str, candidate: &str) -> Vec<TokenScore> {
    let ref_tokens = segment(reference.trim());
    let spoken_tokens = segment(candidate.trim());

    let count = ref_tokens.len().max(spoken_tokens.len());
    let mut tokens = Vec::with_capacity(ref_tokens.len());

    for i in 0..count {
        let target = ref_tokens.get(i).map(String::as_str).unwrap_or("");
        if target.is_empty() {
            continue;
        }
        let spoken = spoken_tokens.get(i).map(String::as_str).unwrap_or("");

        let sim = similarity(target, spoken);
        let is_correct = sim >= TOKEN_CORRECT_THRESHOLD;
        let feedback = if is_correct {
            TokenFeedback::Correct
        } else if sim >= TOKEN_CLOSE_THRESHOLD {
            TokenFeedback::Close
        } else if spoken.is_empty() {
            TokenFeedback::Unrecognized
        } else {
            TokenFeedback::NeedsPractice
        };

        tokens.push(TokenScore {
            reference: target.to_string(),
            spoken: spoken.to_string(),
            similarity: sim,
            is_correct,
            feedback,
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn distance_basics() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", "abc"), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("abc", "abd"), 1);
    }

    #[test]
    fn similarity_identities() {
        assert_eq!(similarity("你好", "你好"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("", "x"), 0.0);
        assert_eq!(similarity("x", ""), 0.0);
    }

    #[test]
    fn similarity_trims_whitespace() {
        assert_eq!(similarity("  你好 ", "你好"), 1.0);
        assert_eq!(similarity("   ", ""), 1.0);
    }

    #[test]
    fn similarity_is_symmetric() {
        let a = "你好吗";
        let b = "你好嗎";
        assert_eq!(similarity(a, b), similarity(b, a));
    }

    #[test]
    fn one_edit_over_three_chars() {
        let sim = similarity("abc", "abd");
        assert!((sim - (1.0 - 1.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn multibyte_lengths_use_char_counts() {
        // One substitution across three CJK chars, same as the ASCII case.
        let sim = similarity("你好吗", "你好嗎");
        assert!((sim - (1.0 - 1.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn default_weights_are_point_six_point_four() {
        let weights = ScoreWeights::default();
        assert_eq!(weights.similarity, 0.6);
        assert_eq!(weights.confidence, 0.4);
    }

    #[test]
    fn evaluate_combines_similarity_and_confidence() {
        let scorer = PronunciationScorer::default();
        let result = scorer.evaluate("你好", "你好", 0.5);
        assert_eq!(result.similarity, 1.0);
        assert!((result.combined_score - 0.8).abs() < 1e-9);
        assert_eq!(result.grade, Grade::Good);
    }

    #[test]
    fn perfect_match_with_full_confidence_is_excellent() {
        let scorer = PronunciationScorer::default();
        let result = scorer.evaluate("你好", "你好", 1.0);
        assert_eq!(result.combined_score, 1.0);
        assert_eq!(result.grade, Grade::Excellent);
        assert!(result.is_passing());
    }

    #[test]
    fn alternate_weighting_is_respected() {
        let scorer = PronunciationScorer::new(ScoreWeights::new(0.7, 0.3));
        let result = scorer.evaluate("你好", "再见", 1.0);
        assert!((result.combined_score - 0.3).abs() < 1e-9);
        assert_eq!(result.grade, Grade::NeedsImprovement);
    }

    #[test]
    fn token_breakdown_pads_missing_spoken_tokens() {
        let scorer = PronunciationScorer::default();
        let result = scorer.evaluate("nǐ hǎo ma", "nǐ hǎo", 0.9);
        assert_eq!(result.tokens.len(), 3);
        assert!(result.tokens[0].is_correct);
        assert!(result.tokens[1].is_correct);
        assert_eq!(result.tokens[2].feedback, TokenFeedback::Unrecognized);
    }

    #[test]
    fn token_breakdown_marks_mismatches() {
        let scorer = PronunciationScorer::default();
        let result = scorer.evaluate("我喜欢中国", "我喜欢美国", 0.9);
        let last = result.tokens.last().unwrap();
        assert_eq!(last.reference, "中国");
        assert!(!last.is_correct);
    }
}
