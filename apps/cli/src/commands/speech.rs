//! Spoken-practice scoring against a record's headword or example.

use anyhow::Result;
use hanci_core::platform::SpeechSource;
use hanci_core::types::TokenFeedback;
use hanci_core::{PronunciationScorer, WordRecordStore};

use super::record_by_seq;

pub fn speak(
    store: &mut WordRecordStore,
    scorer: &PronunciationScorer,
    speech: &mut dyn SpeechSource,
    seq: usize,
    against_example: bool,
) -> Result<()> {
    let record = record_by_seq(store, seq)?;
    let reference = if against_example {
        record.example.as_str()
    } else {
        record.headword.as_str()
    };

    let recognition = speech.recognize()?;
    let result = scorer.evaluate(reference, &recognition.text, recognition.confidence);

    println!("目標: {reference}");
    println!("認識: {}", recognition.text);
    println!(
        "類似度 {:.0}% | 信頼度 {:.0}% | 総合 {:.0}% → {}",
        result.similarity * 100.0,
        result.confidence * 100.0,
        result.combined_score * 100.0,
        result.grade.as_str(),
    );

    for token in &result.tokens {
        let mark = match token.feedback {
            TokenFeedback::Correct => "○",
            TokenFeedback::Close => "△",
            TokenFeedback::Unrecognized => "－",
            TokenFeedback::NeedsPractice => "×",
        };
        println!(
            "  {mark} {}  ({}, {:.0}%)",
            token.reference,
            if token.spoken.is_empty() { "未認識" } else { token.spoken.as_str() },
            token.similarity * 100.0,
        );
    }

    store.record_speech_attempt(result.similarity)?;
    if result.is_passing() {
        store.mark_studied(record.id)?;
    }
    Ok(())
}
