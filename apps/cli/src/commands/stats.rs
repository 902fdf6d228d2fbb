//! Study statistics summary.

use anyhow::Result;
use hanci_core::WordRecordStore;

pub fn show(store: &WordRecordStore) -> Result<()> {
    let state = store.state();
    println!(
        "words: {} total, {} studied, {} favorites",
        store.len(),
        state.studied_count(),
        state.favorite_count(),
    );

    let quiz = store.quiz_stats();
    println!(
        "quiz: {}/{} correct ({:.0}%)",
        quiz.correct_answers,
        quiz.total_questions,
        quiz.accuracy() * 100.0,
    );
    println!(
        "  meaning→word {}  word→meaning {}  pronunciation→word {}  example→meaning {}",
        quiz.meaning_to_word,
        quiz.word_to_meaning,
        quiz.pronunciation_to_word,
        quiz.example_to_meaning,
    );

    let speech = store.speech_stats();
    println!(
        "speech: {} attempts, average accuracy {:.0}%",
        speech.total_attempts,
        speech.average_accuracy() * 100.0,
    );

    let cards = store.flashcard_stats();
    println!(
        "flashcards: {}/{} correct ({:.0}%)",
        cards.correct_cards,
        cards.total_cards,
        cards.accuracy() * 100.0,
    );

    println!("streak: {} day(s)", store.study_streak());
    Ok(())
}
