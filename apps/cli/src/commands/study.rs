//! Marking records studied, toggling favorites, and flashcard reviews.

use anyhow::Result;
use hanci_core::WordRecordStore;

use super::record_by_seq;

pub fn mark(store: &mut WordRecordStore, seq: usize) -> Result<()> {
    let record = record_by_seq(store, seq)?;
    store.mark_studied(record.id)?;
    println!("marked {} as studied", record.headword);
    Ok(())
}

pub fn favorite(store: &mut WordRecordStore, seq: usize) -> Result<()> {
    let record = record_by_seq(store, seq)?;
    let now_favorite = store.toggle_favorite(record.id)?;
    if now_favorite {
        println!("added {} to favorites", record.headword);
    } else {
        println!("removed {} from favorites", record.headword);
    }
    Ok(())
}

/// Record a flashcard review; a correct answer also marks the word studied.
pub fn card(store: &mut WordRecordStore, seq: usize, correct: bool) -> Result<()> {
    let record = record_by_seq(store, seq)?;
    store.record_flashcard(correct)?;
    if correct {
        store.mark_studied(record.id)?;
        println!("correct — {} counted as studied", record.headword);
    } else {
        println!("recorded, keep practicing {}", record.headword);
    }
    Ok(())
}
