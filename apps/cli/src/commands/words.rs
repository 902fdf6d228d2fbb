//! Listing, searching, and showing word records.

use anyhow::Result;
use hanci_core::platform::AudioPlayback;
use hanci_core::{WordRecord, WordRecordStore};

use super::record_by_seq;

pub fn list(store: &WordRecordStore, unstudied: bool, favorites: bool) -> Result<()> {
    let records: Vec<&WordRecord> = if unstudied {
        store.unstudied()
    } else if favorites {
        store.favorites()
    } else {
        store.records().iter().collect()
    };

    if records.is_empty() {
        println!("no records");
        return Ok(());
    }
    for record in records {
        print_row(store, record);
    }
    Ok(())
}

pub fn search(store: &WordRecordStore, query: &str) -> Result<()> {
    let matches = store.filter(query);
    if matches.is_empty() {
        println!("no matches for {query:?}");
        return Ok(());
    }
    for record in matches {
        print_row(store, record);
    }
    Ok(())
}

pub fn show(
    store: &WordRecordStore,
    seq: usize,
    play: bool,
    play_example: bool,
    audio: &dyn AudioPlayback,
) -> Result<()> {
    let record = record_by_seq(store, seq)?;

    println!("{}  {}", record.headword, record.pronunciation);
    println!("  {}", record.meaning);
    if !record.example.is_empty() {
        println!("  例: {}  ({})", record.example, record.example_pronunciation);
        println!("      {}", record.example_meaning);
    }
    if !record.detail.is_empty() {
        println!("  注: {}", record.detail);
    }
    println!(
        "  #{}  studied: {}  favorite: {}",
        record.sequence_index,
        if store.is_studied(record.id) { "yes" } else { "no" },
        if store.is_favorite(record.id) { "yes" } else { "no" },
    );

    if play {
        if let Err(err) = audio.play_word(record.sequence_index) {
            tracing::warn!(%err, "word audio unavailable");
        }
    }
    if play_example {
        if let Err(err) = audio.play_example(record.sequence_index) {
            tracing::warn!(%err, "example audio unavailable");
        }
    }
    Ok(())
}

fn print_row(store: &WordRecordStore, record: &WordRecord) {
    let studied = if store.is_studied(record.id) { "✓" } else { " " };
    let favorite = if store.is_favorite(record.id) { "★" } else { " " };
    println!(
        "{:>4} {}{} {}  [{}]  {}",
        record.sequence_index, studied, favorite, record.headword, record.pronunciation,
        record.meaning,
    );
}
