//! Terminal command handlers.

pub mod quiz;
pub mod settings;
pub mod speech;
pub mod stats;
pub mod study;
pub mod words;

use anyhow::{bail, Result};
use hanci_core::{WordRecord, WordRecordStore};

/// Look up a record by its 1-based sequence index (the number shown in
/// listings and used for audio resources).
pub fn record_by_seq(store: &WordRecordStore, seq: usize) -> Result<WordRecord> {
    let index = seq
        .checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("sequence indexes start at 1"))?;
    match store.record_at(index) {
        Some(record) => Ok(record.clone()),
        None => bail!("no record with sequence index {seq} (store has {})", store.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanci_core::MemoryStore;

    #[test]
    fn record_by_seq_is_one_based() {
        let store = WordRecordStore::from_content(
            "1,你好,こんにちは\n2,谢谢,ありがとう\n",
            Box::new(MemoryStore::new()),
        );
        assert_eq!(record_by_seq(&store, 1).unwrap().headword, "你好");
        assert_eq!(record_by_seq(&store, 2).unwrap().headword, "谢谢");
        assert!(record_by_seq(&store, 0).is_err());
        assert!(record_by_seq(&store, 3).is_err());
    }
}
