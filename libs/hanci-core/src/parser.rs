//! Parser for the fixed-schema word list.
//!
//! # Format
//! UTF-8 text, one record per line, comma-separated fields:
//! ```text
//! ordinal,headword,meaning,pronunciation,example,example-pronunciation,example-meaning,detail
//! ```
//! The file conventionally ends with a trailing blank line, which is
//! discarded. Parsing is total: rows with fewer than eight fields fill the
//! missing trailing fields with empty strings, and extra fields are ignored.

use crate::types::{RecordId, WordRecord};

/// Fields per source row.
pub const FIELDS_PER_ROW: usize = 8;

/// Parse a whole word list into records, assigning 1-based sequence indexes
/// in file order.
pub fn parse_records(content: &str) -> Vec<WordRecord> {
    let mut rows: Vec<&str> = content.split('\n').collect();
    if rows.last() == Some(&"") {
        rows.pop();
    }

    rows.iter()
        .enumerate()
        .map(|(idx, row)| parse_row(row, idx + 1))
        .collect()
}

/// Parse a single row. Never fails; absent fields default to empty strings.
pub fn parse_row(row: &str, sequence_index: usize) -> WordRecord {
    let mut fields = row.split(',').map(str::to_string);
    let mut next = || fields.next().unwrap_or_default();

    WordRecord {
        id: RecordId::from_sequence_index(sequence_index),
        ordinal: next(),
        headword: next(),
        meaning: next(),
        pronunciation: next(),
        example: next(),
        example_pronunciation: next(),
        example_meaning: next(),
        detail: next(),
        sequence_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn full_row_round_trips() {
        let record = parse_row("12,你好,こんにちは,nǐ hǎo,你好吗,nǐ hǎo ma,お元気ですか,挨拶", 1);
        assert_eq!(record.ordinal, "12");
        assert_eq!(record.headword, "你好");
        assert_eq!(record.meaning, "こんにちは");
        assert_eq!(record.pronunciation, "nǐ hǎo");
        assert_eq!(record.example, "你好吗");
        assert_eq!(record.example_pronunciation, "nǐ hǎo ma");
        assert_eq!(record.example_meaning, "お元気ですか");
        assert_eq!(record.detail, "挨拶");
        assert_eq!(record.sequence_index, 1);
    }

    #[test]
    fn short_row_defaults_missing_fields_to_empty() {
        let record = parse_row("3,朋友", 3);
        assert_eq!(record.ordinal, "3");
        assert_eq!(record.headword, "朋友");
        assert_eq!(record.meaning, "");
        assert_eq!(record.pronunciation, "");
        assert_eq!(record.example, "");
        assert_eq!(record.example_pronunciation, "");
        assert_eq!(record.example_meaning, "");
        assert_eq!(record.detail, "");
    }

    #[test]
    fn empty_row_yields_all_empty_fields() {
        let record = parse_row("", 1);
        assert_eq!(record.ordinal, "");
        assert_eq!(record.headword, "");
        assert_eq!(record.detail, "");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let record = parse_row("1,a,b,c,d,e,f,g,h,i", 1);
        assert_eq!(record.detail, "g");
    }

    #[test]
    fn trailing_blank_line_is_discarded() {
        let records = parse_records("1,你好\n2,朋友\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sequence_index, 1);
        assert_eq!(records[1].sequence_index, 2);
    }

    #[test]
    fn empty_content_yields_no_records() {
        assert!(parse_records("").is_empty());
    }

    #[test]
    fn interior_blank_line_still_produces_a_record() {
        let records = parse_records("1,你好\n\n3,朋友\n");
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].headword, "");
        assert_eq!(records[2].sequence_index, 3);
    }

    #[test]
    fn identity_depends_on_position_not_content() {
        let a = parse_row("1,你好", 5);
        let b = parse_row("9,朋友", 5);
        assert_eq!(a.id, b.id);
    }
}
