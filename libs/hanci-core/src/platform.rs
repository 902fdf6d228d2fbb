//! Narrow ports to host-platform services the core calls out to.
//!
//! Audio playback, speech-to-text, and reminder scheduling are external
//! collaborators; the core only defines the seams and the resource naming
//! convention. Audio resources are keyed by `sequence_index` — the declared
//! `ordinal` is display-only and carries no uniqueness guarantee.

use crate::error::PlatformError;

/// Per-word audio resources are named `{n}.mp3` where `n` is the 0-based
/// resource index for the record's 1-based sequence index.
pub fn word_audio_name(sequence_index: usize) -> String {
    format!("{}.mp3", sequence_index.saturating_sub(1))
}

/// Example-sentence audio: `ex{n}.mp3`, same indexing.
pub fn example_audio_name(sequence_index: usize) -> String {
    format!("ex{}.mp3", sequence_index.saturating_sub(1))
}

/// Plays per-record audio keyed by sequence index.
pub trait AudioPlayback {
    fn play_word(&self, sequence_index: usize) -> Result<(), PlatformError>;
    fn play_example(&self, sequence_index: usize) -> Result<(), PlatformError>;
}

/// One recognition result from a speech-to-text source.
#[derive(Debug, Clone)]
pub struct Recognition {
    pub text: String,
    /// Recognizer confidence in [0, 1].
    pub confidence: f64,
}

/// Produces recognized speech for scoring.
pub trait SpeechSource {
    fn recognize(&mut self) -> Result<Recognition, PlatformError>;
}

/// Schedules the daily study reminder.
pub trait ReminderScheduler {
    fn schedule_daily(&self, hour: u32, minute: u32) -> Result<(), PlatformError>;
    fn cancel(&self) -> Result<(), PlatformError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn audio_names_shift_to_zero_based() {
        assert_eq!(word_audio_name(1), "0.mp3");
        assert_eq!(word_audio_name(42), "41.mp3");
        assert_eq!(example_audio_name(1), "ex0.mp3");
    }
}
