//! Terminal implementations of the core's platform collaborator ports.

use std::path::PathBuf;

use hanci_core::error::PlatformError;
use hanci_core::platform::{
    example_audio_name, word_audio_name, AudioPlayback, Recognition, ReminderScheduler,
    SpeechSource,
};

/// Resolves per-record audio files under a directory and reports what would
/// play. Actual playback is a host-platform concern.
pub struct LocalAudioPlayer {
    audio_dir: PathBuf,
}

impl LocalAudioPlayer {
    pub fn new(audio_dir: PathBuf) -> Self {
        Self { audio_dir }
    }

    fn resolve(&self, name: String, sequence_index: usize) -> Result<(), PlatformError> {
        let path = self.audio_dir.join(&name);
        if !path.exists() {
            tracing::warn!(?path, "audio file not found");
            return Err(PlatformError::MissingAudio(sequence_index));
        }
        println!("♪ {}", path.display());
        Ok(())
    }
}

impl AudioPlayback for LocalAudioPlayer {
    fn play_word(&self, sequence_index: usize) -> Result<(), PlatformError> {
        self.resolve(word_audio_name(sequence_index), sequence_index)
    }

    fn play_example(&self, sequence_index: usize) -> Result<(), PlatformError> {
        self.resolve(example_audio_name(sequence_index), sequence_index)
    }
}

/// Speech source fed from command-line arguments; on-device recognition is
/// out of scope, so recognized text and confidence arrive pre-baked.
pub struct ArgSpeechSource {
    text: String,
    confidence: f64,
}

impl ArgSpeechSource {
    pub fn new(text: String, confidence: f64) -> Self {
        Self {
            text,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}

impl SpeechSource for ArgSpeechSource {
    fn recognize(&mut self) -> Result<Recognition, PlatformError> {
        Ok(Recognition {
            text: self.text.clone(),
            confidence: self.confidence,
        })
    }
}

/// Reminder scheduler that only logs; local notifications belong to the host
/// platform.
pub struct LogReminderScheduler;

impl ReminderScheduler for LogReminderScheduler {
    fn schedule_daily(&self, hour: u32, minute: u32) -> Result<(), PlatformError> {
        tracing::info!(hour, minute, "daily reminder scheduled");
        Ok(())
    }

    fn cancel(&self) -> Result<(), PlatformError> {
        tracing::info!("daily reminder cancelled");
        Ok(())
    }
}
