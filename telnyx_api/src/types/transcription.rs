use serde::{Deserialize, Serialize};

use crate::enums::open_enum;

open_enum! {
    pub enum TranscriptionModel {
        DistilWhisperLargeV2 => "distil-whisper/distil-large-v2",
        WhisperLargeV3Turbo => "openai/whisper-large-v3-turbo",
    }
}

open_enum! {
    /// `verbose_json` adds per-segment timings.
    pub enum TranscriptionFormat {
        Json => "json",
        VerboseJson => "verbose_json",
    }
}

/// Result of an audio transcription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcription {
    pub text: String,
    /// Audio length in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<TranscriptionSegment>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionSegment {
    pub id: f64,
    pub start: f64,
    pub end: f64,
    pub text: String,
}
