use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    request::{FileUpload, RequestParams},
    types::{TranscriptionFormat, TranscriptionModel},
    Error,
};

/// Body for `POST /ai/audio/transcriptions`, always sent as multipart.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TranscriptionParams {
    #[serde(skip)]
    pub file: Option<FileUpload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    /// Defaults to `distil-whisper/distil-large-v2`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<TranscriptionModel>,
    /// ISO-639-1 code. Detected when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<TranscriptionFormat>,
    /// Sent as repeated `timestamp_granularities[]` parts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_granularities: Option<Vec<String>>,
}

impl RequestParams for TranscriptionParams {
    const RENAMES: &'static [(&'static str, &'static str)] = &[
        ("fileUrl", "file_url"),
        ("responseFormat", "response_format"),
        ("timestampGranularities", "timestamp_granularities"),
    ];

    fn defaults() -> Map<String, Value> {
        let mut defaults = Map::new();
        defaults.insert(
            "model".to_string(),
            Value::from(TranscriptionModel::DistilWhisperLargeV2.as_str()),
        );
        defaults
    }

    fn validate(&self) -> Result<(), Error> {
        match (&self.file, &self.file_url) {
            (None, None) => Err(Error::Construction(
                "transcription needs either a file or a file_url".to_string(),
            )),
            (Some(_), Some(_)) => Err(Error::Construction(
                "transcription takes a file or a file_url, not both".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn take_files(&mut self) -> Vec<(String, FileUpload)> {
        self.file
            .take()
            .map(|file| vec![("file".to_string(), file)])
            .unwrap_or_default()
    }
}

impl TranscriptionParams {
    pub fn from_file(file: FileUpload) -> Self {
        Self {
            file: Some(file),
            ..Default::default()
        }
    }

    pub fn from_url(file_url: &str) -> Self {
        Self {
            file_url: Some(file_url.to_string()),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<TranscriptionModel>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    pub fn with_response_format(mut self, format: impl Into<TranscriptionFormat>) -> Self {
        self.response_format = Some(format.into());
        self
    }

    pub fn with_timestamp_granularity(mut self, granularity: &str) -> Self {
        self.timestamp_granularities
            .get_or_insert_with(Vec::new)
            .push(granularity.to_string());
        self
    }
}
