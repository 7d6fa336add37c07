use serde::Serialize;

use crate::{
    request::{FileUpload, RequestParams},
    Error,
};

/// Query for `GET /media`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MediaListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<MediaFilter>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MediaFilter {
    /// Sent as repeated `filter[content_type][]` keys.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content_type: Vec<String>,
}

impl RequestParams for MediaListParams {}

impl MediaListParams {
    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.filter
            .get_or_insert_with(MediaFilter::default)
            .content_type
            .push(content_type.to_string());
        self
    }
}

/// Body for `POST /media`: either a file uploaded as multipart or a URL the
/// API fetches from.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MediaUploadParams {
    #[serde(skip)]
    pub file: Option<FileUpload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_name: Option<String>,
    /// Seconds until the media expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl_secs: Option<i64>,
}

impl RequestParams for MediaUploadParams {
    const RENAMES: &'static [(&'static str, &'static str)] = &[
        ("mediaUrl", "media_url"),
        ("mediaName", "media_name"),
        ("ttlSecs", "ttl_secs"),
    ];

    fn validate(&self) -> Result<(), Error> {
        match (&self.file, &self.media_url) {
            (None, None) => Err(Error::Construction(
                "media upload needs either a file or a media_url".to_string(),
            )),
            (Some(_), Some(_)) => Err(Error::Construction(
                "media upload takes a file or a media_url, not both".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn take_files(&mut self) -> Vec<(String, FileUpload)> {
        self.file
            .take()
            .map(|file| vec![("media".to_string(), file)])
            .unwrap_or_default()
    }
}

impl MediaUploadParams {
    pub fn from_file(file: FileUpload) -> Self {
        Self {
            file: Some(file),
            ..Default::default()
        }
    }

    pub fn from_url(media_url: &str) -> Self {
        Self {
            media_url: Some(media_url.to_string()),
            ..Default::default()
        }
    }

    pub fn with_media_name(mut self, media_name: &str) -> Self {
        self.media_name = Some(media_name.to_string());
        self
    }

    pub fn with_ttl_secs(mut self, ttl_secs: i64) -> Self {
        self.ttl_secs = Some(ttl_secs);
        self
    }
}
