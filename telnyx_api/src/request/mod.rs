//! Request marshalling shared by every resource.

mod input;
mod keys;
mod path;

pub use self::input::{parse, Normalized, Params, RequestParams};
pub use self::keys::{flatten_query, rename_keys};
pub use self::path::render_path;

use std::fmt;
use std::path::Path;

use reqwest::Method;
use serde_json::{Map, Value};

use crate::{options::RequestOptions, Error};

/// A file part for `multipart/form-data` uploads.
#[derive(Clone, PartialEq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn from_bytes(file_name: &str, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.to_string(),
            content_type: None,
            bytes: bytes.into(),
        }
    }

    /// Reads a file from disk, naming the part after the file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            Error::Construction(format!("failed to read {}: {}", path.display(), e))
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self {
            file_name,
            content_type: None,
            bytes,
        })
    }

    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = Some(content_type.to_string());
        self
    }
}

impl fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Body {
    Empty,
    Json(Map<String, Value>),
    Multipart {
        fields: Map<String, Value>,
        files: Vec<(String, FileUpload)>,
    },
}

/// A fully marshalled call, ready for [`crate::Client`] to dispatch.
#[derive(Debug, Clone)]
pub(crate) struct ApiRequest {
    pub method: Method,
    pub path: Vec<String>,
    pub query: Map<String, Value>,
    pub body: Body,
    pub accept: &'static str,
    pub options: RequestOptions,
}

impl ApiRequest {
    pub fn new(method: Method, template: &str, args: &[&str]) -> Result<Self, Error> {
        Ok(Self {
            method,
            path: render_path(template, args)?,
            query: Map::new(),
            body: Body::Empty,
            accept: "application/json",
            options: RequestOptions::default(),
        })
    }

    pub fn get(template: &str, args: &[&str]) -> Result<Self, Error> {
        Self::new(Method::GET, template, args)
    }

    pub fn post(template: &str, args: &[&str]) -> Result<Self, Error> {
        Self::new(Method::POST, template, args)
    }

    pub fn put(template: &str, args: &[&str]) -> Result<Self, Error> {
        Self::new(Method::PUT, template, args)
    }

    pub fn patch(template: &str, args: &[&str]) -> Result<Self, Error> {
        Self::new(Method::PATCH, template, args)
    }

    pub fn delete(template: &str, args: &[&str]) -> Result<Self, Error> {
        Self::new(Method::DELETE, template, args)
    }

    /// Sends the normalized fields as the query string.
    pub fn query(mut self, input: Normalized) -> Self {
        self.query = input.fields;
        self.options = input.options;
        self
    }

    /// Sends the normalized fields as a JSON body.
    pub fn json(mut self, input: Normalized) -> Self {
        self.body = Body::Json(input.fields);
        self.options = input.options;
        self
    }

    /// Sends a multipart body when the input carries files, JSON otherwise.
    pub fn form(mut self, input: Normalized) -> Self {
        self.body = if input.files.is_empty() {
            Body::Json(input.fields)
        } else {
            Body::Multipart {
                fields: input.fields,
                files: input.files,
            }
        };
        self.options = input.options;
        self
    }

    /// Always sends `multipart/form-data`, even without file parts.
    pub fn multipart(mut self, input: Normalized) -> Self {
        self.body = Body::Multipart {
            fields: input.fields,
            files: input.files,
        };
        self.options = input.options;
        self
    }

    pub fn options(mut self, options: &RequestOptions) -> Self {
        self.options = options.clone();
        self
    }

    pub fn accept(mut self, accept: &'static str) -> Self {
        self.accept = accept;
        self
    }
}
