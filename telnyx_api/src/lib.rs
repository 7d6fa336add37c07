//! Typed client for the Telnyx v2 REST API.
//!
//! Every operation runs the same pipeline: [`request::parse`] normalizes typed
//! or raw parameters, the [`Client`] dispatches one HTTP request, and
//! [`response`] decodes the body into the declared shape or an [`Error`].

mod enums;

mod client;
mod config;
mod errors;
mod field;
mod options;
pub mod pagination;
pub mod params;
pub mod request;
pub mod resources;
pub mod response;
pub mod types;

pub use self::client::Client;
pub use self::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::errors::{ApiError, ApiErrorDetail, ApiStatus, Error, ErrorKind, ErrorSource};
pub use self::field::Field;
pub use self::options::RequestOptions;
pub use self::pagination::{Page, PageStyle};
pub use self::params::Paginate;
pub use self::request::{FileUpload, Params, RequestParams};
pub use self::response::{Binary, RawResponse};
