//! # Donald Ipsum client
//!
//! Async client for the Donald Ipsum text-generation API. Three operations,
//! `paragraphs`, `sentences` and `words`, each take an optional count and
//! return the generated text as a list of strings.
//!
//! # Examples
//! ```no_run
//! use donald_ipsum::ApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), donald_ipsum::Error> {
//!     let client = ApiClient::new();
//!     let response = client.get_sentences(5).await?;
//!
//!     for sentence in response.content {
//!         println!("{sentence}");
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod request;
mod response;

pub use client::ApiClient;
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use request::{Endpoint, construct_uri, normalize_count, parse_count};
pub use response::{ApiError, ApiResponse, ErrorContent, UNKNOWN_ERROR};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid base URL {url}. Error: {error}")]
    InvalidBaseUrl { url: String, error: String },

    #[error("Request Error {0}")]
    Request(#[from] reqwest::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    /// HTTP status of the exchange, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(e) => Some(e.status),
            Error::Request(e) => e.status().map(|s| s.as_u16()),
            Error::InvalidBaseUrl { .. } => None,
        }
    }

    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}
