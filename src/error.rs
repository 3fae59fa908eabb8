/// Error types
///
/// Only two things can fail: fetching a slideshow picture and reading the
/// config file. Neither is fatal; the page degrades and keeps running.

use thiserror::Error;

/// Errors from downloading or decoding a slideshow picture
///
/// Carried inside a `Message`, so it must be `Clone` and holds error text
/// rather than the source errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("server answered {status} for {url}")]
    Status { status: u16, url: String },

    #[error("could not decode image: {0}")]
    Decode(String),

    #[error("decode worker failed: {0}")]
    Worker(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Request(err.to_string())
    }
}

impl From<image::ImageError> for FetchError {
    fn from(err: image::ImageError) -> Self {
        FetchError::Decode(err.to_string())
    }
}

impl From<tokio::task::JoinError> for FetchError {
    fn from(err: tokio::task::JoinError) -> Self {
        FetchError::Worker(err.to_string())
    }
}

/// Errors from loading the page config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}
