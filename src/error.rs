//! Error types for feed retrieval and summarization

use std::error::Error as _;
use std::io;

use thiserror::Error;

/// Errors that can occur while fetching headlines
#[derive(Debug, Error)]
pub enum FeedError {
    /// Topic was empty
    #[error("Topic must not be empty")]
    EmptyTopic,

    /// Feed URL could not be built
    #[error("Invalid feed URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// HTTP request failed (connection, timeout, body read)
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Feed returned a non-success status
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Feed document could not be parsed
    #[error("Parse error: {0}")]
    ParseError(#[from] rss::Error),
}

/// Errors that can occur while summarizing a single chunk
///
/// The `Display` output of `Status` and `Unexpected` is the placeholder text
/// that ends up inline in the combined summary.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Inference endpoint could not be reached at all
    #[error("Could not connect to Ollama: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// Inference endpoint answered with a non-success status
    #[error("Ollama error: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected error calling Ollama: {0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for SummarizeError {
    fn from(e: reqwest::Error) -> Self {
        if is_connection_failure(&e) {
            SummarizeError::Unreachable(e)
        } else {
            SummarizeError::Unexpected(e.to_string())
        }
    }
}

impl From<serde_json::Error> for SummarizeError {
    fn from(e: serde_json::Error) -> Self {
        SummarizeError::Unexpected(e.to_string())
    }
}

/// Whether the server could not be reached or hung up before answering
///
/// Covers refused connections, connect timeouts, resets and a connection
/// closed before any response arrived.
fn is_connection_failure(e: &reqwest::Error) -> bool {
    if e.is_connect() {
        return true;
    }

    let mut source = e.source();
    while let Some(err) = source {
        if let Some(io_err) = err.downcast_ref::<io::Error>() {
            if matches!(
                io_err.kind(),
                io::ErrorKind::ConnectionRefused
                    | io::ErrorKind::ConnectionReset
                    | io::ErrorKind::ConnectionAborted
                    | io::ErrorKind::NotConnected
                    | io::ErrorKind::BrokenPipe
            ) {
                return true;
            }
        }
        if let Some(hyper_err) = err.downcast_ref::<hyper::Error>() {
            if hyper_err.is_incomplete_message() {
                return true;
            }
        }
        source = err.source();
    }

    false
}
