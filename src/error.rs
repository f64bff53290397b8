//! Error types for the job client.

use thiserror::Error;

/// All errors produced by the job client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no media file selected")]
    MissingInput,

    #[error("no job has been submitted yet")]
    NoJob,

    #[error("a {0} request is already in flight")]
    Busy(&'static str),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("unexpected response: {0}")]
    MalformedResponse(String),

    #[error("could not read media file: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
