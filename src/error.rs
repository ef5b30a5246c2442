//! Error types for the CFBD collector

use thiserror::Error;


pub type Result<T> = std::result::Result<T, CfbdError>;

#[derive(Error, Debug)]
pub enum CfbdError {
    /// The API answered, but with a non-success status.
    #[error("API error: {reason} (status: {status})")]
    Api {
        status: u16,
        reason: String,
        body: String,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("API key not provided and {env_var} environment variable not set")]
    MissingApiKey { env_var: String },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid year range: {start} is after {end}")]
    InvalidRange { start: u16, end: u16 },
}

impl CfbdError {
    /// True for failures reported by the API itself rather than the transport or decoding.
    pub fn is_api_error(&self) -> bool {
        matches!(self, CfbdError::Api { .. })
    }
}
