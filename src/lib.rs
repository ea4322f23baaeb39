//! Robots-Checker: a form front end for a robots.txt analysis service
//!
//! This crate collects a robots.txt source (URL or pasted content), a set of
//! user-agents and test paths, submits them to a remote analysis service and
//! renders the JSON verdict as HTML. The analysis itself happens server-side.

pub mod api;
pub mod config;
pub mod controller;
pub mod form;
pub mod render;

use thiserror::Error;

/// Main error type for Robots-Checker operations
#[derive(Debug, Error)]
pub enum CheckerError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("HTTP error: {status}")]
    Http { status: u16 },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CheckerError {
    /// Text shown in the results area when a submission fails
    ///
    /// Validation failures are shown as-is; everything after the form was
    /// accepted is prefixed so the user can tell the analysis itself failed.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            other => format!("Analysis failed: {}", other),
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Form validation errors, reported before any request is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please provide either a URL or the robots.txt content")]
    MissingSource,

    #[error("Please select at least one User-Agent")]
    NoUserAgent,

    #[error("Unknown User-Agent option: {0}")]
    UnknownUserAgent(String),
}

/// Result type alias for Robots-Checker operations
pub type Result<T> = std::result::Result<T, CheckerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use api::{AnalysisRequest, AnalysisResult, AnalysisTransport, HttpAnalysisClient};
pub use config::Config;
pub use controller::{FormController, SubmitOutcome};
pub use form::{normalize_robots_url, FormState};
pub use render::{ResultsArea, StatusTone};
