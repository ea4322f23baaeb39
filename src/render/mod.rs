//! Result rendering module
//!
//! This module turns analysis results into HTML:
//! - Pure render functions for the results, error and loader panels
//! - Status color coding by HTTP range
//! - The `ResultsArea` seam standing in for the page's results section

mod area;
mod html;

pub use area::{BufferedResultsArea, ResultsArea};
pub use html::{page, render_error, render_loader, render_results};

/// Color coding of the analysis status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTone {
    /// 2xx
    Success,
    /// 4xx
    Warning,
    /// 5xx and above
    Failure,
    /// Anything else (1xx, 3xx, negative)
    Neutral,
}

impl StatusTone {
    /// Classifies a status code by range
    pub fn from_code(code: i64) -> Self {
        match code {
            200..=299 => Self::Success,
            400..=499 => Self::Warning,
            500.. => Self::Failure,
            _ => Self::Neutral,
        }
    }

    /// Indicator dot class for this tone
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "bg-green-500",
            Self::Warning => "bg-yellow-500",
            Self::Failure => "bg-red-500",
            Self::Neutral => "bg-gray-500",
        }
    }
}
