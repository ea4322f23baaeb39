//! Form view-model
//!
//! This module holds the plain-data state behind the analysis form:
//! - The URL / pasted-content inputs and their mutual exclusion
//! - URL normalization when the URL field loses focus
//! - The user-agent multi-select
//! - Assembly and validation of the `AnalysisRequest`

mod normalize;
mod request;
mod state;

pub use normalize::{normalize_robots_url, ROBOTS_MARKER};
pub use request::{build_request, parse_test_paths};
pub use state::{FormState, InputField, UserAgentSelect, DISABLED_MARKER_CLASSES};
