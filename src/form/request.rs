use crate::api::{AnalysisRequest, RobotsSource};
use crate::ValidationError;

/// Splits the test-paths textarea into individual paths
///
/// Blank lines are dropped; every other line is sent exactly as typed,
/// minus a trailing `\r`. Order is kept.
pub fn parse_test_paths(raw: &str) -> Vec<String> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Assembles an analysis request from raw form values
///
/// The URL wins over pasted content if both are filled in. Validation runs
/// before anything is built, so a failed call never reaches the network.
///
/// # Returns
///
/// * `Ok(AnalysisRequest)` - A request carrying exactly one source
/// * `Err(ValidationError::MissingSource)` - Both URL and content are blank
/// * `Err(ValidationError::NoUserAgent)` - No user-agent is selected
pub fn build_request(
    url: &str,
    content: &str,
    user_agents: &[String],
    test_paths: &str,
) -> Result<AnalysisRequest, ValidationError> {
    let url = url.trim();

    let source = if !url.is_empty() {
        RobotsSource::Url(url.to_string())
    } else if !content.trim().is_empty() {
        RobotsSource::Content(content.to_string())
    } else {
        return Err(ValidationError::MissingSource);
    };

    if user_agents.is_empty() {
        return Err(ValidationError::NoUserAgent);
    }

    Ok(AnalysisRequest {
        user_agents: user_agents.to_vec(),
        test_paths: parse_test_paths(test_paths),
        source,
    })
}
