use serde::{Deserialize, Serialize};

/// Where the robots.txt under analysis comes from
///
/// Serialized flattened into the request body, so exactly one of the
/// `url` / `content` keys is ever sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RobotsSource {
    /// Fetch the file from this URL
    Url(String),
    /// Analyze this pasted content
    Content(String),
}

/// Body of `POST /analyze`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// User-agents to evaluate, in selection order
    pub user_agents: Vec<String>,

    /// Paths to test against every user-agent
    pub test_paths: Vec<String>,

    #[serde(flatten)]
    pub source: RobotsSource,
}

/// Fetch/parse status reported by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisStatus {
    /// Status of the robots.txt fetch; not necessarily a valid HTTP code
    pub code: i64,
    pub message: String,
    /// Size of the analyzed file in characters
    #[serde(default)]
    pub size: Option<u64>,
}

/// One user-agent group detected in the file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotGroup {
    pub user_agent: String,
    #[serde(default)]
    pub allow_rules: Vec<String>,
    #[serde(default)]
    pub disallow_rules: Vec<String>,
    #[serde(default)]
    pub sitemaps: Vec<String>,
}

/// Verdict for one path/user-agent pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub path: String,
    pub user_agent: String,
    pub allowed: bool,
    /// The decisive directive, e.g. `Disallow: /admin`
    #[serde(default)]
    pub matched_rule: Option<String>,
}

/// Response body of `POST /analyze`
///
/// Collections the service leaves out are treated as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub status: AnalysisStatus,
    #[serde(default)]
    pub groups: Vec<RobotGroup>,
    #[serde(default)]
    pub test_results: Vec<TestResult>,
    #[serde(default)]
    pub warnings: Vec<String>,
}
