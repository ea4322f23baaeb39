use serde::Deserialize;

/// Base URL used when no configuration overrides it
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Main configuration structure for Robots-Checker
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub form: FormConfig,
}

/// Analysis service connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the analysis service; `/analyze` is appended to it
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    /// Request timeout handed to the HTTP transport (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Full URL of the analysis endpoint
    pub fn analyze_endpoint(&self) -> String {
        format!("{}/analyze", self.base_url.trim_end_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Form options
#[derive(Debug, Clone, Deserialize)]
pub struct FormConfig {
    /// User-agent options offered by the multi-select
    #[serde(rename = "user-agents", default = "default_user_agents")]
    pub user_agents: Vec<String>,

    /// Options selected when the form is first shown
    #[serde(rename = "default-user-agents", default = "default_selected")]
    pub default_user_agents: Vec<String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            user_agents: default_user_agents(),
            default_user_agents: default_selected(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agents() -> Vec<String> {
    [
        "*",
        "Googlebot",
        "Googlebot-Image",
        "Googlebot-News",
        "Bingbot",
        "DuckDuckBot",
        "GPTBot",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_selected() -> Vec<String> {
    vec!["*".to_string()]
}
