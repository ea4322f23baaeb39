//! Form field state
//!
//! This module defines the input fields of the analysis form and the rules
//! that tie them together. Event handlers (`edit_url`, `edit_content`,
//! `blur_url`) mirror the page events a user would trigger.

use crate::api::AnalysisRequest;
use crate::config::FormConfig;
use crate::form::normalize::normalize_robots_url;
use crate::form::request::build_request;
use crate::ValidationError;

/// CSS classes applied to an input while it is disabled
pub const DISABLED_MARKER_CLASSES: [&str; 2] = ["bg-gray-700", "cursor-not-allowed"];

/// A text input that can be disabled by its sibling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    value: String,
    disabled: bool,
}

impl InputField {
    /// Current raw value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the input is currently disabled
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the trimmed value is empty
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Extra CSS classes the input carries in its current state
    pub fn marker_classes(&self) -> &'static [&'static str] {
        if self.disabled {
            &DISABLED_MARKER_CLASSES
        } else {
            &[]
        }
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}

/// Multi-select of user-agent options
///
/// Selection order is kept, and selecting an already selected option is a
/// no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserAgentSelect {
    options: Vec<String>,
    selected: Vec<String>,
}

impl UserAgentSelect {
    /// Creates a select with the given options and nothing selected
    pub fn new(options: Vec<String>) -> Self {
        Self {
            options,
            selected: Vec::new(),
        }
    }

    /// All options offered
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Currently selected options, in selection order
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Selects an option
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The option is selected (or already was)
    /// * `Err(ValidationError::UnknownUserAgent)` - No such option
    pub fn select(&mut self, agent: &str) -> Result<(), ValidationError> {
        if !self.options.iter().any(|o| o == agent) {
            return Err(ValidationError::UnknownUserAgent(agent.to_string()));
        }
        if !self.selected.iter().any(|s| s == agent) {
            self.selected.push(agent.to_string());
        }
        Ok(())
    }

    /// Deselects an option; returns whether it was selected
    pub fn deselect(&mut self, agent: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|s| s != agent);
        self.selected.len() != before
    }

    /// Clears the selection
    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

/// The whole analysis form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    site_url: InputField,
    robots_content: InputField,
    user_agents: UserAgentSelect,
    test_paths: String,
}

impl FormState {
    /// Creates an empty form offering the given user-agent options
    pub fn new(user_agent_options: Vec<String>) -> Self {
        Self {
            user_agents: UserAgentSelect::new(user_agent_options),
            ..Self::default()
        }
    }

    /// Creates a form from configuration, with the default agents selected
    ///
    /// Defaults missing from the options list are skipped; configuration
    /// validation rejects them earlier.
    pub fn from_config(config: &FormConfig) -> Self {
        let mut form = Self::new(config.user_agents.clone());
        for agent in &config.default_user_agents {
            if let Err(e) = form.user_agents.select(agent) {
                tracing::warn!("Skipping default user-agent: {}", e);
            }
        }
        form
    }

    pub fn site_url(&self) -> &InputField {
        &self.site_url
    }

    pub fn robots_content(&self) -> &InputField {
        &self.robots_content
    }

    pub fn user_agents(&self) -> &UserAgentSelect {
        &self.user_agents
    }

    pub fn user_agents_mut(&mut self) -> &mut UserAgentSelect {
        &mut self.user_agents
    }

    pub fn test_paths(&self) -> &str {
        &self.test_paths
    }

    /// Handles an edit of the URL field
    ///
    /// A non-blank URL disables the content field; a blank one re-enables it.
    /// Edits to a disabled URL field are ignored, the way a page ignores
    /// typing into a disabled input.
    ///
    /// # Returns
    ///
    /// `true` if the edit was applied, `false` if the field was disabled
    pub fn edit_url(&mut self, value: impl Into<String>) -> bool {
        if self.site_url.is_disabled() {
            tracing::debug!("Ignoring edit of disabled URL field");
            return false;
        }
        self.site_url.value = value.into();
        let blank = self.site_url.is_blank();
        self.robots_content.set_disabled(!blank);
        true
    }

    /// Handles an edit of the pasted-content field
    ///
    /// Non-blank content disables the URL field; blank content re-enables it.
    /// Ignored while the content field is disabled.
    pub fn edit_content(&mut self, value: impl Into<String>) -> bool {
        if self.robots_content.is_disabled() {
            tracing::debug!("Ignoring edit of disabled content field");
            return false;
        }
        self.robots_content.value = value.into();
        let blank = self.robots_content.is_blank();
        self.site_url.set_disabled(!blank);
        true
    }

    /// Handles the URL field losing focus by completing it to a robots.txt URL
    pub fn blur_url(&mut self) {
        if self.site_url.is_disabled() {
            return;
        }
        let normalized = normalize_robots_url(&self.site_url.value);
        if normalized != self.site_url.value {
            tracing::debug!("Normalized URL '{}' -> '{}'", self.site_url.value, normalized);
            self.site_url.value = normalized;
        }
    }

    /// Replaces the newline-separated test paths
    pub fn set_test_paths(&mut self, value: impl Into<String>) {
        self.test_paths = value.into();
    }

    /// Reads the form into a request, validating it on the way
    pub fn to_request(&self) -> Result<AnalysisRequest, ValidationError> {
        build_request(
            self.site_url.value(),
            self.robots_content.value(),
            self.user_agents.selected(),
            &self.test_paths,
        )
    }
}
