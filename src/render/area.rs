//! Results area abstraction
//!
//! The controller never touches a document directly. It writes whole HTML
//! fragments into a `ResultsArea`, which replaces whatever was shown before.

/// The section of the page where results, errors and the loader appear
pub trait ResultsArea: Send {
    /// Replaces the area's entire content with `html`
    fn replace(&mut self, html: String);

    /// Makes the area visible
    fn show(&mut self);
}

/// In-memory results area
///
/// Used by the CLI to collect the final fragment and by tests to inspect
/// what the controller rendered.
#[derive(Debug, Clone, Default)]
pub struct BufferedResultsArea {
    html: String,
    visible: bool,
    replacements: usize,
}

impl BufferedResultsArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content
    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// How many times the content has been replaced
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl ResultsArea for BufferedResultsArea {
    fn replace(&mut self, html: String) {
        self.html = html;
        self.replacements += 1;
    }

    fn show(&mut self) {
        self.visible = true;
    }
}
