//! Form controller
//!
//! Ties the form view-model to the analysis service and the results area.
//! One submission is one request/response cycle: validate, show the loader,
//! post, then render either the result or an error panel. Nothing is
//! retried and concurrent submissions are not deduplicated.

use crate::api::{AnalysisResult, AnalysisTransport};
use crate::form::FormState;
use crate::render::{render_error, render_loader, render_results, ResultsArea};
use crate::{CheckerError, ValidationError};

/// How a submission ended
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The service answered and its result was rendered
    Rendered(AnalysisResult),

    /// The form was invalid; no request was sent
    Rejected(ValidationError),

    /// The request failed (HTTP status, network or decode error)
    Failed(CheckerError),
}

impl SubmitOutcome {
    /// Returns true if the results area ended up showing an error panel
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::Rendered(_))
    }
}

/// Drives submissions from a `FormState`
///
/// The transport and results area are injected so the controller can run
/// against a real service and buffer, or against test fakes.
pub struct FormController<T, A> {
    transport: T,
    area: A,
}

impl<T, A> FormController<T, A>
where
    T: AnalysisTransport,
    A: ResultsArea,
{
    pub fn new(transport: T, area: A) -> Self {
        Self { transport, area }
    }

    /// The results area the controller renders into
    pub fn area(&self) -> &A {
        &self.area
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Consumes the controller, returning its transport and results area
    pub fn into_parts(self) -> (T, A) {
        (self.transport, self.area)
    }

    /// Submits the form
    ///
    /// Validation failures are shown without touching the network. Any
    /// failure after that point is shown with its status code or error text.
    pub async fn submit(&mut self, form: &FormState) -> SubmitOutcome {
        let request = match form.to_request() {
            Ok(request) => request,
            Err(e) => {
                tracing::info!("Submission rejected: {}", e);
                self.show_error(&CheckerError::Validation(e.clone()));
                return SubmitOutcome::Rejected(e);
            }
        };

        self.display(render_loader());

        match self.transport.analyze(&request).await {
            Ok(result) => {
                self.display_result(&result);
                SubmitOutcome::Rendered(result)
            }
            Err(e) => {
                tracing::error!("Analysis failed: {}", e);
                self.show_error(&e);
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Renders a result, replacing whatever the area showed before
    pub fn display_result(&mut self, result: &AnalysisResult) {
        self.display(render_results(result));
    }

    fn show_error(&mut self, error: &CheckerError) {
        self.display(render_error(&error.user_message()));
    }

    fn display(&mut self, html: String) {
        self.area.replace(html);
        self.area.show();
    }
}
