//! Drives a [`SessionState`] through the analysis provider.

use riskradar_ai::Analyzer;
use riskradar_core::RegionCode;
use tracing::{debug, error, info};

use crate::state::{Event, SessionError, SessionState};
use crate::view::{View, render};

/// Single user-facing message for every analysis failure kind.
pub const GENERIC_FAILURE_NOTICE: &str =
    "Failed to analyze contract. Please ensure your API key is configured correctly.";

/// One session: its current state plus the provider used for submissions.
pub struct SessionController<A> {
    analyzer: A,
    state: SessionState,
}

impl<A: Analyzer> SessionController<A> {
    pub fn new(analyzer: A) -> Self {
        Self {
            analyzer,
            state: SessionState::NoRegion,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    pub fn view(&self) -> View {
        render(&self.state)
    }

    /// Apply a user event. Rejected events leave the state unchanged.
    pub fn dispatch(&mut self, event: Event) -> Result<(), SessionError> {
        let next = self.state.apply(event)?;
        debug!(from = self.state.name(), to = next.name(), "session transition");
        self.state = next;
        Ok(())
    }

    pub fn select_region(&mut self, region: RegionCode) -> Result<(), SessionError> {
        self.dispatch(Event::SelectRegion(region))
    }

    pub fn edit_text(&mut self, text: impl Into<String>) -> Result<(), SessionError> {
        self.dispatch(Event::EditText(text.into()))
    }

    pub fn toggle_finding(&mut self, index: usize) -> Result<(), SessionError> {
        self.dispatch(Event::ToggleFinding(index))
    }

    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.dispatch(Event::Reset)
    }

    /// Submit the current draft and await the single provider call.
    ///
    /// Validation failures are returned and nothing is sent. Provider failures
    /// are logged with their kind and leave the session in `RegionSelected`
    /// with [`GENERIC_FAILURE_NOTICE`]; they are not returned as errors.
    pub async fn submit(&mut self) -> Result<(), SessionError> {
        self.dispatch(Event::Submit)?;

        let (Some(region), Some(draft)) = (self.state.region(), self.state.draft()) else {
            return Err(SessionError::NoPendingAnalysis);
        };
        let text = draft.text().to_owned();

        info!(region = %region, chars = draft.char_count(), "submitting contract");
        let outcome = self.analyzer.analyze(&text, region.config()).await;

        let event = match outcome {
            Ok(result) => Event::AnalysisSucceeded(result),
            Err(err) => {
                error!(region = %region, kind = err.kind(), error = %err, "contract analysis failed");
                Event::AnalysisFailed {
                    notice: GENERIC_FAILURE_NOTICE.to_string(),
                }
            }
        };
        self.dispatch(event)
    }
}
