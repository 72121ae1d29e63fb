//! UI controller: input validation, the request state machine and history
//! bookkeeping, independent of any widget toolkit.

pub mod state;
pub mod view_model;

pub use state::{Panels, UiState};
pub use view_model::{show_result, DownloadAction, MediaPreview, ResultView};

use crate::api::base::ApiBase;
use crate::api::models::ExtractionResult;
use crate::api::traits::ExtractApi;
use crate::history::{self, HistoryEntry};
use crate::storage::KeyValueStore;
use crate::utils::error::ControllerError;
use chrono::{DateTime, Local};
use tracing::{info, warn};

/// An accepted submission, tagged so late responses can be recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub url: String,
    pub generation: u64,
}

/// Outcome of feeding a response back into the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// Result is on screen; the entry should be added to history
    Succeeded(HistoryEntry),
    /// Error is on screen
    Failed(ControllerError),
    /// Response belongs to an older submission and was dropped
    Stale,
}

/// State machine behind the main panel:
/// `Idle -> Loading -> {Result, Error} -> Loading` on the next submission.
#[derive(Debug, Default)]
pub struct UiController {
    state: UiState,
    in_flight: bool,
    generation: u64,
    /// URL of the request currently shown or in flight
    source_url: Option<String>,
    /// Dismissible message that does not replace the panels
    notice: Option<String>,
}

impl UiController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn panels(&self) -> Panels {
        self.state.panels()
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.in_flight
    }

    /// Generation of the most recent accepted submission
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref()
    }

    pub fn result(&self) -> Option<&ExtractionResult> {
        match &self.state {
            UiState::Result(result) => Some(result),
            _ => None,
        }
    }

    /// Validate `raw` and enter `Loading`.
    ///
    /// Blank input, or a request already in flight, leaves the panels
    /// untouched and raises a notice instead; no request is issued.
    pub fn begin(&mut self, raw: &str) -> Result<Submission, ControllerError> {
        if self.in_flight {
            self.report(&ControllerError::RequestInFlight);
            return Err(ControllerError::RequestInFlight);
        }

        let url = raw.trim();
        if url.is_empty() {
            self.report(&ControllerError::EmptyInput);
            return Err(ControllerError::EmptyInput);
        }

        self.generation += 1;
        self.in_flight = true;
        self.notice = None;
        self.source_url = Some(url.to_string());
        self.state = UiState::Loading;

        info!("Extraction #{} started for {}", self.generation, url);
        Ok(Submission {
            url: url.to_string(),
            generation: self.generation,
        })
    }

    /// Leave `Loading` with the backend's answer
    pub fn settle(
        &mut self,
        generation: u64,
        result: Result<ExtractionResult, ControllerError>,
        now: DateTime<Local>,
    ) -> Settlement {
        if !self.in_flight || generation != self.generation {
            warn!("Dropping response for stale extraction #{}", generation);
            return Settlement::Stale;
        }
        self.in_flight = false;

        match result {
            Ok(result) => {
                let source = self.source_url.as_deref().unwrap_or_default();
                let entry = HistoryEntry::from_result(&result, source, now);
                info!("Extraction #{} returned {} link(s)", generation, result.links.len());
                self.state = UiState::Result(result);
                Settlement::Succeeded(entry)
            }
            Err(e) => {
                warn!("Extraction #{} failed: {}", generation, e);
                self.state = UiState::Error(e.to_string());
                Settlement::Failed(e)
            }
        }
    }

    /// Build the result panel for the current result.
    ///
    /// When the download links cannot be built the result is replaced by the
    /// error panel, so a panel is always on screen after settling.
    pub fn render_result(&mut self, base: &ApiBase, forward_referer: bool) -> Option<ResultView> {
        let result = match &self.state {
            UiState::Result(result) => result,
            _ => return None,
        };
        let referer = if forward_referer {
            self.source_url.as_deref()
        } else {
            None
        };

        match show_result(base, result, referer) {
            Ok(view) => Some(view),
            Err(e) => {
                warn!("Could not build download links: {}", e);
                self.state = UiState::Error(e.to_string());
                None
            }
        }
    }

    /// Show `err` as a dismissible notice without touching the panels
    pub fn report(&mut self, err: &ControllerError) {
        self.notice = Some(err.to_string());
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Close the error panel
    pub fn dismiss_error(&mut self) {
        if matches!(self.state, UiState::Error(_)) {
            self.state = UiState::Idle;
        }
    }
}

/// Run one submission to completion: validate, extract, settle and record
/// history. History write failures are logged and do not fail the request.
pub async fn handle_download<A, S>(
    controller: &mut UiController,
    api: &A,
    store: &S,
    raw: &str,
) -> Result<(), ControllerError>
where
    A: ExtractApi + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let submission = controller.begin(raw)?;
    let result = api.extract(&submission.url).await;

    match controller.settle(submission.generation, result, Local::now()) {
        Settlement::Succeeded(entry) => {
            if let Err(e) = history::add_to_history(store, entry).await {
                warn!("Failed to record history: {}", e);
            }
            Ok(())
        }
        Settlement::Failed(e) => Err(e),
        Settlement::Stale => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::MediaType;

    fn image_result() -> ExtractionResult {
        ExtractionResult {
            title: "Fern".into(),
            thumbnail: "f.jpg".into(),
            media_type: MediaType::Image,
            links: Vec::new(),
        }
    }

    #[test]
    fn test_blank_input_raises_notice_only() {
        let mut controller = UiController::new();
        assert_eq!(controller.begin("   \t"), Err(ControllerError::EmptyInput));
        assert_eq!(controller.state(), &UiState::Idle);
        assert!(controller.can_submit());
        assert_eq!(controller.notice(), Some("Please enter a valid Pinterest link."));
    }

    #[test]
    fn test_submit_disabled_while_loading() {
        let mut controller = UiController::new();
        let submission = controller.begin("  https://pin.it/x ").unwrap();
        assert_eq!(submission.url, "https://pin.it/x");
        assert!(controller.state().is_loading());
        assert!(!controller.can_submit());
        assert_eq!(
            controller.begin("https://pin.it/y"),
            Err(ControllerError::RequestInFlight)
        );
        assert_eq!(
            controller.notice(),
            Some("An extraction is already in progress.")
        );
        assert_eq!(controller.source_url(), Some("https://pin.it/x"));
        assert!(controller.state().is_loading());
    }

    #[test]
    fn test_settle_success_produces_history_entry() {
        let mut controller = UiController::new();
        let submission = controller.begin("https://pin.it/x").unwrap();

        let settlement = controller.settle(submission.generation, Ok(image_result()), Local::now());
        match settlement {
            Settlement::Succeeded(entry) => {
                assert_eq!(entry.url, "https://pin.it/x");
                assert_eq!(entry.title, "Fern");
            }
            other => panic!("unexpected settlement {:?}", other),
        }
        assert!(controller.panels().result);
        assert!(controller.can_submit());
    }

    #[test]
    fn test_error_can_be_dismissed_and_resubmitted() {
        let mut controller = UiController::new();
        let submission = controller.begin("https://pin.it/x").unwrap();
        controller.settle(
            submission.generation,
            Err(ControllerError::NetworkUnreachable),
            Local::now(),
        );
        assert!(controller.panels().error);

        controller.dismiss_error();
        assert_eq!(controller.state(), &UiState::Idle);

        let next = controller.begin("https://pin.it/x").unwrap();
        assert_eq!(next.generation, submission.generation + 1);
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut controller = UiController::new();
        let submission = controller.begin("https://pin.it/x").unwrap();
        let settlement = controller.settle(submission.generation + 7, Ok(image_result()), Local::now());

        assert_eq!(settlement, Settlement::Stale);
        assert!(controller.state().is_loading());
    }

    #[test]
    fn test_render_result_forwards_referer_when_enabled() {
        let mut controller = UiController::new();
        let submission = controller.begin("https://pin.it/x").unwrap();
        let mut result = image_result();
        result.links = vec![crate::api::models::DownloadLink {
            url: "a.jpg".into(),
            ext: "jpg".into(),
            quality: None,
            label: None,
        }];
        controller.settle(submission.generation, Ok(result), Local::now());

        let base = ApiBase::new("http://localhost:8000/api");
        let view = controller.render_result(&base, true).unwrap();
        assert!(view.actions[0].href.contains("referer="));

        let view = controller.render_result(&base, false).unwrap();
        assert!(!view.actions[0].href.contains("referer="));
    }

    #[test]
    fn test_unbuildable_result_falls_back_to_error_panel() {
        let mut controller = UiController::new();
        let submission = controller.begin("https://pin.it/x").unwrap();
        let mut result = image_result();
        result.links = vec![crate::api::models::DownloadLink {
            url: "a.jpg".into(),
            ext: "jpg".into(),
            quality: None,
            label: None,
        }];
        controller.settle(submission.generation, Ok(result), Local::now());

        let view = controller.render_result(&ApiBase::new("not a url"), true);

        assert!(view.is_none());
        assert!(matches!(controller.state(), UiState::Error(_)));
        assert_eq!(controller.panels().visible_count(), 1);
    }

    #[test]
    fn test_new_submission_clears_notice() {
        let mut controller = UiController::new();
        controller.report(&ControllerError::ClipboardUnavailable("denied".into()));
        assert!(controller.notice().is_some());

        controller.begin("https://pin.it/x").unwrap();
        assert!(controller.notice().is_none());
    }
}
