//! Image Query - View Model

use super::api::{UploadFailure, UploadOutcome};
use super::preview::ObjectUrl;
use contracts::usecases::u510_image_query::AnalysisResult;
use leptos::prelude::*;
use web_sys::File;

pub const NO_FILE_WARNING: &str = "Please select an image file first";
pub const NETWORK_ERROR: &str = "Network error. Please check your connection and try again.";

/// What the result area currently shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Busy,
    /// At least one similar image was returned
    Success(AnalysisResult),
    /// Analysis succeeded but found no similar images
    Empty(AnalysisResult),
    Error(String),
}

impl ViewState {
    pub fn from_analysis(result: AnalysisResult) -> Self {
        if result.has_similar_images() {
            ViewState::Success(result)
        } else {
            ViewState::Empty(result)
        }
    }

    /// Transport failures are logged; the user only sees a generic message.
    pub fn from_outcome(outcome: Result<UploadOutcome, UploadFailure>) -> Self {
        match outcome {
            Ok(UploadOutcome::Analysed(result)) => Self::from_analysis(result),
            Ok(UploadOutcome::Rejected(message)) => ViewState::Error(message),
            Err(e) => {
                log::error!("Error: {}", e);
                ViewState::Error(NETWORK_ERROR.to_string())
            }
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            ViewState::Success(r) | ViewState::Empty(r) => Some(r),
            _ => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, ViewState::Busy)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Busy => "busy",
            ViewState::Success(_) => "success",
            ViewState::Empty(_) => "empty",
            ViewState::Error(_) => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Hands out increasing tickets; only the newest one may update the view.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}

#[derive(Clone, Copy)]
pub struct ImageQueryVm {
    pub state: RwSignal<ViewState>,
    pub input_warning: RwSignal<Option<String>>,
    sequencer: StoredValue<RequestSequencer>,
    preview: StoredValue<Option<ObjectUrl>>,
}

impl ImageQueryVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ViewState::Idle),
            input_warning: RwSignal::new(None),
            sequencer: StoredValue::new(RequestSequencer::default()),
            preview: StoredValue::new(None),
        }
    }

    /// Submit without a file: warn, leave the current view alone.
    pub fn reject_empty_submit(&self) {
        log::debug!("submit ignored: no file selected");
        self.input_warning.set(Some(NO_FILE_WARNING.to_string()));
    }

    pub fn begin_request(&self) -> RequestTicket {
        let mut sequencer = self.sequencer.get_value();
        let ticket = sequencer.issue();
        self.sequencer.set_value(sequencer);

        self.input_warning.set(None);
        // the old preview node goes away with the old view
        self.preview.set_value(None);
        self.state.set(ViewState::Busy);
        log::debug!("upload {:?} started", ticket);
        ticket
    }

    pub fn complete_request(
        &self,
        ticket: RequestTicket,
        file: &File,
        outcome: Result<UploadOutcome, UploadFailure>,
    ) {
        self.apply_outcome(ticket, outcome, || match ObjectUrl::create(file) {
            Ok(url) => Some(url),
            Err(e) => {
                log::warn!("no local preview: {}", e);
                None
            }
        });
    }

    /// Moves to the state for `outcome` unless a newer request was started.
    /// `make_preview` runs only for an applied analysis, before the state
    /// changes. Returns whether the outcome was applied.
    pub fn apply_outcome(
        &self,
        ticket: RequestTicket,
        outcome: Result<UploadOutcome, UploadFailure>,
        make_preview: impl FnOnce() -> Option<ObjectUrl>,
    ) -> bool {
        if !self.sequencer.with_value(|s| s.is_current(ticket)) {
            log::debug!("upload {:?} superseded, response dropped", ticket);
            return false;
        }

        let next = ViewState::from_outcome(outcome);
        if next.result().is_some() {
            self.preview.set_value(make_preview());
        }
        log::debug!("upload {:?} finished: {}", ticket, next.label());
        self.state.set(next);
        true
    }

    pub fn preview_src(&self) -> Option<String> {
        self.preview.with_value(|p| {
            p.as_ref()
                .filter(|u| !u.is_released())
                .map(|u| u.url().to_string())
        })
    }

    /// Called from the preview image `load` handler.
    pub fn release_preview(&self) {
        self.preview.update_value(|p| {
            if let Some(url) = p.as_mut() {
                url.release();
            }
        });
    }

    pub fn dispose_preview(&self) {
        self.preview.set_value(None);
    }
}

impl Default for ImageQueryVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u510_image_query::ImageId;

    fn result(classes: &[&str], ids: &[&str]) -> AnalysisResult {
        AnalysisResult {
            detected_classes: classes.iter().map(|c| c.to_string()).collect(),
            image_ids: ids.iter().map(|i| ImageId::from(*i)).collect(),
        }
    }

    #[test]
    fn test_success_when_images_present() {
        let r = result(&["cat", "dog"], &["12", "45"]);
        let state = ViewState::from_outcome(Ok(UploadOutcome::Analysed(r.clone())));
        assert_eq!(state, ViewState::Success(r));
    }

    #[test]
    fn test_empty_when_no_images() {
        let r = result(&["cat"], &[]);
        let state = ViewState::from_outcome(Ok(UploadOutcome::Analysed(r.clone())));
        assert_eq!(state, ViewState::Empty(r));
        assert!(state.result().is_some());
    }

    #[test]
    fn test_rejected_keeps_server_message() {
        let state =
            ViewState::from_outcome(Ok(UploadOutcome::Rejected("model error".to_string())));
        assert_eq!(state, ViewState::Error("model error".to_string()));
    }

    #[test]
    fn test_transport_failure_is_generic() {
        let state = ViewState::from_outcome(Err(UploadFailure::Transport(
            "TypeError: Failed to fetch".to_string(),
        )));
        assert_eq!(state, ViewState::Error(NETWORK_ERROR.to_string()));

        let state = ViewState::from_outcome(Err(UploadFailure::Body(
            "expected value at line 1 column 1".to_string(),
        )));
        assert_eq!(state, ViewState::Error(NETWORK_ERROR.to_string()));
    }

    #[test]
    fn test_sequencer_only_latest_is_current() {
        let mut seq = RequestSequencer::default();
        let first = seq.issue();
        assert!(seq.is_current(first));

        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_empty_submit_keeps_state() {
        let owner = Owner::new();
        owner.set();

        let vm = ImageQueryVm::new();
        vm.state.set(ViewState::Error("model error".to_string()));
        vm.reject_empty_submit();

        assert_eq!(
            vm.state.get_untracked(),
            ViewState::Error("model error".to_string())
        );
        assert_eq!(
            vm.input_warning.get_untracked().as_deref(),
            Some(NO_FILE_WARNING)
        );
    }

    #[test]
    fn test_new_submit_goes_busy_and_supersedes() {
        let owner = Owner::new();
        owner.set();

        let vm = ImageQueryVm::new();
        vm.reject_empty_submit();
        let first = vm.begin_request();
        assert!(vm.state.get_untracked().is_busy());
        assert_eq!(vm.input_warning.get_untracked(), None);

        let second = vm.begin_request();
        assert!(!vm.sequencer.with_value(|s| s.is_current(first)));
        assert!(vm.sequencer.with_value(|s| s.is_current(second)));
        assert_eq!(vm.preview_src(), None);
    }

    #[test]
    fn test_stale_outcome_is_ignored() {
        let owner = Owner::new();
        owner.set();

        let vm = ImageQueryVm::new();
        let first = vm.begin_request();
        let second = vm.begin_request();

        let late = result(&["cat"], &["12"]);
        let applied = vm.apply_outcome(first, Ok(UploadOutcome::Analysed(late)), || {
            panic!("no preview for a superseded request")
        });
        assert!(!applied);
        assert_eq!(vm.state.get_untracked(), ViewState::Busy);

        let fresh = result(&["dog"], &["45"]);
        let applied = vm.apply_outcome(second, Ok(UploadOutcome::Analysed(fresh.clone())), || None);
        assert!(applied);
        assert_eq!(vm.state.get_untracked(), ViewState::Success(fresh));
    }

    #[test]
    fn test_error_outcome_skips_preview() {
        let owner = Owner::new();
        owner.set();

        let vm = ImageQueryVm::new();
        let ticket = vm.begin_request();
        let applied = vm.apply_outcome(
            ticket,
            Ok(UploadOutcome::Rejected("model error".to_string())),
            || panic!("no preview for a rejected upload"),
        );
        assert!(applied);
        assert_eq!(
            vm.state.get_untracked(),
            ViewState::Error("model error".to_string())
        );
    }

    #[test]
    fn test_default_state_is_idle() {
        assert_eq!(ViewState::default(), ViewState::Idle);
        assert!(!ViewState::Idle.is_busy());
        assert!(ViewState::Busy.is_busy());
    }
}
