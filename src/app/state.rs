//! Application state definitions
//!
//! The current view is a single tagged union, so combinations like
//! "loading and already submitted" cannot be represented.

use crate::error::Result;
use crate::submission::{AliasRequest, FormFields, SubmitError};
use crate::wheel::{DEFAULT_CANDIDATES, DEFAULT_SETTLE_DELAY, SelectorWheel, SpinObserver};
use std::time::Duration;
use strum::{Display, EnumIter};
use tracing::{info, warn};

/// What the user is looking at
#[derive(Debug)]
pub enum ViewState {
    /// Editing the form, optionally showing the last failure
    Form { error: Option<String> },
    /// Waiting for the alias endpoint
    Submitting,
    /// Alias received; the wheel belongs to this view and dies with it
    Result {
        alias: String,
        wheel: SelectorWheel,
    },
}

/// Discriminant of [`ViewState`], used to key bindings and help text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ViewKind {
    Form,
    Submitting,
    Result,
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    /// Current view
    pub view: ViewState,
    /// Form input, kept across failed submissions
    pub fields: FormFields,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Status line for user feedback
    pub status_message: String,
    /// Labels picked by the wheel since the alias arrived
    pub selection_history: Vec<String>,
    /// Names placed on the wheel after a successful submission
    pub candidates: Vec<String>,
    /// Wheel settling delay
    pub settle_delay: Duration,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect(),
            DEFAULT_SETTLE_DELAY,
        )
    }
}

impl AppState {
    pub fn new(candidates: Vec<String>, settle_delay: Duration) -> Self {
        Self {
            view: ViewState::Form { error: None },
            fields: FormFields::default(),
            help_visible: false,
            status_message: "Enter your details to get a Secret Santa name".to_string(),
            selection_history: Vec::new(),
            candidates,
            settle_delay,
        }
    }

    pub fn kind(&self) -> ViewKind {
        match self.view {
            ViewState::Form { .. } => ViewKind::Form,
            ViewState::Submitting => ViewKind::Submitting,
            ViewState::Result { .. } => ViewKind::Result,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.view, ViewState::Submitting)
    }

    /// Error text shown above the form
    pub fn error_message(&self) -> Option<&str> {
        match &self.view {
            ViewState::Form { error } => error.as_deref(),
            _ => None,
        }
    }

    pub fn alias(&self) -> Option<&str> {
        match &self.view {
            ViewState::Result { alias, .. } => Some(alias),
            _ => None,
        }
    }

    pub fn wheel(&self) -> Option<&SelectorWheel> {
        match &self.view {
            ViewState::Result { wheel, .. } => Some(wheel),
            _ => None,
        }
    }

    pub fn wheel_mut(&mut self) -> Option<&mut SelectorWheel> {
        match &mut self.view {
            ViewState::Result { wheel, .. } => Some(wheel),
            _ => None,
        }
    }

    /// Validate the form and move to `Submitting`.
    ///
    /// Returns the request to send, or `None` if nothing should be sent
    /// (already submitting, already have an alias, or a field is missing).
    pub fn begin_submit(&mut self) -> Option<AliasRequest> {
        if !matches!(self.view, ViewState::Form { .. }) {
            return None;
        }

        match self.fields.to_request() {
            Ok(request) => {
                self.view = ViewState::Submitting;
                self.status_message = "Summoning Santa's Magic...".to_string();
                Some(request)
            }
            Err(message) => {
                self.status_message = message.clone();
                self.view = ViewState::Form {
                    error: Some(message),
                };
                None
            }
        }
    }

    /// Apply the outcome of a submission.
    ///
    /// On success the result view is entered with a fresh wheel over
    /// `candidates`; on failure the form comes back with the user-facing
    /// message. Outcomes arriving outside `Submitting` are dropped.
    pub fn finish_submit(
        &mut self,
        result: std::result::Result<String, SubmitError>,
        observer: Option<SpinObserver>,
    ) -> Result<()> {
        if !self.is_submitting() {
            warn!("Submission result arrived outside of submitting state, ignoring");
            return Ok(());
        }

        match result {
            Ok(alias) => {
                let mut wheel = SelectorWheel::new(self.candidates.clone(), self.settle_delay)?;
                if let Some(observer) = observer {
                    wheel = wheel.with_boxed_observer(observer);
                }
                info!(alias = %alias, "Alias received");
                self.status_message = format!("Happy gifting, {}!", self.fields.name.trim());
                self.selection_history.clear();
                self.view = ViewState::Result { alias, wheel };
            }
            Err(err) => {
                warn!("Submission failed: {}", err);
                let message = err.user_message();
                self.status_message = message.clone();
                self.view = ViewState::Form {
                    error: Some(message),
                };
            }
        }
        Ok(())
    }

    /// Leave the result view for a fresh form. Any pending spin is cancelled.
    pub fn start_over(&mut self) {
        if let Some(wheel) = self.wheel_mut() {
            wheel.cancel();
        }
        self.view = ViewState::Form { error: None };
        self.fields.clear();
        self.selection_history.clear();
        self.status_message = "Enter your details to get a Secret Santa name".to_string();
    }

    /// Remember a settled wheel pick. Picks reported after the result view
    /// was left are dropped.
    pub fn record_selection(&mut self, label: String) {
        if self.kind() != ViewKind::Result {
            return;
        }
        self.status_message = format!("Selected: {}", label);
        self.selection_history.push(label);
    }
}
