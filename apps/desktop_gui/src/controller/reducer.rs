//! Window state and the transitions driven by user intent and backend events.
//!
//! Nothing here touches egui, so every transition is testable headless.

use client_core::{SubmitRejected, ViewController, WaitlistError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::controller::orchestration::DispatchFailure;

/// Something the user did this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiIntent {
    TryItNow,
    GoBack,
    EditEmail(String),
    Submit,
    DismissBanner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBannerSeverity {
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusBanner {
    pub severity: StatusBannerSeverity,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct AppModel {
    pub views: ViewController,
    /// Local format hint under the email field; not a submission failure.
    pub validation_hint: Option<String>,
    /// One-line worker status shown under the card.
    pub status: String,
    pub status_banner: Option<StatusBanner>,
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            status: "Starting...".to_string(),
            ..Self::default()
        }
    }

    /// Applies one intent; returns the command the backend must run, if any.
    pub fn handle_intent(&mut self, intent: UiIntent) -> Option<BackendCommand> {
        match intent {
            UiIntent::TryItNow => {
                self.views.request_signup();
                self.validation_hint = None;
                None
            }
            UiIntent::GoBack => {
                self.validation_hint = None;
                self.views
                    .request_back()
                    .map(|id| BackendCommand::AbandonSubmission { id })
            }
            UiIntent::EditEmail(value) => {
                if let Some(form) = self.views.signup_mut() {
                    if form.update_email(value) {
                        self.validation_hint = None;
                    }
                }
                None
            }
            UiIntent::Submit => {
                let form = self.views.signup_mut()?;
                match form.begin_submit() {
                    Ok(pending) => {
                        self.validation_hint = None;
                        Some(BackendCommand::JoinWaitlist {
                            id: pending.id,
                            email: pending.email,
                        })
                    }
                    Err(SubmitRejected::InvalidEmail(err)) => {
                        self.validation_hint = Some(err.user_message().to_string());
                        None
                    }
                    Err(rejected) => {
                        tracing::debug!(submission_id = %form.id(), %rejected, "submit ignored");
                        None
                    }
                }
            }
            UiIntent::DismissBanner => {
                self.status_banner = None;
                None
            }
        }
    }

    pub fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => {
                self.status = message;
            }
            UiEvent::SubmissionFinished { id, outcome } => {
                self.views.complete_submission(id, outcome);
            }
            UiEvent::Error(err) => self.show_error(err),
        }
    }

    /// A command never reached the worker. A queued join must not leave its
    /// form stuck in `Loading`, so it is failed as a transport error.
    pub fn command_dispatch_failed(&mut self, failure: DispatchFailure) {
        if let BackendCommand::JoinWaitlist { id, .. } = failure.cmd {
            self.views
                .complete_submission(id, Err(WaitlistError::Transport(failure.reason.to_string())));
        }
        self.show_error(UiError::from_message(
            UiErrorContext::CommandQueue,
            failure.reason,
        ));
    }

    fn show_error(&mut self, err: UiError) {
        tracing::warn!(
            category = ?err.category(),
            context = ?err.context(),
            "{}",
            err.message()
        );
        self.status = err.message().to_string();
        self.status_banner = Some(StatusBanner {
            severity: StatusBannerSeverity::Error,
            message: if err.is_fatal() {
                format!("{} Restart the app to try again.", err.message())
            } else {
                err.message().to_string()
            },
        });
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
