//! Lifecycle of one waitlist signup form: input, request status, last error.
//!
//! ```text
//! Idle --begin_submit--> Loading --Ok--> Success
//!                          |  ^
//!                          v  |
//!                          Error
//! ```

use shared::domain::{EmailAddress, SubmissionId};
use tracing::{debug, info, warn};

use crate::{
    error::{SubmitRejected, WaitlistError},
    waitlist::WaitlistClient,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    /// Carries the message shown under the form. Never empty.
    Error(String),
}

impl SubmissionStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error(_) => "error",
        }
    }
}

/// Snapshot handed to whoever performs the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub id: SubmissionId,
    pub email: EmailAddress,
}

#[derive(Debug)]
pub struct SubmissionController {
    id: SubmissionId,
    email: String,
    status: SubmissionStatus,
}

impl SubmissionController {
    pub fn new(id: SubmissionId) -> Self {
        Self {
            id,
            email: String::new(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn id(&self) -> SubmissionId {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            SubmissionStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Both the email input and the submit button follow this flag.
    pub fn input_enabled(&self) -> bool {
        !self.status.is_loading()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.status.is_loading() {
            "Joining..."
        } else {
            "Join Waitlist"
        }
    }

    /// Returns `false` when the input is frozen by an in-flight request.
    pub fn update_email(&mut self, value: impl Into<String>) -> bool {
        if self.status.is_loading() {
            return false;
        }
        self.email = value.into();
        true
    }

    /// Validates the current input and enters `Loading`.
    ///
    /// On rejection the state is left untouched.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitRejected> {
        match self.status {
            SubmissionStatus::Loading => return Err(SubmitRejected::InFlight),
            SubmissionStatus::Success => return Err(SubmitRejected::AlreadyJoined),
            SubmissionStatus::Idle | SubmissionStatus::Error(_) => {}
        }

        let email = EmailAddress::parse(&self.email)?;
        self.status = SubmissionStatus::Loading;
        debug!(submission_id = %self.id, "waitlist submission started");
        Ok(PendingSubmission { id: self.id, email })
    }

    /// Applies the outcome of the request started by [`Self::begin_submit`].
    ///
    /// Returns `false` (and changes nothing) when no request is in flight.
    pub fn finish_submit(&mut self, outcome: Result<(), WaitlistError>) -> bool {
        if !self.status.is_loading() {
            debug!(
                submission_id = %self.id,
                status = self.status.label(),
                "ignoring waitlist outcome with no request in flight"
            );
            return false;
        }

        match outcome {
            Ok(()) => {
                info!(submission_id = %self.id, "joined waitlist");
                self.status = SubmissionStatus::Success;
                self.email.clear();
            }
            Err(err) => {
                warn!(submission_id = %self.id, error = %err, "waitlist submission failed");
                self.status = SubmissionStatus::Error(err.user_message());
            }
        }
        true
    }

    /// Runs a whole attempt inline against `client`.
    pub async fn submit<W>(&mut self, client: &W) -> Result<(), SubmitRejected>
    where
        W: WaitlistClient + ?Sized,
    {
        let pending = self.begin_submit()?;
        let outcome = client.join_waitlist(&pending.email).await;
        self.finish_submit(outcome);
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/submission_tests.rs"]
mod tests;
