//! Backend commands queued from UI to backend worker.

use shared::domain::{EmailAddress, SubmissionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    JoinWaitlist {
        id: SubmissionId,
        email: EmailAddress,
    },
    /// The form that started `id` was discarded; cancel its request.
    AbandonSubmission {
        id: SubmissionId,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::JoinWaitlist { .. } => "join_waitlist",
            BackendCommand::AbandonSubmission { .. } => "abandon_submission",
        }
    }
}
