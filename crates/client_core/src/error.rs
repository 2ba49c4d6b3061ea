use shared::error::InvalidEmail;
use thiserror::Error;

pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";
pub const REJECTED_FALLBACK_MESSAGE: &str = "Failed to join waitlist";
pub const INVALID_RESPONSE_FORMAT_MESSAGE: &str = "Server error: Invalid response format";

/// Why a waitlist registration call failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaitlistError {
    /// The request never produced a readable response.
    #[error("waitlist endpoint unreachable: {0}")]
    Transport(String),
    /// Non-2xx JSON response.
    #[error("waitlist endpoint rejected the signup with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// The response did not declare a JSON content type. Treated as an endpoint
    /// malfunction rather than a rejection of the address.
    #[error("waitlist endpoint returned a non-JSON response (content-type: {content_type:?})")]
    InvalidResponseFormat { content_type: Option<String> },
    /// Declared JSON but the body did not parse.
    #[error("waitlist endpoint returned an unreadable JSON body: {0}")]
    MalformedBody(String),
}

impl WaitlistError {
    /// Text shown in place of the form's error line.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) | Self::MalformedBody(_) => GENERIC_FAILURE_MESSAGE.to_string(),
            Self::Rejected { message, .. } => message
                .as_deref()
                .filter(|message| !message.trim().is_empty())
                .unwrap_or(REJECTED_FALLBACK_MESSAGE)
                .to_string(),
            Self::InvalidResponseFormat { .. } => INVALID_RESPONSE_FORMAT_MESSAGE.to_string(),
        }
    }
}

/// A submit action that was refused before any request was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("a waitlist submission is already in flight")]
    InFlight,
    #[error("this signup already joined the waitlist")]
    AlreadyJoined,
    #[error("invalid email address: {0}")]
    InvalidEmail(#[from] InvalidEmail),
}
