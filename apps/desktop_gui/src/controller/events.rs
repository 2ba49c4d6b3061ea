//! UI/backend events and error modeling for the waitlist window.

use client_core::WaitlistError;
use shared::domain::SubmissionId;

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    SubmissionFinished {
        id: SubmissionId,
        outcome: Result<(), WaitlistError>,
    },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Startup,
    Transport,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    CommandQueue,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if context == UiErrorContext::BackendStartup
            || message_lower.contains("startup failure")
        {
            UiErrorCategory::Startup
        } else if message_lower.contains("disconnect")
            || message_lower.contains("queue is full")
            || message_lower.contains("connection")
            || message_lower.contains("timed out")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    /// Startup failures leave no worker behind, so submitting again cannot help.
    pub fn is_fatal(&self) -> bool {
        self.category == UiErrorCategory::Startup
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
