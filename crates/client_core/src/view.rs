//! Which of the two cards is on screen, and the signup form that lives inside
//! the second one.

use shared::domain::SubmissionId;
use tracing::debug;

use crate::{error::WaitlistError, submission::SubmissionController};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Landing,
    Signup,
}

/// What the presentation layer should draw this frame.
#[derive(Debug, Clone, Copy)]
pub enum ActiveView<'a> {
    Landing,
    Signup(&'a SubmissionController),
}

#[derive(Debug)]
enum Screen {
    Landing,
    Signup(SubmissionController),
}

#[derive(Debug)]
pub struct ViewController {
    screen: Screen,
    next_submission_id: u64,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewController {
    pub fn new() -> Self {
        Self {
            screen: Screen::Landing,
            next_submission_id: 1,
        }
    }

    pub fn state(&self) -> ViewState {
        match self.screen {
            Screen::Landing => ViewState::Landing,
            Screen::Signup(_) => ViewState::Signup,
        }
    }

    pub fn render(&self) -> ActiveView<'_> {
        match &self.screen {
            Screen::Landing => ActiveView::Landing,
            Screen::Signup(form) => ActiveView::Signup(form),
        }
    }

    /// Landing -> Signup with a fresh form. Returns `false` if already on Signup.
    pub fn request_signup(&mut self) -> bool {
        if matches!(self.screen, Screen::Signup(_)) {
            return false;
        }
        let id = SubmissionId(self.next_submission_id);
        self.next_submission_id += 1;
        debug!(submission_id = %id, "entering signup view");
        self.screen = Screen::Signup(SubmissionController::new(id));
        true
    }

    /// Signup -> Landing, dropping the form.
    ///
    /// Returns the id of a submission that was still in flight so the caller
    /// can cancel the underlying request; its outcome will be ignored anyway.
    pub fn request_back(&mut self) -> Option<SubmissionId> {
        let Screen::Signup(form) = std::mem::replace(&mut self.screen, Screen::Landing) else {
            return None;
        };
        debug!(submission_id = %form.id(), status = form.status().label(), "leaving signup view");
        form.status().is_loading().then_some(form.id())
    }

    pub fn signup(&self) -> Option<&SubmissionController> {
        match &self.screen {
            Screen::Signup(form) => Some(form),
            Screen::Landing => None,
        }
    }

    pub fn signup_mut(&mut self) -> Option<&mut SubmissionController> {
        match &mut self.screen {
            Screen::Signup(form) => Some(form),
            Screen::Landing => None,
        }
    }

    /// Routes a finished request to the live form. Outcomes addressed to a
    /// discarded form are dropped; returns whether any state changed.
    pub fn complete_submission(
        &mut self,
        id: SubmissionId,
        outcome: Result<(), WaitlistError>,
    ) -> bool {
        match self.signup_mut() {
            Some(form) if form.id() == id => form.finish_submit(outcome),
            _ => {
                debug!(submission_id = %id, "dropping outcome for abandoned submission");
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
