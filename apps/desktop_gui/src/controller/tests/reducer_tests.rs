use super::*;
use client_core::{SubmissionStatus, ViewState};
use shared::domain::SubmissionId;

use crate::controller::orchestration::{QUEUE_FULL_MESSAGE, WORKER_DISCONNECTED_MESSAGE};

fn model_on_signup(email: &str) -> AppModel {
    let mut model = AppModel::new();
    assert_eq!(model.handle_intent(UiIntent::TryItNow), None);
    assert_eq!(model.handle_intent(UiIntent::EditEmail(email.to_string())), None);
    model
}

fn submitted_id(cmd: Option<BackendCommand>) -> SubmissionId {
    match cmd {
        Some(BackendCommand::JoinWaitlist { id, email }) => {
            assert_eq!(email.as_str(), "a@b.com");
            id
        }
        other => panic!("expected join command, got {other:?}"),
    }
}

#[test]
fn valid_submit_queues_join_and_enters_loading() {
    let mut model = model_on_signup("a@b.com");

    let id = submitted_id(model.handle_intent(UiIntent::Submit));

    let form = model.views.signup().expect("signup form");
    assert_eq!(form.id(), id);
    assert_eq!(form.status(), &SubmissionStatus::Loading);
    assert_eq!(model.handle_intent(UiIntent::Submit), None);
}

#[test]
fn invalid_email_shows_hint_without_queueing() {
    let mut model = model_on_signup("nope");

    assert_eq!(model.handle_intent(UiIntent::Submit), None);
    assert_eq!(
        model.validation_hint.as_deref(),
        Some("Please enter a valid email address.")
    );
    assert_eq!(
        model.views.signup().expect("form").status(),
        &SubmissionStatus::Idle
    );

    model.handle_intent(UiIntent::EditEmail("a@b.com".to_string()));
    assert_eq!(model.validation_hint, None);
}

#[test]
fn submit_on_landing_does_nothing() {
    let mut model = AppModel::new();
    assert_eq!(model.handle_intent(UiIntent::Submit), None);
    assert_eq!(model.views.state(), ViewState::Landing);
}

#[test]
fn finished_event_updates_live_form() {
    let mut model = model_on_signup("a@b.com");
    let id = submitted_id(model.handle_intent(UiIntent::Submit));

    model.apply_event(UiEvent::SubmissionFinished {
        id,
        outcome: Err(WaitlistError::Rejected {
            status: 400,
            message: Some("already registered".to_string()),
        }),
    });

    let form = model.views.signup().expect("signup form");
    assert_eq!(form.error_message(), Some("already registered"));
    assert!(form.input_enabled());
}

#[test]
fn back_while_loading_cancels_and_ignores_late_result() {
    let mut model = model_on_signup("a@b.com");
    let id = submitted_id(model.handle_intent(UiIntent::Submit));

    assert_eq!(
        model.handle_intent(UiIntent::GoBack),
        Some(BackendCommand::AbandonSubmission { id })
    );
    model.apply_event(UiEvent::SubmissionFinished { id, outcome: Ok(()) });

    assert_eq!(model.views.state(), ViewState::Landing);
    assert!(model.status_banner.is_none());

    model.handle_intent(UiIntent::TryItNow);
    let form = model.views.signup().expect("signup form");
    assert_eq!(form.status(), &SubmissionStatus::Idle);
    assert_eq!(form.email(), "");
}

#[test]
fn back_when_idle_sends_nothing() {
    let mut model = model_on_signup("a@b.com");
    assert_eq!(model.handle_intent(UiIntent::GoBack), None);
    assert_eq!(model.views.state(), ViewState::Landing);
}

#[test]
fn undeliverable_join_fails_the_submission() {
    let mut model = model_on_signup("a@b.com");
    let cmd = model.handle_intent(UiIntent::Submit).expect("join command");

    model.command_dispatch_failed(DispatchFailure {
        cmd,
        reason: QUEUE_FULL_MESSAGE,
    });

    let form = model.views.signup().expect("signup form");
    assert_eq!(
        form.error_message(),
        Some(client_core::error::GENERIC_FAILURE_MESSAGE)
    );
    let banner = model.status_banner.as_ref().expect("banner");
    assert_eq!(banner.message, QUEUE_FULL_MESSAGE);
}

#[test]
fn startup_failure_banner_asks_for_restart() {
    let mut model = AppModel::new();
    model.apply_event(UiEvent::Error(UiError::from_message(
        UiErrorContext::BackendStartup,
        "backend worker startup failure: failed to build runtime",
    )));

    let banner = model.status_banner.as_ref().expect("banner");
    assert_eq!(banner.severity, StatusBannerSeverity::Error);
    assert!(banner.message.ends_with("Restart the app to try again."));

    model.handle_intent(UiIntent::DismissBanner);
    assert!(model.status_banner.is_none());
}

#[test]
fn disconnected_worker_is_classified_as_transport() {
    let err = UiError::from_message(UiErrorContext::CommandQueue, WORKER_DISCONNECTED_MESSAGE);
    assert_eq!(
        err.category(),
        crate::controller::events::UiErrorCategory::Transport
    );
    assert!(!err.is_fatal());
}

#[test]
fn status_line_tracks_worker_info_and_errors() {
    let mut model = AppModel::new();
    assert_eq!(model.status, "Starting...");

    model.apply_event(UiEvent::Info("Backend worker ready".to_string()));
    assert_eq!(model.status, "Backend worker ready");
    assert!(model.status_banner.is_none());

    model.apply_event(UiEvent::Error(UiError::from_message(
        UiErrorContext::CommandQueue,
        QUEUE_FULL_MESSAGE,
    )));
    assert_eq!(model.status, QUEUE_FULL_MESSAGE);
}
