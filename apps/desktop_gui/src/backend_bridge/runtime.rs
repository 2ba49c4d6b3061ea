//! Runtime bridge between UI command queue and backend event intake.

use std::{collections::HashMap, sync::Arc, thread};

use client_core::WaitlistClient;
use crossbeam_channel::{Receiver, Sender, TrySendError};
use shared::domain::SubmissionId;
use tokio::task::JoinHandle;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Starts the backend worker thread. It runs until the command sender is dropped.
pub fn launch(
    client: Arc<dyn WaitlistClient>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(run_worker(client, cmd_rx, ui_tx));
    })
}

async fn run_worker(
    client: Arc<dyn WaitlistClient>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));
    let mut in_flight: HashMap<SubmissionId, JoinHandle<()>> = HashMap::new();

    while let Ok(cmd) = cmd_rx.recv() {
        in_flight.retain(|_, task| !task.is_finished());
        match cmd {
            BackendCommand::JoinWaitlist { id, email } => {
                let client = Arc::clone(&client);
                let ui_tx = ui_tx.clone();
                let task = tokio::spawn(async move {
                    let outcome = client.join_waitlist(&email).await;
                    match ui_tx.try_send(UiEvent::SubmissionFinished { id, outcome }) {
                        Ok(()) => {}
                        Err(TrySendError::Full(_)) => {
                            tracing::debug!(submission_id = %id, "ui queue full; outcome dropped");
                        }
                        Err(TrySendError::Disconnected(_)) => {
                            tracing::debug!(submission_id = %id, "ui closed before submission finished");
                        }
                    }
                });
                in_flight.insert(id, task);
            }
            BackendCommand::AbandonSubmission { id } => match in_flight.remove(&id) {
                Some(task) => {
                    task.abort();
                    tracing::info!(submission_id = %id, "cancelled abandoned waitlist submission");
                }
                None => {
                    tracing::debug!(submission_id = %id, "abandoned submission already finished");
                }
            },
        }
    }

    for task in in_flight.into_values() {
        task.abort();
    }
    tracing::debug!("backend worker stopped");
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
