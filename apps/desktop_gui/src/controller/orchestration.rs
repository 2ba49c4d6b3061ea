//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub const QUEUE_FULL_MESSAGE: &str = "UI command queue is full; please retry";
pub const WORKER_DISCONNECTED_MESSAGE: &str =
    "Backend command processor disconnected (possible startup/runtime failure)";

/// A command that could not be queued, handed back with the reason.
#[derive(Debug)]
pub struct DispatchFailure {
    pub cmd: BackendCommand,
    pub reason: &'static str,
}

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), DispatchFailure> {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(cmd)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
            Err(DispatchFailure {
                cmd,
                reason: QUEUE_FULL_MESSAGE,
            })
        }
        Err(TrySendError::Disconnected(cmd)) => {
            tracing::error!(command = cmd_name, "ui->backend command queue disconnected");
            Err(DispatchFailure {
                cmd,
                reason: WORKER_DISCONNECTED_MESSAGE,
            })
        }
    }
}
