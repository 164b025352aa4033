//! Command orchestration helpers from UI actions to backend command queue.

use client_core::EstimationOutcome;
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::reducer::AppModel;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Backend command processor disconnected; restart the app".to_string();
            false
        }
    }
}

/// Startup catalog fetch; a no-op after the first call.
pub fn request_locations(model: &mut AppModel, cmd_tx: &Sender<BackendCommand>) {
    if !model.catalog.begin_load() {
        return;
    }
    if !dispatch_backend_command(cmd_tx, BackendCommand::LoadLocations, &mut model.status) {
        tracing::warn!("error fetching locations: backend queue unavailable");
    }
}

/// Starts an estimate if the form allows it. When the command cannot be
/// queued the estimate fails immediately instead of waiting forever.
pub fn request_estimate(model: &mut AppModel, cmd_tx: &Sender<BackendCommand>) {
    let Some(request) = model.estimation.begin_estimate() else {
        return;
    };
    if !dispatch_backend_command(cmd_tx, BackendCommand::Estimate { request }, &mut model.status)
    {
        model.estimation.settle(EstimationOutcome::Failed(model.status.clone()));
    }
}
