//! Backend worker: a tokio runtime on its own thread that turns queued
//! commands into network calls and reports completions as UI events.

use std::{sync::Arc, thread};

use client_core::{EstimationOutcome, ValuationService};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(
    service: Arc<dyn ValuationService>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                    "backend worker startup failure: {err}"
                )));
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));
            while let Ok(cmd) = cmd_rx.recv() {
                let service = service.clone();
                let ui_tx = ui_tx.clone();
                match cmd {
                    BackendCommand::LoadLocations => {
                        tokio::spawn(async move {
                            let result = service.location_names().await;
                            send_event(&ui_tx, UiEvent::LocationsLoaded(result));
                        });
                    }
                    BackendCommand::Estimate { request } => {
                        tokio::spawn(async move {
                            let outcome =
                                EstimationOutcome::from(service.predict_home_price(&request).await);
                            send_event(&ui_tx, UiEvent::EstimateSettled(outcome));
                        });
                    }
                }
            }
            tracing::debug!("ui command queue closed; backend worker exiting");
        });
    })
}

fn send_event(ui_tx: &Sender<UiEvent>, event: UiEvent) {
    if ui_tx.send(event).is_err() {
        tracing::debug!("ui event receiver dropped; discarding backend result");
    }
}
