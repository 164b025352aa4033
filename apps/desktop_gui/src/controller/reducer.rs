//! UI-owned state and the transitions driven by backend events.

use client_core::{EstimationController, EstimationOutcome, LocationCatalog};

use crate::controller::events::UiEvent;

#[derive(Debug, Default)]
pub struct AppModel {
    pub estimation: EstimationController,
    pub catalog: LocationCatalog,
    pub status: String,
}

impl AppModel {
    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => {
                self.status = message;
            }
            UiEvent::LocationsLoaded(result) => {
                self.catalog.finish_load(result);
            }
            UiEvent::EstimateSettled(outcome) => {
                self.estimation.settle(outcome);
            }
            UiEvent::BackendUnavailable(reason) => self.backend_lost(reason),
        }
    }

    /// Nothing will ever answer an outstanding request once the worker is
    /// gone, so a Loading estimate fails here.
    pub fn backend_lost(&mut self, reason: String) {
        tracing::error!(%reason, "backend worker unavailable");
        if self.estimation.is_loading() {
            self.estimation
                .settle(EstimationOutcome::Failed(reason.clone()));
        }
        self.status = reason;
    }
}
