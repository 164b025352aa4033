//! Backend-to-UI events. Each one is applied whole on the UI thread.

use client_core::{EstimationOutcome, ServiceError};

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    LocationsLoaded(Result<Vec<String>, ServiceError>),
    EstimateSettled(EstimationOutcome),
    BackendUnavailable(String),
}
