//! Backend commands queued from UI to backend worker.

use client_core::EstimationRequest;

#[derive(Debug)]
pub enum BackendCommand {
    LoadLocations,
    Estimate { request: EstimationRequest },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::LoadLocations => "load_locations",
            BackendCommand::Estimate { .. } => "estimate",
        }
    }
}
