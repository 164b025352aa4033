//! Estimation controller: form state, the submit predicate, and the
//! Idle/Loading/Succeeded/Failed lifecycle of a single estimate request.

use std::fmt;

use shared::{domain::PRICE_UNIT, protocol::PredictHomePriceRequest};
use tracing::{info, warn};

use crate::{error::ServiceError, ValuationService};

pub const ESTIMATE_ERROR_MESSAGE: &str = "Error estimating price";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    TotalSqft,
    Bhk,
    Bath,
    Location,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::TotalSqft,
        FormField::Bhk,
        FormField::Bath,
        FormField::Location,
    ];
}

/// Raw text of the four form controls. A field counts as set only when it
/// is non-empty; nothing else is validated client side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub total_sqft: String,
    pub bhk: String,
    pub bath: String,
    pub location: String,
}

impl FormInput {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::TotalSqft => &self.total_sqft,
            FormField::Bhk => &self.bhk,
            FormField::Bath => &self.bath,
            FormField::Location => &self.location,
        }
    }

    pub fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::TotalSqft => &mut self.total_sqft,
            FormField::Bhk => &mut self.bhk,
            FormField::Bath => &mut self.bath,
            FormField::Location => &mut self.location,
        }
    }

    pub fn is_complete(&self) -> bool {
        FormField::ALL
            .iter()
            .all(|field| !self.get(*field).is_empty())
    }
}

/// Snapshot of the form taken when a submission starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimationRequest {
    pub total_sqft: String,
    pub bhk: String,
    pub bath: String,
    pub location: String,
}

impl From<&FormInput> for EstimationRequest {
    fn from(form: &FormInput) -> Self {
        Self {
            total_sqft: form.total_sqft.clone(),
            bhk: form.bhk.clone(),
            bath: form.bath.clone(),
            location: form.location.clone(),
        }
    }
}

impl From<&EstimationRequest> for PredictHomePriceRequest {
    fn from(request: &EstimationRequest) -> Self {
        Self {
            total_sqft: request.total_sqft.as_str().into(),
            location: request.location.clone(),
            bhk: request.bhk.as_str().into(),
            bath: request.bath.as_str().into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EstimationResult {
    Estimate(String),
    Error,
}

impl EstimationResult {
    pub fn priced(value: f64) -> Self {
        // -0.0 shows as "0", not "-0"
        let value = if value == 0.0 { 0.0 } else { value };
        Self::Estimate(format!("{value} {PRICE_UNIT}"))
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Estimate(text) => text,
            Self::Error => ESTIMATE_ERROR_MESSAGE,
        }
    }
}

impl fmt::Display for EstimationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Completion event for an in-flight estimate.
#[derive(Debug, Clone, PartialEq)]
pub enum EstimationOutcome {
    Priced(f64),
    Failed(String),
}

impl From<Result<f64, ServiceError>> for EstimationOutcome {
    fn from(value: Result<f64, ServiceError>) -> Self {
        match value {
            Ok(price) => Self::Priced(price),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EstimationController {
    form: FormInput,
    phase: Phase,
    result: Option<EstimationResult>,
}

impl EstimationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.form.get_mut(field) = value.into();
    }

    pub fn field(&self, field: FormField) -> &str {
        self.form.get(field)
    }

    pub fn form(&self) -> &FormInput {
        &self.form
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn result(&self) -> Option<&EstimationResult> {
        self.result.as_ref()
    }

    pub fn can_submit(&self) -> bool {
        self.form.is_complete() && self.phase != Phase::Loading
    }

    /// Enters Loading and returns the request snapshot, or `None` without
    /// touching any state when submission is not allowed. The previous
    /// result stays visible while loading.
    pub fn begin_estimate(&mut self) -> Option<EstimationRequest> {
        if !self.can_submit() {
            warn!(phase = ?self.phase, "estimate submission refused");
            return None;
        }
        self.phase = Phase::Loading;
        Some(EstimationRequest::from(&self.form))
    }

    /// Applies a completion event. Phase and result change together; an
    /// event with nothing in flight is dropped.
    pub fn settle(&mut self, outcome: EstimationOutcome) -> Phase {
        if self.phase != Phase::Loading {
            warn!(phase = ?self.phase, "ignoring estimate outcome with no request in flight");
            return self.phase;
        }
        match outcome {
            EstimationOutcome::Priced(price) => {
                info!(price, "price estimate received");
                self.result = Some(EstimationResult::priced(price));
                self.phase = Phase::Succeeded;
            }
            EstimationOutcome::Failed(reason) => {
                warn!(%reason, "failed to estimate price");
                self.result = Some(EstimationResult::Error);
                self.phase = Phase::Failed;
            }
        }
        self.phase
    }

    /// Runs one full submit cycle against `service`. The phase leaves
    /// Loading on every exit path, including cancellation of this future.
    pub async fn submit_estimate<S>(&mut self, service: &S) -> Phase
    where
        S: ValuationService + ?Sized,
    {
        let Some(request) = self.begin_estimate() else {
            return self.phase;
        };
        let in_flight = InFlight {
            controller: self,
            settled: false,
        };
        let outcome = service.predict_home_price(&request).await;
        in_flight.settle(outcome.into())
    }
}

struct InFlight<'a> {
    controller: &'a mut EstimationController,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(mut self, outcome: EstimationOutcome) -> Phase {
        self.settled = true;
        self.controller.settle(outcome)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.controller.settle(EstimationOutcome::Failed(
                "estimate request abandoned before completion".to_string(),
            ));
        }
    }
}

#[cfg(test)]
#[path = "tests/estimation_tests.rs"]
mod tests;
