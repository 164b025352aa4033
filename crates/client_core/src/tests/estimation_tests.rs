use super::*;
use async_trait::async_trait;
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
    time::Duration,
};

enum Reply {
    Price(f64),
    Status(u16),
    Malformed,
    Hang,
}

struct StubService {
    reply: Reply,
    calls: AtomicUsize,
    seen: Mutex<Vec<EstimationRequest>>,
}

impl StubService {
    fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ValuationService for StubService {
    async fn location_names(&self) -> Result<Vec<String>, ServiceError> {
        Ok(Vec::new())
    }

    async fn predict_home_price(&self, request: &EstimationRequest) -> Result<f64, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().expect("seen lock").push(request.clone());
        match self.reply {
            Reply::Price(price) => Ok(price),
            Reply::Status(code) => Err(ServiceError::Status(
                reqwest::StatusCode::from_u16(code).expect("status code"),
            )),
            Reply::Malformed => Err(ServiceError::Malformed(
                "missing estimated_price".to_string(),
            )),
            Reply::Hang => std::future::pending::<Result<f64, ServiceError>>().await,
        }
    }
}

fn filled_controller() -> EstimationController {
    let mut controller = EstimationController::new();
    controller.set_field(FormField::TotalSqft, "1200");
    controller.set_field(FormField::Bhk, "3");
    controller.set_field(FormField::Bath, "2");
    controller.set_field(FormField::Location, "Whitefield");
    controller
}

#[test]
fn starts_idle_with_no_result_and_submission_disabled() {
    let controller = EstimationController::new();
    assert_eq!(controller.phase(), Phase::Idle);
    assert!(controller.result().is_none());
    assert!(!controller.can_submit());
}

#[test]
fn any_single_empty_field_keeps_submission_disabled() {
    for empty in FormField::ALL {
        let mut controller = filled_controller();
        controller.set_field(empty, "");
        assert!(
            !controller.can_submit(),
            "{empty:?} empty should disable submission"
        );
    }
    assert!(filled_controller().can_submit());
}

#[test]
fn set_field_stores_raw_text_without_validation() {
    let mut controller = EstimationController::new();
    controller.set_field(FormField::TotalSqft, "not a number");
    controller.set_field(FormField::Bath, " ");
    assert_eq!(controller.field(FormField::TotalSqft), "not a number");
    assert_eq!(controller.field(FormField::Bath), " ");
}

#[test]
fn loading_disables_submission_and_refuses_a_second_begin() {
    let mut controller = filled_controller();
    let request = controller.begin_estimate().expect("first submission");
    assert_eq!(request.location, "Whitefield");
    assert_eq!(controller.phase(), Phase::Loading);
    assert!(!controller.can_submit());

    assert!(controller.begin_estimate().is_none());
    assert_eq!(controller.phase(), Phase::Loading);

    controller.settle(EstimationOutcome::Priced(50.0));
    assert!(controller.can_submit());
}

#[test]
fn begin_refused_on_incomplete_form_leaves_state_untouched() {
    let mut controller = EstimationController::new();
    controller.set_field(FormField::TotalSqft, "1200");
    assert!(controller.begin_estimate().is_none());
    assert_eq!(controller.phase(), Phase::Idle);
    assert!(controller.result().is_none());
}

#[test]
fn in_flight_request_uses_the_snapshot_taken_at_submit() {
    let mut controller = filled_controller();
    let request = controller.begin_estimate().expect("submission");
    controller.set_field(FormField::Location, "Indira Nagar");
    assert_eq!(request.location, "Whitefield");
    assert_eq!(controller.field(FormField::Location), "Indira Nagar");
}

#[test]
fn previous_result_stays_visible_while_loading() {
    let mut controller = filled_controller();
    controller.begin_estimate().expect("first");
    controller.settle(EstimationOutcome::Priced(72.0));

    controller.begin_estimate().expect("second");
    assert_eq!(controller.phase(), Phase::Loading);
    assert_eq!(controller.result().map(|r| r.text()), Some("72 Lakh"));
}

#[test]
fn settle_without_request_in_flight_is_ignored() {
    let mut controller = filled_controller();
    assert_eq!(controller.settle(EstimationOutcome::Priced(10.0)), Phase::Idle);
    assert!(controller.result().is_none());
}

#[test]
fn fields_persist_after_a_successful_estimate() {
    let mut controller = filled_controller();
    controller.begin_estimate().expect("submission");
    controller.settle(EstimationOutcome::Priced(72.0));
    assert_eq!(controller.form(), filled_controller().form());
    assert!(controller.can_submit());
}

#[test]
fn formats_prices_with_shortest_decimal_and_unit() {
    assert_eq!(EstimationResult::priced(85.4).text(), "85.4 Lakh");
    assert_eq!(EstimationResult::priced(72.0).text(), "72 Lakh");
    assert_eq!(EstimationResult::priced(118.25).to_string(), "118.25 Lakh");
    assert_eq!(EstimationResult::Error.text(), "Error estimating price");
}

#[test]
fn negative_zero_price_displays_as_zero() {
    assert_eq!(EstimationResult::priced(-0.0).text(), "0 Lakh");
    assert_eq!(EstimationResult::priced(-0.5).text(), "-0.5 Lakh");
}

#[tokio::test]
async fn successful_estimate_reports_lakh_value() {
    let service = StubService::new(Reply::Price(85.4));
    let mut controller = filled_controller();

    let phase = controller.submit_estimate(&service).await;

    assert_eq!(phase, Phase::Succeeded);
    assert_eq!(controller.phase(), Phase::Succeeded);
    assert_eq!(
        controller.result(),
        Some(&EstimationResult::Estimate("85.4 Lakh".to_string()))
    );
    assert_eq!(service.calls(), 1);
}

#[tokio::test]
async fn whitefield_scenario_displays_integer_estimate() {
    let service = StubService::new(Reply::Price(72.0));
    let mut controller = filled_controller();

    controller.submit_estimate(&service).await;

    assert_eq!(controller.result().map(ToString::to_string).as_deref(), Some("72 Lakh"));
    let seen = service.seen.lock().expect("seen lock");
    assert_eq!(
        seen.as_slice(),
        &[EstimationRequest {
            total_sqft: "1200".to_string(),
            bhk: "3".to_string(),
            bath: "2".to_string(),
            location: "Whitefield".to_string(),
        }]
    );
}

#[tokio::test]
async fn error_status_and_malformed_payload_collapse_to_fixed_message() {
    for reply in [Reply::Status(500), Reply::Status(400), Reply::Malformed] {
        let service = StubService::new(reply);
        let mut controller = filled_controller();

        let phase = controller.submit_estimate(&service).await;

        assert_eq!(phase, Phase::Failed);
        assert_eq!(
            controller.result().map(|r| r.text()),
            Some(ESTIMATE_ERROR_MESSAGE)
        );
        assert!(controller.can_submit(), "user may retry after a failure");
    }
}

#[tokio::test]
async fn failure_after_success_overwrites_the_whole_result() {
    let mut controller = filled_controller();
    controller
        .submit_estimate(&StubService::new(Reply::Price(61.5)))
        .await;
    controller
        .submit_estimate(&StubService::new(Reply::Malformed))
        .await;
    assert_eq!(controller.phase(), Phase::Failed);
    assert_eq!(controller.result(), Some(&EstimationResult::Error));
}

#[tokio::test]
async fn submit_on_incomplete_form_sends_nothing() {
    let service = StubService::new(Reply::Price(1.0));
    let mut controller = EstimationController::new();
    controller.set_field(FormField::Bhk, "2");

    let phase = controller.submit_estimate(&service).await;

    assert_eq!(phase, Phase::Idle);
    assert_eq!(service.calls(), 0);
}

#[tokio::test]
async fn abandoned_submission_does_not_leave_loading_behind() {
    let service = StubService::new(Reply::Hang);
    let mut controller = filled_controller();

    let timed_out = tokio::time::timeout(
        Duration::from_millis(20),
        controller.submit_estimate(&service),
    )
    .await;

    assert!(timed_out.is_err());
    assert_eq!(controller.phase(), Phase::Failed);
    assert_eq!(controller.result(), Some(&EstimationResult::Error));
    assert!(controller.can_submit());
}
