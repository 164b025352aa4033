use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use shared::{
    error::{ApiError, ApiException},
    protocol::{
        LocationNamesResponse, PredictHomePriceRequest, PredictHomePriceResponse,
        LOCATION_NAMES_PATH, PREDICT_HOME_PRICE_PATH,
    },
};
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;
mod model;

use app_state::AppState;
use config::load_settings;
use model::PriceModel;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("starting home price prediction server");
    let settings = load_settings();
    let model = PriceModel::load(Path::new(&settings.artifacts_path)).map_err(|error| {
        error!(
            artifacts_path = %settings.artifacts_path,
            %error,
            "failed to load saved model artifacts"
        );
        error
    })?;
    info!(
        locations = model.location_names().len(),
        "loaded saved model artifacts"
    );

    let app = build_router(AppState {
        model: Arc::new(model),
    });

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(LOCATION_NAMES_PATH, get(get_location_names))
        .route(PREDICT_HOME_PRICE_PATH, post(predict_home_price))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn get_location_names(State(state): State<AppState>) -> Json<LocationNamesResponse> {
    info!("location names fetched");
    Json(LocationNamesResponse {
        locations: state.model.location_names().to_vec(),
    })
}

async fn predict_home_price(
    State(state): State<AppState>,
    payload: Result<Json<PredictHomePriceRequest>, JsonRejection>,
) -> ApiResult<PredictHomePriceResponse> {
    info!("price prediction initiated");
    let Json(req) = payload.map_err(|rejection| {
        validation_error(ApiException::validation(rejection.body_text()))
    })?;

    let total_sqft = req.total_sqft.as_f64("total_sqft").map_err(validation_error)?;
    let bhk = req.bhk.as_i64("bhk").map_err(validation_error)?;
    let bath = req.bath.as_i64("bath").map_err(validation_error)?;

    let estimated_price = state
        .model
        .estimated_price(&req.location, total_sqft, bhk, bath);
    if !estimated_price.is_finite() {
        return Err(validation_error(ApiException::validation(
            "property attributes are outside the model's range",
        )));
    }
    info!(location = %req.location, estimated_price, "price predicted");

    Ok(Json(PredictHomePriceResponse {
        estimated_price: Some(estimated_price),
    }))
}

fn validation_error(err: ApiException) -> (StatusCode, Json<ApiError>) {
    (StatusCode::BAD_REQUEST, Json(ApiError::from(err)))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
