use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::protocol::{
    LocationNamesResponse, PredictHomePriceRequest, PredictHomePriceResponse,
    LOCATION_NAMES_PATH, PREDICT_HOME_PRICE_PATH,
};
use tracing::debug;
use url::Url;

pub mod catalog;
pub mod config;
pub mod error;
pub mod estimation;

pub use catalog::LocationCatalog;
pub use config::ClientSettings;
pub use error::ServiceError;
pub use estimation::{
    EstimationController, EstimationOutcome, EstimationRequest, EstimationResult, FormField,
    FormInput, Phase, ESTIMATE_ERROR_MESSAGE,
};

/// Remote valuation service as seen by the client.
#[async_trait]
pub trait ValuationService: Send + Sync {
    async fn location_names(&self) -> Result<Vec<String>, ServiceError>;
    async fn predict_home_price(&self, request: &EstimationRequest) -> Result<f64, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct ValuationClient {
    http: Client,
    base_url: Url,
}

impl ValuationClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn from_settings(settings: &ClientSettings) -> anyhow::Result<Self> {
        Ok(Self::new(settings.base_url()?))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ServiceError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|source| ServiceError::Endpoint {
                path: path.to_string(),
                source,
            })
    }

    async fn read_json<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, ServiceError> {
        let status = res.status();
        if !status.is_success() {
            return Err(ServiceError::Status(status));
        }
        let body = res.bytes().await?;
        serde_json::from_slice(&body).map_err(|err| ServiceError::Malformed(err.to_string()))
    }
}

#[async_trait]
impl ValuationService for ValuationClient {
    async fn location_names(&self) -> Result<Vec<String>, ServiceError> {
        let url = self.endpoint(LOCATION_NAMES_PATH)?;
        debug!(%url, "fetching location names");
        let res = self.http.get(url).send().await?;
        let body: LocationNamesResponse = Self::read_json(res).await?;
        Ok(body.locations)
    }

    async fn predict_home_price(&self, request: &EstimationRequest) -> Result<f64, ServiceError> {
        let url = self.endpoint(PREDICT_HOME_PRICE_PATH)?;
        debug!(%url, location = %request.location, "requesting price estimate");
        let res = self
            .http
            .post(url)
            .json(&PredictHomePriceRequest::from(request))
            .send()
            .await?;
        let body: PredictHomePriceResponse = Self::read_json(res).await?;
        body.estimated_price
            .ok_or_else(|| ServiceError::Malformed("missing estimated_price".to_string()))
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
