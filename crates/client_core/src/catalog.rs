use tracing::{info, warn};

use crate::{error::ServiceError, ValuationService};

/// Location names offered by the service, in service order.
///
/// Fetched at most once per session. A failed fetch keeps whatever was
/// there before (empty at startup) and is only logged.
#[derive(Debug, Clone, Default)]
pub struct LocationCatalog {
    names: Vec<String>,
    requested: bool,
}

impl LocationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn was_requested(&self) -> bool {
        self.requested
    }

    /// Claims the session's single fetch. Returns `false` once claimed.
    pub fn begin_load(&mut self) -> bool {
        !std::mem::replace(&mut self.requested, true)
    }

    pub fn finish_load(&mut self, result: Result<Vec<String>, ServiceError>) {
        match result {
            Ok(names) => {
                info!(count = names.len(), "location catalog loaded");
                self.names = names;
            }
            Err(err) => {
                warn!(error = %err, "error fetching locations");
            }
        }
    }

    pub async fn load_once<S>(&mut self, service: &S)
    where
        S: ValuationService + ?Sized,
    {
        if !self.begin_load() {
            return;
        }
        let result = service.location_names().await;
        self.finish_load(result);
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
