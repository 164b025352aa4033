use std::sync::Arc;

use crate::model::PriceModel;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) model: Arc<PriceModel>,
}
