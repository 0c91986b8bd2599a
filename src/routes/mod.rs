pub mod zones;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(zones::root))
        .route("/zones", get(zones::list_zones))
        .route("/zone/{id}", get(zones::get_zone))
        .route("/predict/{id}", get(zones::predict_zone))
        .with_state(state)
}
