use crate::models::RiskZone;
use crate::services::risk;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET / - capability summary for the front-end
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "CityRisk backend is running. Use /zones, /zone/{id}, /predict/{id}"
    }))
}

/// GET /zones - every zone in stored order, each with fresh live jitter
pub async fn list_zones(State(state): State<Arc<AppState>>) -> Json<Vec<RiskZone>> {
    let zones: Vec<RiskZone> = state
        .store
        .all()
        .into_iter()
        .map(risk::update_risk)
        .collect();

    tracing::debug!("returning {} zones with live jitter", zones.len());

    Json(zones)
}

/// GET /zone/{id} - one zone with live jitter; unknown ids get a placeholder
/// record with HTTP 200 rather than an error status.
pub async fn get_zone(State(state): State<Arc<AppState>>, Path(id): Path<i64>) -> Json<RiskZone> {
    match state.store.find(id) {
        Some(zone) => {
            let zone = risk::update_risk(zone);
            tracing::debug!(
                "zone {} live score {:.0} ({})",
                id,
                zone.risk_score,
                zone.risk_level
            );
            Json(zone)
        }
        None => {
            tracing::info!("zone {} not found, returning placeholder", id);
            Json(RiskZone::not_found(id))
        }
    }
}

/// GET /predict/{id} - one zone with a forecast risk reduction applied;
/// unknown ids get the same placeholder as /zone/{id}.
pub async fn predict_zone(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Json<RiskZone> {
    match state.store.find(id) {
        Some(zone) => {
            let zone = risk::predict_risk(zone);
            tracing::debug!(
                "zone {} forecast score {:.0} ({})",
                id,
                zone.risk_score,
                zone.risk_level
            );
            Json(zone)
        }
        None => {
            tracing::info!("zone {} not found, returning placeholder", id);
            Json(RiskZone::not_found(id))
        }
    }
}
