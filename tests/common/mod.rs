use cityrisk::store::ZoneStore;
use cityrisk::AppState;
use serde_json::{json, Value};
use std::sync::Arc;

/// Fixture dataset mirroring the shape of the shipped data file: optional
/// fields omitted on some records, one corrupted time-series key present.
#[allow(dead_code)]
pub fn sample_dataset() -> Value {
    json!([
        {
            "id": 1,
            "name": "Central Square",
            "lat": 51.1282,
            "lng": 71.4304,
            "risk_score": 50.0,
            "risk_level": "medium",
            "safe_time": "09:00-18:00",
            "walk_time_from_nis": "15 min",
            "description": "Main city plaza",
            "safest_route_from_nis": "Along the avenue",
            "time_series": [
                {
                    "time": "13:00",
                    "crowd_density": 80,
                    "movement_cha\u{43e}\u{441}": 55,
                    "weather_factor": 10,
                    "time_peak_factor": 70,
                    "risk_score": 52.0,
                    "risk_level": "medium"
                }
            ],
            "alternatives": [
                {
                    "name": "Riverside Promenade",
                    "tag": "outdoor",
                    "type": "park",
                    "risk_score": 18.0,
                    "walk_time": "20 min"
                }
            ]
        },
        {
            "id": 2,
            "name": "Old Market District",
            "lat": 51.1351,
            "lng": 71.4189,
            "risk_score": 95.0,
            "risk_level": "high",
            "description": "Bazaar quarter"
        },
        {
            "id": 3,
            "name": "Industrial Yard",
            "lat": 51.1104,
            "lng": 71.4021,
            "description": "Decommissioned freight yard"
        }
    ])
}

/// Build the full application router over the fixture dataset.
#[allow(dead_code)]
pub fn test_app() -> axum::Router {
    let store = ZoneStore::from_value(sample_dataset()).expect("fixture dataset must parse");
    cityrisk::routes::create_router(Arc::new(AppState { store }))
}
