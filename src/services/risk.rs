//! Per-request risk score perturbation.
//!
//! Both functions take a zone by value — an isolated clone handed out by the
//! store — perturb its score, clamp to the valid range and rebucket the
//! level. They are intentionally non-deterministic: every call draws a fresh
//! delta, so repeated reads of the same zone simulate live risk dynamics.

use crate::constants::{
    FORECAST_DROP_MAX, FORECAST_DROP_MIN, LIVE_JITTER_MAX, RISK_SCORE_MAX, RISK_SCORE_MIN,
};
use crate::models::{RiskLevel, RiskZone};
use rand::RngExt;

/// Live jitter: shift the score by a uniform random integer in
/// `-LIVE_JITTER_MAX..=LIVE_JITTER_MAX`.
pub fn update_risk(mut zone: RiskZone) -> RiskZone {
    let delta = rand::rng().random_range(-LIVE_JITTER_MAX..=LIVE_JITTER_MAX);
    apply_delta(&mut zone, delta);
    zone
}

/// Forecast: subtract a uniform random integer in
/// `FORECAST_DROP_MIN..=FORECAST_DROP_MAX`, modeling a predicted risk
/// reduction. The result never exceeds the input score.
pub fn predict_risk(mut zone: RiskZone) -> RiskZone {
    let drop = rand::rng().random_range(FORECAST_DROP_MIN..=FORECAST_DROP_MAX);
    apply_delta(&mut zone, -drop);
    zone
}

fn apply_delta(zone: &mut RiskZone, delta: i64) {
    zone.risk_score = (zone.risk_score + delta as f64).clamp(RISK_SCORE_MIN, RISK_SCORE_MAX);
    zone.risk_level = RiskLevel::from_score(zone.risk_score);
}
