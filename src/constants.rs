//! Stable application-wide constants.
//!
//! Values here are structural invariants of the risk model and default
//! fallbacks for env-var-based configuration. They should rarely change.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "8000";
/// Default location of the zone dataset. Overridden by `DATASET_PATH`.
pub const DEFAULT_DATASET_PATH: &str = "data/zones.json";

// --- Risk score range and level thresholds ---

/// Lower bound of the valid risk score range.
pub const RISK_SCORE_MIN: f64 = 0.0;
/// Upper bound of the valid risk score range.
pub const RISK_SCORE_MAX: f64 = 100.0;
/// Scores below this bucket as `low`.
pub const LOW_RISK_THRESHOLD: f64 = 30.0;
/// Scores below this (and at least [`LOW_RISK_THRESHOLD`]) bucket as
/// `medium`; everything at or above is `high`.
pub const HIGH_RISK_THRESHOLD: f64 = 70.0;

// --- Per-request perturbation bounds ---

/// Live jitter magnitude: each read shifts the score by an integer in
/// `-LIVE_JITTER_MAX..=LIVE_JITTER_MAX`.
pub const LIVE_JITTER_MAX: i64 = 5;
/// Smallest forecast reduction subtracted by the predictor.
pub const FORECAST_DROP_MIN: i64 = 5;
/// Largest forecast reduction subtracted by the predictor.
pub const FORECAST_DROP_MAX: i64 = 15;

/// Display name of the placeholder record returned for unknown zone ids.
pub const NOT_FOUND_ZONE_NAME: &str = "Not found";
