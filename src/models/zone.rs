use crate::constants::{HIGH_RISK_THRESHOLD, LOW_RISK_THRESHOLD, NOT_FOUND_ZONE_NAME};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bucketed risk category derived from a zone's risk score.
///
/// `Unknown` never results from bucketing a score; it only appears on
/// placeholder records synthesized for unknown zone ids.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
    Unknown,
}

impl RiskLevel {
    /// Bucket a risk score: below 30 is low, below 70 medium, the rest high.
    pub fn from_score(score: f64) -> Self {
        if score < LOW_RISK_THRESHOLD {
            RiskLevel::Low
        } else if score < HIGH_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// One geographic area of interest with its risk assessment.
///
/// Optional fields carry serde defaults, so any record deserialized from the
/// dataset (or built via a constructor) is fully populated: responses never
/// omit a field. `id`, `name`, coordinates and `description` are required in
/// the source data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskZone {
    pub id: i64,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub risk_score: f64,
    #[serde(default)]
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub safe_time: String,
    #[serde(default)]
    pub walk_time_from_nis: String,
    pub description: String,
    #[serde(default)]
    pub safest_route_from_nis: String,
    #[serde(default)]
    pub environment_risk: f64,
    #[serde(default)]
    pub time_series: Vec<TimeSeriesItem>,
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
}

impl RiskZone {
    /// Placeholder record for an id that matched nothing in the dataset.
    /// The id is echoed back; every other field is a sentinel or empty.
    pub fn not_found(id: i64) -> Self {
        RiskZone {
            id,
            name: NOT_FOUND_ZONE_NAME.to_string(),
            lat: 0.0,
            lng: 0.0,
            risk_score: 0.0,
            risk_level: RiskLevel::Unknown,
            safe_time: String::new(),
            walk_time_from_nis: String::new(),
            description: String::new(),
            safest_route_from_nis: String::new(),
            environment_risk: 0.0,
            time_series: Vec::new(),
            alternatives: Vec::new(),
        }
    }
}

/// A suggested substitute destination or route for a zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alternative {
    pub name: String,
    #[serde(default)]
    pub tag: String,
    #[serde(rename = "type", default = "default_alternative_kind")]
    pub kind: String,
    #[serde(default)]
    pub risk_score: f64,
    #[serde(default)]
    pub safe_time: String,
    #[serde(default)]
    pub walk_time: String,
    #[serde(default)]
    pub route: String,
    #[serde(default)]
    pub ai_reason: String,
}

fn default_alternative_kind() -> String {
    "general".to_string()
}

/// One time-bucketed observation feeding a zone's risk narrative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeriesItem {
    pub time: String,
    #[serde(default)]
    pub crowd_density: i64,
    #[serde(default)]
    pub movement_chaos: i64,
    #[serde(default)]
    pub weather_factor: i64,
    #[serde(default)]
    pub time_peak_factor: i64,
    #[serde(default)]
    pub risk_score: f64,
    #[serde(default)]
    pub risk_level: RiskLevel,
}
