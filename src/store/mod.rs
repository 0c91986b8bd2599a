//! In-memory zone dataset, loaded once at process start.

pub mod repair;

use crate::error::{AppError, Result};
use crate::models::RiskZone;
use serde_json::Value;
use std::path::Path;

/// Read-only collection of zones backing every endpoint.
///
/// Constructed once at startup and never written again. Accessors hand out
/// cloned records, so per-request perturbations can never leak back into the
/// stored data and concurrent reads of the same zone stay independent.
#[derive(Debug)]
pub struct ZoneStore {
    zones: Vec<RiskZone>,
}

impl ZoneStore {
    /// Load the dataset from a JSON file, repairing known key corruption
    /// before deserializing into the canonical schema.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let document: Value = serde_json::from_str(&raw)?;
        Self::from_value(document)
    }

    /// Build a store from an already-parsed JSON document.
    pub fn from_value(mut document: Value) -> Result<Self> {
        if !document.is_array() {
            return Err(AppError::DatasetShape);
        }
        repair::repair_dataset(&mut document);
        let zones: Vec<RiskZone> = serde_json::from_value(document)?;
        Ok(ZoneStore { zones })
    }

    /// Number of zones in the dataset.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Clone every zone in stored order.
    pub fn all(&self) -> Vec<RiskZone> {
        self.zones.to_vec()
    }

    /// Find a zone by id with a linear scan in stored order. Ids are assumed
    /// unique but not enforced; the first match wins. The returned record is
    /// a clone the caller may perturb freely.
    pub fn find(&self, id: i64) -> Option<RiskZone> {
        self.zones.iter().find(|zone| zone.id == id).cloned()
    }
}
