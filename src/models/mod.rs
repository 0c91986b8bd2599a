pub mod zone;

pub use zone::{Alternative, RiskLevel, RiskZone, TimeSeriesItem};
