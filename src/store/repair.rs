//! One-time repair of a known key corruption in the raw dataset.
//!
//! Some exports of the source data carry the `movement_chaos` time-series
//! key with the trailing "os" typed as Cyrillic look-alikes (U+043E, U+0441).
//! The repair runs over the raw JSON document before deserialization, so the
//! canonical schema picks the value up under the ASCII spelling.

use serde_json::Value;

/// Canonical ASCII spelling of the movement-chaos key.
pub const MOVEMENT_CHAOS_KEY: &str = "movement_chaos";
/// Known corrupted spelling: `movement_cha` + CYRILLIC SMALL LETTER O +
/// CYRILLIC SMALL LETTER ES.
pub const CORRUPTED_MOVEMENT_CHAOS_KEY: &str = "movement_cha\u{43e}\u{441}";

/// Rename the corrupted key in every time-series item, both on zones and on
/// the alternatives nested inside them. Idempotent: once repaired, the
/// corrupted key no longer matches anything.
pub fn repair_dataset(zones: &mut Value) {
    if let Some(zones) = zones.as_array_mut() {
        for zone in zones {
            repair_time_series(zone);
            if let Some(alternatives) = zone.get_mut("alternatives").and_then(Value::as_array_mut)
            {
                for alternative in alternatives {
                    repair_time_series(alternative);
                }
            }
        }
    }
}

fn repair_time_series(record: &mut Value) {
    let items = match record.get_mut("time_series").and_then(Value::as_array_mut) {
        Some(items) => items,
        None => return,
    };

    for item in items {
        if let Some(map) = item.as_object_mut() {
            if let Some(value) = map.remove(CORRUPTED_MOVEMENT_CHAOS_KEY) {
                map.insert(MOVEMENT_CHAOS_KEY.to_string(), value);
            }
            // Only the known corruption is renamed. Flag anything else
            // rather than dropping it silently.
            for key in map.keys().filter(|key| !key.is_ascii()) {
                tracing::warn!("unrecognized non-ASCII key {:?} in time_series item", key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_repair_renames_corrupted_key() {
        let mut document = json!([
            {
                "id": 1,
                "time_series": [
                    {"time": "08:00", "movement_cha\u{43e}\u{441}": 6}
                ]
            }
        ]);

        repair_dataset(&mut document);

        let item = &document[0]["time_series"][0];
        assert_eq!(item[MOVEMENT_CHAOS_KEY], json!(6));
        assert!(item.get(CORRUPTED_MOVEMENT_CHAOS_KEY).is_none());
    }

    #[test]
    fn test_repair_reaches_alternative_time_series() {
        let mut document = json!([
            {
                "id": 1,
                "alternatives": [
                    {
                        "name": "Riverside Park",
                        "time_series": [
                            {"time": "12:00", "movement_cha\u{43e}\u{441}": 3}
                        ]
                    }
                ]
            }
        ]);

        repair_dataset(&mut document);

        let item = &document[0]["alternatives"][0]["time_series"][0];
        assert_eq!(item[MOVEMENT_CHAOS_KEY], json!(3));
        assert!(item.get(CORRUPTED_MOVEMENT_CHAOS_KEY).is_none());
    }

    #[test]
    fn test_repair_is_idempotent() {
        let mut once = json!([
            {
                "id": 1,
                "time_series": [
                    {"time": "08:00", "movement_cha\u{43e}\u{441}": 6, "crowd_density": 40}
                ]
            }
        ]);

        repair_dataset(&mut once);
        let mut twice = once.clone();
        repair_dataset(&mut twice);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_repair_overwrites_stale_ascii_duplicate() {
        // When both spellings are present the corrupted entry wins, matching
        // the rename-on-load behavior for a record written by a corrupting
        // exporter after a partial manual fix.
        let mut document = json!([
            {
                "id": 1,
                "time_series": [
                    {"time": "08:00", "movement_chaos": 1, "movement_cha\u{43e}\u{441}": 9}
                ]
            }
        ]);

        repair_dataset(&mut document);

        assert_eq!(document[0]["time_series"][0][MOVEMENT_CHAOS_KEY], json!(9));
    }

    #[test]
    fn test_repair_ignores_records_without_time_series() {
        let mut document = json!([{"id": 1, "name": "Central Square"}]);
        let before = document.clone();

        repair_dataset(&mut document);

        assert_eq!(document, before);
    }

    #[test]
    fn test_repair_leaves_unknown_corruption_in_place() {
        let mut document = json!([
            {
                "id": 1,
                "time_series": [
                    {"time": "08:00", "weather_fact\u{43e}r": 2}
                ]
            }
        ]);

        repair_dataset(&mut document);

        // Flagged via logging, but not dropped or renamed.
        assert_eq!(
            document[0]["time_series"][0]["weather_fact\u{43e}r"],
            json!(2)
        );
    }
}
