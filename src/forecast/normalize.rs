//! Raw reading normalization.
//!
//! Reading batches come from whatever the dashboard happens to be wired
//! to (meter exports, hub webhooks, demo fixtures), so field naming
//! varies. Each semantic field has an ordered list of accepted aliases,
//! resolved once per record. A record missing a field degrades on its
//! own (timestamp -> "now", wattage -> 0) instead of failing the batch.

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use crate::domain::NormalizedReading;

/// Accepted timestamp field names, in resolution order.
const TIMESTAMP_FIELDS: &[&str] = &["timestamp", "time", "recorded_at", "created_at", "ts"];

/// Accepted wattage field names, in resolution order.
const WATTAGE_FIELDS: &[&str] = &["wattage", "watts", "power", "power_w", "value", "consumption"];

/// Epoch values at or above this magnitude are taken as milliseconds.
const EPOCH_MILLIS_THRESHOLD: i64 = 10_000_000_000;

/// Normalize a raw readings payload.
///
/// Anything that is not a JSON array (null, an object, a scalar) yields
/// an empty batch so downstream stages fall through to synthetic data.
/// Output preserves the length and order of the input array.
pub fn normalize_payload(payload: &Value, now: DateTime<FixedOffset>) -> Vec<NormalizedReading> {
    match payload.as_array() {
        Some(records) => records.iter().map(|r| normalize_record(r, now)).collect(),
        None => Vec::new(),
    }
}

fn normalize_record(record: &Value, now: DateTime<FixedOffset>) -> NormalizedReading {
    let timestamp = extract_timestamp(record).unwrap_or(now);
    let watts = extract_watts(record).unwrap_or(0.0);
    NormalizedReading::from_timestamp(timestamp, watts)
}

fn extract_timestamp(record: &Value) -> Option<DateTime<FixedOffset>> {
    let object = record.as_object()?;
    TIMESTAMP_FIELDS
        .iter()
        .find_map(|name| object.get(*name).and_then(parse_timestamp))
}

fn parse_timestamp(value: &Value) -> Option<DateTime<FixedOffset>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s).ok(),
        Value::Number(n) => {
            let raw = n.as_i64()?;
            let seconds = if raw.abs() >= EPOCH_MILLIS_THRESHOLD {
                raw / 1000
            } else {
                raw
            };
            DateTime::from_timestamp(seconds, 0).map(|dt| dt.fixed_offset())
        }
        _ => None,
    }
}

fn extract_watts(record: &Value) -> Option<f64> {
    let object = record.as_object()?;
    WATTAGE_FIELDS
        .iter()
        .find_map(|name| object.get(*name).and_then(Value::as_f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn now() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-06-18T14:00:00+00:00").unwrap()
    }

    #[test]
    fn test_non_array_payloads_yield_empty_batch() {
        assert!(normalize_payload(&Value::Null, now()).is_empty());
        assert!(normalize_payload(&json!({"watts": 500}), now()).is_empty());
        assert!(normalize_payload(&json!("not readings"), now()).is_empty());
        assert!(normalize_payload(&json!([]), now()).is_empty());
    }

    #[test]
    fn test_field_aliases_resolve_in_order() {
        let payload = json!([
            {"timestamp": "2024-06-16T07:00:00+00:00", "wattage": 850.0},
            {"time": "2024-06-16T08:00:00+00:00", "watts": 900},
            {"recorded_at": "2024-06-16T09:00:00+00:00", "power": 750.5},
            {"created_at": "2024-06-16T10:00:00+00:00", "power_w": 600},
            {"ts": "2024-06-16T11:00:00+00:00", "consumption": 550},
        ]);

        let readings = normalize_payload(&payload, now());
        assert_eq!(readings.len(), 5);
        assert_eq!(readings[0].hour, 7);
        assert_eq!(readings[0].watts, 850.0);
        assert_eq!(readings[1].watts, 900.0);
        assert_eq!(readings[2].watts, 750.5);
        assert_eq!(readings[3].watts, 600.0);
        assert_eq!(readings[4].watts, 550.0);
    }

    #[test]
    fn test_missing_fields_default_per_record() {
        let payload = json!([
            {"note": "no recognizable fields at all"},
            {"watts": 420.0},
            {"timestamp": "2024-06-16T22:00:00+00:00"},
        ]);

        let readings = normalize_payload(&payload, now());
        assert_eq!(readings.len(), 3);

        // first record: everything defaulted
        assert_eq!(readings[0].hour, 14);
        assert_eq!(readings[0].watts, 0.0);
        // second: wattage present, timestamp defaulted to "now"
        assert_eq!(readings[1].hour, 14);
        assert_eq!(readings[1].watts, 420.0);
        // third: timestamp present, wattage defaulted
        assert_eq!(readings[2].hour, 22);
        assert_eq!(readings[2].watts, 0.0);
    }

    #[test]
    fn test_epoch_seconds_and_millis() {
        // both are 2024-06-16T07:00:00Z
        let payload = json!([
            {"timestamp": 1718521200, "watts": 100},
            {"timestamp": 1718521200000i64, "watts": 200},
        ]);

        let readings = normalize_payload(&payload, now());
        assert_eq!(readings[0].hour, 7);
        assert_eq!(readings[1].hour, 7);
    }

    #[test]
    fn test_unparseable_timestamp_defaults_to_now() {
        let payload = json!([{"timestamp": "yesterday-ish", "watts": 300}]);

        let readings = normalize_payload(&payload, now());
        assert_eq!(readings[0].hour, 14);
        assert_eq!(readings[0].day_of_week, 2); // 2024-06-18 is a Tuesday
        assert_eq!(readings[0].watts, 300.0);
    }

    #[test]
    fn test_negative_wattage_clamped() {
        let payload = json!([{"timestamp": "2024-06-16T07:00:00+00:00", "watts": -50.0}]);

        let readings = normalize_payload(&payload, now());
        assert_eq!(readings[0].watts, 0.0);
    }

    #[test]
    fn test_order_and_length_preserved() {
        let payload = json!([
            {"watts": 1.0},
            {"watts": 2.0},
            {"watts": 3.0},
        ]);

        let readings = normalize_payload(&payload, now());
        let watts: Vec<f64> = readings.iter().map(|r| r.watts).collect();
        assert_eq!(watts, vec![1.0, 2.0, 3.0]);
    }
}
