//! Raw records from a JPL Small-Body Database query export.
//!
//! Two layouts are accepted: a JSON array of objects keyed by field name, and
//! the SBDB query API envelope `{ "fields": [..], "data": [[..], ..] }`. The
//! API emits numbers as strings, so numeric fields accept either form.

use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use tracing::info;

use crate::error::CatalogError;

/// One minor body as it appears in the dataset. Units follow SBDB: AU, days,
/// degrees, kilometres and hours.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawAsteroidRecord {
    /// Designation and name, often padded with whitespace.
    pub full_name: String,
    /// Diameter in km. Unknown for most small bodies.
    #[serde(default, deserialize_with = "optional_number")]
    pub diameter: Option<f64>,
    /// Rotation period in hours.
    #[serde(default, deserialize_with = "optional_number")]
    pub rot_per: Option<f64>,
    /// Eccentricity.
    #[serde(deserialize_with = "number")]
    pub e: f64,
    /// Semi-major axis in AU.
    #[serde(deserialize_with = "number")]
    pub a: f64,
    /// Inclination in degrees.
    #[serde(deserialize_with = "number")]
    pub i: f64,
    /// Longitude of ascending node in degrees.
    #[serde(deserialize_with = "number")]
    pub om: f64,
    /// Orbital period in days.
    #[serde(deserialize_with = "number")]
    pub per: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                Ok(None)
            } else {
                text.parse().map(Some).map_err(serde::de::Error::custom)
            }
        }
    }
}

fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    optional_number(deserializer)?.ok_or_else(|| serde::de::Error::custom("missing number"))
}

/// Read and parse an SBDB export from disk.
///
/// # Errors
///
/// Returns [`CatalogError`] on I/O, JSON, or record shape failures.
pub fn load_sbdb_json(path: &Path) -> Result<Vec<RawAsteroidRecord>, CatalogError> {
    let contents = std::fs::read_to_string(path)?;
    let records = parse_sbdb_json(&contents)?;
    info!(path = %path.display(), records = records.len(), "loaded minor-body dataset");
    Ok(records)
}

/// Parse an SBDB export from a JSON string.
///
/// # Errors
///
/// Returns [`CatalogError::Json`] for invalid JSON and
/// [`CatalogError::MalformedRecord`] for rows that do not fit the record shape.
pub fn parse_sbdb_json(json: &str) -> Result<Vec<RawAsteroidRecord>, CatalogError> {
    let value: Value = serde_json::from_str(json)?;
    let rows = match value {
        Value::Array(rows) => rows,
        Value::Object(mut envelope) => {
            let fields = field_names(envelope.remove("fields"))?;
            let data = match envelope.remove("data") {
                Some(Value::Array(data)) => data,
                None | Some(Value::Null) => Vec::new(),
                Some(_) => return Err(malformed(0, "`data` is not an array")),
            };
            data.into_iter()
                .enumerate()
                .map(|(index, row)| zip_row(&fields, index, row))
                .collect::<Result<Vec<_>, _>>()?
        }
        _ => return Err(malformed(0, "expected an array or a query envelope")),
    };

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            serde_json::from_value(row).map_err(|e| malformed(index, e.to_string()))
        })
        .collect()
}

fn field_names(fields: Option<Value>) -> Result<Vec<String>, CatalogError> {
    match fields {
        Some(Value::Array(names)) => names
            .into_iter()
            .map(|name| match name {
                Value::String(s) => Ok(s),
                other => Err(malformed(0, format!("field name {other} is not a string"))),
            })
            .collect(),
        _ => Err(malformed(0, "envelope has no `fields` array")),
    }
}

fn zip_row(fields: &[String], index: usize, row: Value) -> Result<Value, CatalogError> {
    let Value::Array(values) = row else {
        return Err(malformed(index, "row is not an array"));
    };
    if values.len() != fields.len() {
        return Err(malformed(
            index,
            format!("{} values for {} fields", values.len(), fields.len()),
        ));
    }
    let object: Map<String, Value> = fields.iter().cloned().zip(values).collect();
    Ok(Value::Object(object))
}

fn malformed(index: usize, reason: impl Into<String>) -> CatalogError {
    CatalogError::MalformedRecord {
        index,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_array_with_nulls() {
        let json = r#"[
            {"full_name": "     1 Ceres (A801 AA)", "diameter": 939.4, "rot_per": 9.07,
             "e": 0.0785, "a": 2.767, "i": 10.59, "om": 80.25, "per": 1681.6},
            {"full_name": "  6478 Gault", "diameter": null, "rot_per": 2.49,
             "e": 0.19, "a": 2.30, "i": 22.8, "om": 183.6, "per": 1273.0}
        ]"#;
        let records = parse_sbdb_json(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].diameter, Some(939.4));
        assert_eq!(records[1].diameter, None);
        assert_eq!(records[1].rot_per, Some(2.49));
    }

    #[test]
    fn test_parse_api_envelope_with_string_numbers() {
        let json = r#"{
            "signature": {"source": "NASA/JPL SBDB Query API", "version": "1.0"},
            "count": 2,
            "fields": ["full_name", "diameter", "rot_per", "e", "a", "i", "om", "per"],
            "data": [
                ["     4 Vesta (A807 FA)", "525.4", "5.342", "0.0894", "2.362", "7.14", "103.8", "1325.5"],
                ["   433 Eros (A898 PA)", null, "", "0.2229", "1.458", "10.83", "304.3", "642.9"]
            ]
        }"#;
        let records = parse_sbdb_json(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].diameter, Some(525.4));
        assert!((records[0].per - 1325.5).abs() < 1e-12);
        assert_eq!(records[1].diameter, None);
        assert_eq!(records[1].rot_per, None);
    }

    #[test]
    fn test_missing_optional_fields_default_to_none() {
        let json = r#"[{"full_name": "X", "e": 0.1, "a": 2.0, "i": 1.0, "om": 2.0, "per": 1000.0}]"#;
        let records = parse_sbdb_json(json).unwrap();
        assert_eq!(records[0].diameter, None);
        assert_eq!(records[0].rot_per, None);
    }

    #[test]
    fn test_missing_required_field_is_malformed() {
        let json = r#"[{"full_name": "X", "e": null, "a": 2.0, "i": 1.0, "om": 2.0, "per": 1000.0}]"#;
        let err = parse_sbdb_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedRecord { index: 0, .. }));
    }

    #[test]
    fn test_ragged_row_is_malformed() {
        let json = r#"{"fields": ["full_name", "e"], "data": [["A", "0.1"], ["B"]]}"#;
        let err = parse_sbdb_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedRecord { index: 1, .. }));
    }

    #[test]
    fn test_non_numeric_text_is_malformed() {
        let json = r#"[{"full_name": "X", "diameter": "big", "e": 0.1, "a": 2.0, "i": 1.0, "om": 2.0, "per": 1.0}]"#;
        assert!(parse_sbdb_json(json).is_err());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            parse_sbdb_json("{not json"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sbdb.json");
        std::fs::write(
            &path,
            r#"[{"full_name": "X", "diameter": 10, "rot_per": 24, "e": 0.1, "a": 2.0, "i": 1.0, "om": 2.0, "per": 1000.0}]"#,
        )
        .unwrap();
        let records = load_sbdb_json(&path).unwrap();
        assert_eq!(records[0].diameter, Some(10.0));
    }
}
