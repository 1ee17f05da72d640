//! Core types for the Pokémon reports dashboard.
//!
//! This crate defines the shared data structures and the pure logic the
//! frontend builds on: report ingest normalization, list-body normalization,
//! the `updated`-timestamp sort, and sample-size validation.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Client-side input rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Sample size that is neither empty nor a strictly positive integer.
    #[error("sample size must be a positive integer")]
    InvalidSampleSize,
}

/// A server-generated report for one Pokémon type.
///
/// Every field is optional: the backend emits heterogeneous records with
/// arbitrary key casing, so ingest normalizes keys once (lowercased) and maps
/// anything missing or non-scalar to `None`. Callers render absence
/// explicitly; no field access can fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Report {
    /// Unique identifier (wire `reportId`; numbers are coerced to strings).
    #[serde(rename = "reportId", skip_serializing_if = "Option::is_none")]
    pub report_id: Option<String>,
    /// Lifecycle status; compared case-insensitively against `"completed"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Pokémon type the report aggregates (wire `pokemonType`).
    #[serde(rename = "pokemonType", skip_serializing_if = "Option::is_none")]
    pub pokemon_type: Option<String>,
    /// Creation timestamp, ISO-like but not guaranteed parseable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// Last-update timestamp, ISO-like but not guaranteed parseable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    /// Download link, present only once the report is complete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl From<Value> for Report {
    fn from(value: Value) -> Self {
        let mut fields: HashMap<String, Value> = match value {
            Value::Object(map) => map
                .into_iter()
                .map(|(key, value)| (key.to_ascii_lowercase(), value))
                .collect(),
            _ => HashMap::new(),
        };

        let mut take = |key: &str| -> Option<String> {
            match fields.remove(key) {
                Some(Value::String(text)) => Some(text),
                Some(Value::Number(number)) => Some(number.to_string()),
                Some(Value::Bool(flag)) => Some(flag.to_string()),
                _ => None,
            }
        };

        Self {
            report_id: take("reportid"),
            status: take("status"),
            pokemon_type: take("pokemontype"),
            created: take("created"),
            updated: take("updated"),
            url: take("url"),
        }
    }
}

impl Report {
    /// Whether row actions (download, delete) are enabled for this report.
    pub fn is_completed(&self) -> bool {
        self.status
            .as_deref()
            .map(|status| status.eq_ignore_ascii_case("completed"))
            .unwrap_or(false)
    }

    /// The `updated` field parsed as a timestamp, if it parses at all.
    pub fn updated_at(&self) -> Option<NaiveDateTime> {
        self.updated.as_deref().and_then(parse_timestamp)
    }
}

/// Parse an ISO-like timestamp string, tolerating the variants the backend
/// has been observed to emit (RFC 3339, `T`- or space-separated naive
/// datetimes, bare dates).
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Direction of the table sort over the `updated` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Most recent first (the initial direction).
    #[default]
    Descending,
    /// Oldest first.
    Ascending,
}

impl SortDirection {
    /// Flip between descending and ascending.
    pub fn toggle(self) -> Self {
        match self {
            Self::Descending => Self::Ascending,
            Self::Ascending => Self::Descending,
        }
    }
}

/// Order two reports by their `updated` timestamps.
///
/// Records whose timestamp parses sort before records whose timestamp does
/// not, under both directions; two unparseable records compare equal so a
/// stable sort keeps their incoming order.
pub fn compare_updated(a: &Report, b: &Report, direction: SortDirection) -> Ordering {
    match (a.updated_at(), b.updated_at()) {
        (Some(left), Some(right)) => match direction {
            SortDirection::Descending => right.cmp(&left),
            SortDirection::Ascending => left.cmp(&right),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Produce a display-sorted copy of the report list. The source slice is
/// never mutated; the table always works on this projection.
pub fn sort_reports(reports: &[Report], direction: SortDirection) -> Vec<Report> {
    let mut sorted = reports.to_vec();
    sorted.sort_by(|a, b| compare_updated(a, b, direction));
    sorted
}

/// Normalize a list-endpoint body into a flat report sequence.
///
/// The backend answers with a bare array, or an object wrapping the array
/// under `results` or `data`; anything else yields an empty list.
pub fn reports_from_value(body: Value) -> Vec<Report> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("results").or_else(|| map.remove("data")) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };
    items.into_iter().map(Report::from).collect()
}

/// The report list with the record matching `report_id` filtered out.
pub fn remove_report(reports: &[Report], report_id: &str) -> Vec<Report> {
    reports
        .iter()
        .filter(|report| report.report_id.as_deref() != Some(report_id))
        .cloned()
        .collect()
}

/// Validate the free-text sample-size input.
///
/// Empty input is valid and means "no cap"; otherwise the text must parse as
/// a strictly positive integer.
pub fn parse_sample_size(input: &str) -> Result<Option<u32>, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<u32>() {
        Ok(size) if size > 0 => Ok(Some(size)),
        _ => Err(ValidationError::InvalidSampleSize),
    }
}

/// Body of `POST /api/request`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReportRequest {
    /// Type to aggregate.
    pub pokemon_type: String,
    /// Optional cap on how many records the server samples; omitted from the
    /// body when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_size: Option<u32>,
}

impl CreateReportRequest {
    /// Build a request body for the given type and optional sample size.
    pub fn new(pokemon_type: impl Into<String>, sample_size: Option<u32>) -> Self {
        Self {
            pokemon_type: pokemon_type.into(),
            sample_size,
        }
    }
}

/// One entry of the type enumeration endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    pub name: String,
}

/// Envelope of the type enumeration endpoint (`{ results: [{name}] }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeList {
    #[serde(default)]
    pub results: Vec<PokemonType>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report(id: &str, updated: Option<&str>) -> Report {
        Report {
            report_id: Some(id.to_string()),
            status: Some("Completed".to_string()),
            pokemon_type: Some("fire".to_string()),
            created: None,
            updated: updated.map(str::to_string),
            url: None,
        }
    }

    fn ids(reports: &[Report]) -> Vec<&str> {
        reports
            .iter()
            .map(|r| r.report_id.as_deref().unwrap_or(""))
            .collect()
    }

    #[test]
    fn test_ingest_lowercases_keys_once() {
        let upper: Report = serde_json::from_value(json!({
            "ReportId": 7,
            "Status": "Completed",
            "PokemonType": "water",
            "Updated": "2024-05-01T10:00:00Z",
        }))
        .unwrap();
        let lower: Report = serde_json::from_value(json!({
            "reportId": 7,
            "status": "Completed",
            "pokemonType": "water",
            "updated": "2024-05-01T10:00:00Z",
        }))
        .unwrap();

        assert_eq!(upper, lower);
        assert_eq!(upper.report_id.as_deref(), Some("7"));
        assert!(upper.is_completed());
        assert!(lower.is_completed());
    }

    #[test]
    fn test_ingest_missing_and_null_fields_are_none() {
        let report: Report = serde_json::from_value(json!({
            "reportId": "9",
            "url": null,
        }))
        .unwrap();

        assert_eq!(report.report_id.as_deref(), Some("9"));
        assert_eq!(report.status, None);
        assert_eq!(report.url, None);
        assert!(!report.is_completed());
    }

    #[test]
    fn test_ingest_non_object_yields_empty_record() {
        let report = Report::from(json!("not an object"));
        assert_eq!(report.report_id, None);
        assert_eq!(report.updated, None);
    }

    #[test]
    fn test_status_comparison_is_case_insensitive() {
        let mut report = report("1", None);
        report.status = Some("COMPLETED".to_string());
        assert!(report.is_completed());

        report.status = Some("pending".to_string());
        assert!(!report.is_completed());

        report.status = None;
        assert!(!report.is_completed());
    }

    #[test]
    fn test_parse_timestamp_variants() {
        assert!(parse_timestamp("2024-05-01T10:00:00Z").is_some());
        assert!(parse_timestamp("2024-05-01T10:00:00.123").is_some());
        assert!(parse_timestamp("2024-05-01 10:00:00").is_some());
        assert!(parse_timestamp("2024-05-01").is_some());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_descending_sort_places_most_recent_first() {
        let reports = vec![
            report("old", Some("2024-01-01T00:00:00Z")),
            report("new", Some("2024-06-01T00:00:00Z")),
            report("mid", Some("2024-03-01T00:00:00Z")),
        ];

        let sorted = sort_reports(&reports, SortDirection::Descending);
        assert_eq!(ids(&sorted), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_toggling_direction_reverses_parseable_records() {
        let reports = vec![
            report("b", Some("2024-03-01T00:00:00Z")),
            report("a", Some("2024-01-01T00:00:00Z")),
            report("c", Some("2024-06-01T00:00:00Z")),
        ];

        let descending = sort_reports(&reports, SortDirection::Descending);
        let ascending = sort_reports(&reports, SortDirection::Ascending);

        let mut reversed: Vec<&str> = ids(&descending);
        reversed.reverse();
        assert_eq!(ids(&ascending), reversed);
    }

    #[test]
    fn test_unparseable_updated_sorts_last_in_both_directions() {
        let reports = vec![
            report("junk", Some("not a date")),
            report("dated", Some("2024-05-01T10:00:00Z")),
            report("blank", None),
        ];

        for direction in [SortDirection::Descending, SortDirection::Ascending] {
            let sorted = sort_reports(&reports, direction);
            assert_eq!(ids(&sorted)[0], "dated");
            // Unparseable records keep their incoming relative order.
            assert_eq!(ids(&sorted)[1..], ["junk", "blank"]);
        }
    }

    #[test]
    fn test_sort_does_not_mutate_source() {
        let reports = vec![
            report("a", Some("2024-01-01T00:00:00Z")),
            report("b", Some("2024-06-01T00:00:00Z")),
        ];

        let _ = sort_reports(&reports, SortDirection::Descending);
        assert_eq!(ids(&reports), vec!["a", "b"]);
    }

    #[test]
    fn test_list_body_array_passthrough() {
        let reports = reports_from_value(json!([{"reportId": 1}, {"reportId": 2}]));
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].report_id.as_deref(), Some("1"));
    }

    #[test]
    fn test_list_body_data_envelope() {
        let reports = reports_from_value(json!({
            "data": [{"reportId": 1, "status": "Completed"}]
        }));

        assert_eq!(reports.len(), 1);
        assert!(reports[0].is_completed());
    }

    #[test]
    fn test_list_body_results_envelope() {
        let reports = reports_from_value(json!({
            "results": [{"reportId": "a"}, {"reportId": "b"}]
        }));
        assert_eq!(reports.len(), 2);
    }

    #[test]
    fn test_list_body_unknown_shape_is_empty() {
        assert!(reports_from_value(json!({"count": 3})).is_empty());
        assert!(reports_from_value(json!(42)).is_empty());
        assert!(reports_from_value(json!(null)).is_empty());
    }

    #[test]
    fn test_remove_report_filters_by_id() {
        let reports = vec![report("1", None), report("42", None), report("3", None)];

        let remaining = remove_report(&reports, "42");
        assert_eq!(ids(&remaining), vec!["1", "3"]);

        // No match leaves the list unchanged, which is also the failed-delete
        // outcome: the helper only runs after the API call succeeds.
        let untouched = remove_report(&reports, "99");
        assert_eq!(ids(&untouched), vec!["1", "42", "3"]);
    }

    #[test]
    fn test_sample_size_rejects_non_positive_input() {
        assert_eq!(
            parse_sample_size("0"),
            Err(ValidationError::InvalidSampleSize)
        );
        assert_eq!(
            parse_sample_size("-3"),
            Err(ValidationError::InvalidSampleSize)
        );
        assert_eq!(
            parse_sample_size("3.5"),
            Err(ValidationError::InvalidSampleSize)
        );
        assert_eq!(
            parse_sample_size("abc"),
            Err(ValidationError::InvalidSampleSize)
        );
    }

    #[test]
    fn test_sample_size_accepts_empty_and_positive_input() {
        assert_eq!(parse_sample_size(""), Ok(None));
        assert_eq!(parse_sample_size("   "), Ok(None));
        assert_eq!(parse_sample_size("25"), Ok(Some(25)));
    }

    #[test]
    fn test_create_request_omits_empty_sample_size() {
        let body = serde_json::to_value(CreateReportRequest::new("fire", None)).unwrap();
        assert_eq!(body, json!({"pokemon_type": "fire"}));

        let body = serde_json::to_value(CreateReportRequest::new("fire", Some(25))).unwrap();
        assert_eq!(body, json!({"pokemon_type": "fire", "sample_size": 25}));
    }

    #[test]
    fn test_completed_report_without_url_has_no_download_target() {
        let report: Report = serde_json::from_value(json!({
            "reportId": "5",
            "status": "completed",
        }))
        .unwrap();

        assert!(report.is_completed());
        assert_eq!(report.url, None);
    }

    #[test]
    fn test_type_list_deserializes_enumeration_envelope() {
        let list: TypeList = serde_json::from_value(json!({
            "count": 2,
            "results": [
                {"name": "fire", "url": "https://pokeapi.co/api/v2/type/10/"},
                {"name": "water", "url": "https://pokeapi.co/api/v2/type/11/"},
            ]
        }))
        .unwrap();

        assert_eq!(list.results.len(), 2);
        assert_eq!(list.results[0].name, "fire");
    }

    #[test]
    fn test_report_serialization_round_trip() {
        let report = report("7", Some("2024-05-01T10:00:00Z"));
        let json = serde_json::to_string(&report).unwrap();
        let parsed: Report = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, report);
    }
}
