//! HTTP client for the reports backend and the type enumeration service.
//!
//! Every operation propagates failures unchanged; the UI boundary that
//! invoked it owns the user-facing messaging. There are no retries and no
//! timeouts: a call waits until the transport resolves or fails.

use gloo_net::http::{Request, Response};
use report_types::{reports_from_value, CreateReportRequest, PokemonType, Report, TypeList};
use serde_json::Value;
use thiserror::Error;

use crate::settings;

/// Failures surfaced by the API client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response.
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },
    /// Transport-level failure before any response arrived.
    #[error("request failed: {0}")]
    Network(String),
    /// Response body that could not be parsed.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

fn check_status(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Http {
            status: response.status(),
            status_text: response.status_text(),
        })
    }
}

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn decode(err: gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

/// Fetch the full report list.
///
/// The backend answers with a bare array or an object wrapping it under
/// `results` or `data`; the body is normalized into a flat sequence either
/// way.
pub async fn list_reports() -> Result<Vec<Report>, ApiError> {
    let response = Request::get(&format!("{}/api/request", settings::reports_base()))
        .send()
        .await
        .map_err(network)?;
    check_status(&response)?;

    let body: Value = response.json().await.map_err(decode)?;
    Ok(reports_from_value(body))
}

/// Request generation of a new report for `pokemon_type`, optionally capped
/// at `sample_size` records. Returns the created record.
pub async fn create_report(
    pokemon_type: &str,
    sample_size: Option<u32>,
) -> Result<Report, ApiError> {
    let body = CreateReportRequest::new(pokemon_type, sample_size);
    let response = Request::post(&format!("{}/api/request", settings::reports_base()))
        .json(&body)
        .map_err(decode)?
        .send()
        .await
        .map_err(network)?;
    check_status(&response)?;

    response.json::<Report>().await.map_err(decode)
}

/// Delete the report with the given identifier. The response body is
/// ignored.
pub async fn delete_report(report_id: &str) -> Result<(), ApiError> {
    let response = Request::delete(&format!(
        "{}/api/report/{report_id}",
        settings::reports_base()
    ))
    .send()
    .await
    .map_err(network)?;
    check_status(&response)?;

    Ok(())
}

/// Fetch the enumeration of valid Pokémon types.
pub async fn fetch_pokemon_types() -> Result<Vec<PokemonType>, ApiError> {
    let response = Request::get(&format!("{}/type", settings::types_base()))
        .send()
        .await
        .map_err(network)?;
    check_status(&response)?;

    let list: TypeList = response.json().await.map_err(decode)?;
    Ok(list.results)
}
