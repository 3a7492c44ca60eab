use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use domain::{validate_job_payload, Job, JobId};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::AppState;
use crate::ApiError;

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    #[serde(rename = "jobId")]
    pub job_id: JobId,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Interpret `_limit` the lenient way: use the leading integer, if any.
///
/// Missing, non-numeric, zero and negative values all mean "no limit" (0).
/// Values beyond `u64` saturate.
pub fn parse_limit(raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        return 0;
    };
    let raw = raw.trim_start();
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return 0;
    }
    digits[..end].parse().unwrap_or(u64::MAX)
}

/// First `_limit` value in the query string. Repeats are ignored.
fn limit_param(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(key, _)| key == "_limit")
        .map(|(_, value)| value.as_str())
}

pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Job>>, ApiError> {
    let pairs = query.map(|Query(pairs)| pairs).unwrap_or_else(|rejection| {
        warn!("ignoring unreadable query string: {}", rejection.body_text());
        Vec::new()
    });
    let limit = parse_limit(limit_param(&pairs));
    let jobs = state
        .jobs
        .list(limit)
        .await
        .map_err(ApiError::datastore("Failed to fetch jobs"))?;
    Ok(Json(jobs))
}

#[instrument(skip_all, fields(id = %id))]
pub async fn get(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Job>, ApiError> {
    let id: JobId = id.parse()?;
    let job = state
        .jobs
        .get(id)
        .await
        .map_err(ApiError::datastore("Failed to fetch job"))?;
    Ok(Json(job))
}

#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(payload) = payload?;
    let details = validate_job_payload(&payload)?;

    let job_id = state
        .jobs
        .insert(&details)
        .await
        .map_err(ApiError::datastore("Failed to add job"))?;
    info!(%job_id, "job created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "✅ Job added successfully",
            job_id,
        }),
    ))
}

#[instrument(skip_all, fields(id = %id))]
pub async fn update(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id: JobId = id.parse()?;
    let Json(payload) = payload?;
    let details = validate_job_payload(&payload)?;

    state
        .jobs
        .replace(id, &details)
        .await
        .map_err(ApiError::datastore("Failed to update job"))?;
    info!("job updated");

    Ok(Json(MessageResponse {
        message: "✅ Job updated successfully",
    }))
}

#[instrument(skip_all, fields(id = %id))]
pub async fn delete(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id: JobId = id.parse()?;
    state
        .jobs
        .delete(id)
        .await
        .map_err(ApiError::datastore("Failed to delete job"))?;
    info!("job deleted");

    Ok(Json(MessageResponse {
        message: "✅ Job deleted successfully",
    }))
}

#[cfg(test)]
mod tests {
    use super::{limit_param, parse_limit};

    #[test]
    fn limit_uses_leading_integer() {
        assert_eq!(parse_limit(Some("2")), 2);
        assert_eq!(parse_limit(Some("3abc")), 3);
        assert_eq!(parse_limit(Some(" 7")), 7);
        assert_eq!(parse_limit(Some("+4")), 4);
    }

    #[test]
    fn limit_defaults_to_unlimited() {
        assert_eq!(parse_limit(None), 0);
        assert_eq!(parse_limit(Some("")), 0);
        assert_eq!(parse_limit(Some("abc")), 0);
        assert_eq!(parse_limit(Some("0")), 0);
        assert_eq!(parse_limit(Some("-5")), 0);
    }

    #[test]
    fn first_repeated_limit_wins() {
        let pairs = vec![
            ("_limit".to_string(), "1".to_string()),
            ("_limit".to_string(), "2".to_string()),
        ];
        assert_eq!(limit_param(&pairs), Some("1"));
        assert_eq!(limit_param(&[("q".to_string(), "rust".to_string())]), None);
    }

    #[test]
    fn huge_limit_saturates() {
        assert_eq!(parse_limit(Some("99999999999999999999999")), u64::MAX);
    }
}
