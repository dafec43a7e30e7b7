use crate::error::CheckError;
use crate::status::{Outcome, Status};
use log::debug;
use serde::Deserialize;
use serde_json::Value;

// Remote reset_time may lag our wall clock by at most this many seconds.
const MAX_CLOCK_SKEW_SECS: i64 = 5;
// face.com rate limits roll over hourly.
const WINDOW_SECS: i64 = 3600;

/// Validated usage snapshot from `account/limits.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageReport {
    pub used: i64,
    pub remaining: i64,
    pub limit: i64,
    pub reset_time: i64,
}

/// Loosely-typed top level of the limits response. A malformed or
/// non-object body deserializes to the empty envelope, which the
/// validator treats as "no usage present".
#[derive(Debug, Default, Deserialize)]
struct LimitsEnvelope {
    status: Option<String>,
    error_message: Option<String>,
    usage: Option<Value>,
}

/// Decode and validate the response body against the wall clock
/// captured at request time. Checks run in a fixed order and the
/// first failure wins.
pub fn validate_body(body: &str, now: i64) -> Result<UsageReport, CheckError> {
    let envelope: LimitsEnvelope = serde_json::from_str(body).unwrap_or_default();

    if envelope.status.as_deref() == Some("failure") || envelope.usage.is_none() {
        return Err(CheckError::Api {
            detail: envelope.error_message,
        });
    }
    let usage = envelope.usage.unwrap_or(Value::Null);

    let used = non_negative_int(&usage, "used")?;
    let remaining = non_negative_int(&usage, "remaining")?;
    let limit = non_negative_int(&usage, "limit")?;

    let reset_time = usage
        .get("reset_time")
        .and_then(Value::as_i64)
        .filter(|&t| t >= now - MAX_CLOCK_SKEW_SECS)
        .ok_or(CheckError::InvalidField("reset_time"))?;

    Ok(UsageReport {
        used,
        remaining,
        limit,
        reset_time,
    })
}

// Field must exist, be a JSON integer and be >= 0.
fn non_negative_int(usage: &Value, field: &'static str) -> Result<i64, CheckError> {
    usage
        .get(field)
        .and_then(Value::as_i64)
        .filter(|&v| v >= 0)
        .ok_or(CheckError::InvalidField(field))
}

/// Compare remaining quota against the critical threshold and derive
/// the average call rate over the elapsed part of the hourly window.
pub fn evaluate(report: &UsageReport, critical_percent: f64, now: i64) -> Outcome {
    let remaining_seconds = report.reset_time - now;
    let average_usage = if remaining_seconds >= WINDOW_SECS {
        0.0
    } else {
        round2(report.used as f64 / (WINDOW_SECS - remaining_seconds) as f64)
    };

    let threshold = (report.limit as f64 * critical_percent / 100.0) as i64;
    debug!(
        "remaining={} threshold={} average_usage={}",
        report.remaining, threshold, average_usage
    );

    let perf = vec![
        ("remaining", report.remaining.to_string()),
        ("usage", format!("{}", average_usage)),
    ];
    if report.remaining <= threshold {
        Outcome::new(
            Status::Critical,
            format!("critical limit reached, {} remaining", report.remaining),
        )
        .with_perf(perf)
    } else {
        Outcome::new(
            Status::Ok,
            format!("all fine, {} remaining", report.remaining),
        )
        .with_perf(perf)
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
