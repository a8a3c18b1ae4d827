//! Interception metrics.
//!
//! # Metrics
//! - `auto_log_calls_total` (counter): observed calls by method, outcome
//! - `auto_log_call_duration_seconds` (histogram): wall time of observed calls
//!
//! # Design Decisions
//! - Only calls with metadata are counted; pass-through calls cost nothing
//! - No exporter here: the host application installs its own recorder

use std::time::Duration;

/// How an observed call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    Failed,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Ok => "ok",
            Outcome::Failed => "failed",
        }
    }
}

/// Record one observed call.
pub fn record_call(method: &str, outcome: Outcome, elapsed: Duration) {
    metrics::counter!(
        "auto_log_calls_total",
        "method" => method.to_string(),
        "outcome" => outcome.as_str()
    )
    .increment(1);

    metrics::histogram!(
        "auto_log_call_duration_seconds",
        "method" => method.to_string()
    )
    .record(elapsed.as_secs_f64());
}
