//! Log sinks for interception records.
//!
//! # Records
//! | Event    | Level | Message                              |
//! |----------|-------|--------------------------------------|
//! | Params   | INFO  | `<method> param is <args>`           |
//! | Result   | INFO  | `<method> result is <result>`        |
//! | CostTime | INFO  | `<method> cost time is <N>ms`        |
//! | Failure  | ERROR | `<method> meet ex` + `error`, `causes` |
//!
//! # Design Decisions
//! - Sinks are injected, `TracingSink` is the default
//! - A panicking sink loses its record, never the call's outcome

use std::error::Error;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use tracing::Level;

/// Tracing target for interception records.
pub const TARGET: &str = "auto_log::interceptor";

/// One interception record.
#[derive(Debug, Clone, Copy)]
pub enum LogEvent<'a> {
    Params {
        method: &'a str,
        arguments: &'a str,
    },
    Result {
        method: &'a str,
        result: &'a str,
    },
    CostTime {
        method: &'a str,
        millis: u64,
    },
    Failure {
        method: &'a str,
        error: &'a (dyn Error + 'static),
    },
}

impl LogEvent<'_> {
    pub fn level(&self) -> Level {
        match self {
            LogEvent::Failure { .. } => Level::ERROR,
            _ => Level::INFO,
        }
    }

    pub fn method(&self) -> &str {
        match self {
            LogEvent::Params { method, .. }
            | LogEvent::Result { method, .. }
            | LogEvent::CostTime { method, .. }
            | LogEvent::Failure { method, .. } => method,
        }
    }
}

impl fmt::Display for LogEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogEvent::Params { method, arguments } => write!(f, "{method} param is {arguments}"),
            LogEvent::Result { method, result } => write!(f, "{method} result is {result}"),
            LogEvent::CostTime { method, millis } => write!(f, "{method} cost time is {millis}ms"),
            LogEvent::Failure { method, .. } => write!(f, "{method} meet ex"),
        }
    }
}

/// Destination for interception records.
pub trait LogSink: Send + Sync {
    fn emit(&self, event: &LogEvent<'_>);
}

/// Emits records as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, event: &LogEvent<'_>) {
        match *event {
            LogEvent::Params { method, arguments } => {
                tracing::info!(target: TARGET, method, params = arguments, "{}", event);
            }
            LogEvent::Result { method, result } => {
                tracing::info!(target: TARGET, method, result, "{}", event);
            }
            LogEvent::CostTime { method, millis } => {
                tracing::info!(target: TARGET, method, cost_ms = millis, "{}", event);
            }
            LogEvent::Failure { method, error } => {
                let causes = cause_chain(error);
                tracing::error!(
                    target: TARGET,
                    method,
                    error = %error,
                    detail = ?error,
                    causes = ?causes,
                    "{}",
                    event
                );
            }
        }
    }
}

/// Messages of `error`'s sources, outermost first, excluding `error` itself.
pub fn cause_chain(error: &(dyn Error + 'static)) -> Vec<String> {
    let mut causes = Vec::new();
    let mut source = error.source();
    while let Some(cause) = source {
        causes.push(cause.to_string());
        source = cause.source();
    }
    causes
}

/// Emit through `sink`, containing any panic it raises.
pub(crate) fn emit_isolated(sink: &dyn LogSink, event: &LogEvent<'_>) {
    if panic::catch_unwind(AssertUnwindSafe(|| sink.emit(event))).is_err() {
        tracing::warn!(target: TARGET, method = event.method(), "Log sink panicked, record dropped");
    }
}
