//! Pre- and post-call logging for one observed call.

use std::error::Error;
use std::sync::Arc;
use std::time::Instant;

use crate::intercept::options::LogOptions;
use crate::observability::metrics::{self, Outcome};
use crate::observability::sink::{emit_isolated, LogEvent, LogSink};

/// Drives the records of one call: params and clock on start, then either
/// result and cost time, or the failure.
///
/// Owns its data so it can travel into a future.
pub(crate) struct CallRecorder {
    sink: Arc<dyn LogSink>,
    method: String,
    options: LogOptions,
    started: Instant,
}

impl CallRecorder {
    /// Log the arguments if enabled, then start the clock.
    ///
    /// `arguments` is only rendered when param logging is on.
    pub(crate) fn start(
        sink: Arc<dyn LogSink>,
        method: String,
        options: LogOptions,
        arguments: impl FnOnce() -> String,
    ) -> Self {
        if options.param {
            let arguments = arguments();
            emit_isolated(
                sink.as_ref(),
                &LogEvent::Params {
                    method: &method,
                    arguments: &arguments,
                },
            );
        }

        Self {
            sink,
            method,
            options,
            started: Instant::now(),
        }
    }

    pub(crate) fn succeeded(self, result: impl FnOnce() -> String) {
        let elapsed = self.started.elapsed();

        if self.options.result {
            let result = result();
            emit_isolated(
                self.sink.as_ref(),
                &LogEvent::Result {
                    method: &self.method,
                    result: &result,
                },
            );
        }
        if self.options.cost_time {
            emit_isolated(
                self.sink.as_ref(),
                &LogEvent::CostTime {
                    method: &self.method,
                    millis: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
                },
            );
        }

        metrics::record_call(&self.method, Outcome::Ok, elapsed);
    }

    pub(crate) fn failed(self, error: &(dyn Error + 'static)) {
        let elapsed = self.started.elapsed();

        emit_isolated(
            self.sink.as_ref(),
            &LogEvent::Failure {
                method: &self.method,
                error,
            },
        );

        metrics::record_call(&self.method, Outcome::Failed, elapsed);
    }
}
