//! Per-method observability metadata and the options resolved from it.

use serde::{Deserialize, Serialize};

/// Observability metadata declared on a method.
///
/// Unset fields default to enabled. A method with no `AutoLog` at all is not
/// observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AutoLog {
    /// Log the call arguments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<bool>,

    /// Log the returned value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<bool>,

    /// Log the elapsed time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_time: Option<bool>,
}

impl AutoLog {
    /// Metadata with every field unset (everything enabled).
    pub const fn new() -> Self {
        Self {
            param: None,
            result: None,
            cost_time: None,
        }
    }

    pub fn param(mut self, enabled: bool) -> Self {
        self.param = Some(enabled);
        self
    }

    pub fn result(mut self, enabled: bool) -> Self {
        self.result = Some(enabled);
        self
    }

    pub fn cost_time(mut self, enabled: bool) -> Self {
        self.cost_time = Some(enabled);
        self
    }

    /// Resolve the effective toggles, defaulting unset fields to `true`.
    pub fn options(&self) -> LogOptions {
        LogOptions {
            param: self.param.unwrap_or(true),
            result: self.result.unwrap_or(true),
            cost_time: self.cost_time.unwrap_or(true),
        }
    }
}

/// Effective logging toggles for one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogOptions {
    pub param: bool,
    pub result: bool,
    pub cost_time: bool,
}

impl LogOptions {
    pub const ALL: LogOptions = LogOptions {
        param: true,
        result: true,
        cost_time: true,
    };

    /// True when no INFO record can be emitted. Failures are still logged.
    pub fn is_quiet(&self) -> bool {
        !(self.param || self.result || self.cost_time)
    }
}

impl std::fmt::Display for LogOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "param={} result={} cost_time={}",
            self.param, self.result, self.cost_time
        )
    }
}
