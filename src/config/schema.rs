//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML:
//!
//! ```toml
//! [observability]
//! log_level = "info"
//! format = "json"
//!
//! [methods."shop::Cart::add(u32, String)"]
//! param = true
//! cost_time = false
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::intercept::options::AutoLog;

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AutoLogConfig {
    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Per-method metadata keyed by method identity.
    pub methods: BTreeMap<String, AutoLog>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level or filter directive (trace, debug, info, warn, error).
    pub log_level: String,

    /// Output format.
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}
