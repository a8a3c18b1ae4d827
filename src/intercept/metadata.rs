//! Configured metadata overrides.
//!
//! # Responsibilities
//! - Map method identities to `AutoLog` metadata loaded from configuration
//! - Replace a resolved method's declared metadata with the configured one
//!
//! # Design Decisions
//! - Overrides act on the concrete method, after resolution
//! - Keys are normalized through `MethodSignature` so spacing does not matter
//! - Shared through `ArcSwap`: readers never block, reloads swap the whole map

use std::collections::HashMap;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::schema::AutoLogConfig;
use crate::intercept::method::{MethodHandle, MethodSignature};
use crate::intercept::options::AutoLog;

/// Overrides shared between the interceptor and the config reloader.
pub type SharedOverrides = Arc<ArcSwap<MethodOverrides>>;

/// Metadata for methods, keyed by normalized identity.
#[derive(Debug, Clone, Default)]
pub struct MethodOverrides {
    by_identity: HashMap<String, AutoLog>,
}

impl MethodOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build overrides from the `methods` table of a config.
    ///
    /// Identities that do not parse are skipped; `validate_config` reports them.
    pub fn from_config(config: &AutoLogConfig) -> Self {
        let mut overrides = Self::new();
        for (identity, auto_log) in &config.methods {
            match identity.parse::<MethodSignature>() {
                Ok(signature) => overrides.insert(&signature, *auto_log),
                Err(e) => tracing::warn!(error = %e, "Skipping method override"),
            }
        }
        overrides
    }

    pub fn insert(&mut self, signature: &MethodSignature, auto_log: AutoLog) {
        self.by_identity.insert(signature.identity(), auto_log);
    }

    pub fn get(&self, signature: &MethodSignature) -> Option<&AutoLog> {
        self.by_identity.get(&signature.identity())
    }

    /// Apply the configured metadata, if any, to a resolved method.
    pub fn apply(&self, method: MethodHandle) -> MethodHandle {
        match self.get(method.signature()) {
            Some(auto_log) => method.with_auto_log(Some(*auto_log)),
            None => method,
        }
    }

    /// Sorted `(identity, metadata)` pairs.
    pub fn entries(&self) -> Vec<(&str, &AutoLog)> {
        let mut entries: Vec<_> = self
            .by_identity
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn len(&self) -> usize {
        self.by_identity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_identity.is_empty()
    }

    /// Wrap for sharing with a reloader.
    pub fn into_shared(self) -> SharedOverrides {
        Arc::new(ArcSwap::from_pointee(self))
    }
}
