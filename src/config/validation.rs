//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that every method key is a well-formed identity
//! - Detect keys that name the same method twice
//! - Check the log filter directive
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AutoLogConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashMap;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::AutoLogConfig;
use crate::intercept::method::{MethodSignature, ParseSignatureError};

/// A single semantic problem in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(transparent)]
    InvalidIdentity(#[from] ParseSignatureError),

    #[error("method `{identity}` is configured more than once (`{first}`, `{second}`)")]
    DuplicateMethod {
        identity: String,
        first: String,
        second: String,
    },

    #[error("invalid log level `{0}`")]
    InvalidLogLevel(String),
}

/// Validate a parsed config.
pub fn validate_config(config: &AutoLogConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    let mut seen: HashMap<String, &str> = HashMap::new();
    for key in config.methods.keys() {
        match key.parse::<MethodSignature>() {
            Ok(signature) => {
                let identity = signature.identity();
                if let Some(first) = seen.get(&identity) {
                    errors.push(ValidationError::DuplicateMethod {
                        identity,
                        first: first.to_string(),
                        second: key.clone(),
                    });
                } else {
                    seen.insert(identity, key);
                }
            }
            Err(e) => errors.push(e.into()),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
