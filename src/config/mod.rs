//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AutoLogConfig (validated, immutable)
//!     → MethodOverrides, shared via ArcSwap with the interceptor
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → apply_updates swaps in new MethodOverrides
//!     → next intercepted call sees the new metadata
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - An invalid reload is logged and the current overrides stay

pub mod loader;
pub mod report;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use report::{describe_entry, describe_overrides, describe_resolution};
pub use schema::{AutoLogConfig, LogFormat, ObservabilityConfig};
pub use validation::{validate_config, ValidationError};
pub use watcher::{apply_updates, ConfigWatcher};
