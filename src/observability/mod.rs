//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Interceptor, wrapped functions, tower service produce:
//!     → sink.rs (interception records through an injected LogSink)
//!     → metrics.rs (call counters and latency histograms)
//!
//! Consumers:
//!     → logging.rs (tracing-subscriber: stdout, pretty or JSON)
//!     → whatever metrics recorder the host installed
//! ```
//!
//! # Design Decisions
//! - The sink is a capability passed to the interceptor, not a global
//! - `TracingSink` bridges records into `tracing` with structured fields

pub mod logging;
pub mod metrics;
pub mod sink;

pub use sink::{LogEvent, LogSink, TracingSink};
