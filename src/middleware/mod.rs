//! Tower middleware.
//!
//! # Data Flow
//! ```text
//! MethodCall (concrete method + arguments)
//!     → AutoLogService (params, clock)
//!     → inner service (the real implementation)
//!     → AutoLogService (result / cost time, or failure)
//!     → response or inner error, unchanged
//! ```
//!
//! # Design Decisions
//! - Same records and isolation rules as the synchronous interceptor
//! - Readiness is delegated to the inner service
//! - No spawning: the returned future just awaits the inner one

pub mod service;

pub use service::{AutoLogLayer, AutoLogService, MethodCall};
