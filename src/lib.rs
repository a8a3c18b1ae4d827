//! Automatic call logging.
//!
//! Intercepts method calls and logs their parameters, results, elapsed time
//! and failures, per metadata declared on the method. Neither the caller nor
//! the called code knows it is being observed.
//!
//! # Architecture Overview
//!
//! ```text
//!     dispatch mechanism ──▶ LoggingInterceptor::invoke ──▶ handle.proceed() ──▶ real method
//!                                 │        ▲
//!                   CallContext ◀─┘        │ result / original error
//!                   (method, options,      │
//!                    receiver, args)       │
//!                                 │        │
//!                                 ▼        │
//!                              LogSink ────┘  (params, result, cost time, failure)
//!
//!     Cross-cutting: config (TOML + hot reload), observability (tracing, metrics),
//!                    middleware (tower Layer over async services)
//! ```

// Core
pub mod intercept;

// Adapters
pub mod middleware;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use config::schema::AutoLogConfig;
pub use intercept::{
    AutoLog, CallContext, InterceptError, Invocation, InvocationHandle, LogOptions,
    LoggingInterceptor, MethodHandle, MethodSignature, MethodTable, Receiver, ResolutionError,
    Value,
};
pub use middleware::AutoLogLayer;
pub use observability::{LogEvent, LogSink, TracingSink};
