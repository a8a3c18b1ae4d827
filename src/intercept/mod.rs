//! Call interception subsystem.
//!
//! # Data Flow
//! ```text
//! dispatch mechanism hands over an InvocationHandle
//!     → receiver.rs (resolve the concrete method on the runtime type)
//!     → metadata.rs (apply configured overrides to the method's metadata)
//!     → context.rs (bind method + options + receiver + arguments)
//!     → recorder.rs (log params, start the clock)
//!     → handle.proceed() (the real call)
//!     → recorder.rs (log result / cost time, or log the failure)
//!     → result or original failure back to the caller
//! ```
//!
//! # Design Decisions
//! - Options are derived from the method's own metadata, never set directly
//! - No metadata means pure pass-through: nothing is logged
//! - Failures from the wrapped call are returned by value, untouched
//! - Sink failures are isolated from the call path

pub mod context;
pub mod error;
pub mod interceptor;
pub mod invocation;
pub mod metadata;
pub mod method;
pub mod options;
pub mod receiver;
pub(crate) mod recorder;
pub mod render;
pub mod table;

pub use context::CallContext;
pub use error::{InterceptError, ResolutionError};
pub use interceptor::LoggingInterceptor;
pub use invocation::{Invocation, InvocationHandle};
pub use metadata::{MethodOverrides, SharedOverrides};
pub use method::{MethodHandle, MethodSignature, ParseSignatureError};
pub use options::{AutoLog, LogOptions};
pub use receiver::Receiver;
pub use table::MethodTable;

/// Dynamic argument and result values.
pub type Value = serde_json::Value;
