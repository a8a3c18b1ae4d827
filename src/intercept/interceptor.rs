//! The logging interceptor.
//!
//! # Responsibilities
//! - Resolve the concrete method behind an intercepted call
//! - Log arguments before, and result / cost time after, per the method's options
//! - Log failures and hand them back untouched
//! - Offer the same contract as a function wrapper, with no resolution step
//!
//! # Call State Machine
//! ```text
//! START → (LOG_PARAMS) → EXECUTING
//!     → SUCCESS → (LOG_RESULT) → (LOG_COST) → RETURN
//!     → FAILURE → (LOG_ERROR) → RERAISE
//! ```
//!
//! # Design Decisions
//! - No per-call state on the interceptor; clones share only the sink and overrides
//! - Runs on the caller's thread, adds no concurrency of its own
//! - Timing is observational only: slow calls are never aborted

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::intercept::context::CallContext;
use crate::intercept::error::InterceptError;
use crate::intercept::invocation::InvocationHandle;
use crate::intercept::metadata::SharedOverrides;
use crate::intercept::method::MethodHandle;
use crate::intercept::receiver::{resolve_concrete, Receiver};
use crate::intercept::recorder::CallRecorder;
use crate::intercept::render::{render_args, render_params, render_serialized, render_value};
use crate::intercept::Value;
use crate::observability::sink::{LogSink, TracingSink};

/// Wraps calls with parameter, result, timing and failure logging.
#[derive(Clone)]
pub struct LoggingInterceptor {
    sink: Arc<dyn LogSink>,
    overrides: Option<SharedOverrides>,
}

impl LoggingInterceptor {
    /// An interceptor logging through `tracing`.
    pub fn new() -> Self {
        Self::with_sink(Arc::new(TracingSink))
    }

    pub fn with_sink(sink: Arc<dyn LogSink>) -> Self {
        Self {
            sink,
            overrides: None,
        }
    }

    /// Consult configured metadata before the method's declared metadata.
    pub fn with_overrides(mut self, overrides: SharedOverrides) -> Self {
        self.overrides = Some(overrides);
        self
    }

    pub fn sink(&self) -> &Arc<dyn LogSink> {
        &self.sink
    }

    pub(crate) fn apply_overrides(&self, method: MethodHandle) -> MethodHandle {
        match &self.overrides {
            Some(overrides) => overrides.load().apply(method),
            None => method,
        }
    }

    /// Intercept one call.
    ///
    /// Fails with [`InterceptError::Resolution`] before anything runs if the
    /// receiver has no concrete method for the declared one. Otherwise the
    /// wrapped call's result or error is returned as is.
    pub fn invoke<H>(
        &self,
        invocation: H,
    ) -> Result<Value, InterceptError<<H::Receiver as Receiver>::Error>>
    where
        H: InvocationHandle,
        <H::Receiver as Receiver>::Error: Error + 'static,
    {
        let method = resolve_concrete(invocation.receiver(), invocation.declared_method())?;
        let method = self.apply_overrides(method);

        let recorder = {
            let context = CallContext::bind(method, invocation.receiver(), invocation.arguments());
            context.options().map(|options| {
                CallRecorder::start(
                    self.sink.clone(),
                    context.method().identity(),
                    options,
                    || render_args(context.arguments()),
                )
            })
        };

        let outcome = invocation.proceed();
        let Some(recorder) = recorder else {
            return outcome.map_err(InterceptError::Delegate);
        };

        match outcome {
            Ok(value) => {
                recorder.succeeded(|| render_value(&value));
                Ok(value)
            }
            Err(e) => {
                recorder.failed(&e);
                Err(InterceptError::Delegate(e))
            }
        }
    }

    /// Run `f` as an observed call of `method`.
    ///
    /// `arguments` are logged as a sequence: a tuple for several, `()` for none.
    pub fn call<A, T, E, F>(&self, method: &MethodHandle, arguments: A, f: F) -> Result<T, E>
    where
        A: Serialize,
        T: Serialize,
        E: Error + 'static,
        F: FnOnce(A) -> Result<T, E>,
    {
        let method = self.apply_overrides(method.clone());
        let Some(options) = method.options() else {
            return f(arguments);
        };

        let recorder = CallRecorder::start(self.sink.clone(), method.identity(), options, || {
            render_params(&arguments)
        });

        match f(arguments) {
            Ok(value) => {
                recorder.succeeded(|| render_serialized(&value));
                Ok(value)
            }
            Err(e) => {
                recorder.failed(&e);
                Err(e)
            }
        }
    }

    /// Instrument `f` once; every call of the returned function is observed.
    pub fn wrap<A, T, E, F>(&self, method: MethodHandle, f: F) -> impl Fn(A) -> Result<T, E>
    where
        A: Serialize,
        T: Serialize,
        E: Error + 'static,
        F: Fn(A) -> Result<T, E>,
    {
        let interceptor = self.clone();
        move |arguments: A| interceptor.call(&method, arguments, &f)
    }
}

impl Default for LoggingInterceptor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggingInterceptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingInterceptor")
            .field(
                "overrides",
                &self.overrides.as_ref().map(|o| o.load().len()),
            )
            .finish_non_exhaustive()
    }
}
