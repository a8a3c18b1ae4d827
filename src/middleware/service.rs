//! `AutoLogLayer` and `AutoLogService`.

use std::error::Error;
use std::task::{Context, Poll};

use futures_util::future::BoxFuture;
use tower::{Layer, Service};

use crate::intercept::recorder::CallRecorder;
use crate::intercept::render::{render_args, render_value};
use crate::intercept::{LoggingInterceptor, MethodHandle, Value};

/// Request type: a call of an already resolved method.
#[derive(Debug, Clone)]
pub struct MethodCall {
    pub method: MethodHandle,
    pub arguments: Vec<Value>,
}

impl MethodCall {
    pub fn new(method: MethodHandle, arguments: Vec<Value>) -> Self {
        Self { method, arguments }
    }
}

/// Layer that observes every call passing through the wrapped service.
#[derive(Debug, Clone, Default)]
pub struct AutoLogLayer {
    interceptor: LoggingInterceptor,
}

impl AutoLogLayer {
    pub fn new(interceptor: LoggingInterceptor) -> Self {
        Self { interceptor }
    }
}

impl<S> Layer<S> for AutoLogLayer {
    type Service = AutoLogService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AutoLogService {
            inner,
            interceptor: self.interceptor.clone(),
        }
    }
}

/// Service produced by [`AutoLogLayer`].
#[derive(Debug, Clone)]
pub struct AutoLogService<S> {
    inner: S,
    interceptor: LoggingInterceptor,
}

impl<S> Service<MethodCall> for AutoLogService<S>
where
    S: Service<MethodCall, Response = Value>,
    S::Future: Send + 'static,
    S::Error: Error + Send + 'static,
{
    type Response = Value;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Value, S::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, call: MethodCall) -> Self::Future {
        let method = self.interceptor.apply_overrides(call.method.clone());
        let Some(options) = method.options() else {
            return Box::pin(self.inner.call(call));
        };

        let recorder = CallRecorder::start(
            self.interceptor.sink().clone(),
            method.identity(),
            options,
            || render_args(&call.arguments),
        );
        let future = self.inner.call(call);

        Box::pin(async move {
            match future.await {
                Ok(value) => {
                    recorder.succeeded(|| render_value(&value));
                    Ok(value)
                }
                Err(e) => {
                    recorder.failed(&e);
                    Err(e)
                }
            }
        })
    }
}
