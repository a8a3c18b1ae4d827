//! Per-call context.

use crate::intercept::method::MethodHandle;
use crate::intercept::options::LogOptions;
use crate::intercept::receiver::Receiver;
use crate::intercept::Value;

/// Everything known about one intercepted call.
///
/// `options` is always derived from `method`'s metadata.
pub struct CallContext<'a, R: ?Sized> {
    method: MethodHandle,
    options: Option<LogOptions>,
    receiver: &'a R,
    arguments: &'a [Value],
}

impl<'a, R> CallContext<'a, R>
where
    R: Receiver + ?Sized,
{
    /// Bind a concrete method to its receiver and arguments.
    pub fn bind(method: MethodHandle, receiver: &'a R, arguments: &'a [Value]) -> Self {
        let options = method.options();
        Self {
            method,
            options,
            receiver,
            arguments,
        }
    }

    /// Replace the bound method, and with it the options.
    pub fn rebind(&mut self, method: MethodHandle) {
        self.options = method.options();
        self.method = method;
    }

    pub fn method(&self) -> &MethodHandle {
        &self.method
    }

    /// `None` when the method carries no metadata.
    pub fn options(&self) -> Option<LogOptions> {
        self.options
    }

    pub fn receiver(&self) -> &'a R {
        self.receiver
    }

    pub fn arguments(&self) -> &'a [Value] {
        self.arguments
    }

    /// Run the bound method. The result and any error pass through unchanged.
    pub fn execute(&self) -> Result<Value, R::Error> {
        self.receiver.call(&self.method, self.arguments)
    }
}
