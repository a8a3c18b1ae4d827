//! The object a call executes against.

use crate::intercept::error::ResolutionError;
use crate::intercept::method::{MethodHandle, MethodSignature};
use crate::intercept::Value;

/// A call target with a runtime type that can be searched for methods.
pub trait Receiver {
    /// Error raised by the receiver's methods.
    type Error;

    /// Name of the runtime type, used in resolution errors.
    fn type_name(&self) -> &str;

    /// Find the method that actually runs for `declared` on this runtime type.
    ///
    /// When the runtime type overrides the declared method, the override is
    /// returned along with its own metadata.
    fn find_method(&self, declared: &MethodSignature) -> Option<MethodHandle>;

    /// Execute `method` with `arguments`.
    fn call(&self, method: &MethodHandle, arguments: &[Value]) -> Result<Value, Self::Error>;
}

/// Resolve the concrete method for `declared` on `receiver`.
pub fn resolve_concrete<R>(
    receiver: &R,
    declared: &MethodSignature,
) -> Result<MethodHandle, ResolutionError>
where
    R: Receiver + ?Sized,
{
    receiver
        .find_method(declared)
        .ok_or_else(|| ResolutionError::NoSuchMethod {
            receiver: receiver.type_name().to_string(),
            method: declared.identity(),
        })
}
