//! Interception error types.

use thiserror::Error;

/// The concrete method could not be located on the receiver's runtime type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("no concrete method `{method}` on `{receiver}`")]
    NoSuchMethod { receiver: String, method: String },
}

/// Errors surfaced by [`LoggingInterceptor::invoke`].
///
/// [`LoggingInterceptor::invoke`]: crate::intercept::LoggingInterceptor::invoke
#[derive(Debug, Error)]
pub enum InterceptError<E> {
    /// Interception could not start. Nothing was logged or executed.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// The wrapped call failed. The payload is the original error, untouched.
    #[error(transparent)]
    Delegate(E),
}

impl<E> InterceptError<E> {
    pub fn is_resolution(&self) -> bool {
        matches!(self, InterceptError::Resolution(_))
    }

    pub fn delegate(&self) -> Option<&E> {
        match self {
            InterceptError::Delegate(e) => Some(e),
            InterceptError::Resolution(_) => None,
        }
    }

    /// Take back the wrapped call's own error.
    pub fn into_delegate(self) -> Option<E> {
        match self {
            InterceptError::Delegate(e) => Some(e),
            InterceptError::Resolution(_) => None,
        }
    }
}
