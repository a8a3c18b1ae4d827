//! Invocation handles supplied by the dispatch mechanism.

use crate::intercept::context::CallContext;
use crate::intercept::error::ResolutionError;
use crate::intercept::method::MethodSignature;
use crate::intercept::receiver::{resolve_concrete, Receiver};
use crate::intercept::Value;

/// One intercepted call, as handed over by whatever decided to intercept it.
///
/// `proceed` consumes the handle: a call executes at most once.
pub trait InvocationHandle {
    type Receiver: Receiver + ?Sized;

    /// The method as the caller declared it.
    fn declared_method(&self) -> &MethodSignature;

    fn receiver(&self) -> &Self::Receiver;

    fn arguments(&self) -> &[Value];

    /// Run the real call.
    fn proceed(self) -> Result<Value, <Self::Receiver as Receiver>::Error>;
}

/// A direct invocation of a declared method on a receiver.
///
/// `proceed` dispatches to the concrete method of the receiver's runtime type.
#[derive(Debug)]
pub struct Invocation<'a, R: ?Sized> {
    declared: MethodSignature,
    receiver: &'a R,
    arguments: Vec<Value>,
}

impl<'a, R: ?Sized> Invocation<'a, R> {
    pub fn new(declared: MethodSignature, receiver: &'a R, arguments: Vec<Value>) -> Self {
        Self {
            declared,
            receiver,
            arguments,
        }
    }
}

impl<'a, R> InvocationHandle for Invocation<'a, R>
where
    R: Receiver + ?Sized,
    R::Error: From<ResolutionError>,
{
    type Receiver = R;

    fn declared_method(&self) -> &MethodSignature {
        &self.declared
    }

    fn receiver(&self) -> &R {
        self.receiver
    }

    fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    fn proceed(self) -> Result<Value, R::Error> {
        let method = resolve_concrete(self.receiver, &self.declared)?;
        CallContext::bind(method, self.receiver, &self.arguments).execute()
    }
}
