//! Method registration tables.
//!
//! # Responsibilities
//! - Describe a runtime type: its name, methods, and optional parent type
//! - Attach `AutoLog` metadata to methods at registration time
//! - Resolve declared methods to the most derived implementation
//!
//! # Design Decisions
//! - Lookup walks the table first, then its parents
//! - Registering the same name + params twice replaces the earlier entry
//! - Tables are immutable once shared; build them up front with the builder methods

use std::fmt;
use std::sync::Arc;

use crate::intercept::error::ResolutionError;
use crate::intercept::method::{MethodHandle, MethodSignature};
use crate::intercept::options::AutoLog;
use crate::intercept::receiver::Receiver;
use crate::intercept::Value;

type MethodBody<E> = Arc<dyn Fn(&[Value]) -> Result<Value, E> + Send + Sync>;

struct Entry<E> {
    handle: MethodHandle,
    body: MethodBody<E>,
}

/// A runtime type backed by a table of callable methods.
pub struct MethodTable<E> {
    name: String,
    parent: Option<Arc<MethodTable<E>>>,
    entries: Vec<Entry<E>>,
}

impl<E> MethodTable<E> {
    /// Create an empty table for the type `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            entries: Vec::new(),
        }
    }

    /// Inherit every method of `parent` that this table does not override.
    pub fn extends(mut self, parent: Arc<MethodTable<E>>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Register a method on this type.
    pub fn method<F>(
        mut self,
        name: &str,
        params: &[&str],
        auto_log: Option<AutoLog>,
        body: F,
    ) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, E> + Send + Sync + 'static,
    {
        let signature = MethodSignature::new(self.name.clone(), name, params.iter().copied());
        let entry = Entry {
            handle: MethodHandle::new(signature, auto_log),
            body: Arc::new(body),
        };

        match self
            .entries
            .iter_mut()
            .find(|e| e.handle.signature().overridden_by(entry.handle.signature()))
        {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&Arc<MethodTable<E>>> {
        self.parent.as_ref()
    }

    fn lookup(&self, declared: &MethodSignature) -> Option<&Entry<E>> {
        self.entries
            .iter()
            .find(|e| declared.overridden_by(e.handle.signature()))
            .or_else(|| self.parent.as_deref().and_then(|p| p.lookup(declared)))
    }
}

impl<E> Receiver for MethodTable<E>
where
    E: From<ResolutionError>,
{
    type Error = E;

    fn type_name(&self) -> &str {
        &self.name
    }

    fn find_method(&self, declared: &MethodSignature) -> Option<MethodHandle> {
        self.lookup(declared).map(|e| e.handle.clone())
    }

    fn call(&self, method: &MethodHandle, arguments: &[Value]) -> Result<Value, E> {
        let entry = self.lookup(method.signature()).ok_or_else(|| {
            E::from(ResolutionError::NoSuchMethod {
                receiver: self.name.clone(),
                method: method.identity(),
            })
        })?;
        (entry.body)(arguments)
    }
}

impl<E> fmt::Debug for MethodTable<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodTable")
            .field("name", &self.name)
            .field(
                "methods",
                &self
                    .entries
                    .iter()
                    .map(|e| e.handle.identity())
                    .collect::<Vec<_>>(),
            )
            .field("parent", &self.parent.as_ref().map(|p| p.name()))
            .finish()
    }
}
