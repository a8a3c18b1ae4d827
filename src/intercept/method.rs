//! Method identity.
//!
//! # Responsibilities
//! - Describe a declared method (owner type, name, parameter types)
//! - Describe a concrete method found on a runtime type, with its metadata
//! - Render and parse the stable identity string `owner::name(T1, T2)`
//!
//! # Design Decisions
//! - Overrides match on name + parameter types, owner is ignored
//! - Parameter lists are split at top level only, so `HashMap<K, V>` stays whole

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::intercept::options::{AutoLog, LogOptions};

/// A declared method: what the caller invoked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodSignature {
    owner: String,
    name: String,
    params: Vec<String>,
}

impl MethodSignature {
    pub fn new<I, P>(owner: impl Into<String>, name: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            owner: owner.into(),
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Whether `other` has the same name and parameter types.
    pub fn overridden_by(&self, other: &MethodSignature) -> bool {
        self.name == other.name && self.params == other.params
    }

    /// The same method declared on another type.
    pub fn with_owner(&self, owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: self.name.clone(),
            params: self.params.clone(),
        }
    }

    /// Stable identity string, e.g. `shop::Cart::add(u32, String)`.
    pub fn identity(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}({})", self.owner, self.name, self.params.join(", "))
    }
}

/// Error parsing a method identity string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid method identity `{input}`: {reason}")]
pub struct ParseSignatureError {
    pub input: String,
    pub reason: &'static str,
}

impl FromStr for MethodSignature {
    type Err = ParseSignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = |reason| ParseSignatureError {
            input: s.to_string(),
            reason,
        };

        let s_trim = s.trim();
        let open = s_trim.find('(').ok_or_else(|| fail("missing `(`"))?;
        let inner = s_trim[open + 1..]
            .strip_suffix(')')
            .ok_or_else(|| fail("missing trailing `)`"))?;
        let (owner, name) = s_trim[..open]
            .rsplit_once("::")
            .ok_or_else(|| fail("expected `owner::name`"))?;

        let (owner, name) = (owner.trim(), name.trim());
        if owner.is_empty() {
            return Err(fail("empty owner"));
        }
        if name.is_empty() {
            return Err(fail("empty method name"));
        }

        let params = split_params(inner).ok_or_else(|| fail("unbalanced brackets"))?;
        Ok(Self::new(owner, name, params))
    }
}

/// Split a parameter list on top-level commas.
fn split_params(inner: &str) -> Option<Vec<String>> {
    let mut params = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in inner.char_indices() {
        match c {
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                params.push(inner[start..i].trim().to_string());
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return None;
    }

    let last = inner[start..].trim();
    if !last.is_empty() || !params.is_empty() {
        params.push(last.to_string());
    }
    Some(params)
}

/// A concrete method resolved on a receiver's runtime type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodHandle {
    signature: MethodSignature,
    auto_log: Option<AutoLog>,
}

impl MethodHandle {
    pub fn new(signature: MethodSignature, auto_log: Option<AutoLog>) -> Self {
        Self {
            signature,
            auto_log,
        }
    }

    pub fn signature(&self) -> &MethodSignature {
        &self.signature
    }

    /// Metadata declared on this method, if any.
    pub fn auto_log(&self) -> Option<AutoLog> {
        self.auto_log
    }

    /// Options derived from the declared metadata.
    pub fn options(&self) -> Option<LogOptions> {
        self.auto_log.as_ref().map(AutoLog::options)
    }

    /// Replace the declared metadata.
    pub fn with_auto_log(self, auto_log: Option<AutoLog>) -> Self {
        Self { auto_log, ..self }
    }

    pub fn identity(&self) -> String {
        self.signature.identity()
    }
}

impl fmt::Display for MethodHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.signature.fmt(f)
    }
}
