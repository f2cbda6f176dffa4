//! Schema declaration types and chain-builder helpers
//!
//! A [`Schema`] maps destination-attribute names to [`SchemaValue`]s. Each
//! value is a tagged variant built explicitly by the helpers in this module
//! — [`same`], [`from`], [`copy`], [`derive`], [`derive_async`] — rather
//! than inferred structurally at mapping time, so illegal schema shapes
//! (the classic bare-string-instead-of-chain mistake) cannot be expressed
//! at all.
//!
//! Copyright (c) 2026 Remap Team
//! Licensed under the Apache-2.0 license

use super::filter::{flatten, Filter, FilterSpec};
use crate::error::Result;
use futures::future::BoxFuture;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

type ImmediateDeriveFn = dyn Fn(&Value) -> Result<Value> + Send + Sync;
type SuspendingDeriveFn = dyn Fn(Value) -> BoxFuture<'static, Result<Value>> + Send + Sync;

#[derive(Clone)]
enum DerivationKind {
    Immediate(Arc<ImmediateDeriveFn>),
    Suspending(Arc<SuspendingDeriveFn>),
}

/// A destination attribute computed from the whole source object,
/// bypassing path resolution. Its errors are never path-decorated.
#[derive(Clone)]
pub struct Derivation {
    kind: DerivationKind,
}

impl Derivation {
    pub(crate) fn is_suspending(&self) -> bool {
        matches!(self.kind, DerivationKind::Suspending(_))
    }

    pub(crate) fn call_blocking(&self, source: &Value) -> Result<Value> {
        match &self.kind {
            DerivationKind::Immediate(f) => f(source),
            DerivationKind::Suspending(_) => Err(crate::Error::configuration(
                "suspending derivation reached through the blocking API; use map_async",
            )),
        }
    }

    pub(crate) async fn call(&self, source: &Value) -> Result<Value> {
        match &self.kind {
            DerivationKind::Immediate(f) => f(source),
            DerivationKind::Suspending(f) => f(source.clone()).await,
        }
    }
}

impl fmt::Debug for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DerivationKind::Immediate(_) => f.write_str("Derivation(immediate)"),
            DerivationKind::Suspending(_) => f.write_str("Derivation(suspending)"),
        }
    }
}

/// How one destination attribute is resolved
#[derive(Debug, Clone)]
pub enum SchemaValue {
    /// Resolve a source value and run it through a filter chain.
    ///
    /// `path` is the dotted source path; `None` means "the destination
    /// attribute name" (the [`same`] builder). The error-path decorator
    /// uses this path, never the destination key of an explicit [`from`].
    Chain {
        path: Option<String>,
        steps: Vec<Filter>,
    },
    /// Compute the value from the whole source object
    Derive(Derivation),
    /// Recurse with the same source object against a nested schema
    Nested(Schema),
}

impl SchemaValue {
    pub(crate) fn has_suspending(&self) -> bool {
        match self {
            SchemaValue::Chain { steps, .. } => steps.iter().any(Filter::is_suspending),
            SchemaValue::Derive(derivation) => derivation.is_suspending(),
            SchemaValue::Nested(schema) => schema.has_suspending(),
        }
    }
}

impl From<Schema> for SchemaValue {
    fn from(schema: Schema) -> Self {
        SchemaValue::Nested(schema)
    }
}

/// Declarative mapping from destination-attribute names to resolutions.
///
/// Fields are interpreted in insertion order; re-declaring a name replaces
/// the earlier entry.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(String, SchemaValue)>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Schema { fields: Vec::new() }
    }

    /// Declare (or replace) a destination attribute
    pub fn field(mut self, name: impl Into<String>, value: impl Into<SchemaValue>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((name, value)),
        }
        self
    }

    /// Number of declared destination attributes
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no attributes are declared
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &SchemaValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Whether any resolution anywhere in this schema must suspend
    pub(crate) fn has_suspending(&self) -> bool {
        self.fields.iter().any(|(_, value)| value.has_suspending())
    }
}

/// Build a filter chain over the implicit source attribute: the value is
/// read from the source object under the destination attribute's own name.
pub fn same<I>(filters: I) -> SchemaValue
where
    I: IntoIterator,
    I::Item: Into<FilterSpec>,
{
    SchemaValue::Chain {
        path: None,
        steps: flatten(filters),
    }
}

/// Build a filter chain over an explicit dotted source path.
pub fn from<I>(path: impl Into<String>, filters: I) -> SchemaValue
where
    I: IntoIterator,
    I::Item: Into<FilterSpec>,
{
    SchemaValue::Chain {
        path: Some(path.into()),
        steps: flatten(filters),
    }
}

/// Copy the same-named source attribute unchanged (an empty chain).
pub fn copy() -> SchemaValue {
    SchemaValue::Chain {
        path: None,
        steps: Vec::new(),
    }
}

/// Copy the value at an explicit dotted source path unchanged.
pub fn copy_from(path: impl Into<String>) -> SchemaValue {
    SchemaValue::Chain {
        path: Some(path.into()),
        steps: Vec::new(),
    }
}

/// Derive the destination attribute from the whole source object.
pub fn derive<F>(f: F) -> SchemaValue
where
    F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
{
    SchemaValue::Derive(Derivation {
        kind: DerivationKind::Immediate(Arc::new(f)),
    })
}

/// Derive the destination attribute asynchronously from the whole source
/// object. Usable only through the concurrent mapping API.
pub fn derive_async<F, Fut>(f: F) -> SchemaValue
where
    F: Fn(Value) -> Fut + Send + Sync + 'static,
    Fut: std::future::Future<Output = Result<Value>> + Send + 'static,
{
    SchemaValue::Derive(Derivation {
        kind: DerivationKind::Suspending(Arc::new(move |source| Box::pin(f(source)))),
    })
}
