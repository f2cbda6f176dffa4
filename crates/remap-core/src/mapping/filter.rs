//! Filter steps and filter-specification flattening
//!
//! A [`Filter`] is one unary step in a chain: it receives the current value
//! and either passes a value on, stops the chain early, or fails. Steps come
//! in two kinds: immediate (return synchronously) and suspending (return a
//! future; only runnable through the concurrent mapping API).
//!
//! [`FilterSpec`] is the argument shape accepted by the chain builders:
//! callers may pass filters individually or pre-grouped, and [`flatten`]
//! normalizes any nesting into one ordered sequence.
//!
//! Copyright (c) 2026 Remap Team
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use futures::future::BoxFuture;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Outcome of a single filter step.
///
/// Short-circuiting is an ordinary return value, not an error: a step that
/// returns [`Flow::Break`] aborts the remaining steps of its chain and the
/// carried value (with `Value::Null` meaning absent) becomes the chain's
/// result. A break can never be observed outside the chain that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Pass the value to the next step in the chain
    Continue(Value),
    /// Stop the chain; the carried value is the chain result
    Break(Value),
}

/// Result type returned by every filter step
pub type FilterResult = Result<Flow>;

type ImmediateFn = dyn Fn(Value) -> FilterResult + Send + Sync;
type SuspendingFn = dyn Fn(Value) -> BoxFuture<'static, FilterResult> + Send + Sync;

#[derive(Clone)]
enum FilterKind {
    Immediate(Arc<ImmediateFn>),
    Suspending(Arc<SuspendingFn>),
}

/// A single transformation or validation step in a filter chain
#[derive(Clone)]
pub struct Filter {
    kind: FilterKind,
}

impl Filter {
    /// Create an immediate filter step from a closure honoring the full
    /// step contract: continue, break, or fail.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Value) -> FilterResult + Send + Sync + 'static,
    {
        Filter {
            kind: FilterKind::Immediate(Arc::new(f)),
        }
    }

    /// Create an immediate step from an infallible transformation.
    pub fn map<F>(f: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Filter::new(move |value| Ok(Flow::Continue(f(value))))
    }

    /// Create a suspending filter step.
    ///
    /// Suspending steps participate only in the concurrent mapping API;
    /// reaching one through the blocking API is a configuration error.
    pub fn suspending<F, Fut>(f: F) -> Self
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = FilterResult> + Send + 'static,
    {
        Filter {
            kind: FilterKind::Suspending(Arc::new(move |value| Box::pin(f(value)))),
        }
    }

    /// Whether this step must suspend to produce its result
    pub fn is_suspending(&self) -> bool {
        matches!(self.kind, FilterKind::Suspending(_))
    }

    pub(crate) fn apply_blocking(&self, value: Value) -> FilterResult {
        match &self.kind {
            FilterKind::Immediate(f) => f(value),
            FilterKind::Suspending(_) => Err(crate::Error::configuration(
                "suspending filter reached through the blocking API; use map_async",
            )),
        }
    }

    pub(crate) async fn apply(&self, value: Value) -> FilterResult {
        match &self.kind {
            FilterKind::Immediate(f) => f(value),
            FilterKind::Suspending(f) => f(value).await,
        }
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FilterKind::Immediate(_) => f.write_str("Filter(immediate)"),
            FilterKind::Suspending(_) => f.write_str("Filter(suspending)"),
        }
    }
}

/// A filter-chain specification leaf or grouping.
///
/// Chain builders accept any nesting of groups; [`flatten`] reduces the
/// nest to a flat ordered sequence, depth-first, left-to-right. There is no
/// malformed-leaf case: a `FilterSpec` is a step or a group by construction.
#[derive(Debug, Clone)]
pub enum FilterSpec {
    /// A single filter step
    Step(Filter),
    /// An ordered group of further specifications
    Group(Vec<FilterSpec>),
}

impl From<Filter> for FilterSpec {
    fn from(filter: Filter) -> Self {
        FilterSpec::Step(filter)
    }
}

impl<S: Into<FilterSpec>> From<Vec<S>> for FilterSpec {
    fn from(group: Vec<S>) -> Self {
        FilterSpec::Group(group.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<FilterSpec>, const N: usize> From<[S; N]> for FilterSpec {
    fn from(group: [S; N]) -> Self {
        FilterSpec::Group(group.into_iter().map(Into::into).collect())
    }
}

/// Flatten an arbitrary nest of filter specifications into one ordered
/// sequence of steps, depth-first, left-to-right.
pub fn flatten<I>(specs: I) -> Vec<Filter>
where
    I: IntoIterator,
    I::Item: Into<FilterSpec>,
{
    fn push(spec: FilterSpec, out: &mut Vec<Filter>) {
        match spec {
            FilterSpec::Step(filter) => out.push(filter),
            FilterSpec::Group(group) => {
                for inner in group {
                    push(inner, out);
                }
            }
        }
    }

    let mut out = Vec::new();
    for spec in specs {
        push(spec.into(), &mut out);
    }
    out
}
