//! Object mapper: schema interpretation against a source object
//!
//! Interprets a [`Schema`] against a source object, resolving each
//! destination attribute by filter chain, derivation, or recursion into a
//! nested schema, and assembles the destination object, omitting attributes
//! that resolve to absent.
//!
//! Copyright (c) 2026 Remap Team
//! Licensed under the Apache-2.0 license

use super::executor::{run_chain, run_chain_async};
use super::path::lookup;
use super::schema::{Schema, SchemaValue};
use crate::error::Result;
use futures::future::{join_all, BoxFuture, FutureExt};
use serde_json::{Map, Value};

/// Map a source object through a schema, blocking.
///
/// Returns `Ok(None)` (absent) when every destination attribute resolved to
/// absent — never an empty object — which recursively causes the same
/// omission one level up for nested schemas. An absent source is legal:
/// every path lookup resolves to absent rather than failing.
///
/// # Errors
///
/// Fails when any filter rejects a value (`Error::Validation`, annotated
/// with the source path where the failure occurred), when a suspending step
/// or derivation is reached (`Error::Configuration`), or with whatever a
/// custom filter or derivation raised, unmodified.
pub fn map(source: &Value, schema: &Schema) -> Result<Option<Value>> {
    let mut destination = Map::new();
    for (key, value) in schema.iter() {
        let resolved = resolve_field(source, key, value)?;
        if !resolved.is_null() {
            destination.insert(key.to_owned(), resolved);
        }
    }
    Ok(collapse(destination))
}

/// Map a source object through a schema, resolving every top-level
/// attribute as an independent concurrent task.
///
/// Same contract as [`map`], plus: suspending filters and derivations are
/// awaited in place, per-attribute resolutions run concurrently and are
/// joined before the destination is assembled, and a failed attribute does
/// not cancel in-flight siblings — it only preempts the reported result.
pub async fn map_async(source: &Value, schema: &Schema) -> Result<Option<Value>> {
    map_async_boxed(source, schema).await
}

/// Boxed recursion point shared by `map_async`, nested schemas, and the
/// suspending `object` filter.
pub(crate) fn map_async_boxed<'a>(
    source: &'a Value,
    schema: &'a Schema,
) -> BoxFuture<'a, Result<Option<Value>>> {
    async move {
        let tasks = schema.iter().map(|(key, value)| async move {
            (key, resolve_field_async(source, key, value).await)
        });
        let outcomes = join_all(tasks).await;

        let mut destination = Map::new();
        for (key, outcome) in outcomes {
            let resolved = outcome?;
            if !resolved.is_null() {
                destination.insert(key.to_owned(), resolved);
            }
        }
        Ok(collapse(destination))
    }
    .boxed()
}

fn collapse(destination: Map<String, Value>) -> Option<Value> {
    if destination.is_empty() {
        log::trace!("all destination attributes resolved to absent");
        None
    } else {
        Some(Value::Object(destination))
    }
}

fn resolve_field(source: &Value, key: &str, value: &SchemaValue) -> Result<Value> {
    match value {
        SchemaValue::Chain { path, steps } => {
            let source_path = path.as_deref().unwrap_or(key);
            run_chain(lookup(source, source_path), steps, source_path)
        }
        SchemaValue::Derive(derivation) => derivation.call_blocking(source),
        SchemaValue::Nested(nested) => Ok(map(source, nested)?.unwrap_or(Value::Null)),
    }
}

async fn resolve_field_async(source: &Value, key: &str, value: &SchemaValue) -> Result<Value> {
    match value {
        SchemaValue::Chain { path, steps } => {
            let source_path = path.as_deref().unwrap_or(key);
            run_chain_async(lookup(source, source_path), steps, source_path).await
        }
        SchemaValue::Derive(derivation) => derivation.call(source).await,
        SchemaValue::Nested(nested) => {
            Ok(map_async_boxed(source, nested).await?.unwrap_or(Value::Null))
        }
    }
}
