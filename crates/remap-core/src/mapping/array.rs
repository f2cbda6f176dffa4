//! Array mapper: element-wise mapping of source sequences
//!
//! Applies an object schema or a raw filter chain to every element of a
//! source sequence, then post-processes the produced sequence with optional
//! whole-array filters. Delegates to the object mapper's single-key path so
//! that absent-collapse behavior is reused rather than reimplemented.
//!
//! Copyright (c) 2026 Remap Team
//! Licensed under the Apache-2.0 license

use super::filter::{flatten, Filter, FilterSpec};
use super::mapper::{map, map_async};
use super::schema::{same, Schema};
use crate::error::Result;
use crate::filters;
use serde_json::{json, Value};

/// The synthetic attribute the source sequence is wrapped under
const ARRAY_ATTRIBUTE: &str = "array";

/// Per-element treatment for [`map_array`]: a raw filter chain applied to
/// each element, or an object schema each element is mapped through.
#[derive(Debug, Clone)]
pub enum ElementSchema {
    /// Run each element through a filter chain
    Chain(Vec<Filter>),
    /// Map each element through an object schema
    Object(Schema),
}

impl From<Schema> for ElementSchema {
    fn from(schema: Schema) -> Self {
        ElementSchema::Object(schema)
    }
}

impl<S: Into<FilterSpec>> From<Vec<S>> for ElementSchema {
    fn from(chain: Vec<S>) -> Self {
        ElementSchema::Chain(flatten(chain))
    }
}

impl<S: Into<FilterSpec>, const N: usize> From<[S; N]> for ElementSchema {
    fn from(chain: [S; N]) -> Self {
        ElementSchema::Chain(flatten(chain))
    }
}

impl ElementSchema {
    /// The array-valued filter step enforcing this element treatment:
    /// rejects non-arrays, maps elements with `[index]` error decoration.
    fn into_filter(self) -> Filter {
        match self {
            ElementSchema::Chain(steps) => filters::array(steps),
            ElementSchema::Object(schema) => filters::array([filters::object(schema)]),
        }
    }
}

fn array_schema<I>(elements: ElementSchema, array_filters: I) -> Schema
where
    I: IntoIterator,
    I::Item: Into<FilterSpec>,
{
    let mut steps: Vec<FilterSpec> = vec![elements.into_filter().into()];
    steps.extend(array_filters.into_iter().map(Into::into));
    Schema::new().field(ARRAY_ATTRIBUTE, same(steps))
}

fn unwrap_array(result: Option<Value>) -> Option<Value> {
    result.and_then(|value| match value {
        Value::Object(mut object) => object.remove(ARRAY_ATTRIBUTE),
        _ => None,
    })
}

/// Map every element of a source sequence, blocking.
///
/// Non-sequence input fails validation with `must be an Array` regardless
/// of the element treatment. Element failures are annotated with the
/// element's bracketed index. `array_filters` run on the whole produced
/// sequence after element mapping; a chain that collapses to absent yields
/// `Ok(None)`.
pub fn map_array<E, I>(source: &Value, elements: E, array_filters: I) -> Result<Option<Value>>
where
    E: Into<ElementSchema>,
    I: IntoIterator,
    I::Item: Into<FilterSpec>,
{
    let schema = array_schema(elements.into(), array_filters);
    let wrapped = json!({ ARRAY_ATTRIBUTE: source });
    Ok(unwrap_array(map(&wrapped, &schema)?))
}

/// Concurrent variant of [`map_array`]: suspending element filters and
/// nested suspending schemas are awaited in place.
pub async fn map_array_async<E, I>(
    source: &Value,
    elements: E,
    array_filters: I,
) -> Result<Option<Value>>
where
    E: Into<ElementSchema>,
    I: IntoIterator,
    I::Item: Into<FilterSpec>,
{
    let schema = array_schema(elements.into(), array_filters);
    let wrapped = json!({ ARRAY_ATTRIBUTE: source });
    Ok(unwrap_array(map_async(&wrapped, &schema).await?))
}
