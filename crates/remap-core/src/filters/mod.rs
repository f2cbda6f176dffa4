//! Built-in filter factories
//!
//! Pre-configured filter steps for the common validation and control-flow
//! cases: presence handling (`optional`, `defaults`, `required`), type
//! checks (`is_string`, `is_number`, `is_integer`), membership and custom
//! predicates (`is_one_of`, `assert`, `assert_with`), parsing
//! (`parse_json`), structural recursion (`array`, `object`), and format
//! validators (`is_email`, `is_url`).
//!
//! Every factory returns an ordinary [`Filter`] value; there is no shared
//! registry to mutate. Custom filters satisfying the same step contract
//! compose freely with these.
//!
//! Copyright (c) 2026 Remap Team
//! Licensed under the Apache-2.0 license

mod format;

pub use format::{is_email, is_url};

use crate::error::Error;
use crate::mapping::executor::{run_chain, run_chain_async};
use crate::mapping::filter::{flatten, Filter, FilterResult, FilterSpec, Flow};
use crate::mapping::mapper::{map, map_async};
use crate::mapping::schema::Schema;
use serde_json::Value;
use std::sync::Arc;

/// Break the chain when the value is absent, yielding absent.
pub fn optional() -> Filter {
    Filter::new(|value| {
        if value.is_null() {
            Ok(Flow::Break(Value::Null))
        } else {
            Ok(Flow::Continue(value))
        }
    })
}

/// Break the chain when the value is absent, yielding a default instead.
/// A present value continues through the remaining steps unchanged.
pub fn defaults(default: impl Into<Value>) -> Filter {
    let default = default.into();
    Filter::new(move |value| {
        if value.is_null() {
            Ok(Flow::Break(default.clone()))
        } else {
            Ok(Flow::Continue(value))
        }
    })
}

/// Reject absent values.
pub fn required() -> Filter {
    assert(|value| !value.is_null(), "is required")
}

/// Reject values failing a predicate, with a fixed message.
pub fn assert<P>(predicate: P, message: impl Into<String>) -> Filter
where
    P: Fn(&Value) -> bool + Send + Sync + 'static,
{
    let message = message.into();
    Filter::new(move |value| {
        if predicate(&value) {
            Ok(Flow::Continue(value))
        } else {
            Err(Error::validation(&message))
        }
    })
}

/// Reject values failing a predicate, with a message computed from the
/// offending value.
pub fn assert_with<P, M>(predicate: P, message: M) -> Filter
where
    P: Fn(&Value) -> bool + Send + Sync + 'static,
    M: Fn(&Value) -> String + Send + Sync + 'static,
{
    Filter::new(move |value| {
        if predicate(&value) {
            Ok(Flow::Continue(value))
        } else {
            Err(Error::validation(message(&value)))
        }
    })
}

/// Accept only values from a fixed set.
pub fn is_one_of<T, I>(allowed: I) -> Filter
where
    T: Into<Value>,
    I: IntoIterator<Item = T>,
{
    let allowed: Vec<Value> = allowed.into_iter().map(Into::into).collect();
    assert(move |value| allowed.contains(value), "unrecognized value")
}

/// Accept only strings.
pub fn is_string() -> Filter {
    assert(Value::is_string, "must be a string")
}

/// Accept only numbers.
pub fn is_number() -> Filter {
    assert(Value::is_number, "must be a number")
}

/// Accept only integral numbers. Whole-valued floats (`3.0`) pass, matching
/// the numeric model of the JSON data this engine maps.
pub fn is_integer() -> Filter {
    assert(
        |value| match value {
            Value::Number(n) => {
                n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0)
            }
            _ => false,
        },
        "must be an integer number",
    )
}

/// Parse a JSON-encoded string into its value.
pub fn parse_json() -> Filter {
    Filter::new(|value| match value.as_str() {
        Some(text) => serde_json::from_str(text)
            .map(Flow::Continue)
            .map_err(|e| Error::validation(format!("invalid JSON: {}", e))),
        None => Err(Error::validation("invalid JSON: value is not a string")),
    })
}

/// Run every element of an array through a filter chain.
///
/// Rejects non-arrays; element failures are annotated with the element's
/// bracketed index. The step promotes itself to suspending when the element
/// chain contains a suspending step, so nested suspension composes without
/// caller bookkeeping.
pub fn array<I>(element_filters: I) -> Filter
where
    I: IntoIterator,
    I::Item: Into<FilterSpec>,
{
    let steps = Arc::new(flatten(element_filters));
    if steps.iter().any(Filter::is_suspending) {
        Filter::suspending(move |value| {
            let steps = Arc::clone(&steps);
            async move { map_elements_async(value, &steps).await }
        })
    } else {
        Filter::new(move |value| map_elements(value, &steps))
    }
}

fn require_elements(value: Value) -> Result<Vec<Value>, Error> {
    match value {
        Value::Array(elements) => Ok(elements),
        _ => Err(Error::validation("must be an Array")),
    }
}

fn map_elements(value: Value, steps: &[Filter]) -> FilterResult {
    let elements = require_elements(value)?;
    let mut mapped = Vec::with_capacity(elements.len());
    for (index, element) in elements.into_iter().enumerate() {
        mapped.push(run_chain(element, steps, &format!("[{}]", index))?);
    }
    Ok(Flow::Continue(Value::Array(mapped)))
}

async fn map_elements_async(value: Value, steps: &[Filter]) -> FilterResult {
    let elements = require_elements(value)?;
    let mut mapped = Vec::with_capacity(elements.len());
    for (index, element) in elements.into_iter().enumerate() {
        mapped.push(run_chain_async(element, steps, &format!("[{}]", index)).await?);
    }
    Ok(Flow::Continue(Value::Array(mapped)))
}

/// Map the value through a nested object schema.
///
/// An absent mapping result flows on as absent. Promotes itself to
/// suspending when the schema contains suspending resolutions.
pub fn object(schema: Schema) -> Filter {
    if schema.has_suspending() {
        let schema = Arc::new(schema);
        Filter::suspending(move |value| {
            let schema = Arc::clone(&schema);
            async move {
                let mapped = map_async(&value, &schema).await?;
                Ok(Flow::Continue(mapped.unwrap_or(Value::Null)))
            }
        })
    } else {
        Filter::new(move |value| Ok(Flow::Continue(map(&value, &schema)?.unwrap_or(Value::Null))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pass(filter: &Filter, value: Value) -> Value {
        match filter.apply_blocking(value) {
            Ok(Flow::Continue(v)) => v,
            other => panic!("expected the value to pass, got {:?}", other),
        }
    }

    fn fail(filter: &Filter, value: Value) -> String {
        match filter.apply_blocking(value) {
            Err(e) if e.is_validation() => e.to_string(),
            other => panic!("expected a validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_required() {
        assert_eq!(pass(&required(), json!("")), json!(""));
        assert!(fail(&required(), Value::Null).contains("required"));
    }

    #[test]
    fn test_optional_breaks_on_absent() {
        assert_eq!(optional().apply_blocking(Value::Null).unwrap(), Flow::Break(Value::Null));
        assert_eq!(optional().apply_blocking(json!(0)).unwrap(), Flow::Continue(json!(0)));
    }

    #[test]
    fn test_defaults_overrides_only_absent() {
        let hi = defaults(json!("Hi!"));
        assert_eq!(hi.apply_blocking(Value::Null).unwrap(), Flow::Break(json!("Hi!")));
        assert_eq!(hi.apply_blocking(json!("")).unwrap(), Flow::Continue(json!("")));
        assert_eq!(hi.apply_blocking(json!(0)).unwrap(), Flow::Continue(json!(0)));
        assert_eq!(hi.apply_blocking(json!({})).unwrap(), Flow::Continue(json!({})));
    }

    #[test]
    fn test_parse_json() {
        assert_eq!(
            pass(&parse_json(), json!(r#"{"A":1, "b":"2"}"#)),
            json!({"A": 1, "b": "2"})
        );
        assert!(fail(&parse_json(), json!("{'A':1}")).contains("invalid JSON"));
        assert!(fail(&parse_json(), json!(17)).contains("invalid JSON"));
    }

    #[test]
    fn test_is_string() {
        assert_eq!(pass(&is_string(), json!("b")), json!("b"));
        assert!(fail(&is_string(), json!(1)).contains("string"));
    }

    #[test]
    fn test_is_number() {
        assert_eq!(pass(&is_number(), json!(-0.33)), json!(-0.33));
        assert!(fail(&is_number(), json!("1")).contains("number"));
    }

    #[test]
    fn test_is_integer() {
        assert_eq!(pass(&is_integer(), json!(-3)), json!(-3));
        assert_eq!(pass(&is_integer(), json!(3.0)), json!(3.0));
        assert!(fail(&is_integer(), json!(-0.33)).contains("integer"));
        assert!(fail(&is_integer(), json!("1")).contains("integer"));
    }

    #[test]
    fn test_is_one_of() {
        let vowel = is_one_of(["a", "e", "i", "o", "u"]);
        assert_eq!(pass(&vowel, json!("e")), json!("e"));
        assert!(fail(&vowel, json!("b")).contains("value"));
    }

    #[test]
    fn test_array_of_integers() {
        let ints = array([is_integer()]);
        assert_eq!(pass(&ints, json!([])), json!([]));
        assert_eq!(pass(&ints, json!([1, 2, 3, 4, 5])), json!([1, 2, 3, 4, 5]));
        assert!(fail(&ints, json!({})).contains("Array"));
        assert!(fail(&ints, json!("")).contains("Array"));
        assert!(fail(&ints, json!(1)).contains("Array"));
        assert!(fail(&ints, json!([1, 2, 3.1, 4, 5])).contains("[2]"));
    }

    #[test]
    fn test_object_maps_nested_value() {
        let filter = object(Schema::new().field("kept", crate::mapping::schema::copy()));
        assert_eq!(pass(&filter, json!({"kept": 1, "dropped": 2})), json!({"kept": 1}));
        // All-absent nested results flow on as absent.
        assert_eq!(filter.apply_blocking(json!({})).unwrap(), Flow::Continue(Value::Null));
    }

    #[test]
    fn test_assert_with_formats_the_offending_value() {
        let falsy = assert_with(
            |v| !v.as_bool().unwrap_or(true),
            |v| format!("{} should be falsy", v),
        );
        assert!(fail(&falsy, json!(true)).contains("true should be falsy"));
    }
}
