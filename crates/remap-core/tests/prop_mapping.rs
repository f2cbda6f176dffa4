//! Property-based tests for the mapping engine
//!
//! These tests verify key invariants that should hold for all valid
//! schemas and sources: determinism, absent-attribute omission, grouping
//! invariance of chain declarations, and the shape of validation paths.

use proptest::prelude::*;
use remap_core::{filters, from, map, same, Filter, FilterSpec, Schema};
use serde_json::{json, Value};

// Strategy functions for property testing

/// Strategy for source attribute names (no dots: a dot would be a path)
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,5}"
}

/// Strategy for leaf values placed into the source object
fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::from),
    ]
}

/// Strategy for flat source objects
fn source_strategy() -> impl Strategy<Value = Value> {
    proptest::collection::hash_map(key_strategy(), leaf_strategy(), 0..6)
        .prop_map(|entries| Value::Object(entries.into_iter().collect()))
}

/// A schema that copies every attribute of the source under its own name
fn copying_schema(source: &Value) -> Schema {
    source
        .as_object()
        .expect("sources are generated as objects")
        .keys()
        .fold(Schema::new(), |schema, key| {
            schema.field(key.clone(), same([filters::optional()]))
        })
}

fn add(n: i64) -> Filter {
    Filter::map(move |value| json!(value.as_i64().unwrap_or(0) + n))
}

proptest! {
    /// Mapping a fixed source twice yields deep-equal results: the engine
    /// keeps no hidden state between calls.
    #[test]
    fn prop_mapping_is_deterministic(source in source_strategy()) {
        let schema = copying_schema(&source);
        let first = map(&source, &schema).unwrap();
        let second = map(&source, &schema).unwrap();
        prop_assert_eq!(first, second);
    }

    /// A schema of pure copies reproduces the source exactly, collapsing to
    /// absent (never an empty object) when there is nothing to copy.
    #[test]
    fn prop_pure_copies_round_trip(source in source_strategy()) {
        let schema = copying_schema(&source);
        let mapped = map(&source, &schema).unwrap();
        let expected = if source.as_object().unwrap().is_empty() {
            None
        } else {
            Some(source)
        };
        prop_assert_eq!(mapped, expected);
    }

    /// Attributes resolving to absent never appear in the destination.
    #[test]
    fn prop_absent_resolutions_are_omitted(
        source in source_strategy(),
        ghost in "[a-z]{8,10}",
    ) {
        let schema = copying_schema(&source)
            .field(ghost.clone(), from(ghost.clone(), [filters::optional()]));
        match map(&source, &schema).unwrap() {
            None => {}
            Some(Value::Object(destination)) => {
                prop_assert!(!destination.contains_key(&ghost));
                prop_assert!(destination.values().all(|v| !v.is_null()));
            }
            Some(other) => prop_assert!(false, "map produced a non-object: {:?}", other),
        }
    }

    /// Splitting a chain declaration into nested groups never changes its
    /// semantics: flattening is depth-first and order-preserving.
    #[test]
    fn prop_grouping_never_changes_chain_semantics(
        increments in proptest::collection::vec(-100i64..100, 0..8),
        split in 0usize..8,
        seed in -1000i64..1000,
    ) {
        let split = split.min(increments.len());
        let (head, tail) = increments.split_at(split);

        let flat = Schema::new().field(
            "n",
            same(increments.iter().map(|&n| FilterSpec::from(add(n)))),
        );
        let grouped = Schema::new().field(
            "n",
            same([
                FilterSpec::from(head.iter().map(|&n| add(n)).collect::<Vec<_>>()),
                FilterSpec::from(tail.iter().map(|&n| add(n)).collect::<Vec<_>>()),
            ]),
        );

        let source = json!({"n": seed});
        prop_assert_eq!(map(&source, &flat).unwrap(), map(&source, &grouped).unwrap());
    }

    /// A rejected value is reported under its source path, not its
    /// destination attribute.
    #[test]
    fn prop_validation_message_is_prefixed_with_the_source_path(key in key_strategy()) {
        let schema = Schema::new().field(
            "out",
            from(key.clone(), [filters::required(), filters::is_number()]),
        );
        let source = json!({ key.clone(): "not a number" });

        let err = map(&source, &schema).unwrap_err();
        prop_assert!(err.is_validation());
        prop_assert_eq!(err.to_string(), format!("{}: must be a number", key));
    }
}
