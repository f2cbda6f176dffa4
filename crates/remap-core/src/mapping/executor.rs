//! Filter-chain executors
//!
//! Runs an ordered sequence of filter steps over a single value as a left
//! fold, in a blocking and a concurrent variant. Both variants share the
//! same step-outcome handling: a break ends the chain with its carried
//! value, a validation failure is annotated with the chain's source path,
//! and every other failure propagates untouched.
//!
//! Copyright (c) 2026 Remap Team
//! Licensed under the Apache-2.0 license

use super::filter::{Filter, FilterResult, Flow};
use super::path::decorate;
use crate::error::{Error, Result};
use serde_json::Value;

enum ChainState {
    Next(Value),
    Done(Value),
}

/// Route one step outcome.
///
/// Only domain-validation failures get path-enriched; configuration errors
/// and arbitrary failures retain their original identity for debugging.
fn settle(outcome: FilterResult, source_path: &str) -> Result<ChainState> {
    match outcome {
        Ok(Flow::Continue(value)) => Ok(ChainState::Next(value)),
        Ok(Flow::Break(value)) => {
            log::trace!("filter chain for `{}` short-circuited", source_path);
            Ok(ChainState::Done(value))
        }
        Err(Error::Validation { message }) => Err(Error::Validation {
            message: decorate(source_path, &message),
        }),
        Err(other) => Err(other),
    }
}

/// Run a filter chain to completion without suspending.
///
/// A suspending step encountered here surfaces as a configuration error
/// (see [`Filter::apply_blocking`]).
pub(crate) fn run_chain(value: Value, steps: &[Filter], source_path: &str) -> Result<Value> {
    let mut current = value;
    for step in steps {
        current = match settle(step.apply_blocking(current), source_path)? {
            ChainState::Next(value) => value,
            ChainState::Done(value) => return Ok(value),
        };
    }
    Ok(current)
}

/// Run a filter chain, awaiting suspending steps in place.
///
/// Ordering is strictly left-to-right even when individual steps yield
/// control; the chain is a single ordered pipeline in both variants.
pub(crate) async fn run_chain_async(
    value: Value,
    steps: &[Filter],
    source_path: &str,
) -> Result<Value> {
    let mut current = value;
    for step in steps {
        current = match settle(step.apply(current).await, source_path)? {
            ChainState::Next(value) => value,
            ChainState::Done(value) => return Ok(value),
        };
    }
    Ok(current)
}
