//! Mapping engine: schema interpretation and filter-chain execution
//!
//! This module implements the core of remap: declarative schemas resolved
//! against arbitrary source objects through ordered filter chains, in a
//! blocking and a concurrent variant sharing one set of control-flow rules.
//!
//! # Module Organization
//!
//! - [`schema`] - Schema declaration types and chain-builder helpers
//! - [`filter`] - Filter steps, the short-circuit flow type, flattening
//! - [`executor`] - Blocking and concurrent chain executors
//! - [`mapper`] - Object mapping (`map` / `map_async`)
//! - [`array`] - Array mapping (`map_array` / `map_array_async`)
//! - `path` - Source-path lookup and error-path formatting
//!
//! Copyright (c) 2026 Remap Team
//! Licensed under the Apache-2.0 license

pub mod array;
pub(crate) mod executor;
pub mod filter;
pub mod mapper;
mod path;
pub mod schema;

pub use array::{map_array, map_array_async, ElementSchema};
pub use filter::{flatten, Filter, FilterResult, FilterSpec, Flow};
pub use mapper::{map, map_async};
pub use schema::{
    copy, copy_from, derive, derive_async, from, same, Derivation, Schema, SchemaValue,
};
