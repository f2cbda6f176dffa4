//! Remap Core - schema-driven object mapping and validation engine
//!
//! This crate maps arbitrary source objects to destination objects through
//! declarative schemas: each destination attribute is resolved from a
//! dotted source path through an ordered chain of transformation and
//! validation filters, computed from the whole source object, or recursed
//! into via a nested schema.
//!
//! # Main Components
//!
//! - **Error Handling**: three failure kinds (validation, configuration,
//!   opaque passthrough) using `thiserror` and `anyhow`
//! - **Mapping Engine**: blocking (`map`) and concurrent (`map_async`)
//!   schema interpretation with path-annotated validation failures
//! - **Array Mapping**: element-wise mapping with whole-array post-filters
//! - **Built-in Filters**: presence, type, membership, parsing, and format
//!   validators in the [`filters`] module
//!
//! # Example
//!
//! ```
//! use remap_core::{filters, from, map, same, Schema};
//! use serde_json::json;
//!
//! fn example() -> remap_core::Result<()> {
//!     let schema = Schema::new()
//!         .field("name", from("user.name", [filters::required(), filters::is_string()]))
//!         .field("retries", same([filters::defaults(json!(3)), filters::is_integer()]));
//!
//!     let source = json!({"user": {"name": "Ada"}});
//!     let mapped = map(&source, &schema)?;
//!     assert_eq!(mapped, Some(json!({"name": "Ada", "retries": 3})));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod error;
pub mod filters;
pub mod mapping;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use mapping::{
    // Mapping entry points
    map, map_array, map_array_async, map_async,

    // Schema declaration
    copy, copy_from, derive, derive_async, from, same,
    Derivation, ElementSchema, Schema, SchemaValue,

    // Filter chain building blocks
    flatten, Filter, FilterResult, FilterSpec, Flow,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
