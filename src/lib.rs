//! Metakey - Declarative metadata-key catalog and matching engine
//!
//! This crate re-exports all layers of the metakey system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: metakey_runtime    — config lifecycle, persistence, widget layer
//! Layer 2: metakey_engine     — type matcher, query engine, validator
//! Layer 1: metakey_registry   — key definitions, registry, class graph
//! Layer 0: metakey_foundation — descriptors, patterns, values, errors
//! ```

pub use metakey_engine as engine;
pub use metakey_foundation as foundation;
pub use metakey_registry as registry;
pub use metakey_runtime as runtime;
