//! Integration tests for Layer 2: Engine
//!
//! Tests for type matching, key enumeration, and attachment validation.

mod matcher_props;
mod queries;
mod validation;
