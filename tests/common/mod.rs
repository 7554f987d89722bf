//! Shared test utilities for the migemo-search integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

#![allow(dead_code)]

#[macro_use]
pub mod assertions;
pub mod builders;
pub mod fake_engine;
pub mod fixtures;

pub use builders::*;
pub use fake_engine::*;
pub use fixtures::*;
