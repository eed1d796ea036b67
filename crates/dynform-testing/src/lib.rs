//! Testing infrastructure for dynform integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Fluent interface for declarative test setup
//! - `assertions`: Checks against the `--format json` command envelope
//! - `fixtures`: Sample schema and value documents

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::TestWorld;
