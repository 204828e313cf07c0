//! # hcslayer-common
//!
//! Shared types, error definitions, configuration models, and constants
//! used across the hcslayer workspace.
//!
//! This crate is the leaf of the dependency graph — it depends on no other
//! internal crate and provides the foundational primitives that the binding
//! crate builds upon.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
