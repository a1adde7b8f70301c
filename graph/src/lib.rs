//! Pairing Graph Storage
//!
//! This crate owns every entity and keeps the partner relation symmetric:
//! - Entity storage keyed by `EntityId`
//! - Name index: find entities by name
//! - Partner linking that detaches stale back-references

mod graph;
mod index;

pub use graph::*;
