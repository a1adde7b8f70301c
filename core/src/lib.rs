//! Pairing Core Types
//!
//! This crate provides the foundational types used throughout the pairing workspace:
//! - Identity type (EntityId)
//! - Value type (the Value enum accepted as "any value" by the pairing operation)
//! - Entity structure (name plus partner)
//! - Common error types and fixed messages

mod entity;
mod error;
mod id;
pub mod messages;
mod value;

pub use entity::*;
pub use error::*;
pub use id::*;
pub use value::*;
