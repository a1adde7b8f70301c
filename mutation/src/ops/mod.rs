//! Mutation operation implementations.

mod pair;

pub use pair::{execute_pair, resolve_partner};
