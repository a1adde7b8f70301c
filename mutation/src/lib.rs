//! Pairing Mutation
//!
//! Execute the pairing operation.
//!
//! Responsibilities:
//! - Validate that the partner argument is an entity
//! - Link both entities in one step
//! - Recover from a rejected pairing by reporting it instead of failing
//!
//! # Module Structure
//!
//! - `executor` - PairingExecutor with the propagating `try_pair` and recovering `pair`
//! - `ops/` - Operation implementations
//! - `report` - Reporter trait and its backends
//! - `error` - Error types for mutation failures
//! - `result` - Result types for mutation outcomes

mod error;
mod executor;
mod ops;
pub mod report;
mod result;

pub use error::{MutationError, MutationResult};
pub use executor::PairingExecutor;
pub use ops::resolve_partner;
pub use report::{
    create_reporter, BufferReporter, DiscardReporter, ReportConfig, ReportSink, Reporter,
    StdoutReporter,
};
pub use result::PairOutcome;
