//! Fixed user-facing messages.
//!
//! Shared between the error types and the tests that assert on printed output.

/// Reported when the pairing operation is handed something that is not an entity.
pub const ERR_INVALID_PARTNER_TYPE: &str =
    "you must give the pairing operation an argument of an instance of the Entity type!";
