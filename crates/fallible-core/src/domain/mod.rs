//! Domain Layer
//!
//! Pure value types with no dependency on any executor or I/O.
//!
//! Organized into behavioral domains:
//! - **result**: The `Outcome` tagged union and its combinator surface
//! - **typed_error**: Errors carrying a discriminant tag and a payload
//! - **message**: The mutable-message contract used by `Outcome::expect`
//!
//! `result` and `typed_error` are independent of each other; `Outcome` is
//! merely commonly instantiated with a `TypedError` as its failure payload.

pub mod message;
pub mod result;
pub mod typed_error;

// Re-export commonly used domain types at the domain layer level
pub use message::{MessageError, PlainError};
pub use result::{fail, success, Outcome};
pub use typed_error::{ErrorKind, TypedError, TypedErrorBuilder};
