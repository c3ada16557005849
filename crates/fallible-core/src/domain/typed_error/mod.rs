//! Typed Error Module
//!
//! An error augmented with a discriminant and a discriminant-specific
//! payload. The discriminant set is declared per call site as a *kind* enum
//! (usually through [`error_kinds!`](crate::error_kinds)); matching on
//! [`TypedError::kind`] narrows the payload in each branch without casts.
//!
//! The pairing of tag and payload is fixed once the error is constructed.
//! The message is the only part that may change afterwards, and only through
//! [`MessageError::set_message`](crate::MessageError::set_message), which is
//! what `Outcome::expect` uses.

mod error;
mod kind;

pub use error::{TypedError, TypedErrorBuilder};
pub use kind::ErrorKind;
