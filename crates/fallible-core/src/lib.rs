//! # Fallible Core
//!
//! Result algebra and typed errors.
//! A value is either a `Success` carrying a value or a `Fail` carrying an
//! error; errors may carry a discriminant tag plus a per-tag payload that is
//! recovered by matching, without casts.
//!
//! ## Module Organization
//!
//! - `domain`: Pure value types
//!   - `result`: `Outcome` and its combinators
//!   - `typed_error`: `TypedError`, `ErrorKind` and the `error_kinds!` macro
//!   - `message`: `MessageError` contract and the untyped `PlainError`
//! - `adapters`: Bridge from pending asynchronous operations to `Outcome`
//!   (feature `async`, enabled by default)
//!
//! ## Example
//!
//! ```rust
//! use fallible_core::{error_kinds, fail, success, Outcome, TypedError};
//!
//! error_kinds! {
//!     pub enum LookupError {
//!         NotLoggedIn(String) = "notLoggedIn",
//!         NoUser(u64) = "noUser",
//!     }
//! }
//!
//! fn find_user(session: Option<&str>) -> Outcome<String, TypedError<LookupError>> {
//!     let Some(session) = session else {
//!         return fail(TypedError::new(LookupError::NotLoggedIn("anonymous".into())));
//!     };
//!     if session == "ghost" {
//!         return fail(TypedError::new(LookupError::NoUser(404)));
//!     }
//!     success(session.to_uppercase())
//! }
//!
//! match find_user(None) {
//!     Outcome::Fail(err) => match err.kind() {
//!         LookupError::NotLoggedIn(who) => assert_eq!(who, "anonymous"),
//!         LookupError::NoUser(id) => panic!("unexpected user id {id}"),
//!     },
//!     Outcome::Success(_) => unreachable!(),
//! }
//! assert_eq!(find_user(Some("ada")).unwrap_or_default(), "ADA");
//! ```

pub mod domain;

#[cfg(feature = "async")]
pub mod adapters;

// Re-export commonly used types
pub use domain::message::{MessageError, PlainError};
pub use domain::result::{fail, success, Outcome};
pub use domain::typed_error::{ErrorKind, TypedError, TypedErrorBuilder};

#[cfg(feature = "async")]
pub use adapters::future::{catch, r, result};

/// Library version
pub const FALLIBLE_CORE_VERSION: &str = env!("CARGO_PKG_VERSION");
