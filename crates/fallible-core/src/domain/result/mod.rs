//! Result Algebra
//!
//! `Outcome<T, E>` is a tagged union of exactly two variants:
//!
//! | Variant   | Payload      | `is_success()` | `is_fail()` |
//! |-----------|--------------|----------------|-------------|
//! | `Success` | value: `T`   | `true`         | `false`     |
//! | `Fail`    | error: `E`   | `false`        | `true`      |
//!
//! The payload of the inactive variant cannot be reached without first
//! matching on the variant. Every instance is immutable once constructed;
//! combinators consume it and produce a new one.
//!
//! Only `unwrap` and `expect` may panic. Every other combinator is total.

mod combinators;
mod types;

pub use types::{fail, success, Outcome};
