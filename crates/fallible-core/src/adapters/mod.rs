//! # Adapters Layer
//!
//! Bridges between the pure domain types and asynchronous operations.
//!
//! ## Module Organization
//!
//! - `future`: Await a single pending operation and map its settlement to an
//!   `Outcome`. Executor-agnostic; requires the `async` feature.

pub mod future;
