//! Async Adapter
//!
//! Awaits exactly one pending operation and converts how it settled into an
//! [`Outcome`]. There is no retry, no timeout and no cancellation: settlement
//! is left entirely to the wrapped future.

use std::future::IntoFuture;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;

use crate::domain::result::{fail, success, Outcome};

/// Await a fallible operation and map `Ok`/`Err` to `Success`/`Fail`
///
/// The error value is moved into the `Fail` unchanged.
///
/// ```rust
/// use fallible_core::result;
///
/// let outcome = futures::executor::block_on(result(async {
///     Ok::<_, std::io::Error>("John")
/// }));
/// assert_eq!(outcome.ok(), Some("John"));
/// ```
pub async fn result<T, E, F>(operation: F) -> Outcome<T, E>
where
    F: IntoFuture<Output = Result<T, E>>,
{
    match operation.await {
        Ok(value) => success(value),
        Err(error) => {
            tracing::debug!("awaited operation settled with an error");
            fail(error)
        }
    }
}

pub use self::result as r;

/// Await an operation that signals failure by panicking
///
/// A panic whose payload is an `E` (as raised by `Outcome::unwrap` or
/// `Outcome::expect`) becomes a `Fail` holding that same value. Any other
/// panic is resumed untouched.
pub async fn catch<T, E, F>(operation: F) -> Outcome<T, E>
where
    F: IntoFuture<Output = T>,
    E: Send + 'static,
{
    match AssertUnwindSafe(operation.into_future()).catch_unwind().await {
        Ok(value) => success(value),
        Err(payload) => match payload.downcast::<E>() {
            Ok(error) => {
                tracing::debug!("captured a panic carrying the expected error type");
                fail(*error)
            }
            Err(payload) => panic::resume_unwind(payload),
        },
    }
}
