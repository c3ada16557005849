//! Outcome combinators
//!
//! Mappers never run on the inactive variant. `unwrap` and `expect` are the
//! only escape hatches that panic; the panic payload is the stored error
//! itself, so a boundary using `catch_unwind` (or the async `catch` adapter)
//! can downcast it back to `E`.

use std::fmt;
use std::panic::{self, Location};

use super::types::Outcome;
use crate::domain::message::MessageError;

impl<T, E> Outcome<T, E> {
    /// Non-panicking escape to "maybe a value"
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Fail(_) => None,
        }
    }

    /// Non-panicking escape to "maybe an error"
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Fail(error) => Some(error),
        }
    }

    /// Return the value, or panic with the stored error as payload
    ///
    /// Use only where a failure is a programmer error.
    ///
    /// # Panics
    ///
    /// On `Fail`, via [`std::panic::panic_any`] carrying the error. The default
    /// panic hook prints only `Box<dyn Any>` for such a payload; the error and
    /// its message are reported by the `tracing::error!` event emitted just
    /// before the panic, so install a subscriber to see them.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug + Send + 'static,
    {
        match self {
            Self::Success(value) => value,
            Self::Fail(error) => raise(error, "called `Outcome::unwrap()` on a `Fail` value"),
        }
    }

    /// Return the value, or `default` on `Fail`
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Fail(_) => default,
        }
    }

    /// Return the value, or compute one from the error on `Fail`
    ///
    /// A panic raised by `fallback` is not caught here.
    #[inline]
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Fail(error) => fallback(error),
        }
    }

    /// Return the value, or `T::default()` on `Fail`
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Success(value) => value,
            Self::Fail(_) => T::default(),
        }
    }

    /// Return the value, or overwrite the error's message and panic with it
    ///
    /// The message replacement happens on the stored error before it becomes
    /// the panic payload; no new error is constructed.
    ///
    /// # Panics
    ///
    /// On `Fail`, via [`std::panic::panic_any`] carrying the error. The default
    /// panic hook prints only `Box<dyn Any>` for such a payload; the error and
    /// its message are reported by the `tracing::error!` event emitted just
    /// before the panic, so install a subscriber to see them.
    #[track_caller]
    pub fn expect(self, message: impl Into<String>) -> T
    where
        E: MessageError + fmt::Debug + Send + 'static,
    {
        match self {
            Self::Success(value) => value,
            Self::Fail(mut error) => {
                error.set_message(message.into());
                raise(error, "called `Outcome::expect()` on a `Fail` value")
            }
        }
    }

    /// Transform the value channel; `Fail` passes through untouched
    #[inline]
    pub fn map<U, F>(self, mapper: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(mapper(value)),
            Self::Fail(error) => Outcome::Fail(error),
        }
    }

    /// Transform the error channel; `Success` passes through untouched
    #[inline]
    pub fn map_error<G, F>(self, mapper: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Fail(error) => Outcome::Fail(mapper(error)),
        }
    }

    /// Chain a fallible step on the value
    #[inline]
    pub fn and_then<U, F>(self, mapper: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => mapper(value),
            Self::Fail(error) => Outcome::Fail(error),
        }
    }

    /// Chain a recovery step on the error
    #[inline]
    pub fn or_else<G, F>(self, recover: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Fail(error) => recover(error),
        }
    }

    /// Observe the value without consuming it
    #[inline]
    pub fn inspect<F>(self, observe: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            observe(value);
        }
        self
    }

    /// Observe the error without consuming it
    #[inline]
    pub fn inspect_error<F>(self, observe: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Fail(error) = &self {
            observe(error);
        }
        self
    }
}

#[track_caller]
#[cold]
fn raise<E>(error: E, context: &'static str) -> !
where
    E: fmt::Debug + Send + 'static,
{
    let location = Location::caller();
    tracing::error!(error = ?error, %location, "{}", context);
    panic::panic_any(error)
}
