//! Outcome type, constructors and conversions

use std::convert::Infallible;

/// Either a successful value or a failure carrying an error
///
/// Pattern matching on the variant is how the payload is reached:
///
/// ```rust
/// use fallible_core::{fail, success, Outcome, PlainError};
///
/// fn parse_number(input: &str) -> Outcome<i64, PlainError> {
///     match input.parse() {
///         Ok(number) => success(number),
///         Err(_) => fail(PlainError::new("Not a number")),
///     }
/// }
///
/// if let Outcome::Success(number) = parse_number("1") {
///     assert_eq!(number, 1);
/// }
/// assert!(parse_number("a").is_fail());
/// ```
///
/// Reading the value without narrowing does not compile:
///
/// ```compile_fail
/// use fallible_core::{success, Outcome, PlainError};
///
/// let outcome: Outcome<i64, PlainError> = success(1);
/// let _ = outcome.value;
/// ```
#[must_use = "this `Outcome` may be a `Fail` variant, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    /// Successful outcome holding a value
    Success(T),
    /// Failed outcome holding an error
    Fail(E),
}

/// Wrap a value in the `Success` variant
///
/// The error type is left to inference. A success that is never combined
/// with a failure can be pinned to `Infallible`.
#[inline]
pub fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Wrap an error in the `Fail` variant
///
/// The value type is left to inference. A failure that is never combined
/// with a success can be pinned to `Infallible`.
#[inline]
pub fn fail<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Fail(error)
}

impl<T, E> Outcome<T, E> {
    /// Same as the free function [`success`]
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Same as the free function [`fail`]
    #[inline]
    pub fn fail(error: E) -> Self {
        Self::Fail(error)
    }

    /// `true` for the `Success` variant
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// `true` for the `Fail` variant
    #[inline]
    pub const fn is_fail(&self) -> bool {
        matches!(self, Self::Fail(_))
    }

    /// Borrow the value, if this is a `Success`
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Fail(_) => None,
        }
    }

    /// Borrow the error, if this is a `Fail`
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Fail(error) => Some(error),
        }
    }

    /// Borrow both channels without consuming the outcome
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Fail(error) => Outcome::Fail(error),
        }
    }

    /// Convert into a standard `Result`, enabling `?` at function boundaries
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Fail(error) => Err(error),
        }
    }
}

impl<T> Outcome<T, Infallible> {
    /// Extract the value of an outcome that cannot fail
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Fail(never) => match never {},
        }
    }

    /// Widen the error channel of an outcome that cannot fail
    pub fn cast_error<F>(self) -> Outcome<T, F> {
        Outcome::Success(self.into_value())
    }
}

impl<E> Outcome<Infallible, E> {
    /// Extract the error of an outcome that cannot succeed
    pub fn into_error(self) -> E {
        match self {
            Self::Success(never) => match never {},
            Self::Fail(error) => error,
        }
    }

    /// Widen the value channel of an outcome that cannot succeed
    pub fn cast_value<U>(self) -> Outcome<U, E> {
        Outcome::Fail(self.into_error())
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Fail(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::message::PlainError;

    #[test]
    fn success_discriminant() {
        let outcome: Outcome<i32, PlainError> = success(1);
        assert!(outcome.is_success());
        assert!(!outcome.is_fail());
        assert_eq!(outcome.value(), Some(&1));
        assert_eq!(outcome.error(), None);
    }

    #[test]
    fn fail_discriminant() {
        let outcome: Outcome<i32, PlainError> = fail(PlainError::new("test"));
        assert!(!outcome.is_success());
        assert!(outcome.is_fail());
        assert_eq!(outcome.value(), None);
        assert_eq!(outcome.error().map(|e| e.to_string()), Some("test".into()));
    }

    #[test]
    fn infallible_sides_narrow() {
        let ok: Outcome<u8, Infallible> = success(7);
        assert_eq!(ok.into_value(), 7);

        let widened: Outcome<u8, PlainError> = success::<u8, Infallible>(7).cast_error();
        assert_eq!(widened, Outcome::Success(7));

        let err: Outcome<Infallible, &str> = fail("boom");
        assert_eq!(err.into_error(), "boom");

        let widened: Outcome<String, &str> = fail::<Infallible, _>("boom").cast_value();
        assert_eq!(widened, Outcome::Fail("boom"));
    }

    #[test]
    fn std_result_interop() {
        let parsed: Outcome<u32, _> = "42".parse::<u32>().into();
        assert_eq!(parsed, Outcome::Success(42));

        let bad: Outcome<u32, _> = "x".parse::<u32>().into();
        assert!(bad.is_fail());

        let back: Result<u32, &str> = Outcome::Fail("nope").into();
        assert_eq!(back, Err("nope"));
    }

    #[test]
    fn question_mark_through_into_result() {
        fn double(input: Outcome<i32, String>) -> Result<i32, String> {
            Ok(input.into_result()? * 2)
        }

        assert_eq!(double(success(21)), Ok(42));
        assert_eq!(double(fail("bad".into())), Err("bad".to_string()));
    }
}
