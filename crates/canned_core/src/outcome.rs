//! Two-variant success/failure container.

use serde::{Deserialize, Serialize};

/// The uniform currency between pipeline stages: exactly one of a value or
/// an error.
///
/// `Outcome` is what mapping callbacks return. Turning it back into a
/// propagating failure always goes through [`Outcome::unwrap_or_propagate`].
///
/// # Examples
///
/// ```
/// use canned_core::Outcome;
///
/// fn parse(raw: &str) -> Result<u32, String> {
///     let outcome = match raw.parse::<u32>() {
///         Ok(n) => Outcome::success(n),
///         Err(e) => Outcome::failure(e.to_string()),
///     };
///     let value = outcome.unwrap_or_propagate()?;
///     Ok(value * 2)
/// }
///
/// assert_eq!(parse("21"), Ok(42));
/// assert!(parse("x").is_err());
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "PascalCase")]
pub enum Outcome<T, E> {
    /// Holds the value
    Success {
        /// The successful value
        value: T,
    },
    /// Holds the error
    Failure {
        /// The failure
        error: E,
    },
}

impl<T, E> Outcome<T, E> {
    /// Construct a `Success`.
    pub fn success(value: T) -> Self {
        Outcome::Success { value }
    }

    /// Construct a `Failure`.
    pub fn failure(error: E) -> Self {
        Outcome::Failure { error }
    }

    /// True for `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// True for `Failure`.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure { .. })
    }

    /// Return the value, or hand the error back as `Err` for `?` propagation.
    ///
    /// This is the only way out of an `Outcome`; a `Failure` can never turn
    /// into a value downstream.
    pub fn unwrap_or_propagate(self) -> Result<T, E> {
        match self {
            Outcome::Success { value } => Ok(value),
            Outcome::Failure { error } => Err(error),
        }
    }

    /// Borrow the value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success { value } => Some(value),
            Outcome::Failure { .. } => None,
        }
    }

    /// Borrow the error, if any.
    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { error } => Some(error),
        }
    }

    /// Map the success value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Outcome::Success { value } => Outcome::success(f(value)),
            Outcome::Failure { error } => Outcome::failure(error),
        }
    }

    /// Map the failure.
    pub fn map_failure<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Outcome::Success { value } => Outcome::success(value),
            Outcome::Failure { error } => Outcome::failure(f(error)),
        }
    }

    /// Chain another fallible step onto a success.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Success { value } => f(value),
            Outcome::Failure { error } => Outcome::failure(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome::failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.unwrap_or_propagate()
    }
}

/// Free-function form of [`Outcome::success`].
pub fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::success(value)
}

/// Free-function form of [`Outcome::failure`].
pub fn failure<T, E>(error: E) -> Outcome<T, E> {
    Outcome::failure(error)
}
