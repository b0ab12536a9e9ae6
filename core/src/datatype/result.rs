use std::fmt::{self, Display, Formatter};
use std::result::Result as StdResult;

use crate::datatype::maybe::Maybe;
use crate::typeclass::{Applicative, Bifunctor, Equality, Functor, Monad};

/// Outcome of a computation: either a [`Success`](Result::Success) value or a [`Failure`](Result::Failure) error.
///
/// Failures are ordinary values. Mapping operations on the success side pass failures through untouched, so a chain
/// of [fmap](Self::fmap) calls stops transforming at the first failure.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Result<T, E> {
  Success(T),
  Failure(E),
}

pub use self::Result::{Failure, Success};

impl<T, E> Result<T, E> {
  /// Creates a success.
  #[inline]
  pub fn pure(value: T) -> Self { Success(value) }

  #[inline]
  pub fn is_success(&self) -> bool { matches!(self, Success(_)) }
  #[inline]
  pub fn is_failure(&self) -> bool { matches!(self, Failure(_)) }

  #[inline]
  pub fn value(&self) -> Option<&T> {
    match self {
      Success(value) => Some(value),
      Failure(_) => None,
    }
  }
  #[inline]
  pub fn error(&self) -> Option<&E> {
    match self {
      Success(_) => None,
      Failure(error) => Some(error),
    }
  }
  #[inline]
  pub fn into_value(self) -> Option<T> {
    match self {
      Success(value) => Some(value),
      Failure(_) => None,
    }
  }
  #[inline]
  pub fn into_error(self) -> Option<E> {
    match self {
      Success(_) => None,
      Failure(error) => Some(error),
    }
  }

  #[inline]
  pub fn as_ref(&self) -> Result<&T, &E> {
    match self {
      Success(value) => Success(value),
      Failure(error) => Failure(error),
    }
  }

  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Success(value) => value,
      Failure(_) => default,
    }
  }

  /// Converts into a [`Maybe`], discarding the error.
  #[inline]
  pub fn ok(self) -> Maybe<T> {
    match self {
      Success(value) => Maybe::Just(value),
      Failure(_) => Maybe::Nothing,
    }
  }


  /// Maps the success value with `f`; a failure is returned unchanged and `f` is not called.
  #[inline]
  pub fn fmap<U>(self, f: impl FnOnce(T) -> U) -> Result<U, E> {
    match self {
      Success(value) => Success(f(value)),
      Failure(error) => Failure(error),
    }
  }

  /// Maps the success value with `f` or the error with `g`.
  #[inline]
  pub fn bimap<U, F>(self, f: impl FnOnce(T) -> U, g: impl FnOnce(E) -> F) -> Result<U, F> {
    match self {
      Success(value) => Success(f(value)),
      Failure(error) => Failure(g(error)),
    }
  }

  /// Maps only the success value.
  #[inline]
  pub fn first<U>(self, f: impl FnOnce(T) -> U) -> Result<U, E> { Bifunctor::first(self, f) }

  /// Maps only the error.
  #[inline]
  pub fn second<F>(self, g: impl FnOnce(E) -> F) -> Result<T, F> { Bifunctor::second(self, g) }

  /// Applies the wrapped function to the success value. The first failure, checking `self` before `f`, wins.
  #[inline]
  pub fn apply<U, F: FnOnce(T) -> U>(self, f: Result<F, E>) -> Result<U, E> {
    match (self, f) {
      (Success(value), Success(f)) => Success(f(value)),
      (Failure(error), _) | (_, Failure(error)) => Failure(error),
    }
  }

  /// Chains `f`, which already returns a `Result`, without wrapping its result again.
  #[inline]
  pub fn bind<U>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<U, E> {
    match self {
      Success(value) => f(value),
      Failure(error) => Failure(error),
    }
  }
}

impl<T, E> From<StdResult<T, E>> for Result<T, E> {
  #[inline]
  fn from(result: StdResult<T, E>) -> Self {
    match result {
      Ok(value) => Success(value),
      Err(error) => Failure(error),
    }
  }
}
impl<T, E> From<Result<T, E>> for StdResult<T, E> {
  #[inline]
  fn from(result: Result<T, E>) -> Self {
    match result {
      Success(value) => Ok(value),
      Failure(error) => Err(error),
    }
  }
}

impl<T: Display, E: Display> Display for Result<T, E> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Success(value) => write!(f, "Success({})", value),
      Failure(error) => write!(f, "Failure({})", error),
    }
  }
}


impl<T, E> Functor for Result<T, E> {
  type Inner = T;
  type Target<U> = Result<U, E>;

  #[inline]
  fn fmap<U>(self, f: impl FnOnce(T) -> U) -> Result<U, E> { Result::fmap(self, f) }
}

impl<T, E> Applicative for Result<T, E> {
  #[inline]
  fn pure(value: T) -> Self { Success(value) }

  #[inline]
  fn apply<U, F: FnOnce(T) -> U>(self, f: Result<F, E>) -> Result<U, E> { Result::apply(self, f) }
}

impl<T, E> Monad for Result<T, E> {
  #[inline]
  fn bind<U>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<U, E> { Result::bind(self, f) }
}

impl<T, E> Bifunctor for Result<T, E> {
  type Left = T;
  type Right = E;
  type Target<L, R> = Result<L, R>;

  #[inline]
  fn bimap<L, R>(self, f: impl FnOnce(T) -> L, g: impl FnOnce(E) -> R) -> Result<L, R> { Result::bimap(self, f, g) }
}

impl<T: Equality, E: Equality> Equality for Result<T, E> {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Success(a), Success(b)) => a.eq(b),
      (Failure(a), Failure(b)) => a.eq(b),
      _ => false,
    }
  }
}
