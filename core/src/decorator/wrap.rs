//! Adapters turning plain functions into functions that return [`Maybe`] or [`Result`].
//!
//! Functions taking several arguments are adapted by taking a tuple.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::result::Result as StdResult;

use thiserror::Error;
use tracing::warn;

use crate::datatype::maybe::Maybe;
use crate::datatype::result::{Failure, Result, Success};

/// Values convertible into [`Maybe`], where absence maps to [`Nothing`](Maybe::Nothing).
pub trait IntoMaybe<T> {
  fn into_maybe(self) -> Maybe<T>;
}

impl<T> IntoMaybe<T> for Option<T> {
  #[inline]
  fn into_maybe(self) -> Maybe<T> { self.into() }
}

impl<T> IntoMaybe<T> for Maybe<T> {
  #[inline]
  fn into_maybe(self) -> Maybe<T> { self }
}

/// Adapts `f`, which returns an optional value, into a function returning [`Maybe`]: `None` becomes [`Nothing`](Maybe::Nothing),
/// `Some(v)` becomes `Just(v)`.
#[inline]
pub fn maybe<A, T, N: IntoMaybe<T>>(f: impl Fn(A) -> N) -> impl Fn(A) -> Maybe<T> {
  move |argument| f(argument).into_maybe()
}

/// Adapts `f`, which returns a standard result, into a function returning [`Result`]: `Err(e)` becomes
/// `Failure(e)`, `Ok(v)` becomes `Success(v)`.
#[inline]
pub fn result<A, T, E>(f: impl Fn(A) -> StdResult<T, E>) -> impl Fn(A) -> Result<T, E> {
  move |argument| f(argument).into()
}

/// Error captured by [`catching`].
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum Caught {
  #[error("panicked: {0}")]
  Panic(String),
}

impl Caught {
  fn from_panic(payload: Box<dyn Any + Send>) -> Self {
    let message = match payload.downcast::<String>() {
      Ok(message) => *message,
      Err(payload) => match payload.downcast::<&'static str>() {
        Ok(message) => (*message).to_owned(),
        Err(_) => "unknown panic payload".to_owned(),
      },
    };
    Self::Panic(message)
  }
}

/// Adapts `f`, whose body may panic, into a function returning [`Result`]: a normal return becomes `Success(v)`, and a
/// panic is captured as `Failure(Caught::Panic(message))` instead of unwinding further.
///
/// The process-wide panic hook still runs for captured panics.
pub fn catching<A, T>(f: impl Fn(A) -> T) -> impl Fn(A) -> Result<T, Caught> {
  move |argument| match catch_unwind(AssertUnwindSafe(|| f(argument))) {
    Ok(value) => Success(value),
    Err(payload) => {
      let caught = Caught::from_panic(payload);
      warn!(%caught, "captured panic as failure");
      Failure(caught)
    }
  }
}

/// Calls `f` once, capturing a panic as a failure. See [`catching`].
#[inline]
pub fn catch<T>(f: impl FnOnce() -> T) -> Result<T, Caught> {
  match catch_unwind(AssertUnwindSafe(f)) {
    Ok(value) => Success(value),
    Err(payload) => {
      let caught = Caught::from_panic(payload);
      warn!(%caught, "captured panic as failure");
      Failure(caught)
    }
  }
}

/// Calls `f` once, converting its optional return value into a [`Maybe`]. See [`maybe`].
#[inline]
pub fn maybe_once<T, N: IntoMaybe<T>>(f: impl FnOnce() -> N) -> Maybe<T> {
  f().into_maybe()
}
