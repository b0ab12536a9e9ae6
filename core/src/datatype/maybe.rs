use std::fmt::{self, Display, Formatter};

use crate::datatype::result::Result;
use crate::typeclass::{Applicative, Equality, Functor, Monad};

/// Optional value: either [`Just`](Maybe::Just) a value, or [`Nothing`](Maybe::Nothing).
///
/// Absence is an ordinary value; none of the operations on `Maybe` panic or return errors.
#[derive(Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
  Just(T),
  #[default]
  Nothing,
}

pub use self::Maybe::{Just, Nothing};

impl<T> Maybe<T> {
  /// Creates a present value.
  #[inline]
  pub fn pure(value: T) -> Self { Just(value) }

  #[inline]
  pub fn is_just(&self) -> bool { matches!(self, Just(_)) }
  #[inline]
  pub fn is_nothing(&self) -> bool { matches!(self, Nothing) }

  /// Returns a reference to the value if present.
  #[inline]
  pub fn value(&self) -> Option<&T> {
    match self {
      Just(value) => Some(value),
      Nothing => None,
    }
  }

  #[inline]
  pub fn as_ref(&self) -> Maybe<&T> {
    match self {
      Just(value) => Just(value),
      Nothing => Nothing,
    }
  }


  /// Maps the value with `f` if present. `f` is not called on [`Nothing`].
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
    match self {
      Just(value) => Just(f(value)),
      Nothing => Nothing,
    }
  }

  /// Alias of [map](Self::map), named after the [`Functor`] operation.
  #[inline]
  pub fn fmap<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> { self.map(f) }

  /// Applies the wrapped function to the value if both are present.
  #[inline]
  pub fn apply<U, F: FnOnce(T) -> U>(self, f: Maybe<F>) -> Maybe<U> {
    match (self, f) {
      (Just(value), Just(f)) => Just(f(value)),
      _ => Nothing,
    }
  }

  /// Chains `f`, which already returns a `Maybe`, without wrapping its result again.
  #[inline]
  pub fn bind<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
    match self {
      Just(value) => f(value),
      Nothing => Nothing,
    }
  }


  #[inline]
  pub fn or(self, other: Maybe<T>) -> Maybe<T> {
    match self {
      Just(value) => Just(value),
      Nothing => other,
    }
  }

  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Just(value) => value,
      Nothing => default,
    }
  }

  #[inline]
  pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
    match self {
      Just(value) => value,
      Nothing => f(),
    }
  }

  /// Converts into a [`Result`], using `error` when absent.
  #[inline]
  pub fn ok_or<E>(self, error: E) -> Result<T, E> {
    match self {
      Just(value) => Result::Success(value),
      Nothing => Result::Failure(error),
    }
  }
}

impl<T> From<Option<T>> for Maybe<T> {
  #[inline]
  fn from(option: Option<T>) -> Self {
    match option {
      Some(value) => Just(value),
      None => Nothing,
    }
  }
}
impl<T> From<Maybe<T>> for Option<T> {
  #[inline]
  fn from(maybe: Maybe<T>) -> Self {
    match maybe {
      Just(value) => Some(value),
      Nothing => None,
    }
  }
}

impl<T: Display> Display for Maybe<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Just(value) => write!(f, "Just({})", value),
      Nothing => f.write_str("Nothing()"),
    }
  }
}


impl<T> Functor for Maybe<T> {
  type Inner = T;
  type Target<U> = Maybe<U>;

  #[inline]
  fn fmap<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> { Maybe::map(self, f) }
}

impl<T> Applicative for Maybe<T> {
  #[inline]
  fn pure(value: T) -> Self { Just(value) }

  #[inline]
  fn apply<U, F: FnOnce(T) -> U>(self, f: Maybe<F>) -> Maybe<U> { Maybe::apply(self, f) }
}

impl<T> Monad for Maybe<T> {
  #[inline]
  fn bind<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> { Maybe::bind(self, f) }
}

impl<T: Equality> Equality for Maybe<T> {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Just(a), Just(b)) => a.eq(b),
      (Nothing, Nothing) => true,
      _ => false,
    }
  }
}


#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;

  fn divide(a: i32, b: i32) -> Maybe<i32> {
    if b == 0 {
      return Nothing;
    }
    Just(a / b)
  }

  #[test]
  fn map_present_applies_function() {
    assert_eq!(Just(5).map(|x| x * 2), Just(10));
    assert_eq!(Just("a").map(str::len), Just(1));
  }

  #[test]
  fn map_absent_never_calls_function() {
    let called = Cell::new(false);
    let nothing: Maybe<i32> = Nothing;
    let mapped = nothing.map(|x| {
      called.set(true);
      x * 2
    });
    assert_eq!(mapped, Nothing);
    assert!(!called.get());
  }

  #[test]
  fn apply_requires_both_present() {
    assert_eq!(Just(5).apply(Just(|x: i32| x * 2)), Just(10));
    assert_eq!(Nothing.apply(Just(|x: i32| x * 2)), Nothing);
    assert_eq!(Just(5).apply::<i32, fn(i32) -> i32>(Nothing), Nothing);
  }

  #[test]
  fn bind_does_not_double_wrap() {
    assert_eq!(Just(5).bind(|x| Just(x * 2)), Just(10));
    assert_eq!(Just(5).bind(|_| Nothing::<i32>), Nothing);
    assert_eq!(Nothing::<i32>.bind(|x| Just(x * 2)), Nothing);
  }

  #[test]
  fn pure_bind_left_identity() {
    let f = |x: i32| divide(100, x);
    for v in [-3, 0, 1, 7] {
      assert_eq!(Maybe::pure(v).bind(f), f(v));
    }
  }

  #[test]
  fn divide_example() {
    assert_eq!(divide(10, 0), Nothing);
    assert_eq!(divide(10, 2), Just(5));
    assert_eq!(divide(10, 2).to_string(), "Just(5)");
    assert_eq!(divide(10, 0).to_string(), "Nothing()");
    assert_eq!(Maybe::pure(1).to_string(), "Just(1)");
  }

  #[test]
  fn option_conversions() {
    assert_eq!(Maybe::from(Some(3)), Just(3));
    assert_eq!(Maybe::<i32>::from(None), Nothing);
    assert_eq!(Option::from(Just(3)), Some(3));
    assert_eq!(Just(3).ok_or("none"), Result::Success(3));
    assert_eq!(Nothing::<i32>.ok_or("none"), Result::Failure("none"));
    assert_eq!(Nothing.or(Just(1)), Just(1));
    assert_eq!(Nothing.unwrap_or_else(|| 4), 4);
  }

  #[test]
  fn equality_follows_payload() {
    #[derive(Clone, Copy)]
    struct Mod3(i32);
    impl Equality for Mod3 {
      fn eq(&self, other: &Self) -> bool { self.0 % 3 == other.0 % 3 }
    }
    assert!(Equality::eq(&Just(Mod3(1)), &Just(Mod3(4))));
    assert!(Equality::neq(&Just(Mod3(1)), &Nothing));
    assert!(Equality::eq(&Nothing::<Mod3>, &Nothing));
  }

  #[test]
  fn replace_and_then_keep_absence() {
    assert_eq!(Just(1).replace("two"), Just("two"));
    assert_eq!(Nothing::<i32>.replace("two"), Nothing);
    assert_eq!(Just(1).then(Just(2)), Just(2));
    assert_eq!(Just(1).then(Nothing::<i32>), Nothing);
    assert_eq!(Nothing::<i32>.then(Just(2)), Nothing);
  }
}
