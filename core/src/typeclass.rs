//! Typeclasses as Rust traits.
//!
//! Required operations are trait methods without a body; operations with a default are trait methods with a body,
//! which implementors may override. This is the compile-time counterpart of the [kinds](crate::kind) mechanism: the
//! compiler resolves overrides once per implementing type, and a missing required operation is a compile error.

/// Types holding values that can be mapped over.
pub trait Functor: Sized {
  type Inner;
  /// The same structure holding a `U` instead of [`Inner`](Self::Inner).
  type Target<U>;

  fn fmap<U>(self, f: impl FnOnce(Self::Inner) -> U) -> Self::Target<U>;

  /// Replaces the held value with `value`, keeping the structure.
  #[inline]
  fn replace<U>(self, value: U) -> Self::Target<U> {
    self.fmap(|_| value)
  }
}

/// Functors that can lift plain values and apply wrapped functions.
pub trait Applicative: Functor {
  fn pure(value: Self::Inner) -> Self;

  fn apply<U, F: FnOnce(Self::Inner) -> U>(self, f: Self::Target<F>) -> Self::Target<U>;
}

/// Applicatives that can chain computations which themselves return wrapped values.
pub trait Monad: Applicative {
  fn bind<U>(self, f: impl FnOnce(Self::Inner) -> Self::Target<U>) -> Self::Target<U>;

  /// Sequences `next` after `self`, discarding the value of `self` but keeping its short-circuiting.
  #[inline]
  fn then<U>(self, next: Self::Target<U>) -> Self::Target<U> {
    self.bind(|_| next)
  }
}

/// Types with two independently mappable sides.
///
/// Only [bimap](Self::bimap) is required; [first](Self::first) and [second](Self::second) default to it.
pub trait Bifunctor: Sized {
  type Left;
  type Right;
  type Target<L, R>;

  fn bimap<L, R>(
    self,
    f: impl FnOnce(Self::Left) -> L,
    g: impl FnOnce(Self::Right) -> R,
  ) -> Self::Target<L, R>;

  #[inline]
  fn first<L>(self, f: impl FnOnce(Self::Left) -> L) -> Self::Target<L, Self::Right> {
    self.bimap(f, |right| right)
  }

  #[inline]
  fn second<R>(self, g: impl FnOnce(Self::Right) -> R) -> Self::Target<Self::Left, R> {
    self.bimap(|left| left, g)
  }
}

/// Equality defined by either [eq](Self::eq) or [neq](Self::neq).
///
/// Both operations default to the negation of the other, so implementors must override at least one of them;
/// overriding neither recurses without end.
pub trait Equality {
  #[inline]
  fn eq(&self, other: &Self) -> bool { !self.neq(other) }
  #[inline]
  fn neq(&self, other: &Self) -> bool { !self.eq(other) }
}

/// Returns whether `a` and `b` are equal according to their [`Equality`] implementation.
#[inline]
pub fn same<T: Equality + ?Sized>(a: &T, b: &T) -> bool {
  a.eq(b)
}
