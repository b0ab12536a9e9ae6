//! Kinds: named sets of operations that data types conform to.
//!
//! A [`KindDef`] declares operations that are either required, or carry a default body. A
//! [`DataTypeDef`](data_type::DataTypeDef) composes kinds and supplies overrides, and is
//! [built](data_type::DataTypeDef::build) into a [`DataType`](data_type::DataType) holding one resolved body per
//! operation. Conformance is checked when building, never when calling. The [`Registry`](registry::Registry) caches
//! built data types so each concrete type is resolved once.
//!
//! All operations of one data type share a signature: they receive a [`Receiver`](data_type::Receiver) bound to a
//! `&R`, an argument `A`, and produce an `O`. Use `()` for operations without an argument.

use std::collections::HashSet;
use std::sync::Arc;

use hashlink::LinkedHashMap;
use thiserror::Error;

use crate::kind::data_type::Receiver;

pub mod data_type;
pub mod registry;

/// Body of an operation.
pub type Operation<R, A, O> = Arc<dyn Fn(Receiver<'_, R, A, O>, A) -> O + Send + Sync>;

/// Creates an [`Operation`] from a closure.
#[inline]
pub fn operation<R, A, O>(body: impl Fn(Receiver<'_, R, A, O>, A) -> O + Send + Sync + 'static) -> Operation<R, A, O> {
  Arc::new(body)
}

/// Errors raised while composing a data type, or when calling an operation it does not have.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum KindError {
  #[error("data type `{data_type}` does not implement operation `{operation}` required by kind `{kind}`")]
  MissingOperation { data_type: &'static str, kind: &'static str, operation: &'static str },
  #[error("data type `{data_type}` inherits defaults for operation `{operation}` from both kind `{first}` and kind `{second}`; override the operation to resolve the conflict")]
  ConflictingDefaults { data_type: &'static str, operation: &'static str, first: &'static str, second: &'static str },
  #[error("data type `{data_type}` overrides operation `{operation}`, which none of its kinds declare")]
  UnknownOverride { data_type: &'static str, operation: &'static str },
  #[error("data type `{data_type}` composes two different kinds named `{kind}`")]
  DuplicateKind { data_type: &'static str, kind: &'static str },
  #[error("data type `{data_type}` has no operation `{operation}`")]
  UnknownOperation { data_type: &'static str, operation: String },
}

/// Definition of a kind: a name, the kinds it extends, and its operations in declaration order.
pub struct KindDef<R, A, O> {
  name: &'static str,
  extends: Vec<KindDef<R, A, O>>,
  operations: LinkedHashMap<&'static str, Option<Operation<R, A, O>>>,
}

impl<R, A, O> KindDef<R, A, O> {
  #[inline]
  pub fn new(name: &'static str) -> Self {
    Self { name, extends: Vec::new(), operations: LinkedHashMap::new() }
  }

  /// Declares operation `name` without a default; every conforming data type must override it.
  ///
  /// Declaring a name this kind already declares replaces the earlier declaration, keeping its position.
  #[inline]
  pub fn with_required(mut self, name: &'static str) -> Self {
    self.operations.insert(name, None);
    self
  }

  /// Declares operation `name` with a `default` body, used by conforming data types that do not override it.
  ///
  /// Declaring a name this kind already declares replaces the earlier declaration, keeping its position.
  #[inline]
  pub fn with_default(
    mut self,
    name: &'static str,
    default: impl Fn(Receiver<'_, R, A, O>, A) -> O + Send + Sync + 'static
  ) -> Self {
    self.operations.insert(name, Some(operation(default)));
    self
  }

  /// Extends `kind`: data types conforming to this kind also conform to `kind`.
  #[inline]
  pub fn extending(mut self, kind: KindDef<R, A, O>) -> Self {
    self.extends.push(kind);
    self
  }


  #[inline]
  pub fn name(&self) -> &'static str { self.name }

  #[inline]
  pub fn extends(&self) -> impl Iterator<Item=&KindDef<R, A, O>> { self.extends.iter() }

  /// Iterates over the operations this kind itself declares, with their default body if any.
  #[inline]
  pub fn operations(&self) -> impl Iterator<Item=(&'static str, Option<&Operation<R, A, O>>)> {
    self.operations.iter().map(|(name, default)| (*name, default.as_ref()))
  }

  #[inline]
  pub fn has_default(&self, operation: &str) -> bool {
    matches!(self.operations.get(operation), Some(Some(_)))
  }

  /// Whether `other` is this kind: same name, same declarations sharing the same default bodies, and the same extended
  /// kinds. Clones of a kind are the same kind; separately defined kinds with equal names are not.
  pub fn same_as(&self, other: &KindDef<R, A, O>) -> bool {
    self.name == other.name
      && self.operations.len() == other.operations.len()
      && self.operations.iter().zip(other.operations.iter()).all(|((name, default), (other_name, other_default))| {
        name == other_name && match (default, other_default) {
          (Some(default), Some(other_default)) => Arc::ptr_eq(default, other_default),
          (None, None) => true,
          _ => false,
        }
      })
      && self.extends.len() == other.extends.len()
      && self.extends.iter().zip(other.extends.iter()).all(|(kind, other_kind)| kind.same_as(other_kind))
  }

  /// Adds the names of all kinds this kind extends, directly or indirectly, to `ancestors`.
  pub(crate) fn collect_ancestors(&self, ancestors: &mut HashSet<&'static str>) {
    for kind in &self.extends {
      if ancestors.insert(kind.name) {
        kind.collect_ancestors(ancestors);
      }
    }
  }

  /// Visits this kind and then, depth-first, the kinds it extends.
  pub(crate) fn visit<'k>(&'k self, visitor: &mut impl FnMut(&'k KindDef<R, A, O>)) {
    visitor(self);
    for kind in &self.extends {
      kind.visit(visitor);
    }
  }
}

impl<R, A, O> Clone for KindDef<R, A, O> {
  fn clone(&self) -> Self {
    Self { name: self.name, extends: self.extends.clone(), operations: self.operations.clone() }
  }
}

impl<R, A, O> std::fmt::Debug for KindDef<R, A, O> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("KindDef")
      .field("name", &self.name)
      .field("extends", &self.extends)
      .field("operations", &self.operations.keys().collect::<Vec<_>>())
      .finish()
  }
}
