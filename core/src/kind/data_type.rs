use std::collections::{HashMap, HashSet};
use std::fmt::{self, Debug, Formatter};
use std::ops::Deref;

use hashlink::LinkedHashMap;
use tracing::{debug, trace};

use crate::kind::{KindDef, KindError, Operation, operation};

/// Definition of a data type: the kinds it conforms to, in declaration order, and its own operation overrides.
pub struct DataTypeDef<R, A, O> {
  name: &'static str,
  kinds: Vec<KindDef<R, A, O>>,
  overrides: LinkedHashMap<&'static str, Operation<R, A, O>>,
}

impl<R, A, O> DataTypeDef<R, A, O> {
  #[inline]
  pub fn new(name: &'static str) -> Self {
    Self { name, kinds: Vec::new(), overrides: LinkedHashMap::new() }
  }

  #[inline]
  pub fn with_kind(mut self, kind: KindDef<R, A, O>) -> Self {
    self.kinds.push(kind);
    self
  }

  /// Overrides operation `name` with `body`, taking precedence over any default of the composed kinds.
  #[inline]
  pub fn with_override(
    mut self,
    name: &'static str,
    body: impl Fn(Receiver<'_, R, A, O>, A) -> O + Send + Sync + 'static
  ) -> Self {
    self.overrides.insert(name, operation(body));
    self
  }

  #[inline]
  pub fn name(&self) -> &'static str { self.name }

  /// Resolves every operation of every composed kind to a single body.
  ///
  /// Overrides win over defaults. Along an extension chain, the most derived kind declaring an operation shadows the
  /// kinds it extends, so a sub-kind can refine or re-require an inherited operation. Among the remaining, unrelated,
  /// declaring kinds an operation without an override must have exactly one default: none is a
  /// [`KindError::MissingOperation`], several is a [`KindError::ConflictingDefaults`].
  ///
  /// A kind reachable through more than one path is considered once. Two different kinds sharing a name are a
  /// [`KindError::DuplicateKind`].
  pub fn build(self) -> Result<DataType<R, A, O>, KindError> {
    let data_type = self.name;

    let mut kinds = Vec::new();
    let mut ancestors: HashMap<&'static str, HashSet<&'static str>> = HashMap::new();
    let mut declarations: LinkedHashMap<&'static str, Vec<(&'static str, Option<Operation<R, A, O>>)>> = LinkedHashMap::new();
    let mut duplicate = None;
    {
      let mut visited: HashMap<&'static str, &KindDef<R, A, O>> = HashMap::new();
      for kind in &self.kinds {
        kind.visit(&mut |kind| {
          if let Some(seen) = visited.get(kind.name()) {
            if duplicate.is_none() && !seen.same_as(kind) {
              duplicate = Some(kind.name());
            }
            return;
          }
          visited.insert(kind.name(), kind);
          kinds.push(kind.name());
          let mut extended = HashSet::new();
          kind.collect_ancestors(&mut extended);
          ancestors.insert(kind.name(), extended);
          for (operation, default) in kind.operations() {
            declarations.entry(operation).or_insert_with(Vec::new).push((kind.name(), default.cloned()));
          }
        });
      }
    }
    if let Some(kind) = duplicate {
      return Err(KindError::DuplicateKind { data_type, kind });
    }

    for &operation in self.overrides.keys() {
      if !declarations.contains_key(operation) {
        return Err(KindError::UnknownOverride { data_type, operation });
      }
    }

    let mut overrides = self.overrides;
    let mut table = LinkedHashMap::with_capacity(declarations.len());
    for (operation, mut declared_by) in declarations {
      if let Some(body) = overrides.remove(operation) {
        trace!(data_type, operation, "using override");
        table.insert(operation, Resolved { body, origin: Origin::Override });
        continue;
      }
      let shadowed: HashSet<&'static str> = declared_by.iter()
        .filter_map(|(kind, _)| ancestors.get(kind))
        .flat_map(|extended| extended.iter().copied())
        .collect();
      declared_by.retain(|(kind, _)| !shadowed.contains(kind));
      let first_declared_by = declared_by.first().map_or(data_type, |(kind, _)| *kind);

      let mut defaults = declared_by.into_iter().filter_map(|(kind, default)| default.map(|body| (kind, body)));
      match (defaults.next(), defaults.next()) {
        (Some((kind, body)), None) => {
          trace!(data_type, operation, kind, "using default");
          table.insert(operation, Resolved { body, origin: Origin::Default(kind) });
        }
        (Some((first, _)), Some((second, _))) => {
          return Err(KindError::ConflictingDefaults { data_type, operation, first, second });
        }
        (None, _) => {
          return Err(KindError::MissingOperation { data_type, kind: first_declared_by, operation });
        }
      }
    }

    debug!(data_type, ?kinds, operations = table.len(), "built data type");
    Ok(DataType { name: data_type, kinds, table })
  }
}


/// Where the body of a resolved operation comes from.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Origin {
  /// Supplied by the data type itself.
  Override,
  /// Default body of the named kind.
  Default(&'static str),
}

struct Resolved<R, A, O> {
  body: Operation<R, A, O>,
  origin: Origin,
}

/// Data type with a resolved dispatch table: exactly one body per operation of its kinds.
pub struct DataType<R, A, O> {
  name: &'static str,
  kinds: Vec<&'static str>,
  table: LinkedHashMap<&'static str, Resolved<R, A, O>>,
}

impl<R, A, O> DataType<R, A, O> {
  #[inline]
  pub fn name(&self) -> &'static str { self.name }

  /// Names of all kinds this data type conforms to, including extended kinds.
  #[inline]
  pub fn kinds(&self) -> impl Iterator<Item=&'static str> + '_ { self.kinds.iter().copied() }

  #[inline]
  pub fn conforms_to(&self, kind: &str) -> bool { self.kinds.iter().any(|k| *k == kind) }

  #[inline]
  pub fn operations(&self) -> impl Iterator<Item=(&'static str, Origin)> + '_ {
    self.table.iter().map(|(name, resolved)| (*name, resolved.origin))
  }

  #[inline]
  pub fn origin(&self, operation: &str) -> Option<Origin> {
    self.table.get(operation).map(|resolved| resolved.origin)
  }


  /// Binds `value` as the receiver of this data type's operations.
  #[inline]
  pub fn bind<'a>(&'a self, value: &'a R) -> Receiver<'a, R, A, O> {
    Receiver { data_type: self, value }
  }

  /// Calls `operation` with `value` as receiver.
  #[inline]
  pub fn call(&self, value: &R, operation: &str, argument: A) -> Result<O, KindError> {
    self.bind(value).call(operation, argument)
  }
}

impl<R, A, O> Debug for DataType<R, A, O> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_struct("DataType")
      .field("name", &self.name)
      .field("kinds", &self.kinds)
      .field("operations", &self.operations().collect::<Vec<_>>())
      .finish()
  }
}


/// A value bound to its data type, through which operations dispatch.
///
/// Operation bodies receive a receiver, so a default body can call other operations of the same data type and
/// observe their overrides. Dereferences to the bound value.
pub struct Receiver<'a, R, A, O> {
  data_type: &'a DataType<R, A, O>,
  value: &'a R,
}

impl<'a, R, A, O> Receiver<'a, R, A, O> {
  #[inline]
  pub fn value(&self) -> &'a R { self.value }

  #[inline]
  pub fn data_type(&self) -> &'a DataType<R, A, O> { self.data_type }

  pub fn call(&self, operation: &str, argument: A) -> Result<O, KindError> {
    let resolved = self.data_type.table.get(operation).ok_or_else(|| KindError::UnknownOperation {
      data_type: self.data_type.name,
      operation: operation.to_owned(),
    })?;
    Ok((resolved.body)(*self, argument))
  }
}

impl<R, A, O> Clone for Receiver<'_, R, A, O> {
  #[inline]
  fn clone(&self) -> Self { *self }
}
impl<R, A, O> Copy for Receiver<'_, R, A, O> {}

impl<R, A, O> Deref for Receiver<'_, R, A, O> {
  type Target = R;
  #[inline]
  fn deref(&self) -> &R { self.value }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Clone, Copy, Debug)]
  struct Counter(u32);

  fn counting() -> KindDef<Counter, u32, u32> {
    KindDef::<Counter, u32, u32>::new("Counting")
      .with_required("count")
      .with_default("count_twice", |this, step| {
        this.call("count", step).unwrap_or_default() + this.call("count", step).unwrap_or_default()
      })
  }

  #[test]
  fn override_wins_and_default_dispatches_through_overrides() {
    let data_type = DataTypeDef::new("Counter")
      .with_kind(counting())
      .with_override("count", |this, step| this.0 + step)
      .build()
      .unwrap();
    assert_eq!(data_type.call(&Counter(1), "count", 2), Ok(3));
    assert_eq!(data_type.call(&Counter(1), "count_twice", 2), Ok(6));
    assert_eq!(data_type.origin("count"), Some(Origin::Override));
    assert_eq!(data_type.origin("count_twice"), Some(Origin::Default("Counting")));
    assert!(data_type.conforms_to("Counting"));
  }

  #[test]
  fn missing_required_operation_fails_at_build() {
    let error = DataTypeDef::new("Counter").with_kind(counting()).build().unwrap_err();
    assert_eq!(error, KindError::MissingOperation { data_type: "Counter", kind: "Counting", operation: "count" });
  }

  #[test]
  fn unknown_override_fails_at_build() {
    let error = DataTypeDef::new("Counter")
      .with_kind(counting())
      .with_override("count", |this, _| this.0)
      .with_override("reset", |_, _| 0)
      .build()
      .unwrap_err();
    assert_eq!(error, KindError::UnknownOverride { data_type: "Counter", operation: "reset" });
  }

  #[test]
  fn unknown_operation_fails_at_call() {
    let data_type = DataTypeDef::new("Counter")
      .with_kind(counting())
      .with_override("count", |this, _| this.0)
      .build()
      .unwrap();
    assert_eq!(
      data_type.call(&Counter(0), "reset", 0),
      Err(KindError::UnknownOperation { data_type: "Counter", operation: "reset".to_owned() })
    );
  }

  #[test]
  fn conflicting_defaults_need_override() {
    let left = KindDef::<Counter, u32, u32>::new("Left").with_default("count", |_, _| 1);
    let right = KindDef::<Counter, u32, u32>::new("Right").with_default("count", |_, _| 2);

    let error = DataTypeDef::new("Counter")
      .with_kind(left.clone())
      .with_kind(right.clone())
      .build()
      .unwrap_err();
    assert_eq!(error, KindError::ConflictingDefaults { data_type: "Counter", operation: "count", first: "Left", second: "Right" });

    let data_type = DataTypeDef::new("Counter")
      .with_kind(left)
      .with_kind(right)
      .with_override("count", |_, _| 3)
      .build()
      .unwrap();
    assert_eq!(data_type.call(&Counter(0), "count", 0), Ok(3));
  }

  #[test]
  fn required_declaration_is_satisfied_by_other_kinds_default() {
    let required = KindDef::<Counter, u32, u32>::new("Required").with_required("count");
    let defaulted = KindDef::<Counter, u32, u32>::new("Defaulted").with_default("count", |this, _| this.0 * 10);
    let data_type = DataTypeDef::new("Counter")
      .with_kind(required)
      .with_kind(defaulted)
      .build()
      .unwrap();
    assert_eq!(data_type.call(&Counter(4), "count", 0), Ok(40));
    assert_eq!(data_type.origin("count"), Some(Origin::Default("Defaulted")));
  }

  #[test]
  fn shared_kind_is_composed_once() {
    let base = KindDef::<Counter, u32, u32>::new("Base").with_default("count", |this, _| this.0);
    let data_type = DataTypeDef::new("Counter")
      .with_kind(KindDef::new("Left").extending(base.clone()))
      .with_kind(KindDef::new("Right").extending(base))
      .build()
      .unwrap();
    assert_eq!(data_type.kinds().collect::<Vec<_>>(), ["Left", "Base", "Right"]);
    assert_eq!(data_type.call(&Counter(7), "count", 0), Ok(7));
  }

  #[test]
  fn sub_kind_default_refines_extended_default() {
    let base = KindDef::<Counter, u32, u32>::new("Base").with_default("count", |this, _| this.0);
    let refined = KindDef::<Counter, u32, u32>::new("Refined")
      .extending(base)
      .with_default("count", |this, step| this.0 + step);
    let data_type = DataTypeDef::new("Counter").with_kind(refined).build().unwrap();
    assert_eq!(data_type.call(&Counter(7), "count", 1), Ok(8));
    assert_eq!(data_type.origin("count"), Some(Origin::Default("Refined")));
  }

  #[test]
  fn sub_kind_can_require_extended_default_again() {
    let base = KindDef::<Counter, u32, u32>::new("Base").with_default("count", |this, _| this.0);
    let strict = KindDef::<Counter, u32, u32>::new("Strict").extending(base).with_required("count");
    let error = DataTypeDef::new("Counter").with_kind(strict).build().unwrap_err();
    assert_eq!(error, KindError::MissingOperation { data_type: "Counter", kind: "Strict", operation: "count" });
  }

  #[test]
  fn different_kinds_with_the_same_name_are_rejected() {
    let counting_again = KindDef::<Counter, u32, u32>::new("Counting").with_required("count").with_required("reset");
    let error = DataTypeDef::new("Counter")
      .with_kind(counting())
      .with_kind(KindDef::new("Other").extending(counting_again))
      .with_override("count", |this, _| this.0)
      .build()
      .unwrap_err();
    assert_eq!(error, KindError::DuplicateKind { data_type: "Counter", kind: "Counting" });
    assert_eq!(error.to_string(), "data type `Counter` composes two different kinds named `Counting`");
  }
}
