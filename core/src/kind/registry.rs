use std::any::{Any, TypeId, type_name};
use std::sync::Arc;

use hashlink::LinkedHashMap;
use tracing::{debug, trace};

use crate::kind::data_type::{DataType, DataTypeDef};
use crate::kind::KindError;

/// Cache of built data types, keyed by concrete type and operation signature.
///
/// A data type is built at most once; later lookups return the same shared [`DataType`], so all values of one
/// concrete type dispatch through the same resolved table.
#[derive(Default)]
pub struct Registry {
  data_types: LinkedHashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl Registry {
  #[inline]
  pub fn new() -> Self { Self::default() }

  /// Builds `definition` and registers it for `R`, replacing a previously registered data type.
  pub fn register<R: 'static, A: 'static, O: 'static>(
    &mut self,
    definition: DataTypeDef<R, A, O>,
  ) -> Result<Arc<DataType<R, A, O>>, KindError> {
    let data_type = Arc::new(definition.build()?);
    debug!(data_type = data_type.name(), rust_type = type_name::<R>(), "registered data type");
    self.data_types.insert(TypeId::of::<DataType<R, A, O>>(), data_type.clone());
    Ok(data_type)
  }

  /// Returns the data type registered for `R`, building and registering the definition returned by `define` if there
  /// is none yet. `define` is not called when the data type is already registered.
  pub fn resolve<R: 'static, A: 'static, O: 'static>(
    &mut self,
    define: impl FnOnce() -> DataTypeDef<R, A, O>,
  ) -> Result<Arc<DataType<R, A, O>>, KindError> {
    if let Some(data_type) = self.get::<R, A, O>() {
      trace!(data_type = data_type.name(), "resolved cached data type");
      return Ok(data_type);
    }
    self.register(define())
  }

  /// Returns the data type registered for `R`, if any.
  pub fn get<R: 'static, A: 'static, O: 'static>(&self) -> Option<Arc<DataType<R, A, O>>> {
    self.data_types
      .get(&TypeId::of::<DataType<R, A, O>>())
      .and_then(|data_type| data_type.clone().downcast::<DataType<R, A, O>>().ok())
  }

  #[inline]
  pub fn contains<R: 'static, A: 'static, O: 'static>(&self) -> bool {
    self.data_types.contains_key(&TypeId::of::<DataType<R, A, O>>())
  }

  #[inline]
  pub fn len(&self) -> usize { self.data_types.len() }

  #[inline]
  pub fn is_empty(&self) -> bool { self.data_types.is_empty() }
}
