use sparrow_core::kind::{KindDef, KindError};
use sparrow_core::kind::data_type::DataTypeDef;
use sparrow_core::kind::registry::Registry;
use sparrow_core::typeclass::{Equality, same};

/// Integer compared through the dynamic `Eq` kind.
pub struct IntEq(i32);

fn eq_kind() -> KindDef<IntEq, &'static IntEq, bool> {
  KindDef::<IntEq, &'static IntEq, bool>::new("Eq")
    .with_default("eq", |this, other| matches!(this.call("neq", other), Ok(false)))
    .with_default("neq", |this, other| matches!(this.call("eq", other), Ok(false)))
}

fn int_eq() -> DataTypeDef<IntEq, &'static IntEq, bool> {
  DataTypeDef::new("IntEq")
    .with_kind(eq_kind())
    .with_override("eq", |this, other| this.0 == other.0)
}

/// Integer compared through the static [`Equality`] trait.
struct StaticIntEq(i32);
impl Equality for StaticIntEq {
  fn eq(&self, other: &Self) -> bool { self.0 == other.0 }
}

static ONE: IntEq = IntEq(1);
static TWO: IntEq = IntEq(2);

pub fn run(registry: &mut Registry) -> Result<(), KindError> {
  let int_eq = registry.resolve(int_eq)?;
  println!("{}", int_eq.call(&ONE, "eq", &ONE)?);
  println!("{}", int_eq.call(&ONE, "eq", &TWO)?);
  println!("{}", int_eq.call(&ONE, "neq", &TWO)?);

  println!("{}", same(&StaticIntEq(1), &StaticIntEq(1)));
  println!("{}", same(&StaticIntEq(1), &StaticIntEq(2)));
  Ok(())
}
