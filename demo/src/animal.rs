use sparrow_core::kind::{KindDef, KindError};
use sparrow_core::kind::data_type::DataTypeDef;
use sparrow_core::kind::registry::Registry;

pub struct Dog;
pub struct Cat;

fn speaker<R>() -> KindDef<R, (), String> {
  KindDef::<R, (), String>::new("Speaker").with_required("speak")
}

fn runner<R>() -> KindDef<R, (), String> {
  KindDef::<R, (), String>::new("Runner")
    .with_default("start_running", |_, ()| "I'm running".to_owned())
    .with_default("stop_running", |_, ()| "I'm not running".to_owned())
}

fn animal<R>() -> KindDef<R, (), String> {
  KindDef::<R, (), String>::new("Animal").extending(speaker()).extending(runner())
}

fn dog() -> DataTypeDef<Dog, (), String> {
  DataTypeDef::new("Dog")
    .with_kind(animal())
    .with_override("speak", |_, ()| "Woof woof".to_owned())
}

fn cat() -> DataTypeDef<Cat, (), String> {
  DataTypeDef::new("Cat")
    .with_kind(animal())
    .with_override("speak", |_, ()| "Meow...".to_owned())
    .with_override("start_running", |_, ()| "I'm a cat, I won't run".to_owned())
    .with_override("stop_running", |_, ()| "You can't stop me".to_owned())
}

pub fn run(registry: &mut Registry) -> Result<(), KindError> {
  let dog_type = registry.resolve(dog)?;
  let cat_type = registry.resolve(cat)?;
  let dog = dog_type.bind(&Dog);
  let cat = cat_type.bind(&Cat);

  println!("{}", dog.call("speak", ())?);
  println!("{}", cat.call("speak", ())?);

  println!("{}", dog.call("start_running", ())?);
  println!("{}", dog.call("stop_running", ())?);

  println!("{}", cat.call("start_running", ())?);
  println!("{}", cat.call("stop_running", ())?);
  Ok(())
}
