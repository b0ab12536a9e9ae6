use sparrow_core::datatype::maybe::{Just, Maybe, Nothing};
use sparrow_core::decorator::wrap::maybe;

fn divide(a: i32, b: i32) -> Maybe<i32> {
  if b == 0 {
    return Nothing;
  }
  Just(a / b)
}

pub fn run() {
  println!("{}", divide(10, 0));
  println!("{}", divide(10, 2));

  let divide = maybe(|(a, b): (i32, i32)| if b != 0 { Some(a / b) } else { None });
  println!("{}", divide((10, 0)));
  println!("{}", divide((10, 2)));

  let result = divide((10, 2));
  println!("{}", result.fmap(|x| x * 2));
  println!("{}", result.apply(Just(|x: i32| x * 2)));
  println!("{}", result.bind(|x| Just(x * 2)));

  println!("{}", Maybe::pure(1));
}
