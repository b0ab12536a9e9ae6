use std::panic;

use sparrow_core::datatype::result::{Failure, Result, Success};
use sparrow_core::decorator::wrap::catching;

fn divide(a: i32, b: i32) -> Result<i32, &'static str> {
  if b == 0 {
    return Failure("Division by zero");
  }
  Success(a / b)
}

/// Runs `f` with the panic hook silenced, so panics captured by [`catching`] do not print. Restores the previous hook.
fn quiet_panics<T>(f: impl FnOnce() -> T) -> T {
  let previous = panic::take_hook();
  panic::set_hook(Box::new(|_| {}));
  let value = f();
  panic::set_hook(previous);
  value
}

pub fn run() {
  println!("{}", divide(10, 0));
  println!("{}", divide(10, 2));

  let divide_v2 = catching(|(a, b): (i32, i32)| a / b);
  println!("{}", quiet_panics(|| divide_v2((10, 0))));
  println!("{}", divide_v2((10, 2)));

  let result = quiet_panics(|| divide_v2((10, 0)));
  println!("{}", result.clone().fmap(|x| x * 2));

  println!("{}", divide(10, 2).fmap(|x| x * 2));

  let parity = divide(10, 2)
    .fmap(|x| x * 2)
    .fmap(|x| x + 1)
    .fmap(|x| x % 2)
    .fmap(|x| if x == 0 { "Even" } else { "Odd" })
    .unwrap_or("unknown");
  println!("{}", parity);

  println!("{}", result.clone().first(|x| x * 2));
  println!("{}", result.clone().second(|caught| format!("{:?}", caught)));
  println!("{}", result.bimap(|x| x * 2, |caught| format!("{:?}", caught)));
}
