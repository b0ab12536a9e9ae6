use std::error::Error;

use tracing::debug;

use sparrow_core::app::env;
use sparrow_core::app::tracing::AppTracingBuilder;
use sparrow_core::kind::registry::Registry;

mod animal;
mod eq;
mod maybe_divide;
mod result_divide;

fn main() -> Result<(), Box<dyn Error>> {
  env::load_dotenv_into_env();
  let _tracing = AppTracingBuilder::default().build();

  let mut registry = Registry::new();

  section("cat and dog");
  animal::run(&mut registry)?;
  section("eq");
  eq::run(&mut registry)?;
  section("maybe divide");
  maybe_divide::run();
  section("result divide");
  result_divide::run();

  debug!(data_types = registry.len(), "done");
  Ok(())
}

fn section(title: &str) {
  println!();
  println!("# {}", title);
}
