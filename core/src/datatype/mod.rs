pub mod maybe;
pub mod result;


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
  use super::maybe::{Just, Maybe, Nothing};
  use super::result::{Failure, Result, Success};

  #[test]
  fn externally_tagged_json() {
    assert_eq!(serde_json::to_string(&Just(5)).unwrap(), r#"{"Just":5}"#);
    assert_eq!(serde_json::to_string(&Nothing::<i32>).unwrap(), r#""Nothing""#);
    assert_eq!(serde_json::to_string(&Failure::<i32, _>("Division by zero")).unwrap(), r#"{"Failure":"Division by zero"}"#);

    let maybe: Maybe<u8> = serde_json::from_str(r#"{"Just":1}"#).unwrap();
    assert_eq!(maybe, Just(1));
    let result: Result<u8, String> = serde_json::from_str(r#"{"Success":2}"#).unwrap();
    assert_eq!(result, Success(2));
  }
}
