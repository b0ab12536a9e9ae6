use std::path::Path;

/// Loads a `.env` file from the current directory or its parents into the process environment. A missing `.env` file
/// is not an error.
pub fn load_dotenv_into_env() {
  match dotenvy::dotenv() {
    Ok(path) => tracing::debug!(path = %path.display(), "loaded environment from .env file"),
    Err(e) if e.not_found() => {}
    Err(e) => tracing::warn!(%e, "failed to load .env file"),
  }
}

/// Loads the `.env` file at `path` into the process environment.
pub fn load_dotenv_file_into_env(path: impl AsRef<Path>) -> Result<(), dotenvy::Error> {
  dotenvy::from_path(path.as_ref())?;
  tracing::debug!(path = %path.as_ref().display(), "loaded environment from file");
  Ok(())
}

/// Returns the value of environment variable `key`, if it is set and valid unicode.
#[inline]
pub fn var(key: &str) -> Option<String> {
  dotenvy::var(key).ok()
}
