use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the console log filter, in [`EnvFilter`] syntax.
pub const CONSOLE_LOG: &str = "CONSOLE_LOG";

#[derive(Default)]
pub struct AppTracingBuilder {
  console_filter: Option<EnvFilter>,
  with_ansi: Option<bool>,
}
impl AppTracingBuilder {
  pub fn with_console_filter(mut self, console_filter: EnvFilter) -> Self {
    self.console_filter = Some(console_filter);
    self
  }

  pub fn with_ansi(mut self, with_ansi: bool) -> Self {
    self.with_ansi = Some(with_ansi);
    self
  }

  /// Installs the global subscriber, logging to stderr. Without an explicit console filter, the filter is read from
  /// the [`CONSOLE_LOG`] environment variable. Does nothing if a global subscriber is already installed.
  pub fn build(self) -> AppTracing {
    let console_filter = self.console_filter.unwrap_or_else(|| EnvFilter::try_from_env(CONSOLE_LOG).unwrap_or_default());
    let layered = tracing_subscriber::registry().with(
      tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(self.with_ansi.unwrap_or(true))
        .with_filter(console_filter)
    );
    let installed = layered.try_init().is_ok();
    if !installed {
      tracing::debug!("global tracing subscriber already installed; keeping it");
    }
    AppTracing { installed }
  }
}

pub struct AppTracing {
  installed: bool,
}
impl AppTracing {
  /// Whether [build](AppTracingBuilder::build) installed the global subscriber.
  #[inline]
  pub fn installed(&self) -> bool { self.installed }
}
