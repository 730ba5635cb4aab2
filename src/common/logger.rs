use std::{
  fs::{self, OpenOptions},
  path::Path,
  sync::Mutex,
};

use tracing_subscriber::{
  EnvFilter,
  fmt::{self, time::LocalTime},
  prelude::*,
};

use crate::configs::LoggingConfig;

/// Builds the filter directive from the configured level and extra filters.
pub fn filter_directive(config: Option<&LoggingConfig>) -> String {
  let log_level = config.and_then(|l| l.level.as_deref()).unwrap_or("info");
  let filters = config.and_then(|l| l.filters.as_deref()).unwrap_or("");

  if filters.is_empty() {
    log_level.to_string()
  } else {
    format!("{},{}", log_level, filters)
  }
}

pub fn init(config: Option<&LoggingConfig>) {
  // RUST_LOG wins over the configured directive
  let env_filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive(config)));

  let stdout_layer = fmt::layer()
    .with_writer(std::io::stderr)
    .with_timer(LocalTime::rfc_3339())
    .with_target(true)
    .with_line_number(true)
    .with_file(false);

  let file_layer = config.and_then(|l| l.file.as_ref()).and_then(|file_config| {
    if let Some(parent) = Path::new(&file_config.path).parent() {
      if let Err(e) = fs::create_dir_all(parent) {
        eprintln!("Failed to create log directory: {}", e);
      }
    }

    match OpenOptions::new()
      .create(true)
      .append(true)
      .open(&file_config.path)
    {
      Ok(file) => Some(
        fmt::layer()
          .with_writer(Mutex::new(file))
          .with_timer(LocalTime::rfc_3339())
          .with_target(true)
          .with_line_number(true)
          .with_file(false)
          .with_ansi(false),
      ),
      Err(e) => {
        eprintln!("Failed to open log file {}: {}", file_config.path, e);
        None
      }
    }
  });

  tracing_subscriber::registry()
    .with(env_filter)
    .with(stdout_layer)
    .with(file_layer)
    .init();
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_filter_directive_defaults_to_info() {
    assert_eq!(filter_directive(None), "info");
  }

  #[test]
  fn test_filter_directive_appends_filters() {
    let config = LoggingConfig {
      level: Some("debug".into()),
      filters: Some("reqwest=warn,hyper=warn".into()),
      file: None,
    };
    assert_eq!(filter_directive(Some(&config)), "debug,reqwest=warn,hyper=warn");
  }
}
