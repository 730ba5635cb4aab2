use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::GigyaError;
use crate::configs::*;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
  pub client: ClientConfig,
  #[serde(default)]
  pub logging: Option<LoggingConfig>,
}

impl Config {
  /// Loads `config.toml`, falling back to `config.default.toml`.
  pub fn load() -> Result<Self, GigyaError> {
    let config_path = if Path::new("config.toml").exists() {
      "config.toml"
    } else if Path::new("config.default.toml").exists() {
      "config.default.toml"
    } else {
      return Err(GigyaError::Configuration(
        "config.toml or config.default.toml not found".into(),
      ));
    };

    Self::from_file(config_path)
  }

  pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GigyaError> {
    let path = path.as_ref();
    let config_str = std::fs::read_to_string(path).map_err(|e| {
      GigyaError::Configuration(format!("cannot read {}: {}", path.display(), e))
    })?;
    if config_str.trim().is_empty() {
      return Err(GigyaError::Configuration(format!(
        "{} is empty",
        path.display()
      )));
    }

    Self::from_toml_str(&config_str)
  }

  pub fn from_toml_str(config_str: &str) -> Result<Self, GigyaError> {
    let config: Config = toml::from_str(config_str)
      .map_err(|e| GigyaError::Configuration(format!("invalid config: {}", e)))?;
    config.client.validate()?;
    Ok(config)
  }
}
