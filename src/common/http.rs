use std::time::Duration;

use reqwest::Client;

use super::GigyaError;

const DEFAULT_USER_AGENT: &str = concat!("Rust-Gigya-SDK/", env!("CARGO_PKG_VERSION"));

/// Connections that never complete the handshake are abandoned after this.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HttpClient;

impl HttpClient {
  pub fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
  }

  /// Builds the shared reqwest client. The whole-request timeout is applied
  /// per call by the dispatcher, since it is optional.
  pub fn new() -> Result<Client, GigyaError> {
    Self::with_user_agent(DEFAULT_USER_AGENT)
  }

  /// A builder failure happens before any connection exists, so it is a
  /// configuration error rather than a transport one.
  pub fn with_user_agent(user_agent: &str) -> Result<Client, GigyaError> {
    Client::builder()
      .user_agent(user_agent)
      .connect_timeout(CONNECT_TIMEOUT)
      .build()
      .map_err(|e| GigyaError::Configuration(format!("cannot build HTTP client: {}", e)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_client_builds() {
    assert!(HttpClient::new().is_ok());
  }

  #[test]
  fn test_build_failure_is_configuration_error() {
    let result = HttpClient::with_user_agent("bad\nagent");
    assert!(matches!(result, Err(GigyaError::Configuration(_))));
  }
}
