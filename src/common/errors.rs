use serde_json::Value;
use thiserror::Error;

/// Every way a Gigya call or signature check can fail.
#[derive(Debug, Error)]
pub enum GigyaError {
  /// The client configuration was rejected at construction time.
  #[error("invalid configuration: {0}")]
  Configuration(String),

  /// A call was issued without a service, method or api key.
  #[error("invalid call options: {0}")]
  InvalidOptions(String),

  /// The method is not part of the service's method table.
  #[error("unknown method {service}.{method}")]
  UnknownMethod { service: String, method: String },

  /// The shared secret is not valid base64.
  #[error("secret is not valid base64: {0}")]
  InvalidSecret(#[from] base64::DecodeError),

  /// Connection-level failure (DNS, refused, reset, TLS).
  #[error("transport error: {0}")]
  Transport(#[source] reqwest::Error),

  /// The configured request timeout elapsed.
  #[error("request timed out")]
  Timeout,

  /// The response body was not valid JSON.
  #[error("malformed response body: {source}")]
  Parse {
    #[source]
    source: serde_json::Error,
    body: String,
  },

  /// The service answered with a truthy `errorCode`.
  #[error("{0}")]
  Service(ServiceError),
}

impl From<reqwest::Error> for GigyaError {
  fn from(err: reqwest::Error) -> Self {
    if err.is_timeout() {
      Self::Timeout
    } else {
      Self::Transport(err)
    }
  }
}

/// Error reported by the remote service, with the full parsed body kept.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceError {
  pub body: Value,
}

impl ServiceError {
  pub fn new(body: Value) -> Self {
    Self { body }
  }

  /// The `errorCode` field, when it is numeric.
  pub fn error_code(&self) -> Option<i64> {
    self.body.get("errorCode").and_then(|code| {
      code
        .as_i64()
        .or_else(|| code.as_str().and_then(|s| s.parse().ok()))
    })
  }

  pub fn error_message(&self) -> Option<&str> {
    self.body.get("errorMessage").and_then(Value::as_str)
  }
}

impl std::fmt::Display for ServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let code = self
      .body
      .get("errorCode")
      .map(|c| c.to_string())
      .unwrap_or_default();
    match self.error_message() {
      Some(message) => write!(f, "service error {}: {}", code, message),
      None => write!(f, "service error {}", code),
    }
  }
}

impl std::error::Error for ServiceError {}
