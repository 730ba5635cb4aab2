use std::{fmt, str::FromStr, time::Duration};

use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::auth::signer::SECRET_ENGINE;
use crate::common::GigyaError;

pub const DEFAULT_DOMAIN: &str = "gigya.com";
pub const DEFAULT_SERVICE: &str = "socialize";
pub const DEFAULT_NONCE_SIZE: usize = 32;

/// Shortest nonce accepted by [`ClientConfig::validate`].
pub const MIN_NONCE_SIZE: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = GigyaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            other => Err(GigyaError::Configuration(format!(
                "unsupported HTTP method: {}",
                other
            ))),
        }
    }
}

impl TryFrom<String> for HttpMethod {
    type Error = GigyaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HttpMethod> for String {
    fn from(method: HttpMethod) -> Self {
        method.as_str().to_string()
    }
}

/// Client-wide defaults. Immutable once the client is built; every call
/// merges its own options over a borrowed copy of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api_key: String,
    /// Base64 shared secret, used as the HMAC key after decoding.
    #[serde(default)]
    pub secret: String,
    #[serde(default = "default_domain")]
    pub domain: String,
    /// Service used when a call does not name one.
    #[serde(default = "default_service")]
    pub service: String,
    /// Method used when a call does not name one.
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub req_method: HttpMethod,
    #[serde(default = "default_nonce_size")]
    pub nonce_size: usize,
    /// HTTPS with the raw secret instead of signed plain HTTP.
    #[serde(default)]
    pub use_encrypted_transport: bool,
    /// Whole-request timeout in seconds. No timeout when unset.
    #[serde(default)]
    pub timeout: Option<u64>,
}

fn default_domain() -> String {
    DEFAULT_DOMAIN.to_string()
}

fn default_service() -> String {
    DEFAULT_SERVICE.to_string()
}

fn default_nonce_size() -> usize {
    DEFAULT_NONCE_SIZE
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            secret: String::new(),
            domain: default_domain(),
            service: default_service(),
            method: None,
            req_method: HttpMethod::default(),
            nonce_size: DEFAULT_NONCE_SIZE,
            use_encrypted_transport: false,
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret: secret.into(),
            ..Self::default()
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    pub fn with_req_method(mut self, req_method: HttpMethod) -> Self {
        self.req_method = req_method;
        self
    }

    pub fn with_nonce_size(mut self, nonce_size: usize) -> Self {
        self.nonce_size = nonce_size;
        self
    }

    pub fn with_encrypted_transport(mut self, enabled: bool) -> Self {
        self.use_encrypted_transport = enabled;
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    /// Rejects configurations that could never produce a valid request.
    pub fn validate(&self) -> Result<(), GigyaError> {
        if self.api_key.trim().is_empty() {
            return Err(GigyaError::Configuration("api_key is required".into()));
        }
        if self.secret.trim().is_empty() {
            return Err(GigyaError::Configuration("secret is required".into()));
        }
        if let Err(e) = SECRET_ENGINE.decode(&self.secret) {
            return Err(GigyaError::Configuration(format!(
                "secret is not valid base64: {}",
                e
            )));
        }
        if self.domain.trim().is_empty() {
            return Err(GigyaError::Configuration("domain must not be empty".into()));
        }
        if self.service.trim().is_empty() {
            return Err(GigyaError::Configuration(
                "default service must not be empty".into(),
            ));
        }
        if self.nonce_size < MIN_NONCE_SIZE {
            return Err(GigyaError::Configuration(format!(
                "nonce_size must be at least {}, got {}",
                MIN_NONCE_SIZE, self.nonce_size
            )));
        }
        Ok(())
    }
}
