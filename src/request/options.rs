use crate::common::{GigyaError, Params};
use crate::configs::{ClientConfig, HttpMethod};

/// Per-call options. Anything left unset falls back to the client config.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    pub service: Option<String>,
    pub method: Option<String>,
    pub domain: Option<String>,
    pub req_method: Option<HttpMethod>,
    pub params: Params,
    pub use_encrypted_transport: Option<bool>,
}

impl CallOptions {
    pub fn new(service: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            service: Some(service.into()),
            method: Some(method.into()),
            ..Self::default()
        }
    }

    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl std::fmt::Display) -> Self {
        self.params.set(key, value);
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn req_method(mut self, req_method: HttpMethod) -> Self {
        self.req_method = Some(req_method);
        self
    }

    pub fn encrypted(mut self, enabled: bool) -> Self {
        self.use_encrypted_transport = Some(enabled);
        self
    }
}

/// Call options merged over the client defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCall<'a> {
    pub api_key: &'a str,
    pub secret: &'a str,
    pub service: &'a str,
    pub method: &'a str,
    pub domain: &'a str,
    pub req_method: HttpMethod,
    pub nonce_size: usize,
    pub use_encrypted_transport: bool,
    pub params: &'a Params,
}

impl<'a> ResolvedCall<'a> {
    /// Call options win over client defaults; neither side is modified.
    pub fn merge(config: &'a ClientConfig, call: &'a CallOptions) -> Result<Self, GigyaError> {
        let service =
            non_empty(call.service.as_deref()).or_else(|| non_empty(Some(config.service.as_str())));
        let method =
            non_empty(call.method.as_deref()).or_else(|| non_empty(config.method.as_deref()));

        let Some(service) = service else {
            return Err(GigyaError::InvalidOptions("service is required".into()));
        };
        let Some(method) = method else {
            return Err(GigyaError::InvalidOptions("method is required".into()));
        };
        if config.api_key.trim().is_empty() {
            return Err(GigyaError::InvalidOptions("apiKey is required".into()));
        }

        Ok(Self {
            api_key: &config.api_key,
            secret: &config.secret,
            service,
            method,
            domain: non_empty(call.domain.as_deref()).unwrap_or(config.domain.as_str()),
            req_method: call.req_method.unwrap_or(config.req_method),
            nonce_size: config.nonce_size,
            use_encrypted_transport: call
                .use_encrypted_transport
                .unwrap_or(config.use_encrypted_transport),
            params: &call.params,
        })
    }

    pub fn host(&self) -> String {
        format!("{}.{}", self.service, self.domain)
    }

    /// Path without the query string.
    pub fn base_path(&self) -> String {
        format!("/{}.{}", self.service, self.method)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
