//! Sending a built request and classifying the JSON answer.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::common::{GigyaError, ServiceError};
use crate::configs::HttpMethod;
use crate::request::RequestDescriptor;

/// Status and fully buffered body of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// One request, one buffered response. Implementations must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        descriptor: &RequestDescriptor,
        timeout: Option<Duration>,
    ) -> Result<RawResponse, GigyaError>;
}

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(
        &self,
        descriptor: &RequestDescriptor,
        timeout: Option<Duration>,
    ) -> Result<RawResponse, GigyaError> {
        let method = match descriptor.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };

        let mut request = self.client.request(method, descriptor.url());
        for (name, value) in &descriptor.headers {
            // reqwest derives Content-Length from the body itself
            if name.eq_ignore_ascii_case("content-length") {
                continue;
            }
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &descriptor.body {
            request = request.body(body.clone());
        }
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}

/// Sends descriptors through a [`Transport`] and turns bodies into results.
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
    timeout: Option<Duration>,
}

impl Dispatcher {
    pub fn new(transport: Arc<dyn Transport>, timeout: Option<Duration>) -> Self {
        Self { transport, timeout }
    }

    pub fn reqwest(client: reqwest::Client, timeout: Option<Duration>) -> Self {
        Self::new(Arc::new(ReqwestTransport::new(client)), timeout)
    }

    pub async fn dispatch(&self, descriptor: &RequestDescriptor) -> Result<Value, GigyaError> {
        let response = match self.transport.send(descriptor, self.timeout).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Request to {} failed: {}", descriptor.host, e);
                return Err(e);
            }
        };

        debug!(
            "Received {} bytes from {}{} (status {})",
            response.body.len(),
            descriptor.host,
            descriptor.base_path(),
            response.status
        );

        classify(&response.body)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Parses a buffered body: malformed JSON is a parse error, a truthy
/// `errorCode` is a service error, anything else is success.
pub fn classify(body: &str) -> Result<Value, GigyaError> {
    let value: Value = serde_json::from_str(body).map_err(|source| GigyaError::Parse {
        source,
        body: body.to_string(),
    })?;

    if value.get("errorCode").is_some_and(is_truthy) {
        let error = ServiceError::new(value);
        warn!("Service reported an error: {}", error);
        return Err(GigyaError::Service(error));
    }

    Ok(value)
}

/// JavaScript truthiness, which is how the service's error flag is read.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
