use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::auth::SignatureValidator;
use crate::common::{GigyaError, HttpClient, Params};
use crate::configs::ClientConfig;
use crate::dispatch::{Dispatcher, Transport};
use crate::request::{CallOptions, RequestBuilder, RequestDescriptor};
use crate::services::Service;

/// Handle to the Gigya REST API.
///
/// Cheap to clone; the configuration is fixed at construction and every call
/// is an independent request.
#[derive(Debug, Clone)]
pub struct GigyaClient {
    config: Arc<ClientConfig>,
    dispatcher: Dispatcher,
    validator: SignatureValidator,
}

impl GigyaClient {
    pub fn new(config: ClientConfig) -> Result<Self, GigyaError> {
        let http = HttpClient::new()?;
        Self::with_http_client(config, http)
    }

    /// Uses a caller-provided reqwest client (proxies, DNS overrides, ...).
    pub fn with_http_client(
        config: ClientConfig,
        http: reqwest::Client,
    ) -> Result<Self, GigyaError> {
        let timeout = config.timeout_duration();
        Self::build(config, Dispatcher::reqwest(http, timeout))
    }

    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, GigyaError> {
        let timeout = config.timeout_duration();
        Self::build(config, Dispatcher::new(transport, timeout))
    }

    fn build(config: ClientConfig, dispatcher: Dispatcher) -> Result<Self, GigyaError> {
        config.validate()?;
        Ok(Self {
            validator: SignatureValidator::new(config.secret.clone()),
            config: Arc::new(config),
            dispatcher,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn build_request(&self, options: &CallOptions) -> Result<RequestDescriptor, GigyaError> {
        RequestBuilder::new(&self.config).build(options)
    }

    /// Builds, signs and sends a call described by `options`.
    pub async fn request(&self, options: CallOptions) -> Result<Value, GigyaError> {
        let descriptor = self.build_request(&options)?;
        self.raw(&descriptor).await
    }

    /// Sends an already built request.
    pub async fn raw(&self, descriptor: &RequestDescriptor) -> Result<Value, GigyaError> {
        self.dispatcher.dispatch(descriptor).await
    }

    /// Calls any `service.method`, whether or not it is in the method table.
    pub async fn call(
        &self,
        service: &str,
        method: &str,
        params: Params,
    ) -> Result<Value, GigyaError> {
        debug!("Calling {}.{}", service, method);
        self.request(CallOptions::new(service, method).params(params))
            .await
    }

    pub fn service(&self, service: Service) -> ServiceHandle<'_> {
        ServiceHandle {
            client: self,
            service,
        }
    }

    pub fn socialize(&self) -> ServiceHandle<'_> {
        self.service(Service::Socialize)
    }

    pub fn comments(&self) -> ServiceHandle<'_> {
        self.service(Service::Comments)
    }

    pub fn gm(&self) -> ServiceHandle<'_> {
        self.service(Service::Gm)
    }

    pub fn gcs(&self) -> ServiceHandle<'_> {
        self.service(Service::Gcs)
    }

    pub fn reports(&self) -> ServiceHandle<'_> {
        self.service(Service::Reports)
    }

    pub fn validate_user_signature(&self, uid: &str, timestamp: &str, signature: &str) -> bool {
        self.validator.validate_user(uid, timestamp, signature)
    }

    pub fn validate_friend_signature(
        &self,
        uid: &str,
        timestamp: &str,
        friend_uid: &str,
        signature: &str,
    ) -> bool {
        self.validator
            .validate_friend(uid, timestamp, friend_uid, signature)
    }
}

/// A service bound to a client. Only methods from the service table pass.
#[derive(Debug, Clone, Copy)]
pub struct ServiceHandle<'a> {
    client: &'a GigyaClient,
    service: Service,
}

impl ServiceHandle<'_> {
    pub fn service(&self) -> Service {
        self.service
    }

    pub fn methods(&self) -> &'static [&'static str] {
        self.service.methods()
    }

    pub async fn call(&self, method: &str, params: Params) -> Result<Value, GigyaError> {
        self.service.check(method)?;
        self.client
            .call(self.service.as_str(), method, params)
            .await
    }
}
