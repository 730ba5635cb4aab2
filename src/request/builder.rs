use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use super::descriptor::{HTTP_PORT, HTTPS_PORT};
use super::{CallOptions, RequestDescriptor, ResolvedCall};
use crate::auth::{SignatureBase, encode, nonce};
use crate::common::{GigyaError, HttpClient, Params};
use crate::configs::{ClientConfig, HttpMethod};

/// Parameter names the builder owns. Caller values for these are dropped.
pub const RESERVED_PARAMS: [&str; 6] = ["apiKey", "format", "secret", "timestamp", "nonce", "sig"];

/// Builds authenticated request descriptors from call options.
#[derive(Debug, Clone, Copy)]
pub struct RequestBuilder<'a> {
    config: &'a ClientConfig,
}

/// Replay protection values for a single signed request.
#[derive(Debug, Clone)]
struct Stamp {
    timestamp: u64,
    nonce: String,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(config: &'a ClientConfig) -> Self {
        Self { config }
    }

    pub fn build(&self, call: &CallOptions) -> Result<RequestDescriptor, GigyaError> {
        let resolved = ResolvedCall::merge(self.config, call)?;
        let stamp = (!resolved.use_encrypted_transport).then(|| Stamp {
            timestamp: unix_timestamp(),
            nonce: nonce(resolved.nonce_size),
        });
        assemble(&resolved, stamp)
    }
}

/// Signs with `stamp` when present, otherwise sends the raw secret.
fn assemble(
    resolved: &ResolvedCall<'_>,
    stamp: Option<Stamp>,
) -> Result<RequestDescriptor, GigyaError> {
    let mut params = Params::new()
        .with("apiKey", resolved.api_key)
        .with("format", "json");

    for (key, value) in resolved.params.iter() {
        if RESERVED_PARAMS.contains(&key) {
            warn!("Ignoring reserved parameter '{}' supplied by caller", key);
            continue;
        }
        params.set(key, value);
    }

    match stamp {
        Some(Stamp { timestamp, nonce }) => {
            params.set("timestamp", timestamp);
            params.set("nonce", nonce);
            let sig = SignatureBase {
                http_method: resolved.req_method,
                secure: false,
                service: resolved.service,
                domain: resolved.domain,
                method: resolved.method,
                params: &params,
            }
            .sign(resolved.secret)?;
            params.set("sig", sig);
        }
        None => {
            params.set("secret", resolved.secret);
        }
    }

    let query = to_query_string(&params);
    let mut headers = vec![("User-Agent".to_string(), HttpClient::default_user_agent())];
    let mut path = resolved.base_path();
    let body = match resolved.req_method {
        HttpMethod::Post => {
            headers.push((
                "Content-Type".to_string(),
                "application/x-www-form-urlencoded".to_string(),
            ));
            headers.push(("Content-Length".to_string(), query.len().to_string()));
            Some(query)
        }
        HttpMethod::Get => {
            path.push('?');
            path.push_str(&query);
            None
        }
    };

    let secure = resolved.use_encrypted_transport;
    let descriptor = RequestDescriptor {
        secure,
        host: resolved.host(),
        port: if secure { HTTPS_PORT } else { HTTP_PORT },
        path,
        method: resolved.req_method,
        headers,
        body,
    };

    debug!(
        "Built {} request for {}.{} on {} (encrypted: {})",
        descriptor.method, resolved.service, resolved.method, descriptor.host, secure
    );

    Ok(descriptor)
}

/// `name=value` pairs joined by `&`, both sides canonically encoded.
pub fn to_query_string(params: &Params) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
