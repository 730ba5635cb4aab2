//! Signed request client for the Gigya REST API.
//!
//! Requests are either signed (HMAC-SHA1 over an OAuth-style base string,
//! plain HTTP) or carry the raw shared secret (HTTPS). Inbound user and
//! friend signatures can be checked with [`auth::SignatureValidator`].

pub mod auth;
pub mod client;
pub mod common;
pub mod configs;
pub mod dispatch;
pub mod request;
pub mod services;

pub use client::{GigyaClient, ServiceHandle};
pub use common::{GigyaError, Params, ServiceError};
pub use configs::{ClientConfig, HttpMethod};
pub use request::{CallOptions, RequestDescriptor};
pub use services::Service;
