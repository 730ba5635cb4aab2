//! Canonical encoding, signing and signature validation.

pub mod base_string;
pub mod encode;
pub mod nonce;
pub mod signer;
pub mod validator;

pub use base_string::SignatureBase;
pub use encode::encode;
pub use nonce::nonce;
pub use signer::sign;
pub use validator::SignatureValidator;
