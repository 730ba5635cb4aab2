use base64::{
    Engine as _, alphabet,
    engine::{
        DecodePaddingMode,
        general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD},
    },
};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::common::GigyaError;

type HmacSha1 = Hmac<Sha1>;

/// Decoder for shared secrets. Accepts keys with or without `=` padding.
pub(crate) const SECRET_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Base64 HMAC-SHA1 of `message`, keyed with the decoded bytes of `base64_key`.
pub fn sign(message: &str, base64_key: &str) -> Result<String, GigyaError> {
    let key = SECRET_ENGINE.decode(base64_key)?;
    Ok(sign_with_key(message, &key))
}

pub(crate) fn sign_with_key(message: &str, key: &[u8]) -> String {
    let mut mac = HmacSha1::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}
