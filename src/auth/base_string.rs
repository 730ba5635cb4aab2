use tracing::trace;

use super::{encode, sign};
use crate::common::{GigyaError, Params};
use crate::configs::HttpMethod;

/// Inputs of the OAuth-style signature base string.
#[derive(Debug, Clone, Copy)]
pub struct SignatureBase<'a> {
    pub http_method: HttpMethod,
    /// Selects `https://` over `http://` in the signed URL.
    pub secure: bool,
    pub service: &'a str,
    pub domain: &'a str,
    pub method: &'a str,
    pub params: &'a Params,
}

impl SignatureBase<'_> {
    /// `METHOD&encode(url)&encode(sorted params)`.
    ///
    /// Parameters are sorted by their encoded `name=value` form, not by name,
    /// so two values of a repeated prefix order by value bytes as well.
    pub fn build(&self) -> String {
        let mut pairs: Vec<String> = self
            .params
            .iter()
            .map(|(name, value)| format!("{}={}", encode(name), encode(value)))
            .collect();
        pairs.sort();
        let params = encode(&pairs.join("&"));

        let scheme = if self.secure { "https://" } else { "http://" };
        let url = encode(&format!(
            "{}{}.{}/{}.{}",
            scheme, self.service, self.domain, self.service, self.method
        ));

        format!("{}&{}&{}", self.http_method.as_str(), url, params)
    }

    pub fn sign(&self, secret: &str) -> Result<String, GigyaError> {
        let base = self.build();
        trace!("Signature base string: {}", base);
        sign(&base, secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_params() -> Params {
        Params::new()
            .with("apiKey", "K")
            .with("format", "json")
            .with("UID", "u1")
            .with("timestamp", 1700000000)
            .with("nonce", "abcdefghijklmnopqrstuvwxyz012345")
    }

    fn base(params: &Params) -> SignatureBase<'_> {
        SignatureBase {
            http_method: HttpMethod::Get,
            secure: false,
            service: "socialize",
            domain: "gigya.com",
            method: "getUserInfo",
            params,
        }
    }

    #[test]
    fn test_base_string_layout() {
        let params = sample_params();
        assert_eq!(
            base(&params).build(),
            "GET&http%3A%2F%2Fsocialize.gigya.com%2Fsocialize.getUserInfo&\
             UID%3Du1%26apiKey%3DK%26format%3Djson%26nonce%3Dabcdefghijklmnopqrstuvwxyz012345\
             %26timestamp%3D1700000000"
        );
    }

    #[test]
    fn test_known_signature() {
        let params = sample_params();
        assert_eq!(
            base(&params).sign("c2VjcmV0").unwrap(),
            "1dNw3ixog8dapzzOvvWtbIOyuUM="
        );
    }

    #[test]
    fn test_param_order_does_not_matter() {
        let forward = sample_params();
        let reversed: Params = forward
            .iter()
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        assert_eq!(
            base(&forward).sign("c2VjcmV0").unwrap(),
            base(&reversed).sign("c2VjcmV0").unwrap()
        );
    }

    #[test]
    fn test_sorted_by_encoded_pair_not_key() {
        // "a%20b=1" sorts before "a=2" because '%' < '='
        let params = Params::new().with("a", "2").with("a b", "1");
        let built = base(&params).build();
        assert!(built.ends_with(&encode("a%20b=1&a=2")));
    }

    #[test]
    fn test_post_and_https_change_base() {
        let params = sample_params();
        let mut post = base(&params);
        post.http_method = HttpMethod::Post;
        post.secure = true;
        let built = post.build();
        assert!(built.starts_with("POST&https%3A%2F%2Fsocialize.gigya.com"));
    }
}
