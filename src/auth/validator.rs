use subtle::ConstantTimeEq;
use tracing::warn;

use super::sign;

/// Checks the signatures Gigya attaches to user and friend data handed to
/// the site (login callbacks, `getUserInfo`/`getFriendsInfo` responses).
#[derive(Clone)]
pub struct SignatureValidator {
    secret: String,
}

impl std::fmt::Debug for SignatureValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureValidator").finish_non_exhaustive()
    }
}

impl SignatureValidator {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Signature over `timestamp + "_" + uid`.
    pub fn validate_user(&self, uid: &str, timestamp: &str, signature: &str) -> bool {
        self.matches(&format!("{}_{}", timestamp, uid), signature)
    }

    /// Signature over `timestamp + "_" + friend_uid + "_" + uid`.
    pub fn validate_friend(
        &self,
        uid: &str,
        timestamp: &str,
        friend_uid: &str,
        signature: &str,
    ) -> bool {
        self.matches(&format!("{}_{}_{}", timestamp, friend_uid, uid), signature)
    }

    fn matches(&self, base: &str, signature: &str) -> bool {
        match sign(base, &self.secret) {
            Ok(expected) => constant_time_eq(expected.as_bytes(), signature.as_bytes()),
            Err(e) => {
                warn!("Cannot validate signature: {}", e);
                false
            }
        }
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "c2VjcmV0";

    /// Flips one character at a time, keeping base64-ish alphabet.
    fn mutations(s: &str) -> Vec<String> {
        (0..s.len())
            .map(|i| {
                let mut bytes = s.as_bytes().to_vec();
                bytes[i] = if bytes[i] == b'A' { b'B' } else { b'A' };
                String::from_utf8(bytes).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_user_known_signature() {
        let validator = SignatureValidator::new(SECRET);
        assert!(validator.validate_user("u1", "1700000000", "eQjVMGGSxwqjE2YkYy6L1HdmpfY="));
    }

    #[test]
    fn test_friend_known_signature() {
        let validator = SignatureValidator::new(SECRET);
        assert!(validator.validate_friend(
            "u1",
            "1700000000",
            "f1",
            "Sem7zSWLEPKNMgtUod+9ViiYLRs="
        ));
        // uid and friend uid are not interchangeable
        assert!(!validator.validate_friend(
            "f1",
            "1700000000",
            "u1",
            "Sem7zSWLEPKNMgtUod+9ViiYLRs="
        ));
    }

    #[test]
    fn test_user_roundtrip_and_mutations() {
        let validator = SignatureValidator::new(SECRET);
        let (uid, ts) = ("_gid_abc123", "1712345678");
        let signature = sign(&format!("{}_{}", ts, uid), SECRET).unwrap();
        assert!(validator.validate_user(uid, ts, &signature));

        for bad_uid in mutations(uid) {
            assert!(!validator.validate_user(&bad_uid, ts, &signature));
        }
        for bad_ts in mutations(ts) {
            assert!(!validator.validate_user(uid, &bad_ts, &signature));
        }
        for bad_sig in mutations(&signature) {
            assert!(!validator.validate_user(uid, ts, &bad_sig));
        }
    }

    #[test]
    fn test_friend_roundtrip_and_mutations() {
        let validator = SignatureValidator::new(SECRET);
        let (uid, ts, friend) = ("_gid_abc123", "1712345678", "_gid_xyz789");
        let signature = sign(&format!("{}_{}_{}", ts, friend, uid), SECRET).unwrap();
        assert!(validator.validate_friend(uid, ts, friend, &signature));

        for bad_uid in mutations(uid) {
            assert!(!validator.validate_friend(&bad_uid, ts, friend, &signature));
        }
        for bad_ts in mutations(ts) {
            assert!(!validator.validate_friend(uid, &bad_ts, friend, &signature));
        }
        for bad_friend in mutations(friend) {
            assert!(!validator.validate_friend(uid, ts, &bad_friend, &signature));
        }
        for bad_sig in mutations(&signature) {
            assert!(!validator.validate_friend(uid, ts, friend, &bad_sig));
        }
    }

    #[test]
    fn test_truncated_signature_rejected() {
        let validator = SignatureValidator::new(SECRET);
        assert!(!validator.validate_user("u1", "1700000000", "eQjVMGGSxwqjE2YkYy6L1Hdmp"));
        assert!(!validator.validate_user("u1", "1700000000", ""));
    }

    #[test]
    fn test_undecodable_secret_never_validates() {
        let validator = SignatureValidator::new("%%%");
        assert!(!validator.validate_user("u1", "1700000000", "eQjVMGGSxwqjE2YkYy6L1HdmpfY="));
    }
}
