use rand::{Rng, distributions::Alphanumeric};

/// Random `a-z A-Z 0-9` string of exactly `size` characters.
///
/// Drawn uniformly with replacement from the thread-local RNG. The nonce is
/// for request uniqueness, not secrecy.
pub fn nonce(size: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(size)
        .map(char::from)
        .collect()
}
