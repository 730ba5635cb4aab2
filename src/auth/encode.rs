/// Percent-encodes a value the way OAuth 1.0 canonicalization expects.
///
/// Everything outside `A-Z a-z 0-9 - _ . ~` is escaped with uppercase hex
/// over the UTF-8 bytes. That includes `! ' ( ) *`, which plain URI
/// component encoders leave alone.
pub fn encode(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    urlencoding::encode(value).into_owned()
}
