use std::fmt::Display;

/// A generic boxed error type.
pub type AnyError = Box<dyn std::error::Error + Send + Sync>;

/// A convenient Result alias returning `AnyError`.
pub type AnyResult<T> = std::result::Result<T, AnyError>;

/// Request parameters in insertion order.
///
/// Values are stored in their display form, so strings, integers and
/// booleans can all be passed. Setting a key that already exists replaces
/// the value in place and keeps the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
  pub fn new() -> Self {
    Self(Vec::new())
  }

  pub fn set(&mut self, key: impl Into<String>, value: impl Display) -> &mut Self {
    let key = key.into();
    let value = value.to_string();
    match self.0.iter_mut().find(|(k, _)| *k == key) {
      Some(entry) => entry.1 = value,
      None => self.0.push((key, value)),
    }
    self
  }

  /// Builder-style variant of [`Params::set`].
  pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
    self.set(key, value);
    self
  }

  pub fn get(&self, key: &str) -> Option<&str> {
    self
      .0
      .iter()
      .find(|(k, _)| k == key)
      .map(|(_, v)| v.as_str())
  }

  pub fn contains(&self, key: &str) -> bool {
    self.get(key).is_some()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Params {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut params = Params::new();
    for (k, v) in iter {
      params.set(k, v);
    }
    params
  }
}

impl<K: Into<String>, V: Display, const N: usize> From<[(K, V); N]> for Params {
  fn from(pairs: [(K, V); N]) -> Self {
    pairs.into_iter().collect()
  }
}
