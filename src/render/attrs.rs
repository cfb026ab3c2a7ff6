//! Ordered key/value attribute list
//!
//! Setting a key that is already present replaces its value in place, so the
//! first assignment fixes the key's position in the output.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs(Vec<(&'static str, String)>);

impl Attrs {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Inserts or replaces a value
    pub fn set(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((key, value)),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Joins entries as `{key}{kv_sep}{value}` separated by `sep`
    pub fn join(&self, kv_sep: &str, sep: &str) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}{}{}", k, kv_sep, v))
            .collect::<Vec<_>>()
            .join(sep)
    }
}
