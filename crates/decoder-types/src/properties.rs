//! Decoder configuration as handed over by the host.

use crate::error::{DecodeError, Result};
use std::collections::BTreeMap;

/// String key/value configuration for a decoder.
///
/// Hosts load their job configuration however they like and pass the
/// relevant entries here. Values are kept as raw strings; each decoder parses
/// what it needs and decides how to treat malformed values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecoderProperties {
    entries: BTreeMap<String, String>,
}

impl DecoderProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Get a property, or `default` if it is absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse a `key=value` pair. Whitespace around the key and value is trimmed;
    /// the value may itself contain `=`.
    pub fn parse_pair(s: &str) -> Result<(String, String)> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| DecodeError::InvalidProperty(s.to_string()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(DecodeError::InvalidProperty(s.to_string()));
        }
        Ok((key.to_string(), value.trim().to_string()))
    }
}

impl<K, V> FromIterator<(K, V)> for DecoderProperties
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { entries }
    }
}

impl<K, V> Extend<(K, V)> for DecoderProperties
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.entries.insert(k.into(), v.into());
        }
    }
}
