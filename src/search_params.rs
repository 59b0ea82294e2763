use crate::encoding::{decode_component, encode_component};

/// An ordered sequence of decoded `(key, value)` pairs backing one query
/// string. Duplicate keys are permitted and entry order is significant.
///
/// A `SearchParams` is read-only once constructed: every mutation in this
/// crate builds a new sequence instead of touching an existing one, so a
/// sequence can be shared and cached against freely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pairs: Vec<(String, String)>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Parse from a query string (with or without leading `?`).
    ///
    /// Malformed input is tolerated rather than rejected: empty pairs are
    /// skipped and a pair without `=` becomes a key with an empty value.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        if query.is_empty() {
            return Self::new();
        }

        let pairs = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (decode_component(key), decode_component(value)),
                None => (decode_component(pair), String::new()),
            })
            .collect();

        Self { pairs }
    }

    /// Build from an ordered list of already-decoded pairs.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// All raw values stored under `key`, in sequence order. Empty if the
    /// key is absent.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(_, v)| v.as_str())
    }

    /// Canonical delimited form. Every pair is emitted as `key=value`
    /// through the form-urlencoded encoder.
    pub fn to_query_string(&self) -> String {
        let mut result = String::new();
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                result.push('&');
            }
            result.push_str(&encode_component(key));
            result.push('=');
            result.push_str(&encode_component(value));
        }
        result
    }
}

impl core::fmt::Display for SearchParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl From<&str> for SearchParams {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for SearchParams {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl FromIterator<(String, String)> for SearchParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::from_pairs(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for SearchParams {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self::from_pairs(
            iter.into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}
