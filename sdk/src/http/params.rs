//! Query string and form body parameters
//!
//! Optional filters follow one convention across the whole API: a value
//! that is absent, blank or non-positive is left out entirely, which the
//! server reads as "match anything". Nothing ever renders as `key=`.

/// Ordered list of request parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always append
    pub fn required(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Append an identifier when present and positive
    pub fn id(self, key: &str, value: Option<i64>) -> Self {
        match value {
            Some(v) if v > 0 => self.required(key, v),
            _ => self,
        }
    }

    /// Append a page size, page number or limit when present and positive
    pub fn count(self, key: &str, value: Option<u32>) -> Self {
        match value {
            Some(v) if v > 0 => self.required(key, v),
            _ => self,
        }
    }

    /// Append text when it is not blank, keeping it as given
    pub fn text(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => self.required(key, v),
            _ => self,
        }
    }

    /// Append text when it is not blank, trimmed
    pub fn trimmed(self, key: &str, value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => self.required(key, v),
            _ => self,
        }
    }

    /// Always append a boolean as `true`/`false`
    pub fn flag(self, key: &str, value: bool) -> Self {
        self.required(key, value)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Look up the first value stored under `key`
    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as `k=v&k=v`, percent-encoding keys and values.
    ///
    /// Used both for query strings and for url-encoded form bodies.
    pub fn to_query(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
