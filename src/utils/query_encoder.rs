//! Ordered `application/x-www-form-urlencoded` query construction.

use std::fmt;

use url::form_urlencoded;

/// Accumulates query parameters in insertion order and appends them to a base URL.
///
/// Keys and values are encoded with the form-urlencoded byte rules: ASCII
/// alphanumerics and `*-._` pass through, space becomes `+`, and every other
/// byte becomes `%XX`. Brackets in keys such as `pickup[latitude]` are encoded
/// too.
pub struct QueryEncoder {
    serializer: form_urlencoded::Serializer<'static, String>,
    len: usize,
}

impl QueryEncoder {
    pub fn new() -> Self {
        Self {
            serializer: form_urlencoded::Serializer::new(String::new()),
            len: 0,
        }
    }

    /// Appends a parameter.
    pub fn append(&mut self, key: &str, value: &str) -> &mut Self {
        self.serializer.append_pair(key, value);
        self.len += 1;
        self
    }

    /// Appends a parameter when `value` is present and non-empty.
    pub fn append_present(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.append(key, value);
        }
        self
    }

    /// Number of parameters appended so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `base?query`. The `?` is kept even when no parameters were added.
    pub fn finish_with_base(mut self, base: &str) -> String {
        let query = self.serializer.finish();
        format!("{base}?{query}")
    }
}

impl fmt::Debug for QueryEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryEncoder").field("len", &self.len).finish()
    }
}

impl Default for QueryEncoder {
    fn default() -> Self {
        Self::new()
    }
}
