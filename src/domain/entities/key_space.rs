//! Store key layout for short link attributes.

use std::fmt;

/// One of the three attributes stored per code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    /// Destination URL.
    Full,
    /// Expiry as a Unix timestamp string.
    Expire,
    /// Hit budget as an integer string.
    Hits,
}

impl Attribute {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Expire => "expire",
            Self::Hits => "hits",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Namespaced key builder: `<prefix><code>:<attribute>`.
///
/// # Examples
///
/// ```ignore
/// let keys = KeySpace::new("url-shortener:");
/// assert_eq!(keys.key("abc", Attribute::Full), "url-shortener:abc:full");
/// assert_eq!(keys.pattern("abc"), "url-shortener:abc:*");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpace {
    prefix: String,
}

impl KeySpace {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn key(&self, code: &str, attribute: Attribute) -> String {
        format!("{}{}:{}", self.prefix, code, attribute)
    }

    /// Pattern matching every attribute key of `code`.
    pub fn pattern(&self, code: &str) -> String {
        format!("{}{}:*", self.prefix, code)
    }
}
