//! Link entities representing a shortened URL mapping.
//!
//! A short link is not stored as one record: its destination, expiry and hit
//! budget live under three keys sharing the code (see [`super::KeySpace`]).

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub full_url: String,
    /// Unix timestamp (seconds) after which the link stops resolving.
    pub expire_at: i64,
    /// Maximum number of resolutions requested by the client. Advisory.
    pub hit_budget: i64,
}

/// A freshly written short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub code: String,
    pub full_url: String,
    pub expire_at: i64,
    pub hit_budget: i64,
}

impl ShortLink {
    /// Composes the public short URL from a base such as `http://host:3000`.
    pub fn short_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.code)
    }
}

/// Raw view of the three stored attributes of a code.
///
/// Any attribute may be missing, e.g. after a partially applied write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub code: String,
    pub full_url: Option<String>,
    pub expire: Option<String>,
    pub hits: Option<String>,
}

impl LinkRecord {
    pub fn expiry(&self) -> Expiry {
        Expiry::parse(self.expire.as_deref())
    }

    /// Parsed hit budget, if present and numeric.
    pub fn hit_budget(&self) -> Option<i64> {
        self.hits.as_deref().and_then(|h| h.trim().parse().ok())
    }
}

/// Interpretation of a stored `expire` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    /// Missing, blank or `0`: no expiry is tracked.
    Untracked,
    /// Positive Unix timestamp.
    At(i64),
    /// Present but not an integer.
    Corrupt,
}

impl Expiry {
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Self::Untracked;
        };

        match raw.parse::<i64>() {
            Ok(ts) if ts > 0 => Self::At(ts),
            Ok(_) => Self::Untracked,
            Err(_) => Self::Corrupt,
        }
    }

    /// Expired when the timestamp is not strictly in the future.
    ///
    /// Corrupt values count as expired so a damaged record never redirects.
    pub fn has_passed(self, now: i64) -> bool {
        match self {
            Self::Untracked => false,
            Self::At(ts) => ts <= now,
            Self::Corrupt => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_url_composition() {
        let link = ShortLink {
            code: "3yQ".to_string(),
            full_url: "https://example.com".to_string(),
            expire_at: 1,
            hit_budget: 0,
        };

        assert_eq!(link.short_url("http://localhost:3000"), "http://localhost:3000/3yQ");
        assert_eq!(link.short_url("https://s.example.com/"), "https://s.example.com/3yQ");
    }

    #[test]
    fn test_expiry_parse() {
        assert_eq!(Expiry::parse(None), Expiry::Untracked);
        assert_eq!(Expiry::parse(Some("")), Expiry::Untracked);
        assert_eq!(Expiry::parse(Some("  ")), Expiry::Untracked);
        assert_eq!(Expiry::parse(Some("0")), Expiry::Untracked);
        assert_eq!(Expiry::parse(Some("-5")), Expiry::Untracked);
        assert_eq!(Expiry::parse(Some("1619766384")), Expiry::At(1_619_766_384));
        assert_eq!(Expiry::parse(Some("soon")), Expiry::Corrupt);
    }

    #[test]
    fn test_expiry_boundary() {
        let now = 1_000;

        assert!(Expiry::At(999).has_passed(now));
        assert!(Expiry::At(1_000).has_passed(now));
        assert!(!Expiry::At(1_001).has_passed(now));
        assert!(!Expiry::Untracked.has_passed(now));
        assert!(Expiry::Corrupt.has_passed(now));
    }

    #[test]
    fn test_link_record_hit_budget() {
        let record = LinkRecord {
            code: "abc".to_string(),
            full_url: Some("https://example.com".to_string()),
            expire: Some("0".to_string()),
            hits: Some("10".to_string()),
        };

        assert_eq!(record.hit_budget(), Some(10));
        assert_eq!(record.expiry(), Expiry::Untracked);

        let broken = LinkRecord {
            hits: Some("ten".to_string()),
            ..record
        };
        assert_eq!(broken.hit_budget(), None);
    }
}
