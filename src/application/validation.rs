//! Input rules for link creation.
//!
//! Rules are a plain value built once (usually by
//! [`crate::application::services::ShortenerService::new`]) and passed to
//! [`validate_new_link`] on every call.

use url::Url;

use crate::domain::entities::NewLink;
use crate::error::AppError;

/// Ruleset applied to every create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRules {
    /// URL schemes accepted for destinations.
    pub allowed_schemes: Vec<String>,
    /// When true, `expire_at` must be strictly after the current time.
    pub require_future_expiry: bool,
    /// Smallest accepted hit budget.
    pub min_hit_budget: i64,
}

impl Default for CreateRules {
    fn default() -> Self {
        Self {
            allowed_schemes: vec!["http".to_string(), "https".to_string()],
            require_future_expiry: true,
            min_hit_budget: 0,
        }
    }
}

/// Checks a create request against `rules`.
///
/// Fields are checked in order `full_url`, `expire_date`, `number_of_hits`;
/// the first violation is returned.
///
/// # Errors
///
/// - [`crate::error::ValidationKind::MissingField`] for an empty URL
/// - [`crate::error::ValidationKind::InvalidUrl`] for a relative URL, a parse
///   failure or a scheme outside `allowed_schemes`
/// - [`crate::error::ValidationKind::InvalidExpiry`] when `expire_at <= now`
/// - [`crate::error::ValidationKind::InvalidParameter`] for a hit budget
///   below `min_hit_budget`
pub fn validate_new_link(rules: &CreateRules, link: &NewLink, now: i64) -> Result<(), AppError> {
    let full_url = link.full_url.trim();
    if full_url.is_empty() {
        return Err(AppError::missing_field("full_url"));
    }

    let parsed = Url::parse(full_url)
        .map_err(|e| AppError::invalid_url(format!("Invalid URL ({})", e)))?;

    if !rules
        .allowed_schemes
        .iter()
        .any(|s| s.eq_ignore_ascii_case(parsed.scheme()))
    {
        return Err(AppError::invalid_url(format!(
            "Invalid URL (unsupported scheme '{}')",
            parsed.scheme()
        )));
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(AppError::invalid_url("Invalid URL (missing host)"));
    }

    if rules.require_future_expiry && link.expire_at <= now {
        return Err(AppError::invalid_expiry(format!(
            "Invalid expire_date: {} <= {}",
            link.expire_at, now
        )));
    }

    if link.hit_budget < rules.min_hit_budget {
        return Err(AppError::invalid_parameter(
            "number_of_hits",
            format!(
                "Invalid parameter number_of_hits (must be >= {})",
                rules.min_hit_budget
            ),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationKind;

    const NOW: i64 = 1_700_000_000;

    fn link(url: &str, expire_at: i64, hits: i64) -> NewLink {
        NewLink {
            full_url: url.to_string(),
            expire_at,
            hit_budget: hits,
        }
    }

    fn kind_of(result: Result<(), AppError>) -> ValidationKind {
        match result {
            Err(AppError::Validation { kind, .. }) => kind,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_link() {
        let rules = CreateRules::default();
        assert!(validate_new_link(&rules, &link("https://example.com/a", NOW + 3600, 10), NOW).is_ok());
        assert!(validate_new_link(&rules, &link("http://example.com", NOW + 1, 0), NOW).is_ok());
    }

    #[test]
    fn test_empty_url() {
        let rules = CreateRules::default();
        let kind = kind_of(validate_new_link(&rules, &link("", NOW + 10, 1), NOW));
        assert_eq!(kind, ValidationKind::MissingField);

        let kind = kind_of(validate_new_link(&rules, &link("   ", NOW + 10, 1), NOW));
        assert_eq!(kind, ValidationKind::MissingField);
    }

    #[test]
    fn test_relative_url() {
        let rules = CreateRules::default();
        let kind = kind_of(validate_new_link(&rules, &link("test", NOW + 10, 1), NOW));
        assert_eq!(kind, ValidationKind::InvalidUrl);
    }

    #[test]
    fn test_unsupported_scheme() {
        let rules = CreateRules::default();

        for url in ["ftp://example.com", "javascript:alert(1)", "file:///etc/passwd"] {
            let kind = kind_of(validate_new_link(&rules, &link(url, NOW + 10, 1), NOW));
            assert_eq!(kind, ValidationKind::InvalidUrl, "{url} should be rejected");
        }
    }

    #[test]
    fn test_expiry_must_be_strictly_future() {
        let rules = CreateRules::default();

        let kind = kind_of(validate_new_link(&rules, &link("https://a.com", NOW, 1), NOW));
        assert_eq!(kind, ValidationKind::InvalidExpiry);

        let kind = kind_of(validate_new_link(&rules, &link("https://a.com", NOW - 100, 1), NOW));
        assert_eq!(kind, ValidationKind::InvalidExpiry);
    }

    #[test]
    fn test_negative_hit_budget() {
        let rules = CreateRules::default();
        let result = validate_new_link(&rules, &link("https://a.com", NOW + 10, -1), NOW);

        match result {
            Err(AppError::Validation { kind, field, .. }) => {
                assert_eq!(kind, ValidationKind::InvalidParameter);
                assert_eq!(field, "number_of_hits");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_url_checked_before_expiry() {
        let rules = CreateRules::default();
        let kind = kind_of(validate_new_link(&rules, &link("test", NOW - 100, -1), NOW));
        assert_eq!(kind, ValidationKind::InvalidUrl);
    }

    #[test]
    fn test_custom_rules() {
        let rules = CreateRules {
            allowed_schemes: vec!["https".to_string()],
            require_future_expiry: false,
            min_hit_budget: 1,
        };

        let kind = kind_of(validate_new_link(&rules, &link("http://a.com", NOW + 10, 1), NOW));
        assert_eq!(kind, ValidationKind::InvalidUrl);

        assert!(validate_new_link(&rules, &link("https://a.com", NOW - 10, 1), NOW).is_ok());

        let kind = kind_of(validate_new_link(&rules, &link("https://a.com", NOW + 10, 0), NOW));
        assert_eq!(kind, ValidationKind::InvalidParameter);
    }
}
