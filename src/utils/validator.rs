//! Input checks run before the registry is touched.
//!
//! Both functions are pure: no I/O, no logging.

use url::Url;
use validator::ValidateLength;

use crate::domain::error::RegistryError;

/// Shortest alias a caller may supply.
pub const MIN_ALIAS_LENGTH: u64 = 3;

/// Longest alias a caller may supply.
pub const MAX_ALIAS_LENGTH: u64 = 20;

/// Longest URL accepted for storage.
pub const MAX_URL_LENGTH: u64 = 2048;

/// First path segments taken by fixed routes; an alias equal to one of them
/// could be stored but never resolved through `GET /{alias}`.
pub const RESERVED_ALIASES: &[&str] = &["health", "url"];

/// Checks that `candidate` is an absolute URL with a scheme and a host.
///
/// # Errors
///
/// Returns [`RegistryError::InvalidUrl`] when the string is empty, longer than
/// [`MAX_URL_LENGTH`] characters, fails to parse, or parses without a host
/// (`mailto:`, `javascript:`, `data:` and friends).
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.com/path?q=1").is_ok());
/// assert!(validate_url("not-a-url").is_err());
/// assert!(validate_url("mailto:someone@example.com").is_err());
/// ```
pub fn validate_url(candidate: &str) -> Result<(), RegistryError> {
    if candidate.is_empty() {
        return Err(RegistryError::InvalidUrl("URL is empty".to_string()));
    }

    if !candidate.validate_length(None, Some(MAX_URL_LENGTH), None) {
        return Err(RegistryError::InvalidUrl(format!(
            "URL is longer than {MAX_URL_LENGTH} characters"
        )));
    }

    let parsed = Url::parse(candidate).map_err(|e| RegistryError::InvalidUrl(e.to_string()))?;

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(RegistryError::InvalidUrl(format!(
            "URL has no host: {candidate}"
        ))),
    }
}

/// Checks the length of a caller-supplied alias.
///
/// An empty alias means "not supplied" and passes; the caller generates one.
/// Length is counted in characters, not bytes.
///
/// # Errors
///
/// Returns [`RegistryError::InvalidAlias`] when a non-empty alias is shorter than
/// [`MIN_ALIAS_LENGTH`] or longer than [`MAX_ALIAS_LENGTH`].
pub fn validate_alias(candidate: &str) -> Result<(), RegistryError> {
    if candidate.is_empty() {
        return Ok(());
    }

    if !candidate.validate_length(Some(MIN_ALIAS_LENGTH), Some(MAX_ALIAS_LENGTH), None) {
        return Err(RegistryError::InvalidAlias(format!(
            "alias must be {MIN_ALIAS_LENGTH}-{MAX_ALIAS_LENGTH} characters, got {}",
            candidate.chars().count()
        )));
    }

    Ok(())
}

/// Returns true if `alias` collides with a fixed route.
pub fn is_reserved_alias(alias: &str) -> bool {
    RESERVED_ALIASES.contains(&alias)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_https() {
        assert!(validate_url("https://example.com").is_ok());
    }

    #[test]
    fn test_validate_url_with_path_and_query() {
        assert!(validate_url("https://example.com/a/b?q=rust&lang=en#top").is_ok());
    }

    #[test]
    fn test_validate_url_with_port_and_ip() {
        assert!(validate_url("http://192.168.1.1:8080/api").is_ok());
        assert!(validate_url("http://localhost:3000/test").is_ok());
    }

    #[test]
    fn test_validate_url_other_schemes_with_host() {
        assert!(validate_url("ftp://files.example.com/file.txt").is_ok());
    }

    #[test]
    fn test_validate_url_empty() {
        let result = validate_url("");
        assert!(matches!(result, Err(RegistryError::InvalidUrl(_))));
    }

    #[test]
    fn test_validate_url_no_scheme() {
        assert!(matches!(
            validate_url("not-a-url"),
            Err(RegistryError::InvalidUrl(_))
        ));
        assert!(matches!(
            validate_url("example.com"),
            Err(RegistryError::InvalidUrl(_))
        ));
        assert!(matches!(
            validate_url("invalid_url"),
            Err(RegistryError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_validate_url_without_host() {
        assert!(validate_url("mailto:someone@example.com").is_err());
        assert!(validate_url("javascript:alert('xss')").is_err());
        assert!(validate_url("data:text/plain,hello").is_err());
    }

    #[test]
    fn test_validate_url_too_long() {
        let url = format!("https://example.com/{}", "a".repeat(2100));
        let err = validate_url(&url).unwrap_err();
        assert!(err.to_string().contains("longer than"));
    }

    #[test]
    fn test_validate_url_long_garbage() {
        assert!(validate_url(&"x".repeat(2049)).is_err());
    }

    #[test]
    fn test_validate_alias_empty_means_not_supplied() {
        assert!(validate_alias("").is_ok());
    }

    #[test]
    fn test_validate_alias_bounds() {
        assert!(validate_alias("abc").is_ok());
        assert!(validate_alias(&"a".repeat(20)).is_ok());
    }

    #[test]
    fn test_validate_alias_too_short() {
        assert!(matches!(
            validate_alias("a"),
            Err(RegistryError::InvalidAlias(_))
        ));
        assert!(validate_alias("ab").is_err());
    }

    #[test]
    fn test_validate_alias_too_long() {
        assert!(matches!(
            validate_alias(&"a".repeat(25)),
            Err(RegistryError::InvalidAlias(_))
        ));
        assert!(validate_alias(&"a".repeat(21)).is_err());
    }

    #[test]
    fn test_validate_alias_counts_characters() {
        // 3 characters, 6 bytes
        assert!(validate_alias("ééé").is_ok());
    }

    #[test]
    fn test_reserved_aliases() {
        assert!(is_reserved_alias("health"));
        assert!(is_reserved_alias("url"));
        assert!(!is_reserved_alias("Health"));
        assert!(!is_reserved_alias("healthy"));
    }
}
