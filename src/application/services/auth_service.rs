//! Basic-auth credential check for write endpoints.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Checks HTTP basic-auth credentials against the configured pair.
///
/// Only an HMAC-SHA256 of `user:password` is kept, keyed by a random
/// per-process secret. Verification goes through [`Mac::verify_slice`], which
/// compares in constant time.
pub struct AuthService {
    key: [u8; 32],
    expected: Vec<u8>,
}

impl AuthService {
    /// Creates a service accepting exactly `user` / `password`.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS random number generator is unavailable.
    pub fn new(user: &str, password: &str) -> Result<Self, getrandom::Error> {
        let mut key = [0u8; 32];
        getrandom::fill(&mut key)?;

        let expected = Self::mac(&key, user, password)
            .finalize()
            .into_bytes()
            .to_vec();

        Ok(Self { key, expected })
    }

    fn mac(key: &[u8], user: &str, password: &str) -> HmacSha256 {
        let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts any key length");
        mac.update(user.as_bytes());
        mac.update(b":");
        mac.update(password.as_bytes());
        mac
    }

    /// Verifies a credential pair. A missing password is treated as empty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the pair does not match.
    pub fn authenticate(&self, user: &str, password: Option<&str>) -> Result<(), AppError> {
        Self::mac(&self.key, user, password.unwrap_or_default())
            .verify_slice(&self.expected)
            .map_err(|_| AppError::unauthorized("unauthorized"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new("myuser", "mypass").unwrap()
    }

    #[test]
    fn test_authenticate_success() {
        assert!(service().authenticate("myuser", Some("mypass")).is_ok());
    }

    #[test]
    fn test_authenticate_wrong_password() {
        let result = service().authenticate("myuser", Some("wrong"));

        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[test]
    fn test_authenticate_wrong_user() {
        assert!(service().authenticate("other", Some("mypass")).is_err());
    }

    #[test]
    fn test_authenticate_missing_password() {
        assert!(service().authenticate("myuser", None).is_err());
    }

    #[test]
    fn test_password_containing_colon() {
        let svc = AuthService::new("my", "user:mypass").unwrap();
        assert!(svc.authenticate("my", Some("user:mypass")).is_ok());
        assert!(svc.authenticate("myuser", Some("mypass")).is_err());
    }

    #[test]
    fn test_empty_password_allowed_when_configured() {
        let svc = AuthService::new("user", "").unwrap();
        assert!(svc.authenticate("user", None).is_ok());
        assert!(svc.authenticate("user", Some("")).is_ok());
    }

    #[test]
    fn test_keys_differ_between_instances() {
        let a = AuthService::new("u", "p").unwrap();
        let b = AuthService::new("u", "p").unwrap();

        assert_ne!(a.key, b.key);
        assert_ne!(a.expected, b.expected);
    }
}
