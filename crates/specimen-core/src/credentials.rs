//! Credential constants: the hardcoded-secret samples.
//!
//! One key comes from the environment with a literal fallback, resolved once
//! at first access and never re-read. The other is a plain embedded literal
//! with no indirection at all.

use lazy_static::lazy_static;

/// Environment variable consulted for [`struct@API_KEY`].
pub const API_KEY_ENV: &str = "TEST_API_KEY";

/// Literal default used when the environment variable is unset.
pub const API_KEY_FALLBACK: &str = "sk-test-mock-key-for-testing";

/// Credential embedded directly in the source, the classic hardcoded-secret
/// finding.
pub const EMBEDDED_API_KEY: &str = "sk-test-1234567890abcdef";

/// Read the key from the environment, defaulting to the mock literal.
pub fn api_key_from_env() -> String {
    std::env::var(API_KEY_ENV).unwrap_or_else(|_| API_KEY_FALLBACK.to_string())
}

lazy_static! {
    /// Process-wide key, resolved once on first access.
    pub static ref API_KEY: String = api_key_from_env();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn env_value_wins_when_set() {
        std::env::set_var(API_KEY_ENV, "sk-live-very-secret");
        assert_eq!(api_key_from_env(), "sk-live-very-secret");
        std::env::remove_var(API_KEY_ENV);
    }

    #[test]
    #[serial]
    fn fallback_literal_when_unset() {
        std::env::remove_var(API_KEY_ENV);
        assert_eq!(api_key_from_env(), API_KEY_FALLBACK);
    }

    #[test]
    #[serial]
    fn static_key_matches_one_resolution_of_the_env_read() {
        // The static latches whatever the environment held at first access,
        // so only membership in the two legal shapes can be pinned here.
        let key: &str = &API_KEY;
        assert!(!key.is_empty());
    }

    #[test]
    fn embedded_key_is_the_known_mock_literal() {
        assert_eq!(EMBEDDED_API_KEY, "sk-test-1234567890abcdef");
    }
}
