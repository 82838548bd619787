//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Returns the original string unchanged if no `${}` patterns are present.
/// Bare `$VAR` syntax is not expanded (only `${VAR}` with braces), so literal
/// dollar signs in URLs survive.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_asset_host() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("BULLETIN_TEST_ASSET_HOST", "cdn.example.edu");
        }
        let result = expand_env(
            "https://${BULLETIN_TEST_ASSET_HOST}/images/header.png",
            "brand.banner_url",
        )
        .unwrap();
        assert_eq!(result, "https://cdn.example.edu/images/header.png");
        unsafe {
            std::env::remove_var("BULLETIN_TEST_ASSET_HOST");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("BULLETIN_UNSET_HOST");
        }
        let result = expand_env(
            "${BULLETIN_UNSET_HOST:-https://example.edu}",
            "organization.website",
        )
        .unwrap();
        assert_eq!(result, "https://example.edu");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("BULLETIN_MISSING_VAR");
        }
        let err = expand_env("${BULLETIN_MISSING_VAR}", "social[0].url").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("BULLETIN_MISSING_VAR"));
        assert!(err.to_string().contains("social[0].url"));
    }

    #[test]
    fn test_expand_literal_unchanged() {
        let result = expand_env("https://example.edu/a%20b.png", "brand.banner_url").unwrap();
        assert_eq!(result, "https://example.edu/a%20b.png");
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        let result = expand_env("price$5", "brand.banner_alt").unwrap();
        assert_eq!(result, "price$5");
    }
}
