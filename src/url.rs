//! Standalone URL validity check.
//!
//! Offered as a helper for consumers building their own handlers; the call
//! path itself performs no format validation beyond the empty-URL check.

use std::sync::LazyLock;

use regex::Regex;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(http|https)://(\w+:?\w*@)?(\S+)(:[0-9]+)?(/|/([\w#!:.?+=&%@!\-/]))?")
        .expect("hard-coded pattern is valid")
});

/// Tests whether `url` looks like an absolute `http`/`https` URL with an
/// optional userinfo, port, and path. Empty or malformed input is invalid.
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    URL_PATTERN.is_match(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_url() {
        assert!(is_valid_url("http://www.google.com"));
        assert!(is_valid_url("https://user:pw@api.xyz.com:8443/test-path"));
    }

    #[test]
    fn test_invalid_url() {
        assert!(!is_valid_url("httpxxxx://www.google.com"));
        assert!(!is_valid_url("www.google.com"));
    }

    #[test]
    fn test_missing_url() {
        assert!(!is_valid_url(""));
    }
}
