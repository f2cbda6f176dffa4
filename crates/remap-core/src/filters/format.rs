//! Format validators
//!
//! Copyright (c) 2026 Remap Team
//! Licensed under the Apache-2.0 license

use super::assert;
use crate::mapping::filter::Filter;
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

// https://emailregex.com/
const EMAIL_PATTERN: &str = r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}\])|(([a-zA-Z\-\d]+\.)+[a-zA-Z]{2,}))$"#;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Accept only well-formed email addresses.
pub fn is_email() -> Filter {
    assert(
        |value| value.as_str().is_some_and(|s| email_regex().is_match(s)),
        "must be a valid email address",
    )
}

fn url_like(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => matches!(url.scheme(), "http" | "https" | "ftp") && url.has_host(),
        Err(_) => false,
    }
}

/// Accept only absolute http, https, or ftp URLs with a host.
pub fn is_url() -> Filter {
    assert(|value| value.as_str().is_some_and(url_like), "must be a valid URL")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::filter::Flow;
    use serde_json::json;

    fn accepts(filter: &Filter, input: &str) -> bool {
        matches!(filter.apply_blocking(json!(input)), Ok(Flow::Continue(_)))
    }

    #[test]
    fn test_is_email() {
        let email = is_email();
        assert!(accepts(&email, "user@example.com"));
        assert!(accepts(&email, "first.last@sub.example.org"));
        assert!(!accepts(&email, "not-an-email"));
        assert!(!accepts(&email, "spaces in@example.com"));
        assert!(!accepts(&email, "user@nodot"));
    }

    #[test]
    fn test_is_email_rejects_non_strings() {
        assert!(is_email().apply_blocking(json!(42)).is_err());
    }

    #[test]
    fn test_is_url() {
        let url = is_url();
        assert!(accepts(&url, "https://example.com/path?q=1"));
        assert!(accepts(&url, "ftp://files.example.com"));
        assert!(!accepts(&url, "example.com"));
        assert!(!accepts(&url, "http://"));
        assert!(!accepts(&url, "mailto:user@example.com"));
    }
}
