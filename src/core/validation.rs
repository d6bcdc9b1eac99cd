//! Email validation for the waitlist form
//!
//! The check is deliberately shallow: a local part, an `@`, and a domain with
//! at least one dot, none of which may contain whitespace or another `@`.
//! Whitespace follows the browser's `\s`, which also covers the byte order
//! mark (U+FEFF).

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern is a valid regex")
});

/// Check whether `email` has the shape `local@domain.tld`
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_simple_addresses() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("jane.doe+waitlist@example.com"));
        assert!(is_valid_email("x@sub.domain.org"));
    }

    #[test]
    fn test_rejects_domain_without_dot() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("user@localhost"));
    }

    #[test]
    fn test_rejects_whitespace() {
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b .com"));
        assert!(!is_valid_email(" a@b.com"));
        assert!(!is_valid_email("a@b.com\n"));
        assert!(!is_valid_email("a@b.co\tm"));
    }

    #[test]
    fn test_rejects_byte_order_mark() {
        assert!(!is_valid_email("a\u{feff}b@c.com"));
        assert!(!is_valid_email("\u{feff}a@b.com"));
        assert!(!is_valid_email("a@b.com\u{feff}"));
        assert!(!is_valid_email("a@b\u{feff}.com"));
    }

    #[test]
    fn test_rejects_missing_parts() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("plainaddress"));
    }

    #[test]
    fn test_rejects_second_at_sign() {
        assert!(!is_valid_email("a@b@c.com"));
    }
}
