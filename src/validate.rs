//! Syntactic checks applied to user-supplied names before they reach an encoder.

use std::sync::LazyLock;

use regex::Regex;

static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[-A-Za-z0-9]+\.)+[-A-Za-z0-9]{2,}(?:\.[A-Za-z]{2,})?$")
        .expect("domain pattern is valid")
});

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("scheme pattern is valid"));

/// Returns true if `domain` looks like a fully qualified host name.
pub fn is_valid_domain(domain: &str) -> bool {
    DOMAIN_RE.is_match(domain)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// ISO 3166 alpha-2 shape only; the country table itself lives outside this crate.
pub fn is_valid_country_code(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Drops a leading `http://` or `https://`.
pub fn strip_scheme(input: &str) -> &str {
    match SCHEME_RE.find(input) {
        Some(m) => &input[m.end()..],
        None => input,
    }
}
