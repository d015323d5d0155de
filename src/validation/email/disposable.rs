use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    /// Known disposable-email domains, compiled into the binary. Refreshing
    /// this list from a feed is an operational task, not runtime behavior.
    static ref DISPOSABLE_DOMAINS: HashSet<&'static str> = [
        "10minutemail.com",
        "guerrillamail.com",
        "mailinator.com",
        "tempmail.org",
        "temp-mail.org",
        "throwaway.email",
        "maildrop.cc",
        "yopmail.com",
        "mailnesia.com",
        "mintemail.com",
        "mohmal.com",
        "dispostable.com",
    ]
    .into_iter()
    .collect();

    /// Machine-generated throwaway domains: one long random label under .com.
    static ref RANDOM_LABEL: Regex =
        Regex::new(r"^[a-z0-9]{10,}\.com$").unwrap();
}

/// TLDs overwhelmingly used by throwaway-domain mills.
const SUSPICIOUS_TLDS: [&str; 8] = [
    ".tk", ".ml", ".ga", ".cf", ".top", ".click", ".download", ".win",
];

/// Whether the domain is a disposable-email provider.
///
/// Membership is an exact or parent-domain match against the compiled-in
/// set, backed by heuristics for domains the list cannot keep up with:
/// very short domains, suspicious TLDs, and random-string `.com` domains.
/// Matching is case-insensitive; the caller normally passes an
/// already-lowercased domain.
pub fn is_disposable_domain(domain: &str) -> bool {
    let domain = domain.to_lowercase();

    if in_disposable_set(&domain) {
        return true;
    }

    if domain.len() < 4 {
        return true;
    }

    if SUSPICIOUS_TLDS.iter().any(|tld| domain.ends_with(tld)) {
        return true;
    }

    RANDOM_LABEL.is_match(&domain)
}

/// Exact match, then each parent domain (`mail.yopmail.com` -> `yopmail.com`).
fn in_disposable_set(domain: &str) -> bool {
    let mut rest = domain;
    loop {
        if DISPOSABLE_DOMAINS.contains(rest) {
            return true;
        }
        match rest.split_once('.') {
            Some((_, parent)) if !parent.is_empty() => rest = parent,
            _ => return false,
        }
    }
}
