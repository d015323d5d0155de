use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// Well-known mailbox providers by domain. Covers the global providers
    /// plus the Italian regional ones this deployment sees most.
    static ref KNOWN_PROVIDERS: HashMap<&'static str, &'static str> = [
        ("gmail.com", "Gmail"),
        ("googlemail.com", "Gmail"),
        ("outlook.com", "Outlook"),
        ("hotmail.com", "Hotmail"),
        ("live.com", "Microsoft Live"),
        ("yahoo.com", "Yahoo"),
        ("yahoo.it", "Yahoo Italy"),
        ("yahoo.co.uk", "Yahoo UK"),
        ("protonmail.com", "ProtonMail"),
        ("icloud.com", "iCloud"),
        ("me.com", "iCloud"),
        ("mac.com", "iCloud"),
        ("libero.it", "Libero"),
        ("tiscali.it", "Tiscali"),
        ("alice.it", "Alice"),
        ("virgilio.it", "Virgilio"),
        ("tin.it", "TIN"),
    ]
    .into_iter()
    .collect();
}

/// Identifies the mailbox provider for a domain, if recognized.
///
/// Exact match first, then parent domains, so `mail.libero.it` still maps
/// to Libero. First match wins; unrecognized domains yield `None`.
pub fn provider_for(domain: &str) -> Option<&'static str> {
    let domain = domain.to_lowercase();
    let mut rest = domain.as_str();
    loop {
        if let Some(&name) = KNOWN_PROVIDERS.get(rest) {
            return Some(name);
        }
        match rest.split_once('.') {
            Some((_, parent)) if !parent.is_empty() => rest = parent,
            _ => return None,
        }
    }
}
