use std::net::{IpAddr, Ipv6Addr};
use thiserror::Error;

/// Reason an address failed the syntax check. Surfaced to clients through
/// the `validation_error` detail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("address is empty")]
    Empty,
    #[error("address exceeds 254 characters")]
    TooLong,
    #[error("address is missing an '@' separator")]
    MissingAt,
    #[error("local part exceeds 64 characters")]
    LocalTooLong,
    #[error("local part is not valid dot-atom or quoted-string syntax")]
    InvalidLocalPart,
    #[error("domain part is not a valid domain name or address literal")]
    InvalidDomain,
}

/// An address that passed the syntax check, split at the unquoted `@`.
///
/// The domain is lowercased at construction; the local part keeps its case
/// (mailbox names are case-sensitive in principle, domains are not).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEmail {
    pub local: String,
    pub domain: String,
}

impl ParsedEmail {
    /// The normalized form: original local part, lowercased domain.
    pub fn normalized(&self) -> String {
        format!("{}@{}", self.local, self.domain)
    }
}

/// Parses an email address according to RFC 5322 and RFC 6531.
///
/// Handles quoted-string local parts, domain literals (IP addresses),
/// internationalized (UTF-8) addresses, and the RFC 5321 length limits.
/// Returns the split, domain-normalized address or the first syntax error
/// encountered.
pub fn parse_email(email: &str) -> Result<ParsedEmail, SyntaxError> {
    if email.is_empty() {
        return Err(SyntaxError::Empty);
    }

    // Overall length constraint (RFC 5321 + 5322)
    if email.len() > 254 {
        return Err(SyntaxError::TooLong);
    }

    // Find the @ separator, ignoring quoted @ symbols
    let mut in_quotes = false;
    let mut escape = false;
    let mut split_index = None;

    for (i, c) in email.char_indices() {
        match c {
            '"' if !escape => in_quotes = !in_quotes,
            '\\' if in_quotes => escape = true,
            '@' if !in_quotes => {
                split_index = Some(i);
                break;
            }
            _ => escape = false,
        }
    }

    let split_index = split_index.ok_or(SyntaxError::MissingAt)?;
    let (local_part, domain_part) = email.split_at(split_index);
    let domain_part = &domain_part[1..]; // skip @

    // Local part length limit (RFC 5321)
    if local_part.len() > 64 {
        return Err(SyntaxError::LocalTooLong);
    }

    if !is_valid_local_part(local_part) {
        return Err(SyntaxError::InvalidLocalPart);
    }

    if !is_valid_domain_part(domain_part) {
        return Err(SyntaxError::InvalidDomain);
    }

    Ok(ParsedEmail {
        local: local_part.to_string(),
        domain: domain_part.to_lowercase(),
    })
}

/// Whether the address passes the syntax check.
pub fn is_valid_email(email: &str) -> bool {
    parse_email(email).is_ok()
}

/// Local part: dot-atom (RFC 5322 section 3.4.1) or quoted-string form.
fn is_valid_local_part(local: &str) -> bool {
    if local.starts_with('"') && local.ends_with('"') && local.len() >= 2 {
        is_valid_quoted_string(local)
    } else {
        is_valid_dot_atom(local, false)
    }
}

/// Domain part: domain name, or domain literal (IP address) in brackets.
fn is_valid_domain_part(domain: &str) -> bool {
    if let Some(literal) = domain.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        is_valid_domain_literal(literal)
    } else {
        is_valid_domain_name(domain)
    }
}

/// Quoted-string content from RFC 5322 section 3.4.1: backslash escapes
/// only `\` and `"`, no unescaped quotes, no dangling escape.
fn is_valid_quoted_string(quoted: &str) -> bool {
    let content = &quoted[1..quoted.len() - 1];
    let mut escape = false;

    for c in content.chars() {
        if escape {
            if !matches!(c, '\\' | '"') {
                return false;
            }
            escape = false;
        } else if c == '\\' {
            escape = true;
        } else if c == '"' {
            return false;
        }
    }
    !escape
}

/// Dot-atom form from RFC 5322 section 3.4.1.
///
/// * `is_domain` - restricts atom characters to the label alphabet
fn is_valid_dot_atom(s: &str, is_domain: bool) -> bool {
    let parts: Vec<&str> = s.split('.').collect();
    if parts.is_empty() || parts.iter().any(|&p| p.is_empty()) {
        return false;
    }

    parts.iter().all(|part| {
        part.chars().all(|c| match c {
            '-' => !is_domain || (!part.starts_with('-') && !part.ends_with('-')),
            c if is_domain => c.is_alphanumeric() || c == '-',
            _ => c.is_alphanumeric() || "!#$%&'*+/=?^_`{|}~".contains(c),
        })
    })
}

/// Domain literal (IP address) from RFC 5322 section 3.4.1.
fn is_valid_domain_literal(literal: &str) -> bool {
    literal.parse::<IpAddr>().is_ok()
        || literal
            .strip_prefix("IPv6:")
            .and_then(|ip| ip.parse::<Ipv6Addr>().ok())
            .is_some()
}

/// Internationalized domain names per RFC 5890 and RFC 6531.
fn is_valid_domain_name(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    !labels.is_empty()
        && labels.iter().all(|label| {
            label.len() <= 63
                && !label.starts_with('-')
                && !label.ends_with('-')
                && is_valid_dot_atom(label, true)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_emails() {
        let parsed = parse_email("simple@example.com").unwrap();
        assert_eq!(parsed.local, "simple");
        assert_eq!(parsed.domain, "example.com");

        assert!(is_valid_email("very.common@example.com"));
        assert!(is_valid_email("x@example.com"));
        assert!(is_valid_email("a.b@example.com"));
    }

    #[test]
    fn lowercases_domain_but_not_local_part() {
        let parsed = parse_email("John.Doe@EXAMPLE.COM").unwrap();
        assert_eq!(parsed.local, "John.Doe");
        assert_eq!(parsed.domain, "example.com");
        assert_eq!(parsed.normalized(), "John.Doe@example.com");
    }

    #[test]
    fn parses_special_characters() {
        assert!(is_valid_email("!#$%&'*+-/=?^_`{}|~@example.com"));
        assert!(is_valid_email("\"quoted@local\"@example.com"));
        assert!(is_valid_email("\"escaped\\\"quote\"@example.com"));
        assert!(is_valid_email("\"with space\"@example.com"));
    }

    #[test]
    fn quoted_local_splits_at_the_right_at() {
        let parsed = parse_email("\"quoted@local\"@example.com").unwrap();
        assert_eq!(parsed.local, "\"quoted@local\"");
        assert_eq!(parsed.domain, "example.com");
    }

    #[test]
    fn parses_domain_literals() {
        assert!(is_valid_email("user@[192.168.0.1]"));
        assert!(is_valid_email("user@[IPv6:2001:db8::1]"));
        assert!(is_valid_email(
            "user@[IPv6:2001:0db8:85a3:0000:0000:ac1f:8001:1234]"
        ));
    }

    #[test]
    fn parses_international_addresses() {
        assert!(is_valid_email("Pelé@exämple.中国"));
        assert!(is_valid_email("用户@例子.中国"));
    }

    #[test]
    fn parses_length_edge_cases() {
        let max_local = "a".repeat(64);
        assert!(is_valid_email(&format!("{}@example.com", max_local)));

        // 254 chars total with max-length labels
        let label = "b".repeat(63);
        let domain = format!("{}.{}.{}", label, label, "c".repeat(61));
        assert_eq!(max_local.len() + 1 + domain.len(), 254);
        assert!(is_valid_email(&format!("{}@{}", max_local, domain)));
    }

    #[test]
    fn rejects_missing_at() {
        assert_eq!(
            parse_email("missing.example.com").unwrap_err(),
            SyntaxError::MissingAt
        );
        assert!(!is_valid_email("missing@"));
        assert!(!is_valid_email("@missing.com"));
    }

    #[test]
    fn rejects_overlong_inputs() {
        let long_local = "a".repeat(65);
        assert_eq!(
            parse_email(&format!("{}@example.com", long_local)).unwrap_err(),
            SyntaxError::LocalTooLong
        );

        let local = "a".repeat(64);
        let domain = "b".repeat(190); // 64 + 1 + 190 = 255
        assert_eq!(
            parse_email(&format!("{}@{}", local, domain)).unwrap_err(),
            SyntaxError::TooLong
        );
    }

    #[test]
    fn rejects_invalid_local_parts() {
        assert!(!is_valid_email("no..dots@example.com"));
        assert!(!is_valid_email(".leading@example.com"));
        assert!(!is_valid_email("trailing.@example.com"));
        assert!(!is_valid_email("un\"quoted@example.com"));
        assert!(!is_valid_email("spaces unquoted@example.com"));
    }

    #[test]
    fn rejects_invalid_domains() {
        assert_eq!(
            parse_email("user@-hyphenstart.com").unwrap_err(),
            SyntaxError::InvalidDomain
        );
        assert!(!is_valid_email("user@hyphenend-.com"));
        assert!(!is_valid_email("user@.leadingdot.com"));
        assert!(!is_valid_email("user@double..dot.com"));
        assert!(!is_valid_email("user@_invalidchar.com"));
    }

    #[test]
    fn rejects_invalid_domain_literals() {
        assert!(!is_valid_email("user@[invalid.ip]"));
        assert!(!is_valid_email("user@[IPv6:2001:db8:::1]"));
        assert!(!is_valid_email("user@[192.168.0.256]"));
        assert!(!is_valid_email("user@[missing.bracket"));
    }

    #[test]
    fn rejects_broken_quoting() {
        assert!(!is_valid_email("\"invalid\\escape\"@example.com"));
        assert!(!is_valid_email("\"unbalanced@example.com"));
        assert!(!is_valid_email("quote\"in@middle.example.com"));
    }

    #[test]
    fn rejects_degenerate_inputs() {
        assert_eq!(parse_email("").unwrap_err(), SyntaxError::Empty);
        assert!(!is_valid_email("   "));
        assert!(!is_valid_email("@"));
        assert!(!is_valid_email("null@"));
    }
}
