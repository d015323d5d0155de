use std::time::Duration;
use tracing::warn;
use trust_dns_resolver::{
    Resolver,
    config::{ResolverConfig, ResolverOpts},
    error::ResolveErrorKind,
    proto::rr::RecordType,
};

/// DNS signals gathered for a domain. The two checks are reported
/// separately: a domain with an A record but no MX may still accept mail at
/// the address record (implicit MX), so `mx_found = false` on its own is not
/// a verdict.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomainChecks {
    pub domain_exists: bool,
    pub mx_found: bool,
}

/// Checks whether a domain exists (A/AAAA) and publishes MX records.
///
/// Lookups run with the given timeout and a single attempt; a failed or
/// timed-out lookup counts as a negative signal for this request only, with
/// no retry. The MX lookup is skipped when the domain does not resolve.
pub fn check_domain(domain: &str, timeout: Duration) -> DomainChecks {
    let resolver = match create_resolver(timeout) {
        Some(r) => r,
        None => {
            warn!("could not construct DNS resolver, treating domain {domain} as unresolved");
            return DomainChecks::default();
        }
    };

    let domain_exists = has_records(&resolver, domain, RecordType::A)
        || has_records(&resolver, domain, RecordType::AAAA);
    let mx_found = domain_exists && has_mx_records(&resolver, domain);

    DomainChecks {
        domain_exists,
        mx_found,
    }
}

/// Resolver with the system default configuration, a bounded per-request
/// timeout, and no retries.
fn create_resolver(timeout: Duration) -> Option<Resolver> {
    let mut opts = ResolverOpts::default();
    opts.timeout = timeout;
    opts.attempts = 1;

    Resolver::new(ResolverConfig::default(), opts).ok()
}

fn has_records(resolver: &Resolver, domain: &str, record_type: RecordType) -> bool {
    match resolver.lookup(domain, record_type) {
        Ok(records) => !records.is_empty(),
        Err(e) => {
            // NXDOMAIN / empty answers are a definitive "no"; anything else
            // is a transient resolver failure scored conservatively as false.
            if !matches!(e.kind(), ResolveErrorKind::NoRecordsFound { .. }) {
                warn!("{record_type} lookup for {domain} failed: {e}");
            }
            false
        }
    }
}

fn has_mx_records(resolver: &Resolver, domain: &str) -> bool {
    match resolver.mx_lookup(domain) {
        Ok(records) => records.iter().next().is_some(),
        Err(e) => {
            if !matches!(e.kind(), ResolveErrorKind::NoRecordsFound { .. }) {
                warn!("MX lookup for {domain} failed: {e}");
            }
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(2);

    #[test]
    #[ignore] // requires network access
    fn test_domain_with_mx() {
        let checks = check_domain("gmail.com", TIMEOUT);
        assert!(checks.domain_exists);
        assert!(checks.mx_found);
    }

    #[test]
    #[ignore] // requires network access
    fn test_domain_with_a_record_only() {
        // example.com resolves but does not publish usable MX
        let checks = check_domain("example.com", TIMEOUT);
        assert!(checks.domain_exists);
    }

    #[test]
    fn test_nonexistent_domain() {
        // .invalid can never resolve (RFC 2606); holds with or without network
        let checks = check_domain("nonexistent.invalid", TIMEOUT);
        assert!(!checks.domain_exists);
        assert!(!checks.mx_found);
    }

    #[test]
    fn test_lookup_never_panics_on_garbage() {
        let checks = check_domain("not a domain at all", TIMEOUT);
        assert!(!checks.domain_exists);
    }
}
