/// RFC 5322/6531 address parsing and domain normalization.
pub mod syntax;

/// DNS existence and MX record checks with bounded timeouts.
pub mod dnsmx;

/// Compiled-in disposable-domain set and heuristics.
pub mod disposable;

/// Compiled-in well-known provider table.
pub mod provider;

use crate::config::AppConfig;
use crate::models::email::{EmailDetails, EmailValidationResult};
use crate::validation::round_score;
use std::time::Duration;

const CHECK_FORMAT: &str = "format";
const CHECK_DNS: &str = "dns";
const CHECK_MX: &str = "mx";
const CHECK_DISPOSABLE: &str = "disposable";
const CHECK_PROVIDER: &str = "provider";

/// # Email Validator
///
/// Gathers the independent signals for an address (syntax, DNS existence,
/// MX presence, disposable-domain membership, provider recognition) and
/// combines them into a verdict and a confidence score.
///
/// Stateless apart from configuration; the lookup tables it consults are
/// process-wide, read-only statics, so one instance can serve concurrent
/// requests without synchronization. DNS lookups block, so callers on an
/// async runtime run [`validate`](Self::validate) on a blocking pool.
///
/// Validation never fails: malformed input and lookup errors degrade the
/// confidence score and are recorded in the result instead of propagating.
#[derive(Debug, Clone)]
pub struct EmailValidator {
    dns_timeout: Duration,
}

impl EmailValidator {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            dns_timeout: config.dns_timeout,
        }
    }

    /// Validates a candidate email address.
    ///
    /// A syntax failure short-circuits: no network checks run, the score is
    /// 0.0 and `checks_performed` records only the format check. Otherwise
    /// every remaining check runs and `checks_performed` lists exactly what
    /// did (the MX check is skipped for unresolvable domains).
    pub fn validate(&self, email: &str) -> EmailValidationResult {
        let mut checks = vec![CHECK_FORMAT.to_string()];

        let parsed = match syntax::parse_email(email) {
            Ok(parsed) => parsed,
            Err(e) => {
                return EmailValidationResult {
                    valid: false,
                    disposable: false,
                    domain_exists: false,
                    mx_found: false,
                    provider: None,
                    suggestion: None,
                    confidence_score: 0.0,
                    details: EmailDetails {
                        normalized_email: None,
                        domain: None,
                        validation_error: Some(e.to_string()),
                        checks_performed: checks,
                    },
                };
            }
        };

        checks.push(CHECK_DNS.to_string());
        let dns = dnsmx::check_domain(&parsed.domain, self.dns_timeout);
        if dns.domain_exists {
            checks.push(CHECK_MX.to_string());
        }

        checks.push(CHECK_DISPOSABLE.to_string());
        let disposable = disposable::is_disposable_domain(&parsed.domain);

        checks.push(CHECK_PROVIDER.to_string());
        let provider = provider::provider_for(&parsed.domain);

        let confidence_score = Self::confidence(
            true,
            dns.domain_exists,
            dns.mx_found,
            disposable,
            provider.is_some(),
        );

        // Disposable addresses are reported invalid and flagged, so callers
        // that only look at `valid` still reject them.
        let valid = !disposable && (dns.domain_exists || dns.mx_found);

        EmailValidationResult {
            valid,
            disposable,
            domain_exists: dns.domain_exists,
            mx_found: dns.mx_found,
            provider: provider.map(str::to_string),
            suggestion: None,
            confidence_score,
            details: EmailDetails {
                normalized_email: Some(parsed.normalized()),
                domain: Some(parsed.domain),
                validation_error: None,
                checks_performed: checks,
            },
        }
    }

    /// Weighted confidence score.
    ///
    /// | signal          | weight |
    /// |-----------------|--------|
    /// | format valid    | 0.4    |
    /// | domain exists   | 0.2    |
    /// | MX found        | 0.2    |
    /// | not disposable  | 0.1    |
    /// | provider known  | 0.1    |
    ///
    /// A confirmed disposable domain additionally caps the score at 0.5:
    /// a live, resolvable throwaway domain would otherwise outscore a
    /// mailbox we merely failed to look up. The cap keeps the score
    /// monotonic: clearing the disposable flag never lowers it.
    fn confidence(
        format_ok: bool,
        domain_exists: bool,
        mx_found: bool,
        disposable: bool,
        has_provider: bool,
    ) -> f64 {
        let mut score: f64 = 0.0;

        if format_ok {
            score += 0.4;
        }
        if domain_exists {
            score += 0.2;
        }
        if mx_found {
            score += 0.2;
        }
        if !disposable {
            score += 0.1;
        }
        if has_provider {
            score += 0.1;
        }

        if disposable {
            score = score.min(0.5);
        }

        round_score(score)
    }
}
