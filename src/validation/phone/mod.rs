/// Carrier ranges by E.164 prefix.
pub mod carrier;

/// Per-region number-plan type tables.
pub mod linetype;

/// Region display names and IANA time zone lists.
pub mod region;

use crate::config::AppConfig;
use crate::models::phone::PhoneValidationResult;
use crate::validation::round_score;
use phonenumber::{Mode, country};
use tracing::warn;

/// # Phone Validator
///
/// Parses a candidate phone number against the international number plans,
/// classifies it, and attaches carrier and timezone information from the
/// compiled-in tables.
///
/// Input with an international prefix (`+`) is parsed as-is. Bare national
/// digits are retried under the configured fallback regions in order; the
/// first region whose plan accepts the digits as a valid number wins. The
/// default order (`US`, then `IT`) reflects this deployment's user base,
/// not a universal rule; see `PHONE_FALLBACK_REGIONS`.
///
/// Validation never fails; unparseable input produces an all-absent result
/// with a zero score.
#[derive(Debug, Clone)]
pub struct PhoneValidator {
    fallback_regions: Vec<country::Id>,
}

impl PhoneValidator {
    pub fn new(config: &AppConfig) -> Self {
        let mut fallback_regions: Vec<country::Id> = config
            .phone_fallback_regions
            .iter()
            .filter_map(|code| {
                let region = region_from_code(code);
                if region.is_none() {
                    warn!("ignoring unsupported fallback region {code:?}");
                }
                region
            })
            .collect();

        if fallback_regions.is_empty() {
            fallback_regions = vec![country::US, country::IT];
        }

        Self { fallback_regions }
    }

    /// Validates a candidate phone number.
    pub fn validate(&self, phone: &str) -> PhoneValidationResult {
        let input = phone.trim();

        let number = if input.contains('+') {
            phonenumber::parse(None, input)
                .ok()
                .filter(phonenumber::is_valid)
        } else {
            self.fallback_regions.iter().find_map(|&region| {
                phonenumber::parse(Some(region), input)
                    .ok()
                    .filter(phonenumber::is_valid)
            })
        };

        let number = match number {
            Some(number) => number,
            None => return PhoneValidationResult::invalid(),
        };

        let international_format = number.format().mode(Mode::E164).to_string();
        let country_code = number.country().id().map(|id| id.as_ref().to_string());
        let region_code = country_code.as_deref().unwrap_or("");

        let country = region::country_name(region_code).map(str::to_string);
        let national = national_significant(&international_format, number.code().value());
        let line_type = linetype::classify(region_code, &national);
        let carrier = carrier::carrier_for(&international_format).map(str::to_string);
        let timezone: Vec<String> = region::time_zones(region_code)
            .iter()
            .map(|zone| zone.to_string())
            .collect();

        let confidence_score = Self::confidence(true, carrier.is_some(), country.is_some());

        PhoneValidationResult {
            valid: true,
            international_format: Some(international_format),
            country,
            country_code,
            kind: Some(line_type),
            carrier,
            line_type: Some(line_type),
            timezone: Some(timezone),
            confidence_score,
        }
    }

    /// Weighted confidence score.
    ///
    /// | signal           | weight |
    /// |------------------|--------|
    /// | plan-valid       | 0.7    |
    /// | carrier found    | 0.15   |
    /// | country resolved | 0.15   |
    fn confidence(valid: bool, has_carrier: bool, has_country: bool) -> f64 {
        let mut score = 0.0;

        if valid {
            score += 0.7;
        }
        if has_carrier {
            score += 0.15;
        }
        if has_country {
            score += 0.15;
        }

        round_score(score)
    }
}

/// The national significant number: E.164 digits after the country calling
/// code. Italian numbers keep their leading zero here.
fn national_significant(e164: &str, calling_code: u16) -> String {
    e164.strip_prefix('+')
        .and_then(|rest| rest.strip_prefix(&calling_code.to_string()))
        .unwrap_or("")
        .to_string()
}

/// Maps an ISO alpha-2 code to a parser region. Only regions the service
/// carries plan tables for are accepted as fallbacks.
pub fn region_from_code(code: &str) -> Option<country::Id> {
    let region = match code {
        "US" => country::US,
        "CA" => country::CA,
        "IT" => country::IT,
        "GB" => country::GB,
        "FR" => country::FR,
        "DE" => country::DE,
        "ES" => country::ES,
        "CH" => country::CH,
        "NL" => country::NL,
        "BE" => country::BE,
        "PT" => country::PT,
        "IE" => country::IE,
        "AT" => country::AT,
        _ => return None,
    };
    Some(region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::phone::LineType;

    fn validator() -> PhoneValidator {
        PhoneValidator::new(&AppConfig::default())
    }

    #[test]
    fn test_italian_mobile_full_house() {
        let result = validator().validate("+393331234567");

        assert!(result.valid);
        assert_eq!(result.international_format.as_deref(), Some("+393331234567"));
        assert_eq!(result.country_code.as_deref(), Some("IT"));
        assert_eq!(result.country.as_deref(), Some("Italy"));
        assert_eq!(result.kind, Some(LineType::Mobile));
        assert_eq!(result.line_type, Some(LineType::Mobile));
        assert_eq!(result.carrier.as_deref(), Some("TIM"));
        assert!(
            result
                .timezone
                .as_ref()
                .unwrap()
                .contains(&"Europe/Rome".to_string())
        );
        assert_eq!(result.confidence_score, 1.0);
    }

    #[test]
    fn test_italian_fixed_line_without_carrier() {
        let result = validator().validate("+390212345678");

        assert!(result.valid);
        assert_eq!(result.country_code.as_deref(), Some("IT"));
        assert_eq!(result.line_type, Some(LineType::FixedLine));
        assert!(result.carrier.is_none());
        assert_eq!(result.confidence_score, 0.85);
    }

    #[test]
    fn test_unparseable_input() {
        let result = validator().validate("not-a-number");

        assert!(!result.valid);
        assert!(result.international_format.is_none());
        assert!(result.country.is_none());
        assert!(result.country_code.is_none());
        assert!(result.kind.is_none());
        assert!(result.carrier.is_none());
        assert!(result.timezone.is_none());
        assert_eq!(result.confidence_score, 0.0);
    }

    #[test]
    fn test_degenerate_inputs_never_panic() {
        for input in ["", "   ", "+", "++", "☎ call me", "+9999999999999999999"] {
            let result = validator().validate(input);
            assert!(!result.valid);
            assert_eq!(result.confidence_score, 0.0);
        }
    }

    #[test]
    fn test_fallback_parses_bare_us_number() {
        let result = validator().validate("4155552671");

        assert!(result.valid);
        assert_eq!(result.country_code.as_deref(), Some("US"));
        assert_eq!(result.international_format.as_deref(), Some("+14155552671"));
        assert_eq!(result.line_type, Some(LineType::FixedLineOrMobile));
        assert!(result.carrier.is_none());
        assert_eq!(result.confidence_score, 0.85);
    }

    #[test]
    fn test_fallback_order_reaches_second_region() {
        // Not plan-valid in the US (area codes cannot start with 0), valid
        // as a Milan fixed line under the second fallback region
        let result = validator().validate("0212345678");

        assert!(result.valid);
        assert_eq!(result.country_code.as_deref(), Some("IT"));
        assert_eq!(result.line_type, Some(LineType::FixedLine));
    }

    #[test]
    fn test_plan_invalid_international_number_is_rejected() {
        // Parses, but fails the US plan's pattern rules
        let result = validator().validate("+11234567890");
        assert!(!result.valid);
        assert_eq!(result.confidence_score, 0.0);
    }

    #[test]
    fn test_toll_free_classification() {
        let us = validator().validate("+18005551212");
        assert!(us.valid);
        assert_eq!(us.line_type, Some(LineType::TollFree));

        let it = validator().validate("+39800123456");
        assert!(it.valid);
        assert_eq!(it.line_type, Some(LineType::TollFree));
    }

    #[test]
    fn test_e164_round_trip_is_stable() {
        let first = validator().validate("+393331234567");
        let formatted = first.international_format.unwrap();

        let second = validator().validate(&formatted);
        assert_eq!(second.international_format, Some(formatted));
    }

    #[test]
    fn test_confidence_weight_table() {
        assert_eq!(PhoneValidator::confidence(true, true, true), 1.0);
        assert_eq!(PhoneValidator::confidence(true, false, true), 0.85);
        assert_eq!(PhoneValidator::confidence(true, true, false), 0.85);
        assert_eq!(PhoneValidator::confidence(true, false, false), 0.7);
        assert_eq!(PhoneValidator::confidence(false, false, false), 0.0);
    }

    #[test]
    fn test_region_codes() {
        assert_eq!(region_from_code("US"), Some(country::US));
        assert_eq!(region_from_code("IT"), Some(country::IT));
        assert_eq!(region_from_code("ZZ"), None);
        assert_eq!(region_from_code("us"), None); // config uppercases
    }

    #[test]
    fn test_unsupported_fallback_regions_fall_back_to_defaults() {
        let config = AppConfig {
            phone_fallback_regions: vec!["XX".to_string(), "YY".to_string()],
            ..AppConfig::default()
        };
        let validator = PhoneValidator::new(&config);
        assert_eq!(validator.fallback_regions, vec![country::US, country::IT]);
    }
}
