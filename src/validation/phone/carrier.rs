/// Carrier ranges by E.164 prefix.
///
/// Coverage mirrors where upstream number-plan data actually has carrier
/// mappings: the Italian mobile plan assigns ranges per operator, while
/// ported-number markets such as the US publish none, so lookups there
/// come back empty.
const CARRIER_PREFIXES: [(&str, &str); 31] = [
    // Wind Tre
    ("+39320", "Wind Tre"),
    ("+39322", "Wind Tre"),
    ("+39323", "Wind Tre"),
    ("+39324", "Wind Tre"),
    ("+39327", "Wind Tre"),
    ("+39328", "Wind Tre"),
    ("+39329", "Wind Tre"),
    ("+39380", "Wind Tre"),
    ("+39383", "Wind Tre"),
    ("+39388", "Wind Tre"),
    ("+39389", "Wind Tre"),
    // TIM
    ("+39330", "TIM"),
    ("+39331", "TIM"),
    ("+39333", "TIM"),
    ("+39334", "TIM"),
    ("+39335", "TIM"),
    ("+39336", "TIM"),
    ("+39337", "TIM"),
    ("+39338", "TIM"),
    ("+39339", "TIM"),
    ("+39360", "TIM"),
    ("+39363", "TIM"),
    ("+39366", "TIM"),
    ("+39368", "TIM"),
    // Vodafone
    ("+39340", "Vodafone"),
    ("+39342", "Vodafone"),
    ("+39345", "Vodafone"),
    ("+39346", "Vodafone"),
    ("+39347", "Vodafone"),
    ("+39348", "Vodafone"),
    ("+39349", "Vodafone"),
];

/// Looks up the carrier for an E.164 number. `None` when no range matches,
/// which is the common case outside the mapped plans.
pub fn carrier_for(e164: &str) -> Option<&'static str> {
    CARRIER_PREFIXES
        .iter()
        .find(|(prefix, _)| e164.starts_with(prefix))
        .map(|&(_, name)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_italian_mobile_ranges() {
        assert_eq!(carrier_for("+393331234567"), Some("TIM"));
        assert_eq!(carrier_for("+393471234567"), Some("Vodafone"));
        assert_eq!(carrier_for("+393291234567"), Some("Wind Tre"));
    }

    #[test]
    fn test_unmapped_ranges() {
        // Italian fixed line, US mobile: no carrier data
        assert_eq!(carrier_for("+390212345678"), None);
        assert_eq!(carrier_for("+14155552671"), None);
    }
}
