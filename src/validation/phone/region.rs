/// Display names for the regions the service recognizes. Regions outside
/// the table still produce a `country_code`; only the display name is
/// absent.
pub fn country_name(region: &str) -> Option<&'static str> {
    let name = match region {
        "US" => "United States",
        "CA" => "Canada",
        "IT" => "Italy",
        "GB" => "United Kingdom",
        "FR" => "France",
        "DE" => "Germany",
        "ES" => "Spain",
        "CH" => "Switzerland",
        "NL" => "Netherlands",
        "BE" => "Belgium",
        "PT" => "Portugal",
        "IE" => "Ireland",
        "AT" => "Austria",
        _ => return None,
    };
    Some(name)
}

/// Ordered IANA time zones overlapping a region. Multi-zone countries list
/// every zone, east to west.
pub fn time_zones(region: &str) -> &'static [&'static str] {
    match region {
        "US" => &[
            "America/New_York",
            "America/Chicago",
            "America/Denver",
            "America/Phoenix",
            "America/Los_Angeles",
            "America/Anchorage",
            "America/Adak",
            "Pacific/Honolulu",
        ],
        "CA" => &[
            "America/St_Johns",
            "America/Halifax",
            "America/Toronto",
            "America/Winnipeg",
            "America/Edmonton",
            "America/Vancouver",
        ],
        "IT" => &["Europe/Rome"],
        "GB" => &["Europe/London"],
        "FR" => &["Europe/Paris"],
        "DE" => &["Europe/Berlin"],
        "ES" => &["Europe/Madrid", "Atlantic/Canary"],
        "CH" => &["Europe/Zurich"],
        "NL" => &["Europe/Amsterdam"],
        "BE" => &["Europe/Brussels"],
        "PT" => &["Europe/Lisbon", "Atlantic/Azores", "Atlantic/Madeira"],
        "IE" => &["Europe/Dublin"],
        "AT" => &["Europe/Vienna"],
        _ => &[],
    }
}
