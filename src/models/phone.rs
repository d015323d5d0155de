use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct PhoneRequest {
    pub phone: String,
}

/// Line classification from the number-plan type tables.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LineType {
    Mobile,
    FixedLine,
    FixedLineOrMobile,
    TollFree,
    PremiumRate,
    SharedCost,
    Voip,
    PersonalNumber,
    Pager,
    Uan,
    Voicemail,
    Unknown,
}

/// # Phone Validation Result
///
/// Verdict for a single phone number. All informational fields are null when
/// the number is not plan-valid.
///
/// The classification is serialized under both `type` and `line_type`;
/// clients of the original API read either key.
///
/// ## Example JSON
/// ```json
/// {
///   "valid": true,
///   "international_format": "+393331234567",
///   "country": "Italy",
///   "country_code": "IT",
///   "type": "mobile",
///   "carrier": "TIM",
///   "line_type": "mobile",
///   "timezone": ["Europe/Rome"],
///   "confidence_score": 1.0
/// }
/// ```
#[derive(Serialize, Debug, ToSchema)]
pub struct PhoneValidationResult {
    pub valid: bool,
    pub international_format: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<LineType>,
    pub carrier: Option<String>,
    pub line_type: Option<LineType>,
    pub timezone: Option<Vec<String>>,
    pub confidence_score: f64,
}

impl PhoneValidationResult {
    /// Result for input that did not parse as a plan-valid number.
    pub fn invalid() -> Self {
        Self {
            valid: false,
            international_format: None,
            country: None,
            country_code: None,
            kind: None,
            carrier: None,
            line_type: None,
            timezone: None,
            confidence_score: 0.0,
        }
    }
}
