use serde::Serialize;
use serde_json::Value;

use crate::{
    location_report::{LocationHistory, LocationReport},
    validation::{ObjectFields, ValidationError, ValidationReason},
};

pub type VehicleId = u64;

pub const LICENSE_LENGTH: usize = 8;

const LICENSE_KEYS: [&str; 1] = ["license"];

/// A license plate of exactly [`LICENSE_LENGTH`] UTF-16 code units. Only the
/// length is checked, not the character set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct License(String);

impl License {
    pub fn new(license: impl Into<String>) -> Result<Self, ValidationError> {
        let license = license.into();
        if license.is_empty() {
            return Err(ValidationError::new("license", ValidationReason::Empty));
        }
        // Counted in UTF-16 code units, so a character outside the BMP counts twice.
        let length = license.encode_utf16().count();
        if length < LICENSE_LENGTH {
            return Err(ValidationError::new("license", ValidationReason::TooShort(LICENSE_LENGTH)));
        }
        if length > LICENSE_LENGTH {
            return Err(ValidationError::new("license", ValidationReason::TooLong(LICENSE_LENGTH)));
        }
        Ok(Self(license))
    }

    /// Validates a `{license}` request body.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let fields = ObjectFields::new(body, None, &LICENSE_KEYS)?;
        let license = Self::new(fields.string("license")?)?;
        fields.reject_unknown()?;
        Ok(license)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub license: License,
    pub locations: LocationHistory,
}

impl Vehicle {
    pub fn new(id: VehicleId, license: License) -> Self {
        Self {
            id,
            license,
            locations: LocationHistory::new(),
        }
    }

    pub fn record_location(&mut self, report: LocationReport) {
        self.locations.record(report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("12345678")]
    #[case("12-AA-32")]
    #[case("ÆØÅ-1234")]
    #[case("🚗-12345")]
    fn accepts_eight_characters(#[case] license: &str) {
        assert_eq!(License::new(license).unwrap().as_str(), license);
    }

    #[rstest]
    #[case("1234567", ValidationReason::TooShort(8))]
    #[case("123456789", ValidationReason::TooLong(8))]
    #[case("🚗-123456", ValidationReason::TooLong(8))]
    #[case("🚗12345", ValidationReason::TooShort(8))]
    #[case("", ValidationReason::Empty)]
    fn rejects_other_lengths(#[case] license: &str, #[case] reason: ValidationReason) {
        assert_eq!(License::new(license), Err(ValidationError::new("license", reason)));
    }

    #[rstest]
    #[case(json!({}), "\"license\" is required")]
    #[case(json!({ "license": 12345678 }), "\"license\" must be a string")]
    #[case(json!({ "license": "1234567" }), "\"license\" length must be at least 8 characters long")]
    #[case(json!({ "license": "123456789" }), "\"license\" length must be less than or equal to 8 characters long")]
    #[case(json!({ "license": "12345678", "owner": "me" }), "\"owner\" is not allowed")]
    #[case(json!("12345678"), "\"value\" must be of type object")]
    fn rejects_bad_bodies(#[case] body: Value, #[case] message: &str) {
        assert_eq!(License::from_json(&body).unwrap_err().to_string(), message);
    }

    #[test]
    fn serializes_with_empty_history() {
        let vehicle = Vehicle::new(4, License::new("12-AA-32").unwrap());

        assert_eq!(
            serde_json::to_value(&vehicle).unwrap(),
            json!({ "id": 4, "license": "12-AA-32", "locations": [] })
        );
    }
}
