use std::ops::RangeInclusive;

use serde::Serialize;
use serde_json::Value;

use crate::validation::{check_range, ObjectFields, ValidationError, ValidationReason};

pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

const POSITION_KEYS: [&str; 2] = ["lat", "lon"];

/// A validated point on the globe, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            latitude: check_range("latitude", latitude, &LATITUDE_RANGE)?,
            longitude: check_range("longitude", longitude, &LONGITUDE_RANGE)?,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Reads `{lat, lon}` from a JSON position object.
    pub fn from_position(value: &Value, path: String) -> Result<Self, ValidationError> {
        let fields = ObjectFields::new(value, Some(path), &POSITION_KEYS)?;
        let latitude = fields.number_in("lat", &LATITUDE_RANGE)?;
        let longitude = fields.number_in("lon", &LONGITUDE_RANGE)?;
        fields.reject_unknown()?;

        Ok(Self { latitude, longitude })
    }

    pub(crate) fn from_fields(fields: &ObjectFields, latitude_key: &str, longitude_key: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            latitude: fields.number_in(latitude_key, &LATITUDE_RANGE)?,
            longitude: fields.number_in(longitude_key, &LONGITUDE_RANGE)?,
        })
    }
}

/// Exactly two coordinates. The order is kept as given even though distance
/// does not depend on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointPair {
    a: Coordinate,
    b: Coordinate,
}

impl PointPair {
    pub fn new(a: Coordinate, b: Coordinate) -> Self {
        Self { a, b }
    }

    pub fn a(&self) -> &Coordinate {
        &self.a
    }

    pub fn b(&self) -> &Coordinate {
        &self.b
    }

    /// Validates the `positions` member of a proximity request.
    pub fn from_positions(positions: Option<&Value>) -> Result<Self, ValidationError> {
        let Some(positions) = positions else {
            return Err(ValidationError::new("positions", ValidationReason::Required));
        };
        let Value::Array(items) = positions else {
            return Err(ValidationError::new("positions", ValidationReason::NotAnArray));
        };
        if items.len() != 2 {
            return Err(ValidationError::new("positions", ValidationReason::ItemCount(2)));
        }

        let a = Coordinate::from_position(&items[0], "positions[0]".to_string())?;
        let b = Coordinate::from_position(&items[1], "positions[1]".to_string())?;

        Ok(Self::new(a, b))
    }
}
