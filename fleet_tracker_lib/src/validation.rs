use std::ops::RangeInclusive;

use serde_json::{Map, Value};
use thiserror::Error;

/// A rejected input value. `field` is the dotted path of the offending value
/// inside the request body, e.g. `positions[1].lon`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("\"{field}\" {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: ValidationReason,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationReason {
    #[error("is required")]
    Required,
    #[error("is not allowed")]
    NotAllowed,
    #[error("is not allowed to be empty")]
    Empty,
    #[error("must be a number")]
    NotANumber,
    #[error("must be a string")]
    NotAString,
    #[error("must be of type object")]
    NotAnObject,
    #[error("must be an array")]
    NotAnArray,
    #[error("must be greater than or equal to {0}")]
    BelowMinimum(f64),
    #[error("must be less than or equal to {0}")]
    AboveMaximum(f64),
    #[error("must contain {0} items")]
    ItemCount(usize),
    #[error("length must be at least {0} characters long")]
    TooShort(usize),
    #[error("length must be less than or equal to {0} characters long")]
    TooLong(usize),
    #[error("must be in ISO 8601 date format")]
    InvalidDate,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: ValidationReason) -> Self {
        Self {
            field: field.into(),
            reason,
        }
    }
}

/// Checks a number against an inclusive range, reporting which bound failed.
pub fn check_range(field: &str, value: f64, range: &RangeInclusive<f64>) -> Result<f64, ValidationError> {
    if value < *range.start() {
        return Err(ValidationError::new(field, ValidationReason::BelowMinimum(*range.start())));
    }
    if value > *range.end() {
        return Err(ValidationError::new(field, ValidationReason::AboveMaximum(*range.end())));
    }
    Ok(value)
}

/// Read access to the members of a JSON object under validation.
///
/// Fields are read in the order the caller asks for them, so the first failing
/// field in that order is the one reported. Call [`ObjectFields::reject_unknown`]
/// last to refuse keys outside the allowed set.
pub(crate) struct ObjectFields<'a> {
    map: &'a Map<String, Value>,
    prefix: Option<String>,
    allowed: &'a [&'a str],
}

impl<'a> ObjectFields<'a> {
    pub fn new(value: &'a Value, prefix: Option<String>, allowed: &'a [&'a str]) -> Result<Self, ValidationError> {
        let Value::Object(map) = value else {
            let field = prefix.unwrap_or_else(|| "value".to_string());
            return Err(ValidationError::new(field, ValidationReason::NotAnObject));
        };

        Ok(Self { map, prefix, allowed })
    }

    pub fn path(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.to_string(),
        }
    }

    fn required(&self, key: &str) -> Result<&'a Value, ValidationError> {
        self.map
            .get(key)
            .ok_or_else(|| ValidationError::new(self.path(key), ValidationReason::Required))
    }

    /// A required number. Numeric strings are accepted and converted.
    pub fn number(&self, key: &str) -> Result<f64, ValidationError> {
        let not_a_number = || ValidationError::new(self.path(key), ValidationReason::NotANumber);

        match self.required(key)? {
            Value::Number(number) => number.as_f64().ok_or_else(not_a_number),
            Value::String(text) => text
                .parse::<f64>()
                .ok()
                .filter(|number| number.is_finite())
                .ok_or_else(not_a_number),
            _ => Err(not_a_number()),
        }
    }

    /// A required number that must lie within `range`.
    pub fn number_in(&self, key: &str, range: &RangeInclusive<f64>) -> Result<f64, ValidationError> {
        let number = self.number(key)?;
        check_range(&self.path(key), number, range)
    }

    /// A required, non-empty string.
    pub fn string(&self, key: &str) -> Result<&'a str, ValidationError> {
        match self.required(key)? {
            Value::String(text) if text.is_empty() => Err(ValidationError::new(self.path(key), ValidationReason::Empty)),
            Value::String(text) => Ok(text.as_str()),
            _ => Err(ValidationError::new(self.path(key), ValidationReason::NotAString)),
        }
    }

    pub fn reject_unknown(&self) -> Result<(), ValidationError> {
        match self.map.keys().find(|key| !self.allowed.contains(&key.as_str())) {
            Some(key) => Err(ValidationError::new(self.path(key), ValidationReason::NotAllowed)),
            None => Ok(()),
        }
    }
}
