use std::collections::VecDeque;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::{
    coordinate::Coordinate,
    validation::{ObjectFields, ValidationError, ValidationReason},
};

pub const MAX_LOCATIONS: usize = 10;

const NOTIFICATION_KEYS: [&str; 3] = ["latitude", "longitude", "timestamp"];

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y%m%d"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationReport {
    #[serde(flatten)]
    pub position: Coordinate,
    pub timestamp: DateTime<Utc>,
}

impl LocationReport {
    pub fn new(position: Coordinate, timestamp: DateTime<Utc>) -> Self {
        Self { position, timestamp }
    }

    /// Validates a `{latitude, longitude, timestamp}` notification body.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let fields = ObjectFields::new(body, None, &NOTIFICATION_KEYS)?;
        let position = Coordinate::from_fields(&fields, "latitude", "longitude")?;
        let timestamp = fields.string("timestamp").and_then(|text| {
            parse_timestamp(text).ok_or_else(|| ValidationError::new("timestamp", ValidationReason::InvalidDate))
        })?;
        fields.reject_unknown()?;

        Ok(Self::new(position, timestamp))
    }
}

/// Parses an ISO 8601 date or date-time. Values without an offset are taken
/// as UTC, a bare date as midnight UTC and a year-month as its first day.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp.with_timezone(&Utc));
    }

    // `Z` means UTC, which is how offset-less values are read anyway.
    let (local, zulu) = match text.strip_suffix('Z') {
        Some(local) => (local, true),
        None => (text, false),
    };

    for format in DATE_TIME_FORMATS {
        if !zulu {
            if let Ok(timestamp) = DateTime::parse_from_str(local, &format!("{format}%#z")) {
                return Some(timestamp.with_timezone(&Utc));
            }
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(local, format) {
            return Some(naive.and_utc());
        }
    }

    parse_date(text)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
    {
        return Some(date);
    }

    let is_year_month = text.len() == 7 && text.as_bytes()[4] == b'-';
    if !is_year_month {
        return None;
    }
    NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d").ok()
}

/// The most recent location reports of a vehicle, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LocationHistory(VecDeque<LocationReport>);

impl LocationHistory {
    pub fn new() -> Self {
        Self(VecDeque::with_capacity(MAX_LOCATIONS + 1))
    }

    /// Puts `report` in front and drops the oldest report once there are more
    /// than [`MAX_LOCATIONS`].
    pub fn record(&mut self, report: LocationReport) {
        self.0.push_front(report);
        if self.0.len() > MAX_LOCATIONS {
            self.0.pop_back();
        }
    }

    pub fn latest(&self) -> Option<&LocationReport> {
        self.0.front()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocationReport> {
        self.0.iter()
    }
}
