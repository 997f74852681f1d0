//! Birth data supplied by the caller.

use std::ops::RangeInclusive;

use natal_time::CivilTime;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Birth date, local clock time, fixed UTC offset and geographic position.
///
/// Latitude is positive north, longitude positive east. `name` and
/// `location` are display-only and never enter a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub utc_offset: f64,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl BirthInput {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        utc_offset: f64,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            utc_offset,
            latitude,
            longitude,
            name: None,
            location: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// The civil-time part of the input.
    pub fn civil_time(&self) -> CivilTime {
        CivilTime::new(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.utc_offset,
        )
    }

    /// Check date, time, offset and coordinates against their domains.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.civil_time().validate()?;
        if !LATITUDE_RANGE.contains(&self.latitude) {
            return Err(ValidationError::LatitudeOutOfRange(self.latitude));
        }
        if !LONGITUDE_RANGE.contains(&self.longitude) {
            return Err(ValidationError::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }
}
