use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordParseError {
    #[error("No coordinates given. Use format: lat, lon")]
    Empty,
    #[error("Invalid coordinates. Use format: lat, lon")]
    Invalid,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Parse user-typed coordinate text, e.g. `"51.5, -0.12"`.
    ///
    /// Manual entry is deliberately not range-checked; only interactive
    /// picking vets the point against [`crate::region::ACCEPT_BOUNDS`].
    pub fn parse(text: &str) -> Result<Self, CoordParseError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CoordParseError::Empty);
        }

        let mut parts = text.split(',');
        let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(CoordParseError::Invalid);
        };

        let latitude: f64 = lat.trim().parse().map_err(|_| CoordParseError::Invalid)?;
        let longitude: f64 = lon.trim().parse().map_err(|_| CoordParseError::Invalid)?;

        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(CoordParseError::Invalid);
        }

        Ok(Self { latitude, longitude })
    }
}

impl fmt::Display for Coordinate {
    /// Coordinate-field rendering: both components at 4 decimal places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Enter a valid power rating (kW).")]
pub struct PowerRatingError;

/// Parse optional power-rating text. Blank means "not supplied"; anything
/// else must be a non-negative number of kW.
pub fn parse_power_rating(text: &str) -> Result<Option<f64>, PowerRatingError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let value: f64 = text.parse().map_err(|_| PowerRatingError)?;
    if !value.is_finite() || value < 0.0 {
        return Err(PowerRatingError);
    }

    Ok(Some(value))
}

/// Body of `POST /predict`. `power_rating: null` is sent when the user gave
/// none, and the backend then omits energy output from its entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub power_rating: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub latitude: f64,
    pub longitude: f64,
    /// Forecast entries in server order. A response without the field is
    /// treated as "no predictions", not as malformed.
    #[serde(default)]
    pub predictions: Vec<PredictionEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionEntry {
    pub date: String,
    pub condition: String,
    /// Predicted efficiency in kWh per kW of installed capacity.
    pub value: f64,
    /// Predicted energy production in kWh; present only when the request
    /// carried a power rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<f64>,
}
