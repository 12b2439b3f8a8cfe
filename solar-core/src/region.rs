//! Geographic extents of the service.
//!
//! The prediction model is trained on UK data only, so picks are vetted
//! against a coarse rectangle rather than a real coastline.

use crate::model::Coordinate;

/// An inclusive latitude/longitude rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl Bounds {
    pub fn contains(&self, point: Coordinate) -> bool {
        point.latitude >= self.south
            && point.latitude <= self.north
            && point.longitude >= self.west
            && point.longitude <= self.east
    }
}

/// Coarse rectangle around the UK; interactive picks outside it are rejected.
pub const ACCEPT_BOUNDS: Bounds = Bounds {
    south: 49.5,
    north: 61.0,
    west: -11.0,
    east: 2.0,
};

/// Maximum pan extent of the original map view, shown to the user as the
/// suggested picking area. Excludes Shetland (no training data that far north).
pub const PAN_BOUNDS: Bounds = Bounds {
    south: 49.85,
    north: 58.666667,
    west: -8.1775,
    east: 1.766667,
};

/// Initial view center over the UK.
pub const VIEW_CENTER: Coordinate = Coordinate {
    latitude: 54.5,
    longitude: -3.0,
};
