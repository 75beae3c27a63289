//! Geographical coordinate used for weather lookups.

use std::fmt;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Both values are represented as `f64`.
///
/// # Examples
///
/// ```
/// use geostream_weather::LatLon;
///
/// let long_beach = LatLon(33.8091715, -118.1567104);
/// assert_eq!(long_beach.latitude(), 33.8091715);
/// assert_eq!(long_beach.longitude(), -118.1567104);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    pub fn latitude(self) -> f64 {
        self.0
    }

    pub fn longitude(self) -> f64 {
        self.1
    }

    /// Formats the coordinate the way the weather endpoint expects it in `q`: `lat,lon`.
    pub fn to_query(self) -> String {
        format!("{},{}", self.0, self.1)
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.0, self.1)
    }
}
