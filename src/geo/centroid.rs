//! Reduces a place's geo object to the single point used for the weather lookup.

use crate::geo::error::GeometryError;
use crate::types::lat_lon::LatLon;
use serde_json::Value;

/// A `[min_lon, min_lat, max_lon, max_lat]` rectangle as used by GeoJSON `bbox`.
///
/// `min <= max` is not checked; a reversed box still yields the midpoint of its corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Reads the `bbox` field of a geo object.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::UnsupportedGeometry`] with the serialized object if
    /// there is no `bbox`, or if it is not an array of exactly four numbers.
    pub fn from_geo(geo: &Value) -> Result<Self, GeometryError> {
        let unsupported = || GeometryError::UnsupportedGeometry(geo.to_string());

        let bbox = geo
            .get("bbox")
            .and_then(Value::as_array)
            .ok_or_else(unsupported)?;
        let corners = bbox
            .iter()
            .map(Value::as_f64)
            .collect::<Option<Vec<f64>>>()
            .ok_or_else(unsupported)?;

        match corners.as_slice() {
            [min_lon, min_lat, max_lon, max_lat] => {
                Ok(Self::new(*min_lon, *min_lat, *max_lon, *max_lat))
            }
            _ => Err(unsupported()),
        }
    }

    /// Arithmetic midpoint of the two opposing corners.
    pub fn centroid(&self) -> LatLon {
        LatLon(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }
}

/// Computes the centroid of a geo object's bounding box.
///
/// # Examples
///
/// ```
/// use geostream_weather::centroid;
/// use serde_json::json;
///
/// let geo = json!({"type": "Feature", "bbox": [-118.250227, 33.732905, -118.0631938, 33.885438], "properties": {}});
/// let center = centroid(&geo).unwrap();
/// assert!((center.longitude() - -118.1567104).abs() < 1e-9);
/// assert!((center.latitude() - 33.8091715).abs() < 1e-9);
/// ```
pub fn centroid(geo: &Value) -> Result<LatLon, GeometryError> {
    BoundingBox::from_geo(geo).map(|bbox| bbox.centroid())
}
