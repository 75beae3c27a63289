//! Data structures for the records delivered by the sampled stream.
//!
//! A record is kept as an opaque JSON value; only the parts needed for enrichment
//! (`includes.places[0]` and a few identifying fields for logging) get a typed view.
//!
//! A record with place information looks like this:
//!
//! ```json
//! {
//!   "data": {"geo": {"place_id": "01c060cf466c6ce3"}, "id": "1519867438057213952", "text": "..."},
//!   "includes": {"places": [{
//!     "full_name": "Long Beach, CA",
//!     "geo": {"bbox": [-118.250227, 33.732905, -118.0631938, 33.885438], "properties": {}, "type": "Feature"},
//!     "id": "01c060cf466c6ce3"
//!   }]}
//! }
//! ```

use serde_json::Value;
use std::str::FromStr;

/// A single parsed line of the stream.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamRecord(Value);

/// The place attached to a record through the `geo.place_id` expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    /// Place identifier (e.g., "01c060cf466c6ce3").
    pub id: Option<String>,
    /// Human readable name (e.g., "Long Beach, CA").
    pub full_name: Option<String>,
    /// Kind of place reported by the stream (e.g., "city", "poi").
    pub place_type: Option<String>,
    /// The raw geo object, usually a GeoJSON feature with a `bbox`. `Null` when absent.
    pub geo: Value,
}

impl StreamRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Returns `true` if the record carries at least one expanded place.
    ///
    /// A missing `includes` key, a missing `places` key, or an empty `places` list
    /// all mean there is no geo information.
    pub fn has_geo_information(&self) -> bool {
        self.places().is_some_and(|places| !places.is_empty())
    }

    /// Typed view of the first place, if present.
    ///
    /// Text fields of an unexpected type read as `None`; the geo object is passed
    /// through untouched so the centroid calculation can judge it.
    pub fn first_place(&self) -> Option<Place> {
        let first = self.places()?.first()?;
        let text = |key: &str| first.get(key).and_then(Value::as_str).map(str::to_string);
        Some(Place {
            id: text("id"),
            full_name: text("full_name"),
            place_type: text("place_type"),
            geo: first.get("geo").cloned().unwrap_or(Value::Null),
        })
    }

    /// The post identifier (`data.id`), used for log output.
    pub fn id(&self) -> Option<&str> {
        self.0.pointer("/data/id").and_then(Value::as_str)
    }

    fn places(&self) -> Option<&Vec<Value>> {
        self.0.pointer("/includes/places").and_then(Value::as_array)
    }
}

impl FromStr for StreamRecord {
    type Err = serde_json::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(line).map(StreamRecord)
    }
}

impl From<Value> for StreamRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
