use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeometryError {
    /// Only bounding boxes of exactly four numbers can be reduced to a centroid.
    #[error("Unsupported geometry, expected a 4 element bbox: {0}")]
    UnsupportedGeometry(String),
}
