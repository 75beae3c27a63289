pub mod centroid;
pub mod error;
