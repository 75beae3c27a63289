//! Run limits and window size for the stream processor.

use crate::processor::sliding_window::{DEFAULT_WINDOW_SIZE, MAX_WINDOW_SIZE, MIN_WINDOW_SIZE};
use bon::Builder;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Sliding window size {size} is outside the allowed range {min}..={max}")]
    WindowSize { size: usize, min: usize, max: usize },

    #[error("The {0} cap must be at least 1")]
    ZeroCap(&'static str),
}

/// Caps and window size for a run.
///
/// # Examples
///
/// ```
/// use geostream_weather::ProcessorConfig;
///
/// let config = ProcessorConfig::builder().item_cap(10).build();
/// assert_eq!(config.item_cap, Some(10));
/// assert_eq!(config.read_cap, None);
/// assert_eq!(config.window_size, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct ProcessorConfig {
    /// Stop once this many non-empty stream items have been received.
    pub item_cap: Option<usize>,
    /// Stop once this many weather lookups have been attempted.
    pub read_cap: Option<usize>,
    /// Number of readings the moving average is taken over.
    #[builder(default = DEFAULT_WINDOW_SIZE)]
    pub window_size: usize,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ProcessorConfig {
    /// Rejects caps of zero and window sizes outside `2..=100`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_WINDOW_SIZE..=MAX_WINDOW_SIZE).contains(&self.window_size) {
            return Err(ConfigError::WindowSize {
                size: self.window_size,
                min: MIN_WINDOW_SIZE,
                max: MAX_WINDOW_SIZE,
            });
        }
        if self.item_cap == Some(0) {
            return Err(ConfigError::ZeroCap("item"));
        }
        if self.read_cap == Some(0) {
            return Err(ConfigError::ZeroCap("read"));
        }
        Ok(())
    }
}
