//! Fixed capacity FIFO of recent temperature readings.

use crate::config::ConfigError;
use std::collections::VecDeque;

pub const MIN_WINDOW_SIZE: usize = 2;
pub const MAX_WINDOW_SIZE: usize = 100;
pub const DEFAULT_WINDOW_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct SlidingWindow {
    capacity: usize,
    values: VecDeque<f64>,
}

impl SlidingWindow {
    /// Creates an empty window.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::WindowSize`] unless `MIN_WINDOW_SIZE <= capacity <= MAX_WINDOW_SIZE`.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if !(MIN_WINDOW_SIZE..=MAX_WINDOW_SIZE).contains(&capacity) {
            return Err(ConfigError::WindowSize {
                size: capacity,
                min: MIN_WINDOW_SIZE,
                max: MAX_WINDOW_SIZE,
            });
        }
        Ok(Self {
            capacity,
            values: VecDeque::with_capacity(capacity + 1),
        })
    }

    /// Appends a reading, evicting the oldest one if the window is over capacity.
    /// Returns the evicted reading.
    pub fn push(&mut self, value: f64) -> Option<f64> {
        self.values.push_back(value);
        if self.values.len() > self.capacity {
            self.values.pop_front()
        } else {
            None
        }
    }

    /// Arithmetic mean of the current contents, `None` while empty.
    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        Some(self.values.iter().sum::<f64>() / self.values.len() as f64)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Readings from oldest to newest.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}
