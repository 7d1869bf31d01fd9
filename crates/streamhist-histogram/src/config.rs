//! Configuration for streaming histograms

use serde::{Deserialize, Serialize};
use streamhist_core::{Error, Result};

/// Default number of bars, matching the blob-size reports this crate feeds
pub const DEFAULT_TARGET_BINS: usize = 100;

/// Default capacity reserved for pending samples
pub const DEFAULT_BUFFER_CAPACITY: usize = 1024;

/// Parameters for a [`StreamingHistogram`](crate::StreamingHistogram)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramConfig {
    /// Upper bound on the number of bars
    pub target_bins: usize,

    /// Initial capacity of the pending-sample buffer
    pub buffer_capacity: usize,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            target_bins: DEFAULT_TARGET_BINS,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl HistogramConfig {
    /// Create a config with the default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target number of bars
    pub fn with_target_bins(mut self, target_bins: usize) -> Self {
        self.target_bins = target_bins;
        self
    }

    /// Set the initial pending-buffer capacity
    pub fn with_buffer_capacity(mut self, buffer_capacity: usize) -> Self {
        self.buffer_capacity = buffer_capacity;
        self
    }

    /// Reject parameters no histogram can honor
    pub fn validate(&self) -> Result<()> {
        if self.target_bins == 0 {
            return Err(Error::InvalidBinCount(self.target_bins));
        }
        Ok(())
    }

    /// Parse and validate a JSON config; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HistogramConfig::default();
        assert_eq!(config.target_bins, 100);
        assert_eq!(config.buffer_capacity, 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = HistogramConfig::new()
            .with_target_bins(12)
            .with_buffer_capacity(16);
        assert_eq!(config.target_bins, 12);
        assert_eq!(config.buffer_capacity, 16);
    }

    #[test]
    fn test_zero_bins_rejected() {
        let err = HistogramConfig::new().with_target_bins(0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidBinCount(0)));
    }

    #[test]
    fn test_from_json() {
        let config = HistogramConfig::from_json_str(r#"{"target_bins": 20}"#).unwrap();
        assert_eq!(config.target_bins, 20);
        assert_eq!(config.buffer_capacity, DEFAULT_BUFFER_CAPACITY);

        let err = HistogramConfig::from_json_str(r#"{"target_bins": 0}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidBinCount(0)));

        let err = HistogramConfig::from_json_str(r#"{"target_bins": -3}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));

        let err = HistogramConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
