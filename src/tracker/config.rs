use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for the [`ProductTracker`](crate::tracker::ProductTracker).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Minimum IoU for a track/detection pairing to count as a match (inclusive).
    pub iou_threshold: f32,
    /// Match count at which a track is reported as added to the cart.
    pub count_threshold: u32,
    /// Consecutive misses a track survives; one more evicts it.
    pub miss_threshold: u32,
    /// Minimum box area as a fraction of the frame area (inclusive).
    pub min_area_norm: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            iou_threshold: 0.6,
            count_threshold: 5,
            miss_threshold: 2,
            min_area_norm: 0.4,
        }
    }
}

impl TrackerConfig {
    /// Tracks are dropped on the first frame they go unmatched.
    pub fn strict() -> Self {
        Self {
            miss_threshold: 0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.iou_threshold > 0.0 && self.iou_threshold <= 1.0) {
            return Err(ConfigError::IouThreshold(self.iou_threshold));
        }
        if self.count_threshold == 0 {
            return Err(ConfigError::CountThreshold(self.count_threshold));
        }
        if !(0.0..=1.0).contains(&self.min_area_norm) {
            return Err(ConfigError::MinAreaNorm(self.min_area_norm));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(TrackerConfig::default().validate(), Ok(()));
        assert_eq!(TrackerConfig::strict().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_bad_iou_threshold() {
        for iou_threshold in [0.0, -0.1, 1.5, f32::NAN] {
            let config = TrackerConfig {
                iou_threshold,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::IouThreshold(_))
            ));
        }
    }

    #[test]
    fn test_rejects_zero_count_threshold() {
        let config = TrackerConfig {
            count_threshold: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::CountThreshold(0)));
    }

    #[test]
    fn test_rejects_bad_min_area() {
        for min_area_norm in [-0.01, 1.01, f32::NAN] {
            let config = TrackerConfig {
                min_area_norm,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::MinAreaNorm(_))
            ));
        }
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: TrackerConfig =
            serde_json::from_str(r#"{"count_threshold": 3, "min_area_norm": 0.3}"#).unwrap();
        assert_eq!(config.count_threshold, 3);
        assert_eq!(config.min_area_norm, 0.3);
        assert_eq!(config.iou_threshold, 0.6);
        assert_eq!(config.miss_threshold, 2);
    }

    #[test]
    fn test_negative_miss_threshold_unrepresentable() {
        let parsed = serde_json::from_str::<TrackerConfig>(r#"{"miss_threshold": -1}"#);
        assert!(parsed.is_err());
    }
}
