use serde::{Deserialize, Serialize};

use crate::shared::constants::{
    DEFAULT_KEYFRAME_INTERVAL, DEFAULT_LOOKAWAY_RATIO_THRESHOLD, DEFAULT_MIN_FACE_DETECTION_RATE,
};

/// Recognized pipeline options.
///
/// Rate thresholds are fractions in [0, 1]; they are rendered as
/// percentages only in verdict output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Analyze every Nth decoded frame.
    pub keyframe_interval: usize,
    /// Rule 2 threshold: minimum face detections per processed frame.
    pub min_face_detection_rate: f64,
    /// Rule 3 threshold: maximum lookaways per detected face.
    pub lookaway_ratio_threshold: f64,
    /// Stop sampling once multiple simultaneous faces are observed.
    pub early_termination: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            keyframe_interval: DEFAULT_KEYFRAME_INTERVAL,
            min_face_detection_rate: DEFAULT_MIN_FACE_DETECTION_RATE,
            lookaway_ratio_threshold: DEFAULT_LOOKAWAY_RATIO_THRESHOLD,
            early_termination: true,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.keyframe_interval == 0 {
            return Err("keyframe_interval must be at least 1".to_string());
        }
        if !(0.0..=1.0).contains(&self.min_face_detection_rate) {
            return Err(format!(
                "min_face_detection_rate must be a fraction between 0.0 and 1.0, got {}",
                self.min_face_detection_rate
            ));
        }
        if !(0.0..=1.0).contains(&self.lookaway_ratio_threshold) {
            return Err(format!(
                "lookaway_ratio_threshold must be between 0.0 and 1.0, got {}",
                self.lookaway_ratio_threshold
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let cfg = AnalysisConfig::default();
        assert_eq!(cfg.keyframe_interval, 30);
        assert!((cfg.min_face_detection_rate - 0.5).abs() < f64::EPSILON);
        assert!((cfg.lookaway_ratio_threshold - 0.4).abs() < f64::EPSILON);
        assert!(cfg.early_termination);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_alternate_interval_valid() {
        let cfg = AnalysisConfig {
            keyframe_interval: 60,
            ..AnalysisConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let cfg = AnalysisConfig {
            keyframe_interval: 0,
            ..AnalysisConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.5)]
    #[case(50.0)] // a percentage, not a fraction
    fn test_rate_must_be_fraction(#[case] rate: f64) {
        let cfg = AnalysisConfig {
            min_face_detection_rate: rate,
            ..AnalysisConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let cfg: AnalysisConfig = serde_json::from_str(r#"{"keyframe_interval": 60}"#).unwrap();
        assert_eq!(cfg.keyframe_interval, 60);
        assert!((cfg.min_face_detection_rate - 0.5).abs() < f64::EPSILON);
        assert!(cfg.early_termination);
    }
}
