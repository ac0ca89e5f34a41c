use crate::shared::constants::DEFAULT_GAZE_RATIO_THRESHOLD;

use super::face_landmarks::FaceLandmarks;

/// Classifies a face as "looking away" from the eye-to-nose span ratio.
///
/// A head turned away from the camera foreshortens the eye separation in
/// 2D projection while the nose width stays comparatively stable, so a
/// face is flagged when `eye_span < ratio_threshold * nose_span`. This is
/// a cheap proxy, not gaze estimation: it has no notion of vertical gaze
/// or camera geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GazeHeuristic {
    ratio_threshold: f64,
}

impl GazeHeuristic {
    pub fn new(ratio_threshold: f64) -> Self {
        Self { ratio_threshold }
    }

    pub fn ratio_threshold(&self) -> f64 {
        self.ratio_threshold
    }

    pub fn is_looking_away(&self, landmarks: &FaceLandmarks) -> bool {
        landmarks.eye_span() < self.ratio_threshold * landmarks.nose_span()
    }
}

impl Default for GazeHeuristic {
    fn default() -> Self {
        Self::new(DEFAULT_GAZE_RATIO_THRESHOLD)
    }
}
