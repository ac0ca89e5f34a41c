use crate::shared::frame::Frame;

use super::face_landmarks::FaceLandmarks;
use super::secondary_face_detector::FaceHandle;

/// Predicts the 68-point landmark set for one detected face.
///
/// A failure here is per-face: the ensemble excludes the face from that
/// frame's counts and keeps going.
pub trait LandmarkPredictor: Send {
    fn predict(
        &mut self,
        frame: &Frame,
        face: &FaceHandle,
    ) -> Result<FaceLandmarks, Box<dyn std::error::Error>>;
}
