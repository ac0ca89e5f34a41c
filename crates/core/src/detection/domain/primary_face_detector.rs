use crate::shared::bounding_box::BoundingBox;
use crate::shared::frame::LumaFrame;

/// Fast, approximate face detection over a grayscale projection.
///
/// Implementations may be stateful (e.g., cached sessions), hence
/// `&mut self`. Paired with [`SecondaryFaceDetector`] in the ensemble; the
/// two are never averaged, only OR-combined on the multiple-faces signal.
///
/// [`SecondaryFaceDetector`]: super::secondary_face_detector::SecondaryFaceDetector
pub trait PrimaryFaceDetector: Send {
    fn detect(&mut self, luma: &LumaFrame) -> Result<Vec<BoundingBox>, Box<dyn std::error::Error>>;
}
