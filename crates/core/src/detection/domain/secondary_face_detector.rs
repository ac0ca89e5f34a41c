use crate::shared::bounding_box::BoundingBox;
use crate::shared::frame::Frame;

/// Opaque per-face token handed back to the landmark predictor.
///
/// Callers outside the detection layer cannot inspect it; it exists so a
/// predictor can locate the face it was asked about without re-detecting.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceHandle {
    bbox: BoundingBox,
}

impl FaceHandle {
    pub(crate) fn new(bbox: BoundingBox) -> Self {
        Self { bbox }
    }

    pub(crate) fn bbox(&self) -> BoundingBox {
        self.bbox
    }
}

/// One face found by the secondary detector.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectedFace {
    pub bbox: BoundingBox,
    pub handle: FaceHandle,
}

impl DetectedFace {
    pub fn new(bbox: BoundingBox) -> Self {
        Self {
            bbox,
            handle: FaceHandle::new(bbox),
        }
    }
}

/// Denser face detection over the full color frame, yielding per-face
/// handles suitable for landmark prediction.
pub trait SecondaryFaceDetector: Send {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<DetectedFace>, Box<dyn std::error::Error>>;
}
