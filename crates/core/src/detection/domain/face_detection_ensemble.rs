use crate::analysis::frame_analysis::FrameAnalysis;
use crate::shared::frame::Frame;

use super::gaze_heuristic::GazeHeuristic;
use super::landmark_predictor::LandmarkPredictor;
use super::primary_face_detector::PrimaryFaceDetector;
use super::secondary_face_detector::SecondaryFaceDetector;

/// Runs two independent face detectors per keyframe and reconciles their
/// outputs into a [`FrameAnalysis`].
///
/// The multiple-faces signal is the logical OR of the two detectors — a
/// false negative from one must not mask a true positive from the other —
/// so it is never averaged. Faces counted and gaze-checked are those from
/// the secondary detector, which provides the per-face handles the landmark
/// predictor needs. A per-face predictor failure excludes only that face; a
/// detector-level failure aborts the frame.
pub struct FaceDetectionEnsemble {
    primary: Box<dyn PrimaryFaceDetector>,
    secondary: Box<dyn SecondaryFaceDetector>,
    predictor: Box<dyn LandmarkPredictor>,
    gaze: GazeHeuristic,
}

impl FaceDetectionEnsemble {
    pub fn new(
        primary: Box<dyn PrimaryFaceDetector>,
        secondary: Box<dyn SecondaryFaceDetector>,
        predictor: Box<dyn LandmarkPredictor>,
        gaze: GazeHeuristic,
    ) -> Self {
        Self {
            primary,
            secondary,
            predictor,
            gaze,
        }
    }

    pub fn analyze(&mut self, frame: &Frame) -> Result<FrameAnalysis, Box<dyn std::error::Error>> {
        let luma = frame.to_luma();
        let primary_faces = self.primary.detect(&luma)?;
        let secondary_faces = self.secondary.detect(frame)?;

        log::debug!(
            "Frame {} - primary faces: {}, secondary faces: {}",
            frame.index(),
            primary_faces.len(),
            secondary_faces.len()
        );

        let multiple_faces = primary_faces.len() > 1 || secondary_faces.len() > 1;
        if multiple_faces {
            log::warn!("Multiple faces detected in frame {}", frame.index());
        }

        let mut face_count = 0;
        let mut lookaway_count = 0;
        for face in &secondary_faces {
            match self.predictor.predict(frame, &face.handle) {
                Ok(landmarks) => {
                    face_count += 1;
                    if self.gaze.is_looking_away(&landmarks) {
                        lookaway_count += 1;
                        log::debug!("Lookaway detected in frame {}", frame.index());
                    }
                }
                Err(e) => {
                    // Per-face failure: exclude the face, keep the frame.
                    log::warn!(
                        "Landmark prediction failed in frame {}, excluding face: {e}",
                        frame.index()
                    );
                }
            }
        }

        Ok(FrameAnalysis {
            frame_index: frame.index(),
            face_count,
            multiple_faces,
            lookaway_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::domain::face_landmarks::test_support::landmarks_with_spans;
    use crate::detection::domain::face_landmarks::FaceLandmarks;
    use crate::detection::domain::secondary_face_detector::{DetectedFace, FaceHandle};
    use crate::shared::bounding_box::BoundingBox;
    use crate::shared::frame::LumaFrame;

    // --- Stubs ---

    struct StubPrimary {
        boxes: Vec<BoundingBox>,
    }

    impl PrimaryFaceDetector for StubPrimary {
        fn detect(
            &mut self,
            _luma: &LumaFrame,
        ) -> Result<Vec<BoundingBox>, Box<dyn std::error::Error>> {
            Ok(self.boxes.clone())
        }
    }

    struct FailingPrimary;

    impl PrimaryFaceDetector for FailingPrimary {
        fn detect(
            &mut self,
            _luma: &LumaFrame,
        ) -> Result<Vec<BoundingBox>, Box<dyn std::error::Error>> {
            Err("primary detector error".into())
        }
    }

    struct StubSecondary {
        faces: Vec<DetectedFace>,
    }

    impl SecondaryFaceDetector for StubSecondary {
        fn detect(
            &mut self,
            _frame: &Frame,
        ) -> Result<Vec<DetectedFace>, Box<dyn std::error::Error>> {
            Ok(self.faces.clone())
        }
    }

    /// Returns fixed landmarks, failing for faces whose box x matches
    /// `fail_at_x`.
    struct StubPredictor {
        landmarks: FaceLandmarks,
        fail_at_x: Option<i32>,
    }

    impl LandmarkPredictor for StubPredictor {
        fn predict(
            &mut self,
            _frame: &Frame,
            face: &FaceHandle,
        ) -> Result<FaceLandmarks, Box<dyn std::error::Error>> {
            if Some(face.bbox().x) == self.fail_at_x {
                return Err("landmark prediction error".into());
            }
            Ok(self.landmarks.clone())
        }
    }

    // --- Helpers ---

    fn make_frame(index: usize) -> Frame {
        Frame::new(vec![128; 64 * 64 * 3], 64, 64, index)
    }

    fn bbox(x: i32) -> BoundingBox {
        BoundingBox::new(x, 10, 20, 20)
    }

    fn frontal() -> FaceLandmarks {
        landmarks_with_spans(440.0, 560.0, 480.0, 520.0)
    }

    fn averted() -> FaceLandmarks {
        landmarks_with_spans(495.0, 505.0, 480.0, 520.0)
    }

    fn ensemble(
        primary: Vec<BoundingBox>,
        secondary: Vec<DetectedFace>,
        landmarks: FaceLandmarks,
        fail_at_x: Option<i32>,
    ) -> FaceDetectionEnsemble {
        FaceDetectionEnsemble::new(
            Box::new(StubPrimary { boxes: primary }),
            Box::new(StubSecondary { faces: secondary }),
            Box::new(StubPredictor {
                landmarks,
                fail_at_x,
            }),
            GazeHeuristic::default(),
        )
    }

    // --- Tests ---

    #[test]
    fn test_single_frontal_face() {
        let mut e = ensemble(
            vec![bbox(10)],
            vec![DetectedFace::new(bbox(12))],
            frontal(),
            None,
        );
        let fa = e.analyze(&make_frame(30)).unwrap();
        assert_eq!(fa.frame_index, 30);
        assert_eq!(fa.face_count, 1);
        assert_eq!(fa.lookaway_count, 0);
        assert!(!fa.multiple_faces);
    }

    #[test]
    fn test_lookaway_counted() {
        let mut e = ensemble(
            vec![bbox(10)],
            vec![DetectedFace::new(bbox(12))],
            averted(),
            None,
        );
        let fa = e.analyze(&make_frame(0)).unwrap();
        assert_eq!(fa.face_count, 1);
        assert_eq!(fa.lookaway_count, 1);
    }

    #[test]
    fn test_multiple_faces_from_primary_only() {
        // Secondary sees one face; primary's second detection still trips
        // the flag (OR semantics).
        let mut e = ensemble(
            vec![bbox(10), bbox(100)],
            vec![DetectedFace::new(bbox(12))],
            frontal(),
            None,
        );
        let fa = e.analyze(&make_frame(0)).unwrap();
        assert!(fa.multiple_faces);
        assert_eq!(fa.face_count, 1);
    }

    #[test]
    fn test_multiple_faces_from_secondary_only() {
        let mut e = ensemble(
            vec![bbox(10)],
            vec![DetectedFace::new(bbox(12)), DetectedFace::new(bbox(100))],
            frontal(),
            None,
        );
        let fa = e.analyze(&make_frame(0)).unwrap();
        assert!(fa.multiple_faces);
        assert_eq!(fa.face_count, 2);
    }

    #[test]
    fn test_no_faces() {
        let mut e = ensemble(vec![], vec![], frontal(), None);
        let fa = e.analyze(&make_frame(0)).unwrap();
        assert_eq!(fa.face_count, 0);
        assert_eq!(fa.lookaway_count, 0);
        assert!(!fa.multiple_faces);
    }

    #[test]
    fn test_per_face_predictor_failure_excludes_face_only() {
        let mut e = ensemble(
            vec![bbox(10)],
            vec![DetectedFace::new(bbox(12)), DetectedFace::new(bbox(100))],
            frontal(),
            Some(100),
        );
        let fa = e.analyze(&make_frame(0)).unwrap();
        // The failing face is excluded from the count; the frame survives.
        assert_eq!(fa.face_count, 1);
        assert!(fa.multiple_faces);
    }

    #[test]
    fn test_all_faces_failing_yields_zero_count() {
        let mut e = ensemble(
            vec![],
            vec![DetectedFace::new(bbox(100))],
            frontal(),
            Some(100),
        );
        let fa = e.analyze(&make_frame(0)).unwrap();
        assert_eq!(fa.face_count, 0);
        assert_eq!(fa.lookaway_count, 0);
    }

    #[test]
    fn test_detector_failure_aborts_frame() {
        let mut e = FaceDetectionEnsemble::new(
            Box::new(FailingPrimary),
            Box::new(StubSecondary { faces: vec![] }),
            Box::new(StubPredictor {
                landmarks: frontal(),
                fail_at_x: None,
            }),
            GazeHeuristic::default(),
        );
        assert!(e.analyze(&make_frame(0)).is_err());
    }
}
