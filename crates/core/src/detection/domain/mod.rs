pub mod face_detection_ensemble;
pub mod face_landmarks;
pub mod gaze_heuristic;
pub mod landmark_predictor;
pub mod primary_face_detector;
pub mod secondary_face_detector;
