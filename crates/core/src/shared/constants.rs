pub const PRIMARY_MODEL_NAME: &str = "blazeface_short_range.onnx";
pub const PRIMARY_MODEL_URL: &str =
    "https://github.com/proctorlens/proctorlens/releases/download/v0.1.0/blazeface_short_range.onnx";

pub const SECONDARY_MODEL_NAME: &str = "yolo11n_widerface.onnx";
pub const SECONDARY_MODEL_URL: &str =
    "https://github.com/proctorlens/proctorlens/releases/download/v0.1.0/yolo11n_widerface.onnx";

pub const LANDMARK_MODEL_NAME: &str = "pfld_68_landmarks.onnx";
pub const LANDMARK_MODEL_URL: &str =
    "https://github.com/proctorlens/proctorlens/releases/download/v0.1.0/pfld_68_landmarks.onnx";

/// Analyze every Nth decoded frame.
pub const DEFAULT_KEYFRAME_INTERVAL: usize = 30;

/// Minimum fraction of processed keyframes with a detected face. Stored as
/// a fraction in [0, 1]; formatted as a percentage only in verdict output.
pub const DEFAULT_MIN_FACE_DETECTION_RATE: f64 = 0.5;

/// Maximum tolerated lookaways-per-detected-face ratio.
pub const DEFAULT_LOOKAWAY_RATIO_THRESHOLD: f64 = 0.4;

/// Eye-span to nose-span ratio below which a face counts as looking away.
pub const DEFAULT_GAZE_RATIO_THRESHOLD: f64 = 0.6;
