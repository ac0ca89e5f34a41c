/// Per-keyframe analysis outcome.
///
/// Produced by the detection ensemble and consumed exactly once by the
/// aggregator; nothing downstream retains per-frame data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameAnalysis {
    /// Index of the analyzed frame in decode order.
    pub frame_index: usize,
    /// Faces counted for this frame (secondary detections with successful
    /// landmark prediction).
    pub face_count: usize,
    /// Either detector reported more than one face.
    pub multiple_faces: bool,
    /// Faces classified as looking away in this frame.
    pub lookaway_count: usize,
}
