//! Core video analysis library for proctoring review.
//!
//! Decodes a recorded exam session, samples keyframes at a fixed interval,
//! runs a two-detector face ensemble with a gaze heuristic over each
//! keyframe, and compiles the aggregate counts into a cheating verdict.

pub mod analysis;
pub mod detection;
pub mod pipeline;
pub mod sampling;
pub mod shared;
pub mod video;
