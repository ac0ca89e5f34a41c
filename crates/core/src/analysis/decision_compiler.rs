use serde::Serialize;

use crate::pipeline::analysis_config::AnalysisConfig;

use super::result_aggregator::AggregateStats;

/// Derived ratios, formatted for human consumption. Every ratio defaults
/// to 0 when its denominator is 0; division by zero can never occur.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total_frames: usize,
    pub processed_frames: usize,
    pub processing_ratio: String,
    pub face_detection_rate: String,
    pub lookaway_ratio: String,
    pub multiple_faces_detected: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RawCounts {
    pub face_detections: usize,
    pub lookaway_count: usize,
}

/// Final analysis outcome. Produced once, immutable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub cheating_detected: bool,
    pub reasons: Vec<String>,
    pub statistics: Statistics,
    pub raw_counts: RawCounts,
}

/// Compiles final aggregate counts into a verdict.
///
/// Pure function: identical inputs always yield an identical verdict.
/// Rules are evaluated in a fixed order and every firing reason is
/// collected (they are not mutually exclusive), except when early
/// termination was triggered by the multiple-faces rule — then that is
/// reported as the sole reason. Thresholds are fractions in [0, 1];
/// percentages appear only in the formatted statistics.
pub fn compile(
    stats: &AggregateStats,
    terminated_early: bool,
    config: &AnalysisConfig,
) -> Verdict {
    let processing_ratio = ratio(stats.processed_frames, stats.total_frames);
    let face_detection_rate = ratio(stats.face_detections, stats.processed_frames);
    let lookaway_ratio = ratio(stats.lookaway_count, stats.face_detections);

    let mut cheating_detected = false;
    let mut reasons = Vec::new();

    if stats.multiple_faces {
        cheating_detected = true;
        reasons.push("Multiple faces detected".to_string());
    }

    // Early termination on multiple faces suppresses all other reasons.
    if !(stats.multiple_faces && terminated_early) {
        if stats.processed_frames > 0 && face_detection_rate < config.min_face_detection_rate {
            cheating_detected = true;
            reasons.push(format!(
                "Low face detection rate ({:.1}%)",
                face_detection_rate * 100.0
            ));
        }

        if stats.face_detections > 0 && lookaway_ratio > config.lookaway_ratio_threshold {
            cheating_detected = true;
            reasons.push(format!("Excessive lookaways ({lookaway_ratio:.2} ratio)"));
        }
    }

    if reasons.is_empty() {
        reasons.push("No cheating detected".to_string());
    }
    dedup_preserving_order(&mut reasons);

    Verdict {
        cheating_detected,
        reasons,
        statistics: Statistics {
            total_frames: stats.total_frames,
            processed_frames: stats.processed_frames,
            processing_ratio: format!("{:.1}%", processing_ratio * 100.0),
            face_detection_rate: format!("{:.1}%", face_detection_rate * 100.0),
            lookaway_ratio: format!("{lookaway_ratio:.2}"),
            multiple_faces_detected: stats.multiple_faces,
        },
        raw_counts: RawCounts {
            face_detections: stats.face_detections,
            lookaway_count: stats.lookaway_count,
        },
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn dedup_preserving_order(reasons: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    reasons.retain(|r| seen.insert(r.clone()));
}
