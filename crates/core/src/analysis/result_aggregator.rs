use serde::Serialize;

use super::frame_analysis::FrameAnalysis;

/// Final per-video counters, all zero-initialized and monotonically
/// increasing (`multiple_faces` only transitions false → true).
///
/// Invariant: `processed_frames <= total_frames`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    pub total_frames: usize,
    pub processed_frames: usize,
    pub face_detections: usize,
    pub lookaway_count: usize,
    pub multiple_faces: bool,
}

/// Aggregator lifecycle. Both non-initial states are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AggregatorState {
    Accumulating,
    TerminatedEarly,
    Completed,
}

/// Signal back to the sampling loop after each recorded frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Stop,
}

/// Streaming accumulator over per-frame analyses.
///
/// Records each valid [`FrameAnalysis`] into [`AggregateStats`] and decides
/// when sampling should stop early. Frames dropped by the sampler never
/// reach `record`, so they do not count as processed. Counters are never
/// reset or rolled back: early termination preserves everything
/// accumulated up to the stop.
pub struct ResultAggregator {
    stats: AggregateStats,
    state: AggregatorState,
    early_termination: bool,
}

impl ResultAggregator {
    pub fn new(total_frames: usize, early_termination: bool) -> Self {
        Self {
            stats: AggregateStats {
                total_frames,
                ..AggregateStats::default()
            },
            state: AggregatorState::Accumulating,
            early_termination,
        }
    }

    pub fn state(&self) -> AggregatorState {
        self.state
    }

    pub fn stats(&self) -> AggregateStats {
        self.stats
    }

    pub fn terminated_early(&self) -> bool {
        self.state == AggregatorState::TerminatedEarly
    }

    /// Folds one frame analysis into the aggregate.
    ///
    /// Returns [`Control::Stop`] when the caller must stop sampling (at
    /// the next keyframe boundary). Recording into a terminal state is a
    /// no-op that keeps signalling stop.
    pub fn record(&mut self, frame: &FrameAnalysis) -> Control {
        if self.state != AggregatorState::Accumulating {
            return Control::Stop;
        }

        self.stats.processed_frames += 1;
        self.stats.face_detections += frame.face_count;
        self.stats.lookaway_count += frame.lookaway_count;
        self.stats.multiple_faces |= frame.multiple_faces;

        if self.stats.multiple_faces && self.early_termination {
            self.state = AggregatorState::TerminatedEarly;
            return Control::Stop;
        }

        Control::Continue
    }

    /// Marks the source as exhausted. Early termination takes precedence
    /// and is not overwritten.
    pub fn complete(&mut self) {
        if self.state == AggregatorState::Accumulating {
            self.state = AggregatorState::Completed;
        }
    }
}
