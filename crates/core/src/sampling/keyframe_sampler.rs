use crate::shared::frame::Frame;
use crate::shared::raw_frame::RawFrame;

use super::frame_normalizer::normalize;

/// Pulls keyframes out of a decoded frame stream at a fixed interval.
///
/// Decoded frames are counted from 1, so with interval N the candidates are
/// frames N, 2N, 3N, … . Candidates that fail normalization are dropped and
/// logged; the sampler resumes at the next interval boundary. Decode errors
/// propagate to the caller and end sampling.
///
/// The sampler pulls frames only when `next_keyframe` is called, so an
/// external stop (the caller simply stops calling) takes effect at a
/// keyframe boundary, never mid-decode.
pub struct KeyframeSampler<I> {
    frames: I,
    interval: usize,
    decoded: usize,
}

impl<I> KeyframeSampler<I>
where
    I: Iterator<Item = Result<RawFrame, Box<dyn std::error::Error>>>,
{
    pub fn new(frames: I, interval: usize) -> Self {
        Self {
            frames,
            interval: interval.max(1),
            decoded: 0,
        }
    }

    /// Number of frames decoded so far, including non-keyframes.
    pub fn decoded(&self) -> usize {
        self.decoded
    }

    /// Advances to the next normalized keyframe.
    ///
    /// Returns `Ok(None)` when the source is exhausted and `Err` on a
    /// decode failure (the stream is not resumable afterwards).
    pub fn next_keyframe(&mut self) -> Result<Option<Frame>, Box<dyn std::error::Error>> {
        loop {
            let Some(item) = self.frames.next() else {
                return Ok(None);
            };
            let raw = item?;
            self.decoded += 1;

            if self.decoded % self.interval != 0 {
                continue;
            }

            match normalize(raw) {
                Ok(frame) => return Ok(Some(frame)),
                Err(e) => {
                    log::warn!(
                        "Dropping keyframe candidate at frame {}: {e}",
                        self.decoded
                    );
                    continue;
                }
            }
        }
    }
}
