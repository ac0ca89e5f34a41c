use std::path::Path;

use crate::shared::raw_frame::RawFrame;
use crate::shared::video_metadata::VideoMetadata;

/// Reads frames from a video source.
///
/// Implementations handle I/O details (codec, container format, etc.) while
/// the pipeline works with the abstract `RawFrame` and `VideoMetadata`
/// types. A reader holds a stateful frame cursor and must only be driven by
/// one pipeline invocation at a time; `close` releases its resources and is
/// called on every pipeline exit path.
pub trait VideoReader: Send {
    /// Opens a video file and returns its metadata.
    fn open(&mut self, path: &Path) -> Result<VideoMetadata, Box<dyn std::error::Error>>;

    /// Returns an iterator over frames in decode order.
    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<RawFrame, Box<dyn std::error::Error>>> + '_>;

    /// Releases any resources held by the reader.
    fn close(&mut self);
}
