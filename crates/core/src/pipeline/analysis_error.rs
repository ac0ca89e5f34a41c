use std::path::PathBuf;

use thiserror::Error;

/// Pipeline-level failures.
///
/// Recoverable conditions (dropped frames, excluded faces) never surface
/// here; they are logged and absorbed inside the pipeline.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The source could not be opened or reports zero frames. Fatal for
    /// the call; raised before any analysis begins.
    #[error("invalid video '{path}': {reason}")]
    Validation { path: PathBuf, reason: String },

    /// Unexpected mid-stream failure. Remaining processing is aborted; the
    /// last successfully processed frame index is reported.
    #[error("error processing '{path}' at frame {last_frame}: {source}")]
    Processing {
        path: PathBuf,
        last_frame: usize,
        source: Box<dyn std::error::Error>,
    },
}
