use std::path::Path;

use crate::analysis::decision_compiler::{compile, Verdict};
use crate::analysis::result_aggregator::{Control, ResultAggregator};
use crate::detection::domain::face_detection_ensemble::FaceDetectionEnsemble;
use crate::sampling::keyframe_sampler::KeyframeSampler;
use crate::video::domain::video_reader::VideoReader;

use super::analysis_config::AnalysisConfig;
use super::analysis_error::AnalysisError;

/// Called after each analyzed keyframe with (frames decoded, total frames).
pub type ProgressFn = Box<dyn Fn(usize, usize) + Send>;

/// Orchestrates the full video analysis pipeline.
///
/// Wires the reader, the detection ensemble, and the aggregation stage
/// together. The reader is closed on every exit path, including validation
/// failures and mid-stream errors. Components are owned so the use case can
/// be handed to a worker thread as a unit.
pub struct AnalyzeVideoUseCase {
    reader: Box<dyn VideoReader>,
    ensemble: FaceDetectionEnsemble,
    config: AnalysisConfig,
    on_progress: Option<ProgressFn>,
}

impl AnalyzeVideoUseCase {
    pub fn new(
        reader: Box<dyn VideoReader>,
        ensemble: FaceDetectionEnsemble,
        config: AnalysisConfig,
        on_progress: Option<ProgressFn>,
    ) -> Self {
        Self {
            reader,
            ensemble,
            config,
            on_progress,
        }
    }

    pub fn execute(&mut self, path: &Path) -> Result<Verdict, AnalysisError> {
        let metadata = self.reader.open(path).map_err(|e| AnalysisError::Validation {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if metadata.total_frames == 0 {
            self.reader.close();
            return Err(AnalysisError::Validation {
                path: path.to_path_buf(),
                reason: "video has no frames".to_string(),
            });
        }

        log::info!(
            "Analyzing '{}': {}x{} {:.1} fps, {} frames, interval {}",
            path.display(),
            metadata.width,
            metadata.height,
            metadata.fps,
            metadata.total_frames,
            self.config.keyframe_interval
        );

        let mut aggregator =
            ResultAggregator::new(metadata.total_frames, self.config.early_termination);

        // The sampler borrows the reader's frame iterator, so the loop runs
        // in its own scope and the reader is closed after it ends.
        let loop_result = {
            let mut sampler = KeyframeSampler::new(
                self.reader.frames(),
                self.config.keyframe_interval,
            );

            loop {
                match sampler.next_keyframe() {
                    Ok(Some(frame)) => {
                        let analysis = match self.ensemble.analyze(&frame) {
                            Ok(a) => a,
                            Err(e) => break Err((sampler.decoded(), e)),
                        };
                        if let Some(cb) = &self.on_progress {
                            cb(sampler.decoded(), metadata.total_frames);
                        }
                        if aggregator.record(&analysis) == Control::Stop {
                            log::info!(
                                "Stopping early at frame {}: multiple faces detected",
                                frame.index()
                            );
                            break Ok(());
                        }
                    }
                    Ok(None) => break Ok(()),
                    Err(e) => break Err((sampler.decoded(), e)),
                }
            }
        };

        self.reader.close();

        if let Err((last_frame, source)) = loop_result {
            log::error!(
                "Aborting analysis of '{}' at frame {last_frame}: {source}",
                path.display()
            );
            return Err(AnalysisError::Processing {
                path: path.to_path_buf(),
                last_frame,
                source,
            });
        }

        aggregator.complete();
        Ok(compile(
            &aggregator.stats(),
            aggregator.terminated_early(),
            &self.config,
        ))
    }
}
