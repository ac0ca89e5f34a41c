pub mod frame_normalizer;
pub mod keyframe_sampler;
