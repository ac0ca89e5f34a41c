pub mod analysis_config;
pub mod analysis_error;
pub mod analyze_video_use_case;
