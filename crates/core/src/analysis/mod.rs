pub mod decision_compiler;
pub mod frame_analysis;
pub mod result_aggregator;
