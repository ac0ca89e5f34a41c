use std::path::PathBuf;
use std::process;

use clap::Parser;

use proctorlens_core::detection::domain::face_detection_ensemble::FaceDetectionEnsemble;
use proctorlens_core::detection::domain::gaze_heuristic::GazeHeuristic;
use proctorlens_core::detection::domain::landmark_predictor::LandmarkPredictor;
use proctorlens_core::detection::domain::primary_face_detector::PrimaryFaceDetector;
use proctorlens_core::detection::domain::secondary_face_detector::SecondaryFaceDetector;
use proctorlens_core::detection::infrastructure::onnx_blazeface_detector::OnnxBlazefaceDetector;
use proctorlens_core::detection::infrastructure::onnx_landmark_predictor::OnnxLandmarkPredictor;
use proctorlens_core::detection::infrastructure::onnx_yolo_detector::OnnxYoloDetector;
use proctorlens_core::pipeline::analysis_config::AnalysisConfig;
use proctorlens_core::pipeline::analyze_video_use_case::AnalyzeVideoUseCase;
use proctorlens_core::shared::constants::{
    LANDMARK_MODEL_NAME, LANDMARK_MODEL_URL, PRIMARY_MODEL_NAME, PRIMARY_MODEL_URL,
    SECONDARY_MODEL_NAME, SECONDARY_MODEL_URL,
};
use proctorlens_core::shared::model_resolver;
use proctorlens_core::video::domain::video_reader::VideoReader;
use proctorlens_core::video::infrastructure::ffmpeg_reader::FfmpegReader;

/// Cheating detection for recorded proctoring sessions.
#[derive(Parser)]
#[command(name = "proctorlens")]
struct Cli {
    /// Input video file.
    input: PathBuf,

    /// Analyze every Nth frame.
    #[arg(long, default_value = "30")]
    keyframe_interval: usize,

    /// Minimum face detection rate as a fraction (0.0-1.0).
    #[arg(long, default_value = "0.5")]
    min_face_detection_rate: f64,

    /// Maximum lookaways per detected face (0.0-1.0).
    #[arg(long, default_value = "0.4")]
    lookaway_ratio_threshold: f64,

    /// Eye-to-nose span ratio below which a face counts as looking away.
    #[arg(long, default_value = "0.6")]
    gaze_ratio_threshold: f64,

    /// Face detection confidence threshold (0.0-1.0).
    #[arg(long, default_value = "0.5")]
    confidence: f64,

    /// Keep analyzing after multiple faces are detected.
    #[arg(long)]
    no_early_termination: bool,

    /// Pretty-print the JSON verdict.
    #[arg(long)]
    pretty: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let config = AnalysisConfig {
        keyframe_interval: cli.keyframe_interval,
        min_face_detection_rate: cli.min_face_detection_rate,
        lookaway_ratio_threshold: cli.lookaway_ratio_threshold,
        early_termination: !cli.no_early_termination,
    };
    config.validate()?;

    let ensemble = build_ensemble(&cli)?;
    let reader: Box<dyn VideoReader> = Box::new(FfmpegReader::new());

    let progress: Box<dyn Fn(usize, usize) + Send> = Box::new(|current, total| {
        eprint!("\rAnalyzing frame {current}/{total}");
    });

    let mut use_case = AnalyzeVideoUseCase::new(reader, ensemble, config, Some(progress));
    let verdict = use_case.execute(&cli.input)?;
    eprintln!();

    let json = if cli.pretty {
        serde_json::to_string_pretty(&verdict)?
    } else {
        serde_json::to_string(&verdict)?
    };
    println!("{json}");

    Ok(())
}

fn build_ensemble(cli: &Cli) -> Result<FaceDetectionEnsemble, Box<dyn std::error::Error>> {
    log::info!("Resolving model: {PRIMARY_MODEL_NAME}");
    let primary_path = model_resolver::resolve(
        PRIMARY_MODEL_NAME,
        PRIMARY_MODEL_URL,
        None,
        Some(Box::new(download_progress)),
    )?;
    eprintln!();

    log::info!("Resolving model: {SECONDARY_MODEL_NAME}");
    let secondary_path = model_resolver::resolve(
        SECONDARY_MODEL_NAME,
        SECONDARY_MODEL_URL,
        None,
        Some(Box::new(download_progress)),
    )?;
    eprintln!();

    log::info!("Resolving model: {LANDMARK_MODEL_NAME}");
    let landmark_path = model_resolver::resolve(
        LANDMARK_MODEL_NAME,
        LANDMARK_MODEL_URL,
        None,
        Some(Box::new(download_progress)),
    )?;
    eprintln!();

    let primary: Box<dyn PrimaryFaceDetector> =
        Box::new(OnnxBlazefaceDetector::new(&primary_path, cli.confidence)?);
    let secondary: Box<dyn SecondaryFaceDetector> =
        Box::new(OnnxYoloDetector::new(&secondary_path, cli.confidence)?);
    let predictor: Box<dyn LandmarkPredictor> =
        Box::new(OnnxLandmarkPredictor::new(&landmark_path)?);

    Ok(FaceDetectionEnsemble::new(
        primary,
        secondary,
        predictor,
        GazeHeuristic::new(cli.gaze_ratio_threshold),
    ))
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if !(0.0..=1.0).contains(&cli.confidence) {
        return Err(format!(
            "Confidence must be between 0.0 and 1.0, got {}",
            cli.confidence
        )
        .into());
    }
    if cli.gaze_ratio_threshold <= 0.0 {
        return Err(format!(
            "Gaze ratio threshold must be positive, got {}",
            cli.gaze_ratio_threshold
        )
        .into());
    }
    Ok(())
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading model... {pct}%");
    } else {
        eprint!("\rDownloading model... {downloaded} bytes");
    }
}
