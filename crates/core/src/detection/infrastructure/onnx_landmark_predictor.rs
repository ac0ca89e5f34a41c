/// PFLD 68-point landmark predictor using ONNX Runtime via `ort`.
///
/// Crops a square patch around a detected face, runs the model at its fixed
/// input resolution, and maps the normalized landmark output back to frame
/// pixel coordinates.
use std::path::Path;

use crate::detection::domain::face_landmarks::{FaceLandmarks, LANDMARK_COUNT};
use crate::detection::domain::landmark_predictor::LandmarkPredictor;
use crate::detection::domain::secondary_face_detector::FaceHandle;
use crate::shared::frame::Frame;

/// PFLD model input resolution.
const INPUT_SIZE: u32 = 112;

/// Crop margin around the detection box. Landmark models are trained on
/// crops slightly larger than the tight face box.
const CROP_MARGIN: f64 = 0.25;

/// PFLD landmark predictor backed by an ONNX Runtime session.
pub struct OnnxLandmarkPredictor {
    session: ort::session::Session,
}

impl OnnxLandmarkPredictor {
    /// Load a PFLD ONNX model.
    pub fn new(model_path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let session = ort::session::Session::builder()?.commit_from_file(model_path)?;
        Ok(Self { session })
    }
}

impl LandmarkPredictor for OnnxLandmarkPredictor {
    fn predict(
        &mut self,
        frame: &Frame,
        face: &FaceHandle,
    ) -> Result<FaceLandmarks, Box<dyn std::error::Error>> {
        let bbox = face.bbox();
        if bbox.width <= 0 || bbox.height <= 0 {
            return Err(format!(
                "degenerate face box {}x{} at ({}, {})",
                bbox.width, bbox.height, bbox.x, bbox.y
            )
            .into());
        }

        // 1. Square crop around the box center, with margin
        let crop = CropRegion::around(
            bbox.x as f64,
            bbox.y as f64,
            bbox.width as f64,
            bbox.height as f64,
            CROP_MARGIN,
        );

        // 2. Preprocess: sample the crop at 112x112, normalize to [0,1], NCHW
        let input_tensor = preprocess(frame, &crop, INPUT_SIZE);

        // 3. Inference
        let input_value = ort::value::Tensor::from_array(input_tensor)?;
        let outputs = self.session.run(ort::inputs![input_value])?;
        if outputs.len() == 0 {
            return Err("PFLD model produced no outputs".into());
        }

        // PFLD output: [1, 136] — 68 (x, y) pairs normalized to the crop
        let tensor = outputs[0].try_extract_array::<f32>()?;
        let data = tensor.as_slice().ok_or("Cannot get landmark slice")?;
        if data.len() < LANDMARK_COUNT * 2 {
            return Err(format!(
                "PFLD model expected {} outputs, got {}",
                LANDMARK_COUNT * 2,
                data.len()
            )
            .into());
        }

        // 4. Map normalized crop coordinates back to frame coordinates
        let mut points = [(0.0f64, 0.0f64); LANDMARK_COUNT];
        for (k, point) in points.iter_mut().enumerate() {
            let nx = data[k * 2] as f64;
            let ny = data[k * 2 + 1] as f64;
            *point = (crop.x + nx * crop.side, crop.y + ny * crop.side);
        }

        Ok(FaceLandmarks::new(points))
    }
}

// ---------------------------------------------------------------------------
// Crop geometry
// ---------------------------------------------------------------------------

/// A square sampling region in frame coordinates. May extend past the frame
/// edges; sampling clamps per pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
struct CropRegion {
    x: f64,
    y: f64,
    side: f64,
}

impl CropRegion {
    /// Square region centered on the box, sides enlarged by `margin`.
    fn around(x: f64, y: f64, w: f64, h: f64, margin: f64) -> Self {
        let side = w.max(h) * (1.0 + margin);
        let cx = x + w / 2.0;
        let cy = y + h / 2.0;
        Self {
            x: cx - side / 2.0,
            y: cy - side / 2.0,
            side,
        }
    }
}

/// Sample the crop region at `size × size`, normalize to [0,1] NCHW float32.
/// Source coordinates outside the frame clamp to the nearest edge pixel.
fn preprocess(frame: &Frame, crop: &CropRegion, size: u32) -> ndarray::Array4<f32> {
    let src = frame.as_ndarray();
    let src_h = frame.height() as usize;
    let src_w = frame.width() as usize;
    let s = size as usize;

    let mut tensor = ndarray::Array4::<f32>::zeros((1, 3, s, s));

    for y in 0..s {
        let fy = crop.y + (y as f64 + 0.5) * crop.side / s as f64;
        let src_y = (fy.max(0.0) as usize).min(src_h - 1);
        for x in 0..s {
            let fx = crop.x + (x as f64 + 0.5) * crop.side / s as f64;
            let src_x = (fx.max(0.0) as usize).min(src_w - 1);
            for c in 0..3 {
                tensor[[0, c, y, x]] = src[[src_y, src_x, c]] as f32 / 255.0;
            }
        }
    }

    tensor
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_crop_is_square_with_margin() {
        let crop = CropRegion::around(100.0, 100.0, 40.0, 80.0, 0.25);
        // Longest side 80, margin 25% → side 100
        assert_relative_eq!(crop.side, 100.0);
        // Centered on the box center (120, 140)
        assert_relative_eq!(crop.x, 70.0);
        assert_relative_eq!(crop.y, 90.0);
    }

    #[test]
    fn test_crop_may_extend_past_origin() {
        let crop = CropRegion::around(0.0, 0.0, 40.0, 40.0, 0.25);
        assert!(crop.x < 0.0);
        assert!(crop.y < 0.0);
    }

    #[test]
    fn test_preprocess_shape_and_range() {
        let frame = Frame::new(vec![255u8; 64 * 64 * 3], 64, 64, 0);
        let crop = CropRegion::around(10.0, 10.0, 30.0, 30.0, 0.25);
        let tensor = preprocess(&frame, &crop, INPUT_SIZE);
        assert_eq!(tensor.shape(), &[1, 3, 112, 112]);
        assert!((tensor[[0, 0, 50, 50]] - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_preprocess_clamps_out_of_frame_samples() {
        // Crop extends well past the frame; edge pixels are reused
        let frame = Frame::new(vec![128u8; 16 * 16 * 3], 16, 16, 0);
        let crop = CropRegion::around(-20.0, -20.0, 60.0, 60.0, 0.25);
        let tensor = preprocess(&frame, &crop, INPUT_SIZE);
        assert!((tensor[[0, 0, 0, 0]] - 128.0 / 255.0).abs() < 0.01);
    }

    #[test]
    fn test_landmark_mapping_back_to_frame() {
        // A normalized point (0.5, 0.5) in a crop at (70, 90) side 100 maps
        // to the crop center
        let crop = CropRegion::around(100.0, 100.0, 40.0, 80.0, 0.25);
        let fx = crop.x + 0.5 * crop.side;
        let fy = crop.y + 0.5 * crop.side;
        assert_relative_eq!(fx, 120.0);
        assert_relative_eq!(fy, 140.0);
    }
}
