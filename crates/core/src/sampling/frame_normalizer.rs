use thiserror::Error;

use crate::shared::frame::{Frame, FRAME_CHANNELS};
use crate::shared::raw_frame::{PixelData, RawFrame};

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("unsupported channel count: {0}")]
    UnsupportedChannels(u8),
    #[error("corrupt pixel buffer: {actual} samples for {width}x{height}x{channels}")]
    CorruptBuffer {
        actual: usize,
        width: u32,
        height: u32,
        channels: u8,
    },
    #[error("frame has zero dimensions ({width}x{height})")]
    ZeroDimensions { width: u32, height: u32 },
}

/// Normalizes a decoded frame to the fixed keyframe shape: 3-channel RGB,
/// 8-bit depth.
///
/// - float samples are clamped to [0, 255] and rounded to u8;
/// - single-channel input is replicated across RGB;
/// - 4-channel input drops its alpha channel;
/// - any other channel count is unsupported.
///
/// Failures here are recoverable by contract: the caller drops the
/// candidate keyframe and continues at the next interval boundary.
pub fn normalize(raw: RawFrame) -> Result<Frame, NormalizeError> {
    let width = raw.width();
    let height = raw.height();
    let channels = raw.channels();
    let index = raw.index();

    if width == 0 || height == 0 {
        return Err(NormalizeError::ZeroDimensions { width, height });
    }
    if raw.data().len() != raw.expected_len() {
        return Err(NormalizeError::CorruptBuffer {
            actual: raw.data().len(),
            width,
            height,
            channels,
        });
    }

    let bytes = coerce_to_u8(raw.into_data());
    let rgb = normalize_channels(bytes, channels)?;

    debug_assert_eq!(
        rgb.len(),
        width as usize * height as usize * FRAME_CHANNELS
    );
    Ok(Frame::new(rgb, width, height, index))
}

/// Coerces pixel depth to 8-bit unsigned. Float samples are clamped to
/// [0, 255] before rounding; u8 samples pass through untouched.
fn coerce_to_u8(data: PixelData) -> Vec<u8> {
    match data {
        PixelData::U8(v) => v,
        PixelData::F32(v) => v
            .into_iter()
            .map(|s| s.clamp(0.0, 255.0).round() as u8)
            .collect(),
    }
}

fn normalize_channels(bytes: Vec<u8>, channels: u8) -> Result<Vec<u8>, NormalizeError> {
    match channels {
        1 => {
            let mut rgb = Vec::with_capacity(bytes.len() * 3);
            for v in bytes {
                rgb.extend_from_slice(&[v, v, v]);
            }
            Ok(rgb)
        }
        3 => Ok(bytes),
        4 => {
            let mut rgb = Vec::with_capacity(bytes.len() / 4 * 3);
            for px in bytes.chunks_exact(4) {
                rgb.extend_from_slice(&px[..3]);
            }
            Ok(rgb)
        }
        other => Err(NormalizeError::UnsupportedChannels(other)),
    }
}
