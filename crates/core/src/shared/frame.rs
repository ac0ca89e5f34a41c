use ndarray::{ArrayView2, ArrayView3};

/// Fixed channel count for normalized keyframes.
pub const FRAME_CHANNELS: usize = 3;

/// A normalized keyframe: contiguous RGB bytes in row-major order.
///
/// Frames reach this type only through the sampling layer, which coerces
/// pixel depth and channel count at the decode boundary. Detectors treat
/// the pixel data as opaque.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    index: usize,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, index: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * FRAME_CHANNELS,
            "data length must equal width * height * 3"
        );
        Self {
            data,
            width,
            height,
            index,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(
            (self.height as usize, self.width as usize, FRAME_CHANNELS),
            &self.data,
        )
        .expect("Frame data length must match dimensions")
    }

    /// Grayscale projection of this frame (BT.601 luma weights).
    pub fn to_luma(&self) -> LumaFrame {
        let mut luma = Vec::with_capacity(self.width as usize * self.height as usize);
        for px in self.data.chunks_exact(FRAME_CHANNELS) {
            let y = (299 * px[0] as u32 + 587 * px[1] as u32 + 114 * px[2] as u32) / 1000;
            luma.push(y as u8);
        }
        LumaFrame {
            data: luma,
            width: self.width,
            height: self.height,
            index: self.index,
        }
    }
}

/// Single-channel grayscale projection of a keyframe.
///
/// Input for the fast primary face detector, which operates on intensity
/// rather than color.
#[derive(Clone, Debug, PartialEq)]
pub struct LumaFrame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    index: usize,
}

impl LumaFrame {
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn as_ndarray(&self) -> ArrayView2<'_, u8> {
        ArrayView2::from_shape((self.height as usize, self.width as usize), &self.data)
            .expect("LumaFrame data length must match dimensions")
    }
}
