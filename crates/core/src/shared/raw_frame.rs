/// Pixel samples as produced by a decoder, before depth coercion.
#[derive(Clone, Debug, PartialEq)]
pub enum PixelData {
    U8(Vec<u8>),
    F32(Vec<f32>),
}

impl PixelData {
    pub fn len(&self) -> usize {
        match self {
            PixelData::U8(v) => v.len(),
            PixelData::F32(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A decoded frame as it leaves the video source: arbitrary channel count
/// (1, 3, or 4 are meaningful downstream) and 8-bit or float samples.
///
/// The sampling layer converts candidates to the fixed [`Frame`] shape;
/// everything else in the pipeline never sees this type.
///
/// [`Frame`]: crate::shared::frame::Frame
#[derive(Clone, Debug, PartialEq)]
pub struct RawFrame {
    data: PixelData,
    width: u32,
    height: u32,
    channels: u8,
    index: usize,
}

impl RawFrame {
    pub fn new(data: PixelData, width: u32, height: u32, channels: u8, index: usize) -> Self {
        Self {
            data,
            width,
            height,
            channels,
            index,
        }
    }

    pub fn from_u8(data: Vec<u8>, width: u32, height: u32, channels: u8, index: usize) -> Self {
        Self::new(PixelData::U8(data), width, height, channels, index)
    }

    pub fn from_f32(data: Vec<f32>, width: u32, height: u32, channels: u8, index: usize) -> Self {
        Self::new(PixelData::F32(data), width, height, channels, index)
    }

    pub fn data(&self) -> &PixelData {
        &self.data
    }

    pub fn into_data(self) -> PixelData {
        self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Expected sample count for the declared dimensions.
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * self.channels as usize
    }
}
