use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Bgra8,
    Rgb8,
}

impl PixelFormat {
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            PixelFormat::Bgra8 => 4,
            PixelFormat::Rgb8 => 3,
        }
    }
}

/// One captured image. Moved from stage to stage, never shared.
#[derive(Clone)]
pub struct Frame {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub pixel_format: PixelFormat,
    pub captured_at: Instant,
}

impl Frame {
    pub fn new(pixels: Vec<u8>, width: u32, height: u32, pixel_format: PixelFormat) -> Self {
        Self {
            pixels,
            width,
            height,
            pixel_format,
            captured_at: Instant::now(),
        }
    }

    pub fn from_image(image: &image::DynamicImage) -> Self {
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();
        Self::new(rgb.into_raw(), width, height, PixelFormat::Rgb8)
    }

    /// Same pixels, stamped as captured now. Used to replay a static frame.
    pub fn recaptured(&self) -> Self {
        Self {
            captured_at: Instant::now(),
            ..self.clone()
        }
    }

    /// Buffer length a `width`x`height` image needs, or none if it does not fit in memory.
    pub fn byte_len(width: u32, height: u32, pixel_format: PixelFormat) -> Option<usize> {
        (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(pixel_format.bytes_per_pixel())
    }

    pub fn has_payload(&self) -> bool {
        self.width > 0
            && self.height > 0
            && Frame::byte_len(self.width, self.height, self.pixel_format)
                == Some(self.pixels.len())
    }

    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        if !self.has_payload() {
            return None;
        }

        let rgb = match self.pixel_format {
            PixelFormat::Rgb8 => self.pixels.clone(),
            PixelFormat::Bgra8 => self
                .pixels
                .chunks_exact(4)
                .flat_map(|bgra| [bgra[2], bgra[1], bgra[0]])
                .collect(),
        };

        image::RgbImage::from_raw(self.width, self.height, rgb)
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixel_format", &self.pixel_format)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}
