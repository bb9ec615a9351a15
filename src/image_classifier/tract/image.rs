use image::{imageops, RgbImage};
use tract_onnx::prelude::*;

/// Scales `image` to fit `width`x`height` keeping its aspect ratio, padding the
/// rest with black.
pub fn letterbox(image: &RgbImage, width: u32, height: u32) -> RgbImage {
    if image.width() == width && image.height() == height {
        return image.clone();
    }

    let (w, h) = (image.width() as f32, image.height() as f32);
    let scale = (width as f32 / w).min(height as f32 / h);
    let new_w = ((w * scale) as u32).clamp(1, width);
    let new_h = ((h * scale) as u32).clamp(1, height);

    let scaled = imageops::resize(image, new_w, new_h, imageops::FilterType::Triangle);

    let mut padded = RgbImage::new(width, height);
    imageops::replace(
        &mut padded,
        &scaled,
        ((width - new_w) / 2) as i64,
        ((height - new_h) / 2) as i64,
    );
    padded
}

/// NCHW float tensor with channels scaled to [0, 1].
pub fn image_to_tensor(image: &RgbImage) -> Tensor {
    let (width, height) = (image.width() as usize, image.height() as usize);
    tract_ndarray::Array4::from_shape_fn((1, 3, height, width), |(_, c, y, x)| {
        image.get_pixel(x as u32, y as u32)[c] as f32 / 255.0
    })
    .into_tensor()
}

pub fn frame_image_to_tensor(image: &RgbImage, width: u32, height: u32) -> Tensor {
    image_to_tensor(&letterbox(image, width, height))
}
