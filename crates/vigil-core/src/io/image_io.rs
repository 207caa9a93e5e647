use std::path::Path;

use image::{GrayImage, ImageFormat, RgbImage};
use ndarray::Array2;

use crate::error::Result;
use crate::frame::RgbFrame;

/// Save a grayscale buffer as an 8-bit PNG.
pub fn save_gray_png(data: &Array2<u8>, path: &Path) -> Result<()> {
    let (h, w) = data.dim();

    let mut pixels: Vec<u8> = Vec::with_capacity(h * w);
    for row in 0..h {
        for col in 0..w {
            pixels.push(data[[row, col]]);
        }
    }

    let img = GrayImage::from_raw(w as u32, h as u32, pixels)
        .expect("buffer size matches dimensions");
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a color frame as an 8-bit RGB PNG.
pub fn save_rgb_png(frame: &RgbFrame, path: &Path) -> Result<()> {
    let img = RgbImage::from_raw(
        frame.width as u32,
        frame.height as u32,
        frame.data.clone(),
    )
    .expect("buffer size matches dimensions");
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
