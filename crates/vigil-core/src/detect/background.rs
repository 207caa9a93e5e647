use ndarray::Array2;
use tracing::debug;

use crate::consts::MIN_FRAME_COUNT;
use crate::error::{Result, VigilError};
use crate::io::ser::SerVideo;

use super::convolve::box_blur_new;
use super::grayscale::{padded_buffer, to_gray};

/// Build the background model from the video's first frame: grayscale, then
/// box blur. The result is never mutated afterwards.
///
/// Consumes the first frame of the source; the caller processes the rest.
pub fn build_background(source: &mut SerVideo, dx: usize) -> Result<Array2<u8>> {
    let total = source.frame_count();
    if total < MIN_FRAME_COUNT {
        return Err(VigilError::ShortVideo { frames: total });
    }

    let frame = source.read_next()?.ok_or(VigilError::EndOfStream)?;
    let mut gray = padded_buffer(frame.width, frame.height, dx);
    to_gray(&frame, &mut gray, dx);

    let background = box_blur_new(&gray, frame.width, frame.height, dx);

    debug!(
        width = frame.width,
        height = frame.height,
        "background model built"
    );
    Ok(background)
}
