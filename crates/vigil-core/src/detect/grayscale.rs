use ndarray::{s, Array2, Axis};
use rayon::ThreadPool;

use crate::consts::{LUMA_B, LUMA_G, LUMA_R, PAD_VALUE};
use crate::frame::RgbFrame;

/// Luminance of one RGB pixel, rounded to the nearest 8-bit value.
#[inline]
pub fn luminance([r, g, b]: [u8; 3]) -> u8 {
    (LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32).round() as u8
}

/// Allocate a padded grayscale buffer: frame dimensions plus a border of
/// width `dx` on every side, pre-filled with [`PAD_VALUE`].
pub fn padded_buffer(width: usize, height: usize, dx: usize) -> Array2<u8> {
    Array2::from_elem((height + 2 * dx, width + 2 * dx), PAD_VALUE)
}

/// Convert a color frame to luminance, writing into the interior of the
/// padded buffer. The border is left untouched.
///
/// The frame must match the dimensions the buffer was allocated for.
pub fn to_gray(frame: &RgbFrame, gray: &mut Array2<u8>, dx: usize) {
    for row in 0..frame.height {
        for col in 0..frame.width {
            gray[[row + dx, col + dx]] = luminance(frame.pixel(row, col));
        }
    }
}

/// Column-parallel variant of [`to_gray`]: the frame's columns are split
/// into one chunk per pool thread, each helper writing a disjoint slice of
/// the padded buffer's interior.
pub fn to_gray_parallel(frame: &RgbFrame, gray: &mut Array2<u8>, dx: usize, pool: &ThreadPool) {
    let h = frame.height;
    let w = frame.width;
    let helpers = pool.current_num_threads().max(1);
    let chunk = ((w + helpers - 1) / helpers).max(1);

    let mut interior = gray.slice_mut(s![dx..dx + h, dx..dx + w]);
    pool.scope(|scope| {
        for (ci, mut cols) in interior.axis_chunks_iter_mut(Axis(1), chunk).enumerate() {
            scope.spawn(move |_| {
                let base = ci * chunk;
                for col in 0..cols.len_of(Axis(1)) {
                    for row in 0..h {
                        cols[[row, col]] = luminance(frame.pixel(row, base + col));
                    }
                }
            });
        }
    });
}
