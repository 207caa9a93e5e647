use ndarray::Array2;

/// Mean of the `(2dx+1)²` samples of the window whose top-left corner is
/// `(i, j)` in the padded buffer, i.e. centered on padded pixel
/// `(i+dx, j+dx)`, which corresponds to output pixel `(i, j)`.
///
/// The sum is exact in u32 and the division truncates; the fused detection
/// path uses the same rule, so both formulations agree bit-for-bit.
#[inline]
pub fn window_mean(gray: &Array2<u8>, i: usize, j: usize, dx: usize) -> u8 {
    let side = 2 * dx + 1;
    let mut sum = 0u32;
    for z in 0..side {
        for w in 0..side {
            sum += u32::from(gray[[i + z, j + w]]);
        }
    }
    (sum / (side * side) as u32) as u8
}

/// Box-blur a padded grayscale buffer into an unpadded output buffer of the
/// original frame size. This is the dominant cost of the whole pipeline:
/// O(height · width · ksize²) per frame.
pub fn box_blur(gray: &Array2<u8>, out: &mut Array2<u8>, dx: usize) {
    let (h, w) = out.dim();
    for i in 0..h {
        for j in 0..w {
            out[[i, j]] = window_mean(gray, i, j, dx);
        }
    }
}

/// [`box_blur`] into a freshly allocated `(height, width)` buffer.
pub fn box_blur_new(gray: &Array2<u8>, width: usize, height: usize, dx: usize) -> Array2<u8> {
    let mut out = Array2::zeros((height, width));
    box_blur(gray, &mut out, dx);
    out
}
