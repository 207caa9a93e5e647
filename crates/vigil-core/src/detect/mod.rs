pub mod background;
pub mod convolve;
pub mod diff;
pub mod grayscale;

use std::sync::Arc;

use ndarray::Array2;
use rayon::ThreadPool;

use crate::frame::RgbFrame;

/// Per-run detection state: frame dimensions, kernel radius, threshold, and
/// the shared read-only background model.
///
/// Shared by reference across worker threads; the background is behind an
/// `Arc` and never mutated after construction.
pub struct MotionDetector {
    width: usize,
    height: usize,
    dx: usize,
    k: f32,
    background: Arc<Array2<u8>>,
}

impl MotionDetector {
    pub fn new(background: Arc<Array2<u8>>, dx: usize, k: f32) -> Self {
        let (height, width) = background.dim();
        Self {
            width,
            height,
            dx,
            k,
            background,
        }
    }

    pub fn dx(&self) -> usize {
        self.dx
    }

    pub fn threshold(&self) -> f32 {
        self.k
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn background(&self) -> &Array2<u8> {
        &self.background
    }

    /// Fresh padded grayscale scratch buffer sized for this run's frames.
    pub fn padded(&self) -> Array2<u8> {
        grayscale::padded_buffer(self.width, self.height, self.dx)
    }

    /// Fresh unpadded output buffer (frame size).
    pub fn output(&self) -> Array2<u8> {
        Array2::zeros((self.height, self.width))
    }

    /// Full per-frame pipeline, fused formulation. `gray` is a reusable
    /// padded scratch buffer whose interior is overwritten each call. The
    /// color frame is consumed by the grayscale step and freed before the
    /// convolution starts.
    pub fn process(&self, frame: RgbFrame, gray: &mut Array2<u8>) -> bool {
        grayscale::to_gray(&frame, gray, self.dx);
        drop(frame);
        diff::convolve_detect(gray, &self.background, self.dx, self.k)
    }

    /// Two-phase check of an already-blurred frame.
    pub fn detect_blurred(&self, blurred: &Array2<u8>) -> bool {
        diff::detect(blurred, &self.background, self.k)
    }

    /// Fused blur+detect with column-split helpers from `pool`.
    pub fn convolve_detect_parallel(&self, gray: &Array2<u8>, pool: &ThreadPool) -> bool {
        diff::convolve_detect_parallel(gray, &self.background, self.dx, self.k, pool)
    }
}
