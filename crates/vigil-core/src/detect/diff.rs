use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};

use ndarray::Array2;
use rayon::prelude::*;
use rayon::ThreadPool;

use super::convolve::window_mean;

/// Count positions where the two buffers hold different values.
///
/// Exact integer inequality; there is no tolerance band.
pub fn count_differing(a: &Array2<u8>, b: &Array2<u8>) -> u64 {
    a.iter().zip(b.iter()).filter(|(x, y)| x != y).count() as u64
}

/// A frame is detected when the differing fraction strictly exceeds `k`.
#[inline]
pub fn is_detected(differing: u64, pixels: usize, k: f32) -> bool {
    differing as f32 / pixels as f32 > k
}

/// Two-phase formulation: compare an already-blurred frame against the
/// background model.
pub fn detect(blurred: &Array2<u8>, background: &Array2<u8>, k: f32) -> bool {
    let differing = count_differing(blurred, background);
    is_detected(differing, background.len(), k)
}

/// Fused formulation: blur each pixel and compare it to the background in
/// the same pass, so no blurred buffer is materialized.
pub fn convolve_detect(gray: &Array2<u8>, background: &Array2<u8>, dx: usize, k: f32) -> bool {
    let (h, w) = background.dim();
    let mut differing = 0u64;
    for i in 0..h {
        for j in 0..w {
            if background[[i, j]] != window_mean(gray, i, j, dx) {
                differing += 1;
            }
        }
    }
    is_detected(differing, background.len(), k)
}

/// Partial fused tally over the output columns `cols`.
pub fn convolve_diff_cols(
    gray: &Array2<u8>,
    background: &Array2<u8>,
    dx: usize,
    cols: Range<usize>,
) -> u64 {
    let h = background.nrows();
    let mut differing = 0u64;
    for j in cols {
        for i in 0..h {
            if background[[i, j]] != window_mean(gray, i, j, dx) {
                differing += 1;
            }
        }
    }
    differing
}

/// Fused blur+detect with the per-frame work split column-wise across the
/// given pool, one chunk per helper thread. Helpers run concurrently, so
/// the shared tally is an atomic counter.
pub fn convolve_detect_parallel(
    gray: &Array2<u8>,
    background: &Array2<u8>,
    dx: usize,
    k: f32,
    pool: &ThreadPool,
) -> bool {
    let w = background.ncols();
    let helpers = pool.current_num_threads().max(1);
    let chunk = ((w + helpers - 1) / helpers).max(1);
    let chunks = (w + chunk - 1) / chunk;

    let tally = AtomicU64::new(0);
    pool.install(|| {
        (0..chunks).into_par_iter().for_each(|ci| {
            let c0 = ci * chunk;
            let c1 = (c0 + chunk).min(w);
            let partial = convolve_diff_cols(gray, background, dx, c0..c1);
            tally.fetch_add(partial, Ordering::Relaxed);
        });
    });

    is_detected(tally.into_inner(), background.len(), k)
}
