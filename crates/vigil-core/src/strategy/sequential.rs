use std::time::Instant;

use crate::detect::convolve::box_blur;
use crate::detect::grayscale::to_gray;
use crate::detect::MotionDetector;
use crate::error::{Result, VigilError};
use crate::io::ser::SerVideo;

/// Process every remaining frame on the calling thread.
///
/// One padded grayscale buffer and one blurred buffer are allocated up
/// front and overwritten each iteration; this strategy uses the two-phase
/// detection formulation.
pub fn run(mut source: SerVideo, detector: &MotionDetector) -> Result<u64> {
    let mut gray = detector.padded();
    let mut blurred = detector.output();
    let mut detected = 0u64;

    let remaining = source.frame_count() - 1;
    for _ in 0..remaining {
        let frame = source.read_next()?.ok_or(VigilError::EndOfStream)?;
        to_gray(&frame, &mut gray, detector.dx());
        box_blur(&gray, &mut blurred, detector.dx());
        detected += u64::from(detector.detect_blurred(&blurred));
    }
    Ok(detected)
}

/// Total microseconds spent in each pipeline stage across a sequential run.
#[derive(Clone, Copy, Debug, Default)]
pub struct StageTimings {
    pub read_us: u128,
    pub grayscale_us: u128,
    pub blur_us: u128,
    pub detect_us: u128,
}

/// Like [`run`], but times each stage separately so the per-stage cost
/// split can be inspected.
pub fn run_with_timings(
    mut source: SerVideo,
    detector: &MotionDetector,
) -> Result<(u64, StageTimings)> {
    let mut gray = detector.padded();
    let mut blurred = detector.output();
    let mut detected = 0u64;
    let mut timings = StageTimings::default();

    let remaining = source.frame_count() - 1;
    for _ in 0..remaining {
        let t = Instant::now();
        let frame = source.read_next()?.ok_or(VigilError::EndOfStream)?;
        timings.read_us += t.elapsed().as_micros();

        let t = Instant::now();
        to_gray(&frame, &mut gray, detector.dx());
        timings.grayscale_us += t.elapsed().as_micros();

        let t = Instant::now();
        box_blur(&gray, &mut blurred, detector.dx());
        timings.blur_us += t.elapsed().as_micros();

        let t = Instant::now();
        detected += u64::from(detector.detect_blurred(&blurred));
        timings.detect_us += t.elapsed().as_micros();
    }
    Ok((detected, timings))
}
