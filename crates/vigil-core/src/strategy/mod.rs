pub mod config;
pub mod farm;
pub mod pipelined;
pub mod queue;
pub mod sequential;
pub mod worker_pool;

pub use config::{RunConfig, StrategyKind};
pub use sequential::StageTimings;

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::info;

use crate::detect::background::build_background;
use crate::detect::MotionDetector;
use crate::error::Result;
use crate::io::ser::SerVideo;

/// Final result of a run: frames in the source, frames flagged as different
/// from the background, and wall time of the per-frame loop (background
/// setup excluded).
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub total_frames: usize,
    pub detected: u64,
    pub elapsed: Duration,
}

fn setup(source: &mut SerVideo, config: &RunConfig) -> Result<MotionDetector> {
    config.validate()?;
    info!(
        total_frames = source.frame_count(),
        width = source.width(),
        height = source.height(),
        strategy = ?config.strategy,
        "starting motion detection run"
    );
    let background = Arc::new(build_background(source, config.dx())?);
    Ok(MotionDetector::new(background, config.dx(), config.threshold))
}

/// Run one full motion detection pass over `source` under the configured
/// strategy. Every strategy produces the same count for the same input.
pub fn run(mut source: SerVideo, config: &RunConfig) -> Result<RunSummary> {
    let total_frames = source.frame_count();
    let detector = setup(&mut source, config)?;

    let started = Instant::now();
    let detected = match config.strategy {
        StrategyKind::Sequential => sequential::run(source, &detector)?,
        StrategyKind::WorkerPool => worker_pool::run(source, &detector, config.workers)?,
        StrategyKind::Farm => farm::run(source, &detector, config.workers)?,
        StrategyKind::Pipelined => pipelined::run(source, &detector, config)?,
    };
    let elapsed = started.elapsed();

    info!(detected, ?elapsed, "run complete");
    Ok(RunSummary {
        total_frames,
        detected,
        elapsed,
    })
}

/// Sequential run that also reports per-stage timing totals.
pub fn run_staged(
    mut source: SerVideo,
    config: &RunConfig,
) -> Result<(RunSummary, StageTimings)> {
    let total_frames = source.frame_count();
    let detector = setup(&mut source, config)?;

    let started = Instant::now();
    let (detected, timings) = sequential::run_with_timings(source, &detector)?;
    let elapsed = started.elapsed();

    Ok((
        RunSummary {
            total_frames,
            detected,
            elapsed,
        },
        timings,
    ))
}
