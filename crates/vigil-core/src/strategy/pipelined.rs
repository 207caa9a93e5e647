use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use ndarray::Array2;
use rayon::ThreadPoolBuilder;
use tracing::debug;

use crate::detect::grayscale::to_gray_parallel;
use crate::detect::MotionDetector;
use crate::error::{Result, VigilError};
use crate::frame::RgbFrame;
use crate::io::ser::SerVideo;

use super::config::RunConfig;

/// Pipelined farm: the emitter/collector shell of the structured farm, but
/// each worker is a two-stage pipeline of two threads. Stage A converts a
/// frame to grayscale; stage B runs the fused blur+detect. Within each
/// stage the per-frame work is split column-wise across a dedicated rayon
/// pool, so farm replication and intra-stage splitting are independent
/// knobs and no replica's helpers can wait on another's progress.
pub fn run(mut source: SerVideo, detector: &MotionDetector, config: &RunConfig) -> Result<u64> {
    let nw = config.workers;
    debug!(
        workers = nw,
        gray_workers = config.gray_workers,
        conv_workers = config.conv_workers,
        "starting pipelined farm"
    );

    let remaining = source.frame_count() - 1;
    let (work_tx, work_rx) = mpsc::sync_channel::<RgbFrame>(nw);
    let work_rx = Arc::new(Mutex::new(work_rx));
    let (result_tx, result_rx) = mpsc::channel::<bool>();

    // Build every stage pool up front so a construction failure aborts the
    // run before any pipeline thread starts.
    let mut pools = Vec::with_capacity(nw);
    for _ in 0..nw {
        let gray_pool = ThreadPoolBuilder::new()
            .num_threads(config.gray_workers)
            .build()
            .map_err(|e| VigilError::ThreadPool(e.to_string()))?;
        let conv_pool = ThreadPoolBuilder::new()
            .num_threads(config.conv_workers)
            .build()
            .map_err(|e| VigilError::ThreadPool(e.to_string()))?;
        pools.push((gray_pool, conv_pool));
    }

    thread::scope(|s| {
        for (gray_pool, conv_pool) in pools {
            let (mid_tx, mid_rx) = mpsc::sync_channel::<Array2<u8>>(1);

            let rx = Arc::clone(&work_rx);
            s.spawn(move || loop {
                let next = {
                    let guard = rx.lock().expect("work receiver poisoned");
                    guard.recv()
                };
                let Ok(frame) = next else { break };
                let mut gray = detector.padded();
                to_gray_parallel(&frame, &mut gray, detector.dx(), &gray_pool);
                drop(frame);
                if mid_tx.send(gray).is_err() {
                    break;
                }
            });

            let tx = result_tx.clone();
            s.spawn(move || {
                while let Ok(gray) = mid_rx.recv() {
                    let hit = detector.convolve_detect_parallel(&gray, &conv_pool);
                    if tx.send(hit).is_err() {
                        break;
                    }
                }
            });
        }
        drop(result_tx);

        let collector = s.spawn(move || {
            let mut total = 0u64;
            while let Ok(hit) = result_rx.recv() {
                total += u64::from(hit);
            }
            total
        });

        let emitted = (|| -> Result<()> {
            for _ in 0..remaining {
                let frame = source.read_next()?.ok_or(VigilError::EndOfStream)?;
                work_tx.send(frame).map_err(|_| VigilError::ChannelClosed)?;
            }
            Ok(())
        })();
        drop(work_tx);

        let total = collector.join().expect("collector thread panicked");
        emitted.map(|_| total)
    })
}
