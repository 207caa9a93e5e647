use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use tracing::debug;

use crate::detect::MotionDetector;
use crate::error::{Result, VigilError};
use crate::frame::RgbFrame;
use crate::io::ser::SerVideo;

/// Structured farm: emitter, `nw` workers, collector.
///
/// The emitter runs on the calling thread and distributes frames through a
/// bounded channel whose receiver the workers share: a worker takes a new
/// frame only once it has finished and emitted its previous result, which
/// is on-demand scheduling. Each worker runs the full per-frame pipeline
/// and sends one boolean to the collector, which sums them. The farm drains
/// fully before the count is reported: closing the work channel terminates
/// the workers, and the collector finishes once every worker has hung up.
pub fn run(mut source: SerVideo, detector: &MotionDetector, nw: usize) -> Result<u64> {
    debug!(workers = nw, "starting structured farm");

    let remaining = source.frame_count() - 1;
    let (work_tx, work_rx) = mpsc::sync_channel::<RgbFrame>(nw);
    let work_rx = Arc::new(Mutex::new(work_rx));
    let (result_tx, result_rx) = mpsc::channel::<bool>();

    thread::scope(|s| {
        for _ in 0..nw {
            let rx = Arc::clone(&work_rx);
            let tx = result_tx.clone();
            s.spawn(move || {
                let mut gray = detector.padded();
                loop {
                    let next = {
                        let guard = rx.lock().expect("work receiver poisoned");
                        guard.recv()
                    };
                    let Ok(frame) = next else { break };
                    let hit = detector.process(frame, &mut gray);
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
