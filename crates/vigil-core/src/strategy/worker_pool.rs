use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use tracing::debug;

use crate::detect::MotionDetector;
use crate::error::{Result, VigilError};
use crate::frame::RgbFrame;
use crate::io::ser::SerVideo;

use super::queue::SharedQueue;

/// Worker-pool farm over a shared blocking queue.
///
/// One producer thread reads every remaining frame and pushes it into the
/// queue, then closes it. `nw` workers pop frames, run the full per-frame
/// pipeline with a reusable padded buffer each, and add their results into
/// a shared atomic counter. A `None` pop is the termination sentinel.
///
/// A producer read error closes the queue so no worker stays blocked, and
/// is propagated out of the run.
pub fn run(source: SerVideo, detector: &MotionDetector, nw: usize) -> Result<u64> {
    debug!(workers = nw, "starting worker-pool farm");

    let queue: SharedQueue<RgbFrame> = SharedQueue::new();
    let detected = AtomicU64::new(0);
    let remaining = source.frame_count() - 1;

    let produced = thread::scope(|s| {
        let queue = &queue;
        let detected = &detected;

        let producer = s.spawn(move || -> Result<()> {
            let mut source = source;
            for _ in 0..remaining {
                match source.read_next() {
                    Ok(Some(frame)) => queue.push(frame),
                    Ok(None) => {
                        queue.close();
                        return Err(VigilError::EndOfStream);
                    }
                    Err(e) => {
                        queue.close();
                        return Err(e);
                    }
                }
            }
            queue.close();
            Ok(())
        });

        for _ in 0..nw {
            s.spawn(move || {
                let mut gray = detector.padded();
                while let Some(frame) = queue.pop() {
                    if detector.process(frame, &mut gray) {
                        detected.fetch_add(1, Ordering::Relaxed);
                    }
                }
            });
        }

        producer.join().expect("producer thread panicked")
    });
    produced?;

    Ok(detected.into_inner())
}
