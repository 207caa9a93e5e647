use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CONV_WORKERS, DEFAULT_GRAY_WORKERS, DEFAULT_KSIZE, DEFAULT_THRESHOLD,
};
use crate::error::{Result, VigilError};

/// Which execution architecture drives the per-frame pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Single flow of control, one frame at a time.
    Sequential,
    /// Producer thread plus a pool of workers draining a shared blocking queue.
    WorkerPool,
    /// Emitter/workers/collector farm with on-demand distribution.
    Farm,
    /// Farm whose workers are two-stage pipelines with column-parallel stages.
    Pipelined,
}

/// Full run configuration. Loadable from TOML; every knob has a default so
/// a config file only needs to name what it changes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default = "default_strategy")]
    pub strategy: StrategyKind,

    /// Farm-level worker count (worker-pool, farm and pipelined strategies).
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Grayscale-stage helper threads per pipelined worker.
    #[serde(default = "default_gray_workers")]
    pub gray_workers: usize,

    /// Convolution-stage helper threads per pipelined worker.
    #[serde(default = "default_conv_workers")]
    pub conv_workers: usize,

    /// Pixels per side of the square averaging kernel (odd, >= 3).
    #[serde(default = "default_ksize")]
    pub ksize: usize,

    /// Fraction of differing pixels that flags a frame, in (0, 1].
    #[serde(default = "default_threshold")]
    pub threshold: f32,
}

fn default_strategy() -> StrategyKind {
    StrategyKind::Sequential
}

fn default_workers() -> usize {
    num_cpus::get()
}

fn default_gray_workers() -> usize {
    DEFAULT_GRAY_WORKERS
}

fn default_conv_workers() -> usize {
    DEFAULT_CONV_WORKERS
}

fn default_ksize() -> usize {
    DEFAULT_KSIZE
}

fn default_threshold() -> f32 {
    DEFAULT_THRESHOLD
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            workers: default_workers(),
            gray_workers: default_gray_workers(),
            conv_workers: default_conv_workers(),
            ksize: default_ksize(),
            threshold: default_threshold(),
        }
    }
}

impl RunConfig {
    /// Check every parameter; all violations are fatal configuration errors.
    pub fn validate(&self) -> Result<()> {
        if self.ksize < 3 || self.ksize % 2 == 0 {
            return Err(VigilError::InvalidConfig(format!(
                "kernel size must be odd and >= 3, got {}",
                self.ksize
            )));
        }
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(VigilError::InvalidConfig(format!(
                "threshold must be in (0, 1], got {}",
                self.threshold
            )));
        }
        if self.workers == 0 || self.gray_workers == 0 || self.conv_workers == 0 {
            return Err(VigilError::InvalidConfig(
                "worker counts must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Kernel radius: the padded border width.
    pub fn dx(&self) -> usize {
        (self.ksize - 1) / 2
    }
}
