use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use vigil_core::io::ser::SerVideo;
use vigil_core::strategy::{self, RunConfig, StrategyKind};

use crate::summary;

#[derive(Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    /// One frame at a time, single thread
    Sequential,
    /// Worker pool over a shared blocking queue
    Threads,
    /// Emitter/workers/collector farm
    Farm,
    /// Farm of two-stage pipelines with column-parallel stages
    Pipeline,
}

impl From<StrategyArg> for StrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Sequential => StrategyKind::Sequential,
            StrategyArg::Threads => StrategyKind::WorkerPool,
            StrategyArg::Farm => StrategyKind::Farm,
            StrategyArg::Pipeline => StrategyKind::Pipelined,
        }
    }
}

#[derive(Args)]
pub struct RunArgs {
    /// Input SER video
    pub file: PathBuf,

    /// Execution strategy
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Farm-level worker count
    #[arg(short = 'w', long)]
    pub workers: Option<usize>,

    /// Grayscale-stage helpers per pipelined worker
    #[arg(long)]
    pub gray_workers: Option<usize>,

    /// Convolution-stage helpers per pipelined worker
    #[arg(long)]
    pub conv_workers: Option<usize>,

    /// Kernel size: pixels per side of the averaging window (odd, >= 3)
    #[arg(short, long)]
    pub ksize: Option<usize>,

    /// Detection threshold: fraction of differing pixels in (0, 1]
    #[arg(short = 't', long)]
    pub threshold: Option<f32>,

    /// Load run configuration from a TOML file (explicit flags override it)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report elapsed wall time of the processing loop
    #[arg(long)]
    pub timing: bool,

    /// Report per-stage timing totals (sequential strategy only)
    #[arg(long)]
    pub stage_timing: bool,
}

fn build_config(args: &RunArgs) -> Result<RunConfig> {
    let mut config: RunConfig = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => RunConfig::default(),
    };

    if let Some(strategy) = args.strategy {
        config.strategy = strategy.into();
    }
    if let Some(workers) = args.workers {
        config.workers = workers;
    }
    if let Some(gray_workers) = args.gray_workers {
        config.gray_workers = gray_workers;
    }
    if let Some(conv_workers) = args.conv_workers {
        config.conv_workers = conv_workers;
    }
    if let Some(ksize) = args.ksize {
        config.ksize = ksize;
    }
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    tracing::debug!(strategy = ?config.strategy, workers = config.workers, "resolved run configuration");
    Ok(config)
}

pub fn run(args: &RunArgs) -> Result<()> {
    let config = build_config(args)?;
    let source = SerVideo::open(&args.file)?;

    if args.stage_timing {
        if config.strategy != StrategyKind::Sequential {
            bail!("--stage-timing is only available with the sequential strategy");
        }
        let (result, timings) = strategy::run_staged(source, &config)?;
        summary::print_run_summary(&args.file, &config, &result, args.timing);
        summary::print_stage_timings(&timings);
        return Ok(());
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Processing frames");

    let result = strategy::run(source, &config)?;
    pb.finish_and_clear();

    summary::print_run_summary(&args.file, &config, &result, args.timing);
    Ok(())
}
