use std::path::Path;

use console::Style;
use vigil_core::strategy::{RunConfig, RunSummary, StageTimings, StrategyKind};

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    method: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

fn strategy_label(config: &RunConfig) -> String {
    match config.strategy {
        StrategyKind::Sequential => "sequential".into(),
        StrategyKind::WorkerPool => format!("worker-pool ({} workers)", config.workers),
        StrategyKind::Farm => format!("farm ({} workers)", config.workers),
        StrategyKind::Pipelined => format!(
            "pipelined ({} workers, {}+{} helpers)",
            config.workers, config.gray_workers, config.conv_workers
        ),
    }
}

pub fn print_run_summary(input: &Path, config: &RunConfig, result: &RunSummary, timing: bool) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Vigil Motion Detection"));
    println!(
        "  {}",
        s.title.apply_to(
            "\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"
        )
    );
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Strategy"),
        s.method.apply_to(strategy_label(config))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Kernel"),
        s.value.apply_to(format!("{0}x{0}", config.ksize))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Threshold"),
        s.value.apply_to(config.threshold)
    );
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Total frames"),
        s.value.apply_to(result.total_frames)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Detected"),
        s.value.apply_to(result.detected)
    );
    if timing {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Elapsed"),
            s.value.apply_to(format!("{:.3} s", result.elapsed.as_secs_f64()))
        );
    }
    println!();
}

pub fn print_stage_timings(timings: &StageTimings) {
    let s = Styles::new();

    println!("  {}", s.title.apply_to("Stage totals"));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Read"),
        s.value.apply_to(format!("{} us", timings.read_us))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Grayscale"),
        s.value.apply_to(format!("{} us", timings.grayscale_us))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Blur"),
        s.value.apply_to(format!("{} us", timings.blur_us))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Detect"),
        s.value.apply_to(format!("{} us", timings.detect_us))
    );
    println!();
}
