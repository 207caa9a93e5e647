use vigil_core::error::VigilError;
use vigil_core::strategy::{RunConfig, StrategyKind};

fn base_config() -> RunConfig {
    RunConfig {
        strategy: StrategyKind::Sequential,
        workers: 2,
        gray_workers: 2,
        conv_workers: 2,
        ksize: 3,
        threshold: 0.05,
    }
}

#[test]
fn test_valid_config_passes() {
    assert!(base_config().validate().is_ok());

    // The threshold range is half-open: 1.0 is allowed.
    let mut config = base_config();
    config.threshold = 1.0;
    assert!(config.validate().is_ok());
}

#[test]
fn test_even_kernel_size_rejected() {
    let mut config = base_config();
    config.ksize = 4;
    let err = config.validate().unwrap_err();
    assert!(matches!(err, VigilError::InvalidConfig(_)), "got {err:?}");
}

#[test]
fn test_too_small_kernel_size_rejected() {
    let mut config = base_config();
    config.ksize = 1;
    assert!(config.validate().is_err());
}

#[test]
fn test_threshold_out_of_range_rejected() {
    let mut config = base_config();
    config.threshold = 0.0;
    assert!(config.validate().is_err());

    config.threshold = 1.5;
    assert!(config.validate().is_err());

    config.threshold = -0.1;
    assert!(config.validate().is_err());
}

#[test]
fn test_zero_workers_rejected() {
    let mut config = base_config();
    config.workers = 0;
    assert!(config.validate().is_err());

    let mut config = base_config();
    config.gray_workers = 0;
    assert!(config.validate().is_err());

    let mut config = base_config();
    config.conv_workers = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_kernel_radius() {
    let mut config = base_config();
    assert_eq!(config.dx(), 1);
    config.ksize = 5;
    assert_eq!(config.dx(), 2);
    config.ksize = 9;
    assert_eq!(config.dx(), 4);
}

#[test]
fn test_config_serde_round_trip() {
    let config = base_config();
    let json = serde_json::to_string(&config).unwrap();
    let back: RunConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(back.strategy, config.strategy);
    assert_eq!(back.workers, config.workers);
    assert_eq!(back.gray_workers, config.gray_workers);
    assert_eq!(back.conv_workers, config.conv_workers);
    assert_eq!(back.ksize, config.ksize);
    assert_eq!(back.threshold, config.threshold);
}

#[test]
fn test_strategy_names_are_kebab_case() {
    assert_eq!(
        serde_json::to_string(&StrategyKind::WorkerPool).unwrap(),
        "\"worker-pool\""
    );
    assert_eq!(
        serde_json::to_string(&StrategyKind::Pipelined).unwrap(),
        "\"pipelined\""
    );
}

#[test]
fn test_missing_fields_take_defaults() {
    let config: RunConfig = serde_json::from_str("{\"strategy\":\"farm\"}").unwrap();
    assert_eq!(config.strategy, StrategyKind::Farm);
    assert_eq!(config.ksize, 3);
    assert!(config.workers >= 1);
}
