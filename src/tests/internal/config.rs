//! 配置与校验测试：默认值、排列展开、各类非法配置。

use std::time::Duration;

use crate::BatchDownloader;
use crate::batch_download::{
    DEFAULT_BATCH_SIZE, DEFAULT_MAX_SECS, DEFAULT_MIN_SECS, DurationPolicy, RevealOrder,
    SimConfig, SimError,
};

#[test]
fn default_config_matches_reference_behavior() {
    let config = SimConfig::default();
    assert_eq!(config.batch_size, 10);
    assert_eq!(
        config.durations,
        DurationPolicy::Uniform {
            min_secs: 5,
            max_secs: 10
        }
    );
    assert_eq!(config.tick_interval, Duration::from_secs(1));
    assert_eq!(config.reveal_order, RevealOrder::OddsThenEvens);
    assert_eq!(DEFAULT_BATCH_SIZE, 10);
    assert_eq!((DEFAULT_MIN_SECS, DEFAULT_MAX_SECS), (5, 10));
}

#[test]
fn odds_then_evens_expands_to_reference_permutation() {
    assert_eq!(
        RevealOrder::OddsThenEvens.sequence(10),
        vec![1, 3, 5, 7, 9, 2, 4, 6, 8, 10]
    );
}

#[test]
fn odds_then_evens_generalizes_to_any_batch_size() {
    assert_eq!(RevealOrder::OddsThenEvens.sequence(5), vec![1, 3, 5, 2, 4]);
    assert_eq!(RevealOrder::OddsThenEvens.sequence(1), vec![1]);
}

#[test]
fn explicit_order_passes_through_unchanged() {
    let order = RevealOrder::Explicit(vec![2, 1, 4, 3]);
    assert_eq!(order.sequence(4), vec![2, 1, 4, 3]);
}

// ═══════════════════════════ 非法配置 ═══════════════════════════

fn new_err(config: SimConfig) -> SimError {
    BatchDownloader::new(config).err().expect("配置应被拒绝")
}

#[test]
fn zero_batch_size_is_rejected() {
    let config = SimConfig {
        batch_size: 0,
        durations: DurationPolicy::Fixed(vec![]),
        ..SimConfig::default()
    };
    assert_eq!(new_err(config), SimError::EmptyBatch);
}

#[test]
fn inverted_duration_range_is_rejected() {
    let config = SimConfig {
        durations: DurationPolicy::Uniform {
            min_secs: 10,
            max_secs: 5,
        },
        ..SimConfig::default()
    };
    assert_eq!(
        new_err(config),
        SimError::InvalidDurationRange {
            min_secs: 10,
            max_secs: 5
        }
    );
}

#[test]
fn fixed_durations_length_must_match_batch_size() {
    let config = SimConfig {
        batch_size: 4,
        durations: DurationPolicy::Fixed(vec![1, 2]),
        ..SimConfig::default()
    };
    assert_eq!(
        new_err(config),
        SimError::FixedDurationsMismatch {
            expected: 4,
            got: 2
        }
    );
}

#[test]
fn reveal_order_must_be_a_permutation() {
    // 重复编号
    let config = SimConfig {
        batch_size: 3,
        durations: DurationPolicy::Fixed(vec![1, 1, 1]),
        reveal_order: RevealOrder::Explicit(vec![1, 1, 2]),
        ..SimConfig::default()
    };
    assert_eq!(new_err(config), SimError::InvalidRevealOrder { batch_size: 3 });

    // 编号越界
    let config = SimConfig {
        batch_size: 3,
        durations: DurationPolicy::Fixed(vec![1, 1, 1]),
        reveal_order: RevealOrder::Explicit(vec![1, 2, 4]),
        ..SimConfig::default()
    };
    assert_eq!(new_err(config), SimError::InvalidRevealOrder { batch_size: 3 });

    // 长度不符
    let config = SimConfig {
        batch_size: 3,
        durations: DurationPolicy::Fixed(vec![1, 1, 1]),
        reveal_order: RevealOrder::Explicit(vec![1, 2]),
        ..SimConfig::default()
    };
    assert_eq!(new_err(config), SimError::InvalidRevealOrder { batch_size: 3 });
}

#[test]
fn zero_tick_interval_is_rejected() {
    let config = SimConfig {
        tick_interval: Duration::ZERO,
        ..SimConfig::default()
    };
    assert_eq!(new_err(config), SimError::ZeroTickInterval);
}

// ═══════════════════════════ 时长抽取 ═══════════════════════════

#[test]
fn uniform_draw_stays_within_inclusive_range() {
    let policy = DurationPolicy::Uniform {
        min_secs: 5,
        max_secs: 10,
    };
    let durations = policy.draw(200);
    assert_eq!(durations.len(), 200);
    assert!(durations.iter().all(|&d| (5..=10).contains(&d)));
}

#[test]
fn fixed_draw_returns_configured_durations() {
    let policy = DurationPolicy::Fixed(vec![1, 1, 3, 1]);
    assert_eq!(policy.draw(4), vec![1, 1, 3, 1]);
}
