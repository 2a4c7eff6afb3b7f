use std::time::Duration;

use super::duration_policy::DurationPolicy;
use super::reveal_order::RevealOrder;
use super::sim_error::SimError;

/// 默认批次大小
pub const DEFAULT_BATCH_SIZE: u32 = 10;

/// 默认最小时长（秒）
pub const DEFAULT_MIN_SECS: u32 = 5;

/// 默认最大时长（秒）
pub const DEFAULT_MAX_SECS: u32 = 10;

/// 默认 tick 间隔：1 个模拟秒 = 1 个真实秒
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// 模拟器配置：构造期参数，spawn 之后不可变。
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// 每个批次的条目数 N
    pub batch_size: u32,
    /// 条目时长策略
    pub durations: DurationPolicy,
    /// 一个模拟秒对应的真实时间
    pub tick_interval: Duration,
    /// 展示顺序
    pub reveal_order: RevealOrder,
}

impl SimConfig {
    pub(crate) fn validate(&self) -> Result<(), SimError> {
        if self.batch_size == 0 {
            return Err(SimError::EmptyBatch);
        }
        if self.tick_interval.is_zero() {
            return Err(SimError::ZeroTickInterval);
        }
        self.durations.validate(self.batch_size)?;
        self.reveal_order.validate(self.batch_size)?;
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            durations: DurationPolicy::Uniform {
                min_secs: DEFAULT_MIN_SECS,
                max_secs: DEFAULT_MAX_SECS,
            },
            tick_interval: DEFAULT_TICK_INTERVAL,
            reveal_order: RevealOrder::OddsThenEvens,
        }
    }
}
