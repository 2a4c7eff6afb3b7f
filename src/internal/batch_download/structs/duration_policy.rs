use rand::Rng;

use super::sim_error::SimError;

/// 条目时长策略：批次开始时为每个条目确定倒计时秒数。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationPolicy {
    /// 每个条目独立地从 `min_secs..=max_secs`（含端点）均匀抽取
    Uniform { min_secs: u32, max_secs: u32 },
    /// 按条目编号给定固定时长（下标 = id - 1），用于确定性批次
    Fixed(Vec<u32>),
}

impl DurationPolicy {
    pub(crate) fn validate(&self, batch_size: u32) -> Result<(), SimError> {
        match self {
            Self::Uniform { min_secs, max_secs } => {
                if min_secs > max_secs {
                    return Err(SimError::InvalidDurationRange {
                        min_secs: *min_secs,
                        max_secs: *max_secs,
                    });
                }
            }
            Self::Fixed(durations) => {
                if durations.len() != batch_size as usize {
                    return Err(SimError::FixedDurationsMismatch {
                        expected: batch_size,
                        got: durations.len(),
                    });
                }
            }
        }
        Ok(())
    }

    /// 为一个批次抽取全部时长；调用前配置已通过校验。
    pub(crate) fn draw(&self, batch_size: u32) -> Vec<u32> {
        match self {
            Self::Uniform { min_secs, max_secs } => {
                let mut rng = rand::thread_rng();
                (0..batch_size)
                    .map(|_| rng.gen_range(*min_secs..=*max_secs))
                    .collect()
            }
            Self::Fixed(durations) => durations.clone(),
        }
    }
}
