//! 模拟器配置相关错误类型。
//!
//! 运行期的不变量破坏（未知条目编号、游标越界等）不在此列，
//! 那些属于编程错误，直接断言失败，见 [`super::batch`]。

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("批次大小不能为 0")]
    EmptyBatch,

    #[error("时长区间无效: {min_secs}..={max_secs}")]
    InvalidDurationRange { min_secs: u32, max_secs: u32 },

    #[error("固定时长数量 {got} 与批次大小 {expected} 不一致")]
    FixedDurationsMismatch { expected: u32, got: usize },

    #[error("展示顺序不是 1..={batch_size} 的排列")]
    InvalidRevealOrder { batch_size: u32 },

    #[error("tick 间隔不能为 0")]
    ZeroTickInterval,
}
