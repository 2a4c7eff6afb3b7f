use serde::{Deserialize, Serialize};

/// 一个模拟下载条目：表现层拿到的快照单元。
///
/// 不变量：`visible` 为 true 时 `completed` 必为 true；
/// 两个标志在一个批次内都是单向闩锁（false → true），新批次整体重置。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadItem {
    /// 批次内稳定的条目编号，1..=N
    pub id: u32,
    /// 剩余倒计时（秒），0 表示倒计时结束
    pub remaining_secs: u32,
    /// 倒计时归零后置位（模拟"下载完成"）
    pub completed: bool,
    /// 调度器按展示顺序放行后置位（只会发生在 completed 之后）
    pub visible: bool,
}

impl DownloadItem {
    /// 空闲条目：批次尚未开始时的初始形态。
    pub(crate) fn idle(id: u32) -> Self {
        Self {
            id,
            remaining_secs: 0,
            completed: false,
            visible: false,
        }
    }

    /// 带初始时长的条目：批次开始时创建。
    pub(crate) fn pending(id: u32, duration_secs: u32) -> Self {
        Self {
            id,
            remaining_secs: duration_secs,
            completed: false,
            visible: false,
        }
    }
}
