//! 批次流程钩子 trait：供调度循环在各阶段回调。
//!
//! 快照流（watch）只保留最新状态，同一次扫描里放行的多个条目
//! 在快照上是一次性出现的；要观察精确的放行顺序，用 `on_revealed` 钩子。

use async_trait::async_trait;

/// 钩子执行时请求中止批次启动时使用的错误。
#[derive(Debug, Clone)]
pub struct HookAbort;

impl std::fmt::Display for HookAbort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("批次启动被钩子中止")
    }
}

impl std::error::Error for HookAbort {}

/// 批次流程钩子：在「启动前 / 每次 tick / 条目完成 / 条目放行 / 全部放行后」插入自定义逻辑。
///
/// 使用方式二选一（可混用）：
/// - **单阶段**：用 `with_before_start_hook` / `with_on_tick_hook` /
///   `with_on_completed_hook` / `with_on_revealed_hook` /
///   `with_after_all_revealed_hook` 传入闭包；
/// - **完整钩子**：实现本 trait，通过下载器的 `with_hook` 注册。
#[async_trait]
pub trait BatchHook: Send + Sync {
    /// 新批次启动前调用。返回 `Err` 则本次不启动（已有批次不受影响）。
    async fn before_start(&mut self) -> Result<(), HookAbort> {
        Ok(())
    }

    /// 某条目倒计时递减一次，携带递减后的剩余秒数。
    fn on_tick(&mut self, _item_id: u32, _remaining_secs: u32) {}

    /// 某条目倒计时归零（完成但未必可见）。
    fn on_completed(&mut self, _item_id: u32) {}

    /// 某条目被调度器按展示顺序放行。同一次扫描内按顺序逐个回调。
    fn on_revealed(&mut self, _item_id: u32) {}

    /// 批次内全部条目都已放行后调用。
    async fn after_all_revealed(&mut self) {}
}
