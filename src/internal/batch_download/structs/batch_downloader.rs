use std::future::Future;

use crate::internal::batch_download::traits::hooks::{BatchHook, HookAbort};
use crate::internal::states::queue_reactive::QueueReactiveProperty;
use crate::states::unlock_reactive::UnlockReactiveProperty;

use super::batch::Batch;
use super::batch_controller::BatchController;
use super::batch_scheduler::BatchScheduler;
use super::hook_adapters::{
    AfterAllRevealedHookAdapter, BeforeStartHookAdapter, OnCompletedHookAdapter,
    OnRevealedHookAdapter, OnTickHookAdapter,
};
use super::hooks_container::BatchHooksContainer;
use super::reactive_state::BatchReactiveState;
use super::sim_config::SimConfig;
use super::sim_error::SimError;

/// 批量下载模拟器门面：配置校验 → 注册钩子 → spawn 调度循环。
///
/// 不实现 Clone，是因为一套配置只对应一个调度循环；spawn 之后
/// 通过 [`BatchController`] 操作，配置不可再变。
///
/// ```rust,no_run
/// use download_sim::BatchDownloader;
/// use download_sim::batch_download::SimConfig;
///
/// # async fn example() {
/// let controller = BatchDownloader::new(SimConfig::default())
///     .unwrap()
///     .with_on_revealed_hook(|id| println!("条目 {id} 放行"))
///     .spawn();
/// controller.start().unwrap();
/// # }
/// ```
pub struct BatchDownloader {
    config: SimConfig,
    hooks: BatchHooksContainer,
}

impl BatchDownloader {
    /// 校验配置并创建门面。配置不合法时返回 [`SimError`]。
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            config,
            hooks: BatchHooksContainer::default(),
        })
    }

    /// 注册一个完整钩子。
    pub fn with_hook(mut self, hook: impl BatchHook + 'static) -> Self {
        self.hooks.add(hook);
        self
    }

    /// 注册仅「启动前」的闭包钩子（返回 `Err` 可否决本次启动）。
    pub fn with_before_start_hook<F, Fut>(mut self, hook: F) -> Self
    where
        F: FnMut() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), HookAbort>> + Send + 'static,
    {
        self.hooks.add(BeforeStartHookAdapter(hook));
        self
    }

    /// 注册仅「每次 tick」的闭包钩子。
    pub fn with_on_tick_hook<F>(mut self, hook: F) -> Self
    where
        F: FnMut(u32, u32) + Send + Sync + 'static,
    {
        self.hooks.add(OnTickHookAdapter(hook));
        self
    }

    /// 注册仅「条目完成」的闭包钩子。
    pub fn with_on_completed_hook<F>(mut self, hook: F) -> Self
    where
        F: FnMut(u32) + Send + Sync + 'static,
    {
        self.hooks.add(OnCompletedHookAdapter(hook));
        self
    }

    /// 注册仅「条目放行」的闭包钩子。同一次扫描内按放行顺序逐个回调。
    pub fn with_on_revealed_hook<F>(mut self, hook: F) -> Self
    where
        F: FnMut(u32) + Send + Sync + 'static,
    {
        self.hooks.add(OnRevealedHookAdapter(hook));
        self
    }

    /// 注册仅「全部放行后」的闭包钩子。
    pub fn with_after_all_revealed_hook<F, Fut>(mut self, hook: F) -> Self
    where
        F: FnMut() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.hooks.add(AfterAllRevealedHookAdapter(hook));
        self
    }

    /// 启动调度循环，返回控制句柄。
    ///
    /// 初始快照是 N 个空闲条目（倒计时 0、未完成、不可见），
    /// 与批次尚未开始的语义一致。
    pub fn spawn(self) -> BatchController {
        let (command_queue, command_consumer) = QueueReactiveProperty::new();

        let initial = Batch::idle(
            self.config.batch_size,
            self.config.reveal_order.sequence(self.config.batch_size),
        );
        let items = UnlockReactiveProperty::new(initial.items().to_vec());

        let scheduler = BatchScheduler::new(self.config, items.clone(), self.hooks);
        let scheduler_handle = tokio::spawn(scheduler.run(command_consumer));

        BatchController::new(
            BatchReactiveState {
                command_queue,
                items,
            },
            scheduler_handle,
        )
    }
}
