//! 单阶段钩子适配器：将闭包包装成 [`BatchHook`]，供 `with_xx_hook` 使用。

use std::future::Future;

use async_trait::async_trait;

use crate::batch_download::hooks::{BatchHook, HookAbort};

/// 仅实现「启动前」的钩子适配器。
pub(crate) struct BeforeStartHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F, Fut> BatchHook for BeforeStartHookAdapter<F>
where
    F: FnMut() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), HookAbort>> + Send + 'static,
{
    async fn before_start(&mut self) -> Result<(), HookAbort> {
        (self.0)().await
    }
}

/// 仅实现「每次 tick」的钩子适配器。
pub(crate) struct OnTickHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F> BatchHook for OnTickHookAdapter<F>
where
    F: FnMut(u32, u32) + Send + Sync + 'static,
{
    fn on_tick(&mut self, item_id: u32, remaining_secs: u32) {
        (self.0)(item_id, remaining_secs);
    }
}

/// 仅实现「条目完成」的钩子适配器。
pub(crate) struct OnCompletedHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F> BatchHook for OnCompletedHookAdapter<F>
where
    F: FnMut(u32) + Send + Sync + 'static,
{
    fn on_completed(&mut self, item_id: u32) {
        (self.0)(item_id);
    }
}

/// 仅实现「条目放行」的钩子适配器。
pub(crate) struct OnRevealedHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F> BatchHook for OnRevealedHookAdapter<F>
where
    F: FnMut(u32) + Send + Sync + 'static,
{
    fn on_revealed(&mut self, item_id: u32) {
        (self.0)(item_id);
    }
}

/// 仅实现「全部放行后」的钩子适配器。
pub(crate) struct AfterAllRevealedHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F, Fut> BatchHook for AfterAllRevealedHookAdapter<F>
where
    F: FnMut() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn after_all_revealed(&mut self) {
        (self.0)().await
    }
}
