use crate::internal::batch_download::traits::hooks::{BatchHook, HookAbort};

/// 钩子容器：按注册顺序依次执行多个钩子。
#[derive(Default)]
pub(crate) struct BatchHooksContainer {
    hooks: Vec<Box<dyn BatchHook>>,
}

impl BatchHooksContainer {
    /// 添加一个批次钩子；支持多次调用以注册多个钩子。
    pub(crate) fn add(&mut self, hook: impl BatchHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    /// 任何一个钩子返回 `Err` 即中止，后续钩子不再执行。
    pub(crate) async fn run_before_start(&mut self) -> Result<(), HookAbort> {
        for h in self.hooks.iter_mut() {
            h.before_start().await?;
        }
        Ok(())
    }

    pub(crate) fn run_on_tick(&mut self, item_id: u32, remaining_secs: u32) {
        for h in self.hooks.iter_mut() {
            h.on_tick(item_id, remaining_secs);
        }
    }

    pub(crate) fn run_on_completed(&mut self, item_id: u32) {
        for h in self.hooks.iter_mut() {
            h.on_completed(item_id);
        }
    }

    pub(crate) fn run_on_revealed(&mut self, item_id: u32) {
        for h in self.hooks.iter_mut() {
            h.on_revealed(item_id);
        }
    }

    pub(crate) async fn run_after_all_revealed(&mut self) {
        for h in self.hooks.iter_mut() {
            h.after_all_revealed().await;
        }
    }
}
