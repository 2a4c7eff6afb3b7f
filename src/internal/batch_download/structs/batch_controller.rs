use tokio::task::JoinHandle;

use crate::internal::states::reactive_core::PropertyWatcher;

use super::control_command::ControlCommand;
use super::download_item::DownloadItem;
use super::reactive_state::BatchReactiveState;

/// 运行中模拟器的控制句柄：发命令、读快照、订阅变化。
///
/// 命令通过 mpsc 队列发送（无锁），快照通过 watch 通道读取（无锁），
/// 所以全部方法只需要 `&self`。丢弃控制器即停止调度循环并中止全部计时任务。
#[derive(Debug)]
pub struct BatchController {
    reactive_state: BatchReactiveState,
    scheduler_handle: JoinHandle<()>,
}

impl BatchController {
    pub(crate) fn new(reactive_state: BatchReactiveState, scheduler_handle: JoinHandle<()>) -> Self {
        Self {
            reactive_state,
            scheduler_handle,
        }
    }

    /// 触发一个新批次（发送 Start 命令到队列）。
    /// 已有批次在飞时旧批次整体作废，不会有事件串批。
    pub fn start(&self) -> Result<(), ControlCommand> {
        self.reactive_state.command_queue.send(ControlCommand::Start)
    }

    /// 取消当前批次的全部计时器（发送 Cancel 命令到队列），快照冻结。
    pub fn cancel(&self) -> Result<(), ControlCommand> {
        self.reactive_state.command_queue.send(ControlCommand::Cancel)
    }

    /// 获取当前条目快照（按编号有序的只读列表）。
    pub fn snapshot(&self) -> Vec<DownloadItem> {
        self.reactive_state.items.get_or_default()
    }

    /// 创建条目快照监听器，表现层用它驱动重绘。
    pub fn watch_items(&self) -> PropertyWatcher<Vec<DownloadItem>> {
        self.reactive_state.items.watch()
    }

    /// 订阅条目快照变化（spawn 一个监听任务，回调里做重绘等轻量操作）。
    pub fn subscribe_items<F>(&self, return_current_value: bool, callback: F)
    where
        F: Fn(&[DownloadItem]) + Send + 'static,
    {
        let mut watcher = self.reactive_state.items.watch();

        tokio::spawn(async move {
            if return_current_value {
                if let Some(current) = watcher.borrow() {
                    callback(&current);
                }
            }

            // 然后监听后续变化
            loop {
                match watcher.changed().await {
                    Ok(items) => callback(&items),
                    Err(_) => break,
                }
            }
        });
    }
}

impl Drop for BatchController {
    fn drop(&mut self) {
        // 命令队列的发送端随控制器一起消失，循环会自然退出；
        // abort 兜底处理循环正阻塞在事件分支的情况
        self.scheduler_handle.abort();
    }
}
