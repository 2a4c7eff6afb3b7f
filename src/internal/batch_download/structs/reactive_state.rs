use crate::internal::states::queue_reactive::QueueReactiveProperty;
use crate::states::unlock_reactive::UnlockReactiveProperty;

use super::control_command::ControlCommand;
use super::download_item::DownloadItem;

/// 控制器响应式状态
#[derive(Debug)]
pub struct BatchReactiveState {
    /// 命令队列（生产者端）：外部通过 send 发送控制命令
    pub(crate) command_queue: QueueReactiveProperty<ControlCommand>,
    /// 条目快照（只读）：调度循环每处理一个事件发布一次，外部通过 watch 监听
    pub items: UnlockReactiveProperty<Vec<DownloadItem>>,
}
