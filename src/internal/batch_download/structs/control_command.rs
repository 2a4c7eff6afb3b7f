/// 批次控制命令（通过 QueueReactiveProperty 传递，FIFO 保证顺序）
#[derive(Debug, Clone)]
pub enum ControlCommand {
    /// 开始一个新批次；已有批次在飞则先整体作废
    Start,
    /// 取消当前批次的全部计时器，快照冻结在最后状态
    Cancel,
}
