/// 计时引擎向调度器上报的事件。
///
/// 单个条目的事件严格有序（每个条目只有一个计时任务，mpsc 保证
/// 单发送端 FIFO），`Completed` 是该条目的最后一个事件；
/// 不同条目之间没有任何顺序保证。
#[derive(Debug, Clone)]
pub(crate) struct TimerEvent {
    /// 批次代号：cancel_all 会递增，旧代事件由消费端直接丢弃
    pub(crate) epoch: u64,
    pub(crate) item_id: u32,
    pub(crate) kind: TimerEventKind,
}

#[derive(Debug, Clone)]
pub(crate) enum TimerEventKind {
    /// 一次倒计时递减，携带递减后的剩余秒数（恒大于 0）
    Tick { remaining_secs: u32 },
    /// 倒计时归零，条目完成
    Completed,
}
