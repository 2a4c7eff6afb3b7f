//! 计时引擎：每个在飞条目一个独立的倒计时任务。
//!
//! N 个任务逻辑上并行，互不阻塞；慢条目既不拖慢快条目的倒计时，
//! 也不拖延它自己的完成信号。任务只负责计数和上报事件，
//! 条目状态的落账由调度循环统一完成。

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::timer_event::{TimerEvent, TimerEventKind};

#[derive(Debug)]
pub(crate) struct CountdownEngine {
    /// 在飞计时任务句柄，按条目编号索引；完成或取消后移除
    handles: HashMap<u32, JoinHandle<()>>,
    /// 事件上报通道（引擎持有一份，每个任务克隆一份）
    events: mpsc::UnboundedSender<TimerEvent>,
    /// 当前批次代号，cancel_all 递增
    epoch: u64,
    tick_interval: Duration,
}

impl CountdownEngine {
    pub(crate) fn new(events: mpsc::UnboundedSender<TimerEvent>, tick_interval: Duration) -> Self {
        Self {
            handles: HashMap::new(),
            events,
            epoch: 0,
            tick_interval,
        }
    }

    pub(crate) fn epoch(&self) -> u64 {
        self.epoch
    }

    /// 为一个条目启动倒计时，每个 tick 间隔触发一次。
    ///
    /// 同编号已有在飞任务时先中止旧任务（幂等重启）。
    /// 时长为 0 的条目在第一个 tick 上直接完成（即启动后一个间隔）。
    pub(crate) fn start_countdown(&mut self, item_id: u32, duration_secs: u32) {
        if let Some(stale) = self.handles.remove(&item_id) {
            stale.abort();
        }

        let events = self.events.clone();
        let epoch = self.epoch;
        let tick_interval = self.tick_interval;

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(tick_interval);
            // interval 的第一次 tick 立即完成，先消耗掉
            ticker.tick().await;

            let mut remaining = duration_secs;
            loop {
                ticker.tick().await;
                if remaining > 0 {
                    remaining -= 1;
                }
                if remaining == 0 {
                    // 完成是该条目的最后一个事件，之后任务自行结束
                    let _ = events.send(TimerEvent {
                        epoch,
                        item_id,
                        kind: TimerEventKind::Completed,
                    });
                    break;
                }
                let _ = events.send(TimerEvent {
                    epoch,
                    item_id,
                    kind: TimerEventKind::Tick {
                        remaining_secs: remaining,
                    },
                });
            }
        });

        self.handles.insert(item_id, handle);
    }

    /// 释放一个条目的计时句柄；条目完成后由调度器调用。
    /// 对已结束的任务 abort 是无害的空操作。
    pub(crate) fn release(&mut self, item_id: u32) {
        if let Some(handle) = self.handles.remove(&item_id) {
            handle.abort();
        }
    }

    /// 立即中止全部在飞计时任务，并递增批次代号。
    ///
    /// 被中止的任务可能已经把事件排进了队列，消费端靠代号过滤，
    /// 所以旧批次的残留事件不会改动新批次的任何状态。
    pub(crate) fn cancel_all(&mut self) {
        for (_, handle) in self.handles.drain() {
            handle.abort();
        }
        self.epoch += 1;
    }
}

impl Drop for CountdownEngine {
    fn drop(&mut self) {
        for handle in self.handles.values() {
            handle.abort();
        }
    }
}
