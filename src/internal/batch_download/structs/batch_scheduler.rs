//! 展示调度器：把「完成」与「展示」解耦，强制固定顺序。
//!
//! 单个任务独占批次状态与计时引擎，select 同时消费控制命令
//! （biased，命令优先）和计时事件。可见性只从展示顺序推导，
//! 完成事件到达的先后不影响放行序列。

use tokio::sync::mpsc;

use crate::internal::states::queue_reactive::QueueReactiveConsumer;
use crate::states::unlock_reactive::UnlockReactiveProperty;

use super::batch::Batch;
use super::control_command::ControlCommand;
use super::countdown_engine::CountdownEngine;
use super::download_item::DownloadItem;
use super::hooks_container::BatchHooksContainer;
use super::sim_config::SimConfig;
use super::timer_event::{TimerEvent, TimerEventKind};

pub(crate) struct BatchScheduler {
    config: SimConfig,
    engine: CountdownEngine,
    /// 计时事件接收端；发送端在引擎手里，循环存活期间 recv 不会关闭
    events: mpsc::UnboundedReceiver<TimerEvent>,
    batch: Batch,
    /// 快照发布端，与控制器共享同一个属性
    feed: UnlockReactiveProperty<Vec<DownloadItem>>,
    hooks: BatchHooksContainer,
}

impl BatchScheduler {
    pub(crate) fn new(
        config: SimConfig,
        feed: UnlockReactiveProperty<Vec<DownloadItem>>,
        hooks: BatchHooksContainer,
    ) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let engine = CountdownEngine::new(event_tx, config.tick_interval);
        let batch = Batch::idle(
            config.batch_size,
            config.reveal_order.sequence(config.batch_size),
        );

        Self {
            config,
            engine,
            events: event_rx,
            batch,
            feed,
            hooks,
        }
    }

    /// 调度主循环：命令队列关闭（门面被丢弃）即退出，
    /// 引擎随之析构，所有在飞计时任务一并中止。
    pub(crate) async fn run(mut self, mut commands: QueueReactiveConsumer<ControlCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = commands.recv() => {
                    match cmd {
                        Some(ControlCommand::Start) => self.begin_batch().await,
                        Some(ControlCommand::Cancel) => self.cancel_batch(),
                        None => break,
                    }
                }

                ev = self.events.recv() => {
                    if let Some(ev) = ev {
                        self.handle_event(ev).await;
                    }
                }
            }
        }
    }

    /// 启动新批次：先整体作废旧批次（代号递增保证旧事件全部失效），
    /// 再重建条目并为每个条目并发启动倒计时。
    async fn begin_batch(&mut self) {
        if self.hooks.run_before_start().await.is_err() {
            return;
        }

        self.engine.cancel_all();

        let durations = self.config.durations.draw(self.config.batch_size);
        let order = self.config.reveal_order.sequence(self.config.batch_size);
        self.batch = Batch::start(&durations, order);

        for item in self.batch.items() {
            self.engine.start_countdown(item.id, item.remaining_secs);
        }
        self.publish();
    }

    /// 取消当前批次：计时器全部中止，快照冻结在最后状态。
    fn cancel_batch(&mut self) {
        self.engine.cancel_all();
    }

    async fn handle_event(&mut self, ev: TimerEvent) {
        // 旧批次的残留事件，直接丢弃
        if ev.epoch != self.engine.epoch() {
            return;
        }

        match ev.kind {
            TimerEventKind::Tick { remaining_secs } => {
                self.batch.record_tick(ev.item_id, remaining_secs);
                self.hooks.run_on_tick(ev.item_id, remaining_secs);
            }
            TimerEventKind::Completed => {
                self.batch.record_completed(ev.item_id);
                self.engine.release(ev.item_id);
                self.hooks.run_on_completed(ev.item_id);

                let revealed = self.batch.sweep();
                for item_id in revealed {
                    self.hooks.run_on_revealed(item_id);
                }
                if self.batch.all_visible() {
                    self.hooks.run_after_all_revealed().await;
                }
            }
        }
        // 每个事件发布一次：一次扫描放行的多个条目对外是同一个快照
        self.publish();
    }

    fn publish(&self) {
        let _ = self.feed.update(self.batch.items().to_vec());
    }
}
