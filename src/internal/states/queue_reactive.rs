//! # QueueReactiveProperty — 微队列响应式属性
//!
//! 基于 tokio::sync::mpsc 实现的单向消息队列，用于命令传递场景。
//!
//! ## 特性
//! - 无锁设计（基于 mpsc::unbounded_channel）
//! - 严格 FIFO 顺序
//! - 生产者可以有多个（Clone sender），消费者只有一个
//! - 仅库内部使用（`pub(crate)`）
//!
//! ## 使用场景
//! - 控制命令传递（如模拟器的 start/cancel）
//! - 计时引擎向调度器上报 tick/完成事件（N 个生产者、1 个消费者）

use super::reactive_core::ReactiveProperty;
use tokio::sync::mpsc;

/// 微队列响应式属性（生产者端）
///
/// 可以 Clone，多个生产者可以同时往队列推送消息。
/// 同时维护一个响应式属性镜像最近一条消息，供外部只读订阅。
#[derive(Clone, Debug)]
pub(crate) struct QueueReactiveProperty<T: Clone + Send + Sync + 'static> {
    sender: mpsc::UnboundedSender<T>,
    state: ReactiveProperty<Option<T>>,
}

/// 微队列消费者
///
/// 不可 Clone，只能有一个消费者，按 FIFO 顺序消费消息。
#[derive(Debug)]
pub(crate) struct QueueReactiveConsumer<T: Clone + Send + Sync + 'static> {
    receiver: mpsc::UnboundedReceiver<T>,
    state: ReactiveProperty<Option<T>>,
}

impl<T> QueueReactiveProperty<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// 创建一个新的微队列，返回 (生产者, 消费者) 元组。
    pub(crate) fn new() -> (Self, QueueReactiveConsumer<T>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let state = ReactiveProperty::new(None);

        let producer = Self {
            sender,
            state: state.clone(),
        };
        let consumer = QueueReactiveConsumer { receiver, state };

        (producer, consumer)
    }

    /// 发送消息到队列。无锁操作，立即返回。
    ///
    /// 如果接收端已关闭，返回 `Err(T)` 把消息还给调用方。
    pub(crate) fn send(&self, value: T) -> Result<(), T> {
        let _ = self.state.update(Some(value.clone()));
        self.sender.send(value).map_err(|e| e.0)
    }

    /// 获取用于订阅的响应式属性（只读，镜像最近一条消息）。
    pub(crate) fn watch(&self) -> super::reactive_core::PropertyWatcher<Option<T>> {
        self.state.watch()
    }
}

impl<T> QueueReactiveConsumer<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// 异步接收下一条消息；队列为空时挂起等待。
    ///
    /// 发送端全部关闭后返回 `None`。
    pub(crate) async fn recv(&mut self) -> Option<T> {
        let value = self.receiver.recv().await;
        if let Some(ref v) = value {
            let _ = self.state.update(Some(v.clone()));
        }
        value
    }

    /// 尝试非阻塞接收消息；队列为空时立即返回 `None`。
    pub(crate) fn try_recv(&mut self) -> Option<T> {
        match self.receiver.try_recv() {
            Ok(value) => {
                let _ = self.state.update(Some(value.clone()));
                Some(value)
            }
            Err(_) => None,
        }
    }
}
