//! # ReactiveProperty — 响应式属性内核
//!
//! 基于 [`tokio::sync::watch`] 的共享状态容器：一端写入，任意多端监听。
//! 模拟器用它发布条目快照，表现层拿 [`PropertyWatcher`] 订阅即可。
//!
//! 本模块**不对外导出**，仅供 `states` 子模块内部复用。

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tokio::sync::watch;
use tokio::sync::watch::error::RecvError;

// ──────────────────────────── Error ────────────────────────────

/// 响应式属性统一错误类型
#[derive(Debug, Error)]
pub enum ReactivePropertyError {
    /// 属性已被销毁，监听端不会再收到新值
    #[error("属性已被销毁")]
    Destroyed,

    /// watch 通道接收失败
    #[error("接收失败: {0}")]
    RecvError(#[from] RecvError),
}

// ──────────────────────────── Inner ────────────────────────────

/// 内部共享状态。值包在 `Option` 里：`None` 表示属性已销毁，
/// 由 `Drop` 统一发出，监听端据此结束。
#[derive(Debug)]
struct Inner<T> {
    sender: watch::Sender<Option<T>>,
    destroyed: AtomicBool,
}

impl<T> Drop for Inner<T> {
    fn drop(&mut self) {
        self.destroyed.store(true, Ordering::Relaxed);
        let _ = self.sender.send(None);
    }
}

// ──────────────────────────── ReactiveProperty ────────────────────────────

/// 响应式属性内核：new / update / update_field / get_current / watch。
///
/// 可以 Clone，所有克隆共享同一个值；更新无锁（watch 通道内部保证一致性）。
#[derive(Clone, Debug)]
pub struct ReactiveProperty<T: Clone + Send + Sync> {
    inner: Arc<Inner<T>>,
    cache_receiver: watch::Receiver<Option<T>>,
}

impl<T> ReactiveProperty<T>
where
    T: Clone + Send + Sync,
{
    /// 创建一个新的响应式属性。
    pub fn new(value: T) -> Self {
        let (sender, _) = watch::channel(Some(value));
        let cache_receiver = sender.subscribe();
        Self {
            inner: Arc::new(Inner {
                sender,
                destroyed: AtomicBool::new(false),
            }),
            cache_receiver,
        }
    }

    /// 更新属性的值，所有监听者都会收到通知。
    ///
    /// 属性已销毁时静默返回，调用方不需要区分这种情况。
    pub fn update(&self, new_value: T) -> Result<&Self, ReactivePropertyError> {
        if self.inner.destroyed.load(Ordering::Relaxed) {
            return Ok(self);
        }
        let _ = self.inner.sender.send(Some(new_value));
        Ok(self)
    }

    /// 使用闭包就地修改属性的部分字段，修改后整体发布。
    pub fn update_field<F, R>(&self, updater: F) -> Result<&Self, ReactivePropertyError>
    where
        F: FnOnce(&mut T) -> R,
    {
        if self.inner.destroyed.load(Ordering::Relaxed) {
            return Ok(self);
        }
        let mut current = match self.cache_receiver.borrow().clone() {
            Some(val) => val,
            None => return Ok(self),
        };
        updater(&mut current);
        let _ = self.inner.sender.send(Some(current));
        Ok(self)
    }

    /// 获取当前属性值的快照（会 clone）。
    pub fn get_current(&self) -> Option<T> {
        self.cache_receiver.borrow().as_ref().cloned()
    }

    /// 获取当前值，如果属性已销毁则返回默认值。
    pub fn get_or_default(&self) -> T
    where
        T: Default,
    {
        self.get_current().unwrap_or_default()
    }

    /// 创建一个监听器，用于异步监听属性值的变化。
    pub fn watch(&self) -> PropertyWatcher<T> {
        PropertyWatcher {
            receiver: self.inner.sender.subscribe(),
        }
    }
}

// ──────────────────────────── PropertyWatcher ────────────────────────────

/// 属性监听器，用于异步接收属性值的变化。
pub struct PropertyWatcher<T> {
    receiver: watch::Receiver<Option<T>>,
}

impl<T> PropertyWatcher<T>
where
    T: Clone + Send + Sync,
{
    /// 异步等待属性值的下一次变化，返回新值。
    pub async fn changed(&mut self) -> Result<T, ReactivePropertyError> {
        self.receiver.changed().await?;
        match self.receiver.borrow().as_ref() {
            None => Err(ReactivePropertyError::Destroyed),
            Some(value) => Ok(value.clone()),
        }
    }

    /// 同步获取当前值的克隆。
    pub fn borrow(&self) -> Option<T> {
        self.receiver.borrow().clone()
    }

    /// 异步等待直到值满足指定条件，返回满足条件的那个快照。
    ///
    /// 当前值已满足时立即返回。watch 通道只保留最新值，
    /// 中间快照可能被合并，但满足条件的最终状态不会错过。
    pub async fn wait_for<F>(&mut self, mut predicate: F) -> Result<T, ReactivePropertyError>
    where
        F: FnMut(&T) -> bool,
    {
        loop {
            let hit = match self.receiver.borrow().as_ref() {
                None => return Err(ReactivePropertyError::Destroyed),
                Some(value) => {
                    if predicate(value) {
                        Some(value.clone())
                    } else {
                        None
                    }
                }
            };
            if let Some(value) = hit {
                return Ok(value);
            }
            self.receiver.changed().await?;
        }
    }
}
