//! 批次状态：条目列表 + 展示顺序 + 游标，调度循环独占持有。
//!
//! 所有可见性都从固定的展示顺序推导，绝不依赖完成事件的到达顺序。
//! 编号在批次创建时固定，事件引用未知编号属于编程错误，直接断言失败。

use super::download_item::DownloadItem;

#[derive(Debug)]
pub(crate) struct Batch {
    /// 条目列表，下标 = id - 1
    items: Vec<DownloadItem>,
    /// 展示顺序：条目编号的固定排列
    reveal_order: Vec<u32>,
    /// 指向展示顺序中下一个待放行位置，只会前进，到 N 表示全部放行
    cursor: usize,
}

impl Batch {
    /// 空闲批次：N 个未开始的条目，配合初始快照使用。
    pub(crate) fn idle(batch_size: u32, reveal_order: Vec<u32>) -> Self {
        Self {
            items: (1..=batch_size).map(DownloadItem::idle).collect(),
            reveal_order,
            cursor: 0,
        }
    }

    /// 新批次：每个条目带上抽取好的时长，游标归零。
    pub(crate) fn start(durations: &[u32], reveal_order: Vec<u32>) -> Self {
        Self {
            items: durations
                .iter()
                .enumerate()
                .map(|(i, &secs)| DownloadItem::pending(i as u32 + 1, secs))
                .collect(),
            reveal_order,
            cursor: 0,
        }
    }

    pub(crate) fn items(&self) -> &[DownloadItem] {
        &self.items
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn all_visible(&self) -> bool {
        self.cursor == self.reveal_order.len()
    }

    fn item_mut(&mut self, item_id: u32) -> &mut DownloadItem {
        let len = self.items.len();
        self.items
            .get_mut(item_id.wrapping_sub(1) as usize)
            .unwrap_or_else(|| panic!("未知条目编号 {item_id}（批次大小 {len}）"))
    }

    /// 记录一次倒计时递减。完成后的条目不会再有 tick。
    pub(crate) fn record_tick(&mut self, item_id: u32, remaining_secs: u32) {
        let item = self.item_mut(item_id);
        assert!(!item.completed, "条目 {item_id} 已完成，不应再收到 tick");
        item.remaining_secs = remaining_secs;
    }

    /// 记录条目完成。完成标志是单向闩锁，重复完成属于编程错误。
    pub(crate) fn record_completed(&mut self, item_id: u32) {
        let item = self.item_mut(item_id);
        assert!(!item.completed, "条目 {item_id} 重复完成");
        item.remaining_secs = 0;
        item.completed = true;
    }

    /// 游标推进扫描：从当前游标起，把展示顺序上连续已完成的条目
    /// 依次放行，遇到未完成的条目立即停下。
    ///
    /// 有界（至多 N 步）、一次跑到不动点；返回本次放行的编号序列。
    pub(crate) fn sweep(&mut self) -> Vec<u32> {
        let mut revealed = Vec::new();
        while self.cursor < self.reveal_order.len() {
            let item_id = self.reveal_order[self.cursor];
            let item = self.item_mut(item_id);
            if !item.completed {
                break;
            }
            // 不变量：只有已完成的条目才会被置为可见
            item.visible = true;
            revealed.push(item_id);
            self.cursor += 1;
        }
        assert!(
            self.cursor <= self.reveal_order.len(),
            "游标越过批次末尾: {}",
            self.cursor
        );
        revealed
    }
}
