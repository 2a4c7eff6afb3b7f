use super::sim_error::SimError;

/// 展示顺序：条目变为可见必须遵守的固定排列，与实际完成顺序无关。
///
/// 参考行为的排列是"先全部奇数号升序、再全部偶数号升序"
/// （N=10 时即 1,3,5,7,9,2,4,6,8,10）。这里把它作为命名变体保留，
/// 任意排列通过 `Explicit` 给出，作为不透明配置对待。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealOrder {
    /// 先奇数号升序，再偶数号升序（可推广到任意 N）
    OddsThenEvens,
    /// 显式给定的排列，必须恰好是 1..=N 的一个排列
    Explicit(Vec<u32>),
}

impl RevealOrder {
    /// 展开为具体的编号序列。
    pub fn sequence(&self, batch_size: u32) -> Vec<u32> {
        match self {
            Self::OddsThenEvens => (1..=batch_size)
                .filter(|id| id % 2 == 1)
                .chain((1..=batch_size).filter(|id| id % 2 == 0))
                .collect(),
            Self::Explicit(ids) => ids.clone(),
        }
    }

    pub(crate) fn validate(&self, batch_size: u32) -> Result<(), SimError> {
        let Self::Explicit(ids) = self else {
            return Ok(());
        };
        if ids.len() != batch_size as usize {
            return Err(SimError::InvalidRevealOrder { batch_size });
        }
        let mut seen = vec![false; batch_size as usize];
        for &id in ids {
            if id == 0 || id > batch_size || seen[(id - 1) as usize] {
                return Err(SimError::InvalidRevealOrder { batch_size });
            }
            seen[(id - 1) as usize] = true;
        }
        Ok(())
    }
}
