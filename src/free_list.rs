use crate::width::SlotIndex;
use std::collections::BTreeSet;

/// Ordered set of free slot indices below the high-water mark
///
/// Ordering matters twice: insertion reuses the smallest free index, which
/// keeps the occupied range dense, and removal of the trailing slot walks
/// down from the greatest free index to pull the high-water mark back.
///
/// 高水位线以下空闲 slot 索引的有序集合
///
/// 插入时复用最小的空闲索引以保持占用区间紧凑；
/// 删除末尾 slot 时从最大的空闲索引向下回收高水位线。
#[derive(Clone, Debug)]
pub(crate) struct FreeList<I> {
    indices: BTreeSet<I>,
}

impl<I: SlotIndex> FreeList<I> {
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            indices: BTreeSet::new(),
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.indices.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, index: I) -> bool {
        self.indices.contains(&index)
    }

    #[inline]
    pub(crate) fn push(&mut self, index: I) {
        debug_assert!(index != I::ZERO, "Sentinel index cannot be freed");
        let inserted = self.indices.insert(index);
        debug_assert!(inserted, "Index {index} freed twice");
    }

    /// Remove and return the smallest free index
    ///
    /// 移除并返回最小的空闲索引
    #[inline]
    pub(crate) fn pop_smallest(&mut self) -> Option<I> {
        self.indices.pop_first()
    }

    /// Pull `high_water` down past every free index that trails it
    ///
    /// `high_water` is the candidate trailing index after the caller freed
    /// the previous trailing slot. Returns the new high-water mark.
    ///
    /// 将 `high_water` 回退到所有位于末尾的空闲索引之下
    ///
    /// `high_water` 是调用者释放原末尾 slot 后的候选末尾索引，返回新的高水位线
    pub(crate) fn collapse_trailing(&mut self, mut high_water: I) -> I {
        while self.indices.last() == Some(&high_water) {
            self.indices.pop_last();
            high_water = high_water.prev();
        }
        high_water
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.indices.clear();
    }

    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = I> + '_ {
        self.indices.iter().copied()
    }
}
