//! Integer widths for slot indices and generation stamps.
//!
//! `SlotStore` defaults to `u32` indices and `u64` generations. Narrower
//! widths shrink every handle and slot at the cost of a smaller index space
//! or an earlier generation wrap.
//!
//! slot 索引和代数标记的整数宽度。
//!
//! `SlotStore` 默认使用 `u32` 索引和 `u64` 代数。更窄的宽度会缩小每个 handle 和 slot，
//! 代价是更小的索引空间或更早的代数回绕。

use std::fmt;
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// Unsigned integer usable as a slot index
///
/// Implemented for `u8`, `u16`, `u32`, `u64` and `usize`; the trait is
/// sealed.
///
/// 可用作 slot 索引的无符号整数
///
/// 已为 `u8`、`u16`、`u32`、`u64` 和 `usize` 实现；该 trait 是封闭的。
pub trait SlotIndex:
    sealed::Sealed + Copy + Ord + Hash + fmt::Debug + fmt::Display + 'static
{
    /// The sentinel index
    ///
    /// 哨兵索引
    const ZERO: Self;

    /// Widen to `usize` for block addressing
    ///
    /// 扩展为 `usize` 以寻址 slot 块
    fn to_usize(self) -> usize;

    /// Narrow a block position known to fit in this width
    ///
    /// 收窄一个已知可容纳于此宽度的块位置
    fn from_usize(position: usize) -> Self;

    /// The next index, or `None` once the width is exhausted
    ///
    /// 下一个索引，宽度耗尽时返回 `None`
    fn checked_next(self) -> Option<Self>;

    /// The previous index; never called on `ZERO`
    ///
    /// 上一个索引；不会对 `ZERO` 调用
    fn prev(self) -> Self;
}

/// Unsigned integer usable as a generation stamp
///
/// `0` and `1` are reserved. When the counter passes the largest value of
/// the width it restarts at `FIRST`, so a narrow width trades memory for a
/// shorter window before a stale handle could match again.
///
/// 可用作代数标记的无符号整数
///
/// `0` 和 `1` 被保留。计数器超过该宽度的最大值后从 `FIRST` 重新开始，
/// 因此窄宽度以更短的过期 handle 安全窗口换取内存。
pub trait GenerationWord:
    sealed::Sealed + Copy + Ord + Hash + fmt::Debug + fmt::Display + 'static
{
    /// Stamp of a never-filled slot
    ///
    /// 从未填充的 slot 的标记
    const INVALID: Self;

    /// Stamp of an emptied slot
    ///
    /// 已清空的 slot 的标记
    const DELETED: Self;

    /// First stamp handed to live values
    ///
    /// 分配给存活值的第一个标记
    const FIRST: Self;

    /// The following live stamp, skipping the reserved values on wrap
    ///
    /// 下一个存活标记，回绕时跳过保留值
    fn next(self) -> Self;
}

macro_rules! impl_widths {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl SlotIndex for $t {
            const ZERO: Self = 0;

            #[inline(always)]
            fn to_usize(self) -> usize {
                self as usize
            }

            #[inline(always)]
            fn from_usize(position: usize) -> Self {
                debug_assert!(position <= <$t>::MAX as usize, "Index {position} out of range");
                position as $t
            }

            #[inline(always)]
            fn checked_next(self) -> Option<Self> {
                self.checked_add(1)
            }

            #[inline(always)]
            fn prev(self) -> Self {
                self - 1
            }
        }

        impl GenerationWord for $t {
            const INVALID: Self = 0;
            const DELETED: Self = 1;
            const FIRST: Self = 2;

            #[inline(always)]
            fn next(self) -> Self {
                match self.checked_add(1) {
                    Some(next) => next,
                    None => Self::FIRST,
                }
            }
        }
    )*};
}

impl_widths!(u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_stepping() {
        assert_eq!(7u16.checked_next(), Some(8));
        assert_eq!(u8::MAX.checked_next(), None);
        assert_eq!(5u32.prev(), 4);
        assert_eq!(<u8 as SlotIndex>::from_usize(200).to_usize(), 200);
    }

    #[test]
    fn test_generation_wraps_past_reserved() {
        assert_eq!(GenerationWord::next(2u8), 3);
        assert_eq!(GenerationWord::next(u8::MAX), <u8 as GenerationWord>::FIRST);
        assert_eq!(GenerationWord::next(u16::MAX), 2);
    }
}
