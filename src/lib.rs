//! Generation-checked pooled storage.
//!
//! A [`SlotStore`] owns values of a single type and hands out small `Copy`
//! [`Handle`]s. Removing a value stamps its slot as deleted and advances a
//! store-wide generation counter, so any handle minted before the removal
//! can never validate again, even after the slot index is reused.
//!
//! 代数检查的池化存储。
//!
//! [`SlotStore`] 持有同一类型的值并分发轻量的 `Copy` [`Handle`]。
//! 删除值时 slot 被标记为已删除，并递增整个存储共享的代数计数器，
//! 因此删除之前生成的 handle 永远不会再次有效，即使 slot 索引被复用。
//!
//! # Examples (示例)
//!
//! ```
//! use slot_store::SlotStore;
//!
//! let mut store = SlotStore::new();
//! let a = store.insert("a");
//! assert!(store.destruct(a));
//!
//! // Reuses index 1 with a newer generation
//! // 以更新的代数复用索引 1
//! let b = store.insert("b");
//! assert_eq!(a.index(), b.index());
//! assert!(!store.is_valid(a));
//! assert_eq!(store.get(b), Some(&"b"));
//! ```
//!
//! Stores created through [`slot_store!`] carry a per-call-site tag in their
//! type, so their handles cannot be mixed up:
//!
//! 通过 [`slot_store!`] 创建的存储在类型中携带调用点标签，其 handle 不能混用：
//!
//! ```compile_fail
//! use slot_store::slot_store;
//!
//! let mut first = slot_store!(u32);
//! let mut second = slot_store!(u32);
//! let handle = first.insert(1);
//! second.get(handle);
//! ```
//!
//! Index and generation widths default to `u32` and `u64` and can be narrowed
//! per store; [`HandleOf`] names the handle type of any store:
//!
//! 索引和代数宽度默认为 `u32` 和 `u64`，可按存储收窄；[`HandleOf`] 给出任意存储的 handle 类型：
//!
//! ```
//! use slot_store::{HandleOf, SlotStore, slot_store};
//!
//! type Names = SlotStore<&'static str>;
//! let mut names = Names::new();
//! let alice: HandleOf<Names> = names.insert("Alice");
//! assert_eq!(names.get(alice), Some(&"Alice"));
//!
//! let mut small = slot_store!(char, u16, u32);
//! let c = small.insert('x');
//! assert_eq!(c.index(), 1u16);
//! assert_eq!(c.generation().get(), 2u32);
//! ```

mod error;
mod free_list;
mod handle;
mod hint;
mod slot;
mod store;
mod tag;
mod width;

use std::fmt;

/// Generation stamp recorded in slots and handles.
///
/// `0` and `1` are reserved for never-filled and deleted slots; every live
/// slot carries a stamp of at least [`Generation::FIRST`]. The width is
/// chosen by the store's generation parameter, `u64` by default.
///
/// slot 和 handle 中记录的代数标记。
///
/// `0` 和 `1` 保留给从未填充和已删除的 slot；
/// 每个存活的 slot 的标记至少为 [`Generation::FIRST`]。宽度由存储的代数参数决定，默认为 `u64`。
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Generation<G = u64>(G);

impl<G: GenerationWord> fmt::Display for Generation<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<G: GenerationWord> Generation<G> {
    pub(crate) const INVALID: Self = Self(G::INVALID);
    pub(crate) const DELETED: Self = Self(G::DELETED);

    /// The first generation a fresh store stamps on inserted values
    ///
    /// 新存储插入值时使用的第一个代数
    pub const FIRST: Self = Self(G::FIRST);

    /// Raw stamp value
    ///
    /// 原始标记值
    #[inline(always)]
    pub fn get(self) -> G {
        self.0
    }

    #[inline(always)]
    pub(crate) fn is_live(self) -> bool {
        self.0 > G::DELETED
    }

    #[inline(always)]
    pub(crate) fn next(self) -> Self {
        Self(self.0.next())
    }
}

pub use error::SlotStoreError;
pub use handle::{Handle, HandleOf, HandleSource};
pub use store::{GROWTH_FACTOR, MIN_CAPACITY, MIN_SHRINK_FACTOR, SHRINK_THRESHOLD, SlotStore};
pub use tag::call_site_tag;
pub use width::{GenerationWord, SlotIndex};
