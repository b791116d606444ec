use crate::Generation;
use crate::width::{GenerationWord, SlotIndex};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Handle is an opaque token for one occupancy of a slot in a `SlotStore`
///
/// It is `Copy` and only the store that minted it can interpret it. The
/// value type, the store's `TAG` and its index and generation widths are
/// part of the handle's type, so a handle from a store of another type or
/// another `slot_store!` call site does not type-check against this one.
///
/// Handle 是 `SlotStore` 中某个 slot 的一次占用的不透明令牌
///
/// 它实现了 `Copy`，只有生成它的存储才能解释它。
/// 值类型、存储的 `TAG` 以及索引和代数宽度都是 handle 类型的一部分，
/// 因此来自其他类型或其他 `slot_store!` 调用点的 handle 无法通过类型检查。
///
/// # Examples (示例)
///
/// ```
/// use slot_store::SlotStore;
///
/// let mut store = SlotStore::new();
/// let handle = store.insert(42);
/// let copy = handle;
/// assert_eq!(store.get(copy), Some(&42));
/// assert_eq!(handle.index(), 1);
/// ```
pub struct Handle<T, const TAG: u32 = 0, I: SlotIndex = u32, G: GenerationWord = u64> {
    index: I,
    generation: Generation<G>,
    #[cfg(debug_assertions)]
    pub(crate) store_id: u64,
    _marker: PhantomData<fn() -> T>,
}

impl<T, const TAG: u32, I: SlotIndex, G: GenerationWord> Handle<T, TAG, I, G> {
    /// Create a new Handle (internal use)
    ///
    /// 创建一个新的 Handle（内部使用）
    #[inline(always)]
    pub(crate) fn new(
        index: I,
        generation: Generation<G>,
        #[cfg(debug_assertions)] store_id: u64,
    ) -> Self {
        Self {
            index,
            generation,
            #[cfg(debug_assertions)]
            store_id,
            _marker: PhantomData,
        }
    }

    /// Slot index this handle points at
    ///
    /// 此 handle 指向的 slot 索引
    #[inline(always)]
    pub fn index(&self) -> I {
        self.index
    }

    /// Generation stamped when the value was inserted
    ///
    /// 插入值时记录的代数
    #[inline(always)]
    pub fn generation(&self) -> Generation<G> {
        self.generation
    }
}

impl<T, const TAG: u32, I: SlotIndex, G: GenerationWord> Clone for Handle<T, TAG, I, G> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const TAG: u32, I: SlotIndex, G: GenerationWord> Copy for Handle<T, TAG, I, G> {}

impl<T, const TAG: u32, I: SlotIndex, G: GenerationWord> PartialEq for Handle<T, TAG, I, G> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.generation == other.generation
    }
}

impl<T, const TAG: u32, I: SlotIndex, G: GenerationWord> Eq for Handle<T, TAG, I, G> {}

impl<T, const TAG: u32, I: SlotIndex, G: GenerationWord> Hash for Handle<T, TAG, I, G> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.generation.hash(state);
    }
}

impl<T, const TAG: u32, I: SlotIndex, G: GenerationWord> fmt::Debug for Handle<T, TAG, I, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("index", &self.index)
            .field("generation", &self.generation.get())
            .field("tag", &TAG)
            .finish()
    }
}

/// Stores that mint handles
///
/// Lets generic code and [`HandleOf`] name a store's handle type without
/// spelling out its tag and widths.
///
/// 生成 handle 的存储
///
/// 让泛型代码和 [`HandleOf`] 无需写出标签和宽度即可指代存储的 handle 类型。
pub trait HandleSource {
    /// Type of the stored values
    ///
    /// 存储值的类型
    type Value;

    /// Handle type minted by this store
    ///
    /// 此存储生成的 handle 类型
    type Handle: Copy + Eq + Hash + fmt::Debug;
}

/// Handle type of the store type `S`
///
/// 存储类型 `S` 的 handle 类型
///
/// # Examples (示例)
///
/// ```
/// use slot_store::{Handle, HandleOf, SlotStore};
///
/// type Scores = SlotStore<u32, 0, u16, u32>;
/// let mut scores = Scores::new_tagged();
/// let top: HandleOf<Scores> = scores.insert(99);
/// let same: Handle<u32, 0, u16, u32> = top;
/// assert_eq!(scores.get(same), Some(&99));
/// ```
pub type HandleOf<S> = <S as HandleSource>::Handle;
