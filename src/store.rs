use crate::Generation;
use crate::error::SlotStoreError;
use crate::free_list::FreeList;
use crate::handle::{Handle, HandleSource};
use crate::hint::{likely, unlikely};
use crate::slot::Slot;
use crate::width::{GenerationWord, SlotIndex};
use std::fmt;
#[cfg(debug_assertions)]
use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(debug_assertions)]
static NEXT_STORE_ID: AtomicU64 = AtomicU64::new(0);

/// Capacity floor; a store never shrinks below this many slots
///
/// 容量下限；存储不会收缩到少于这么多 slot
pub const MIN_CAPACITY: usize = 8;

/// Capacity multiplier applied when the high-water mark reaches capacity
///
/// 高水位线到达容量时应用的容量倍数
pub const GROWTH_FACTOR: usize = 2;

/// Shrink is considered once the live count is at most `capacity / SHRINK_THRESHOLD`
///
/// 当存活数量不超过 `capacity / SHRINK_THRESHOLD` 时考虑收缩
pub const SHRINK_THRESHOLD: usize = 3;

/// Shrink is skipped while the headroom above the high-water mark is below
/// `capacity / MIN_SHRINK_FACTOR`
///
/// 当高水位线之上的余量小于 `capacity / MIN_SHRINK_FACTOR` 时跳过收缩
pub const MIN_SHRINK_FACTOR: usize = 6;

/// SlotStore is a generation-checked pool of values of one type
///
/// Inserting returns a [`Handle`]; removing a value stamps its slot as
/// deleted and advances a store-wide generation counter. New values are
/// stamped with the current counter, so a handle minted before any removal
/// never matches a value inserted after it, even at the same index.
///
/// Index 0 is a sentinel and never holds a value. Freed indices below the
/// high-water mark are reused smallest-first. The slot block doubles when
/// the high-water mark reaches it and shrinks when removals leave it mostly
/// empty; both keep every live value at its index.
///
/// `I` and `G` pick the integer widths of slot indices and generation
/// stamps. The defaults suit most stores; narrower widths make handles and
/// slots smaller.
///
/// SlotStore 是一个带代数检查的同类型值池
///
/// 插入返回 [`Handle`]；删除值时将 slot 标记为已删除，并递增整个存储共享的代数计数器。
/// 新值使用当前计数器标记，因此任何删除之前生成的 handle 都不会匹配之后插入的值，
/// 即使索引相同。
///
/// 索引 0 是哨兵，从不存放值。高水位线以下被释放的索引按从小到大复用。
/// 高水位线到达容量时 slot 块翻倍，删除使其大部分为空时收缩；两者都保持存活值的索引不变。
///
/// `I` 和 `G` 选择 slot 索引和代数标记的整数宽度。默认值适合大多数存储；更窄的宽度使 handle 和 slot 更小。
///
/// # Features (特性)
///
/// - O(1) amortized insertion, lookup, and removal | 均摊 O(1) 插入、查找和删除
/// - Global generation counter prevents use-after-free | 全局代数计数器防止释放后使用
/// - Dense index reuse bounds memory growth | 紧凑的索引复用限制内存增长
/// - Call-site tagged handle types via [`slot_store!`](crate::slot_store) | 通过 [`slot_store!`](crate::slot_store) 按调用点标记 handle 类型
///
/// # Examples (示例)
///
/// ```
/// use slot_store::SlotStore;
///
/// let mut store = SlotStore::new();
///
/// let handle = store.insert(42);
/// assert_eq!(store.get(handle), Some(&42));
///
/// assert!(store.destruct(handle));
/// assert_eq!(store.get(handle), None);
/// assert!(!store.destruct(handle));
/// ```
pub struct SlotStore<T, const TAG: u32 = 0, I: SlotIndex = u32, G: GenerationWord = u64> {
    slots: Vec<Slot<T, G>>, // len() is the capacity | len() 即容量
    high_water: I,
    generation: Generation<G>,
    free: FreeList<I>,
    #[cfg(debug_assertions)]
    store_id: u64,
}

impl<T> SlotStore<T> {
    /// Create a new empty SlotStore with `MIN_CAPACITY` slots
    ///
    /// 创建一个容量为 `MIN_CAPACITY` 的空 SlotStore
    ///
    /// # Examples (示例)
    ///
    /// ```
    /// use slot_store::{SlotStore, MIN_CAPACITY};
    ///
    /// let store: SlotStore<i32> = SlotStore::new();
    /// assert!(store.is_empty());
    /// assert_eq!(store.capacity(), MIN_CAPACITY);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::new_tagged()
    }

    /// Create a SlotStore with specified capacity
    ///
    /// Capacities below `MIN_CAPACITY` are raised to it.
    ///
    /// 创建一个指定容量的 SlotStore
    ///
    /// 小于 `MIN_CAPACITY` 的容量会被提升到 `MIN_CAPACITY`
    ///
    /// # Examples (示例)
    ///
    /// ```
    /// use slot_store::SlotStore;
    ///
    /// let store: SlotStore<i32> = SlotStore::with_capacity(100);
    /// assert_eq!(store.capacity(), 100);
    ///
    /// let small: SlotStore<i32> = SlotStore::with_capacity(2);
    /// assert_eq!(small.capacity(), 8);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_tagged(capacity)
    }
}

impl<T, const TAG: u32, I: SlotIndex, G: GenerationWord> SlotStore<T, TAG, I, G> {
    /// Create a new empty SlotStore with an explicit `TAG` and widths
    ///
    /// 使用显式 `TAG` 和宽度创建一个新的空 SlotStore
    ///
    /// # Examples (示例)
    ///
    /// ```
    /// use slot_store::SlotStore;
    ///
    /// let mut store: SlotStore<&str, 7, u8, u16> = SlotStore::new_tagged();
    /// let handle = store.insert("byte-indexed");
    /// assert_eq!(handle.index(), 1u8);
    /// assert_eq!(store.tag(), 7);
    /// ```
    #[inline]
    pub fn new_tagged() -> Self {
        Self::with_capacity_tagged(MIN_CAPACITY)
    }

    /// Create a SlotStore with an explicit `TAG` and specified capacity
    ///
    /// 使用显式 `TAG` 和指定容量创建 SlotStore
    pub fn with_capacity_tagged(capacity: usize) -> Self {
        Self {
            slots: Self::allocate_block(capacity.max(MIN_CAPACITY)),
            high_water: I::ZERO,
            generation: Generation::FIRST,
            free: FreeList::new(),
            #[cfg(debug_assertions)]
            store_id: NEXT_STORE_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Compile-time discriminator carried by this store's handles
    ///
    /// 此存储的 handle 携带的编译期区分标签
    #[inline(always)]
    pub const fn tag(&self) -> u32 {
        TAG
    }

    /// Insert a value and return its handle
    ///
    /// Reuses the smallest free index if there is one, otherwise appends
    /// past the high-water mark, doubling the capacity first when needed.
    ///
    /// 插入值并返回其 handle
    ///
    /// 如有空闲索引则复用最小的一个，否则追加到高水位线之后，必要时先将容量翻倍
    ///
    /// # Panics
    ///
    /// Panics if the index space or the allocator is exhausted; see
    /// [`try_insert`](Self::try_insert) for the fallible form.
    ///
    /// 索引空间或分配器耗尽时 panic；可失败版本见 [`try_insert`](Self::try_insert)
    ///
    /// # Examples (示例)
    ///
    /// ```
    /// use slot_store::SlotStore;
    ///
    /// let mut store = SlotStore::new();
    /// let a = store.insert("a");
    /// let b = store.insert("b");
    /// assert_eq!((a.index(), b.index()), (1, 2));
    /// ```
    pub fn insert(&mut self, value: T) -> Handle<T, TAG, I, G> {
        match self.try_insert(value) {
            Ok(handle) => handle,
            Err(err) => panic!("SlotStore::insert failed: {err}"),
        }
    }

    /// Insert a value, reporting resource exhaustion instead of panicking
    ///
    /// On error the store is unchanged and `value` is dropped.
    ///
    /// 插入值，资源耗尽时返回错误而不是 panic
    ///
    /// 出错时存储保持不变，`value` 被丢弃
    ///
    /// # Examples (示例)
    ///
    /// ```
    /// use slot_store::SlotStore;
    ///
    /// let mut store = SlotStore::new();
    /// let handle = store.try_insert(5).unwrap();
    /// assert_eq!(store.get(handle), Some(&5));
    /// ```
    pub fn try_insert(&mut self, value: T) -> Result<Handle<T, TAG, I, G>, SlotStoreError> {
        let index = match self.free.pop_smallest() {
            Some(index) => index,
            None => {
                let index = self
                    .high_water
                    .checked_next()
                    .ok_or(SlotStoreError::IndexSpaceExhausted)?;
                if unlikely(index.to_usize() == self.slots.len()) {
                    self.grow()?;
                }
                self.high_water = index;
                index
            }
        };

        // The counter only advances on removal
        // 计数器只在删除时递增
        self.slots[index.to_usize()].fill(value, self.generation);
        Ok(self.handle(index, self.generation))
    }

    /// Check whether `handle` still refers to a live value
    ///
    /// 检查 `handle` 是否仍指向存活的值
    ///
    /// # Examples (示例)
    ///
    /// ```
    /// use slot_store::SlotStore;
    ///
    /// let mut store = SlotStore::new();
    /// let handle = store.insert(1);
    /// assert!(store.is_valid(handle));
    ///
    /// store.destruct(handle);
    /// assert!(!store.is_valid(handle));
    /// ```
    #[inline]
    pub fn is_valid(&self, handle: Handle<T, TAG, I, G>) -> bool {
        self.check_origin(&handle);
        likely(handle.index() <= self.high_water)
            && self.slots[handle.index().to_usize()].generation() == handle.generation()
    }

    /// Get immutable reference to value by handle
    ///
    /// 通过 handle 获取值的不可变引用
    ///
    /// # Returns
    /// - `Some(&T)`: Reference to the value if the handle is valid
    /// - `None`: If the value has been removed
    ///
    /// # 返回值
    /// - `Some(&T)`: 如果 handle 有效则返回值的引用
    /// - `None`: 如果值已被删除
    ///
    /// # Examples (示例)
    ///
    /// ```
    /// use slot_store::SlotStore;
    ///
    /// let mut store = SlotStore::new();
    /// let handle = store.insert(42);
    /// assert_eq!(store.get(handle), Some(&42));
    /// ```
    #[inline]
    pub fn get(&self, handle: Handle<T, TAG, I, G>) -> Option<&T> {
        if self.is_valid(handle) {
            self.slots[handle.index().to_usize()].get()
        } else {
            None
        }
    }

    /// Get mutable reference to value by handle
    ///
    /// 通过 handle 获取值的可变引用
    ///
    /// # Examples (示例)
    ///
    /// ```
    /// use slot_store::SlotStore;
    ///
    /// let mut store = SlotStore::new();
    /// let handle = store.insert(1);
    ///
    /// if let Some(value) = store.get_mut(handle) {
    ///     *value = 55;
    /// }
    /// assert_eq!(store.get(handle), Some(&55));
    /// ```
    #[inline]
    pub fn get_mut(&mut self, handle: Handle<T, TAG, I, G>) -> Option<&mut T> {
        if self.is_valid(handle) {
            self.slots[handle.index().to_usize()].get_mut()
        } else {
            None
        }
    }

    /// Remove the value behind `handle` and return it
    ///
    /// A successful removal advances the generation counter. Removing the
    /// trailing slot pulls the high-water mark back past every free index
    /// behind it and may shrink the slot block; removing any other slot
    /// puts its index on the free list.
    ///
    /// 移除 `handle` 对应的值并返回
    ///
    /// 成功删除会递增代数计数器。删除末尾 slot 时，高水位线会回退到其后所有空闲索引之下，
    /// 并可能收缩 slot 块；删除其他 slot 时将其索引加入空闲列表。
    ///
    /// # Returns
    /// - `Some(T)`: The removed value if the handle is valid
    /// - `None`: If the handle is stale; nothing changes
    ///
    /// # 返回值
    /// - `Some(T)`: 如果 handle 有效则返回被移除的值
    /// - `None`: 如果 handle 已过期；不做任何修改
    ///
    /// # Examples (示例)
    ///
    /// ```
    /// use slot_store::SlotStore;
    ///
    /// let mut store = SlotStore::new();
    /// let handle = store.insert(String::from("value"));
    /// assert_eq!(store.remove(handle), Some(String::from("value")));
    /// assert_eq!(store.remove(handle), None);
    /// ```
    pub fn remove(&mut self, handle: Handle<T, TAG, I, G>) -> Option<T> {
        self.check_origin(&handle);
        let index = handle.index();

        if unlikely(index > self.high_water) {
            return None;
        }

        let slot = &mut self.slots[index.to_usize()];
        if slot.generation() != handle.generation() {
            return None;
        }

        let value = slot.take()?;
        self.generation = self.generation.next();

        if index == self.high_water {
            self.high_water = self.free.collapse_trailing(index.prev());
            self.shrink_if_needed();
        } else {
            self.free.push(index);
        }

        Some(value)
    }

    /// Drop the value behind `handle`
    ///
    /// Returns whether a value was found. Destructing twice with the same
    /// handle returns `false` the second time and changes nothing.
    ///
    /// 销毁 `handle` 对应的值
    ///
    /// 返回是否找到了值。用同一个 handle 销毁两次时第二次返回 `false` 且不做任何修改。
    ///
    /// # Examples (示例)
    ///
    /// ```
    /// use slot_store::SlotStore;
    ///
    /// let mut store = SlotStore::new();
    /// let handle = store.insert(vec![1, 2, 3]);
    /// assert!(store.destruct(handle));
    /// assert!(!store.destruct(handle));
    /// assert_eq!(store.len(), 0);
    /// ```
    #[inline]
    pub fn destruct(&mut self, handle: Handle<T, TAG, I, G>) -> bool {
        self.remove(handle).is_some()
    }

    /// Return the number of live values
    ///
    /// 返回存活值的数量
    #[inline]
    pub fn len(&self) -> usize {
        self.high_water.to_usize() - self.free.len()
    }

    /// Check if the store is empty
    ///
    /// 检查是否为空
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the current size of the slot block, sentinel included
    ///
    /// 返回当前 slot 块的大小，包括哨兵
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Drop every value, keeping the capacity
    ///
    /// The generation counter advances once if anything was dropped, so
    /// handles from before the clear stay invalid after indices are reused.
    ///
    /// 丢弃所有值，保留容量
    ///
    /// 如果丢弃了任何值，代数计数器递增一次，因此清空前的 handle 在索引复用后仍然无效
    ///
    /// # Examples (示例)
    ///
    /// ```
    /// use slot_store::SlotStore;
    ///
    /// let mut store = SlotStore::new();
    /// let old = store.insert(1);
    /// store.clear();
    ///
    /// let new = store.insert(2);
    /// assert_eq!(old.index(), new.index());
    /// assert_eq!(store.get(old), None);
    /// ```
    pub fn clear(&mut self) {
        // An empty store has no free indices either, the trailing slot is always live
        // 空存储也没有空闲索引，末尾 slot 总是存活的
        if self.is_empty() {
            return;
        }

        let high_water = self.high_water.to_usize();
        for slot in &mut self.slots[1..=high_water] {
            drop(slot.take());
        }
        self.free.clear();
        self.high_water = I::ZERO;
        self.generation = self.generation.next();
    }

    /// Keep only the values for which `f` returns `true`
    ///
    /// Every rejected value goes through [`destruct`](Self::destruct), so
    /// the counter, free list and shrink policy behave as for single removals.
    ///
    /// 只保留 `f` 返回 `true` 的值
    ///
    /// 被拒绝的值都经过 [`destruct`](Self::destruct)，计数器、空闲列表和收缩策略与单次删除一致
    ///
    /// # Examples (示例)
    ///
    /// ```
    /// use slot_store::SlotStore;
    ///
    /// let mut store = SlotStore::new();
    /// for i in 0..10 {
    ///     store.insert(i);
    /// }
    /// store.retain(|_, v| *v % 2 == 0);
    /// assert_eq!(store.len(), 5);
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(Handle<T, TAG, I, G>, &mut T) -> bool,
    {
        // The high-water mark only moves down while retaining
        // 保留过程中高水位线只会下降
        let mut position = 1;
        while position <= self.high_water.to_usize() {
            let handle = {
                let slot = &mut self.slots[position];
                let generation = slot.generation();
                match slot.get_mut() {
                    Some(value) => {
                        let handle = Self::make_handle(
                            I::from_usize(position),
                            generation,
                            #[cfg(debug_assertions)]
                            self.store_id,
                        );
                        (!f(handle, value)).then_some(handle)
                    }
                    None => None,
                }
            };
            if let Some(handle) = handle {
                self.destruct(handle);
            }
            position += 1;
        }
    }

    /// Return an iterator over all (handle, value) pairs in index order
    ///
    /// 按索引顺序返回遍历所有 (handle, value) 对的迭代器
    ///
    /// # Examples (示例)
    ///
    /// ```
    /// use slot_store::SlotStore;
    ///
    /// let mut store = SlotStore::new();
    /// store.insert(1);
    /// store.insert(2);
    ///
    /// let sum: i32 = store.iter().map(|(_, v)| v).sum();
    /// assert_eq!(sum, 3);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (Handle<T, TAG, I, G>, &T)> {
        #[cfg(debug_assertions)]
        let store_id = self.store_id;
        self.slots[..=self.high_water.to_usize()]
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(move |(index, slot)| {
                slot.get().map(|value| {
                    let handle = Self::make_handle(
                        I::from_usize(index),
                        slot.generation(),
                        #[cfg(debug_assertions)]
                        store_id,
                    );
                    (handle, value)
                })
            })
    }

    /// Return a mutable iterator over all (handle, value) pairs in index order
    ///
    /// 按索引顺序返回遍历所有 (handle, value) 对的可变迭代器
    ///
    /// # Examples (示例)
    ///
    /// ```
    /// use slot_store::SlotStore;
    ///
    /// let mut store = SlotStore::new();
    /// let handle = store.insert(2);
    ///
    /// for (_, value) in store.iter_mut() {
    ///     *value *= 10;
    /// }
    /// assert_eq!(store.get(handle), Some(&20));
    /// ```
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Handle<T, TAG, I, G>, &mut T)> {
        #[cfg(debug_assertions)]
        let store_id = self.store_id;
        let high_water = self.high_water.to_usize();
        self.slots[..=high_water]
            .iter_mut()
            .enumerate()
            .skip(1)
            .filter_map(move |(index, slot)| {
                let generation = slot.generation();
                slot.get_mut().map(|value| {
                    let handle = Self::make_handle(
                        I::from_usize(index),
                        generation,
                        #[cfg(debug_assertions)]
                        store_id,
                    );
                    (handle, value)
                })
            })
    }

    #[inline(always)]
    fn make_handle(
        index: I,
        generation: Generation<G>,
        #[cfg(debug_assertions)] store_id: u64,
    ) -> Handle<T, TAG, I, G> {
        Handle::new(
            index,
            generation,
            #[cfg(debug_assertions)]
            store_id,
        )
    }

    #[inline(always)]
    fn handle(&self, index: I, generation: Generation<G>) -> Handle<T, TAG, I, G> {
        Self::make_handle(
            index,
            generation,
            #[cfg(debug_assertions)]
            self.store_id,
        )
    }

    #[inline(always)]
    fn check_origin(&self, _handle: &Handle<T, TAG, I, G>) {
        #[cfg(debug_assertions)]
        debug_assert_eq!(
            self.store_id, _handle.store_id,
            "Handle used with wrong store instance"
        );
    }

    fn allocate_block(capacity: usize) -> Vec<Slot<T, G>> {
        let mut block = Vec::with_capacity(capacity);
        block.resize_with(capacity, Slot::vacant);
        block
    }

    fn try_allocate_block(capacity: usize) -> Result<Vec<Slot<T, G>>, SlotStoreError> {
        let mut block = Vec::new();
        block
            .try_reserve_exact(capacity)
            .map_err(|source| SlotStoreError::AllocationFailed { capacity, source })?;
        block.resize_with(capacity, Slot::vacant);
        Ok(block)
    }

    /// Move every slot into `block` at the same index and adopt it
    fn relocate(&mut self, mut block: Vec<Slot<T, G>>) {
        debug_assert!(block.len() > self.high_water.to_usize());
        for (old, new) in self.slots.iter_mut().zip(block.iter_mut()) {
            old.move_into(new);
        }
        // Every old slot is non-live now, dropping it drops no values
        // 所有旧 slot 都已非存活，释放时不会 drop 任何值
        self.slots = block;
    }

    #[inline]
    fn grown_capacity(capacity: usize) -> Result<usize, SlotStoreError> {
        capacity
            .checked_mul(GROWTH_FACTOR)
            .ok_or(SlotStoreError::CapacityOverflow)
    }

    fn grow(&mut self) -> Result<(), SlotStoreError> {
        let new_capacity = Self::grown_capacity(self.capacity())?;
        self.grow_to(new_capacity)
    }

    /// Relocate into a fresh block of `new_capacity` slots; the store is
    /// untouched when the allocation fails
    fn grow_to(&mut self, new_capacity: usize) -> Result<(), SlotStoreError> {
        let block = Self::try_allocate_block(new_capacity)?;
        log::debug!(
            "slot store growing {} -> {} slots ({} live)",
            self.capacity(),
            new_capacity,
            self.len()
        );
        self.relocate(block);
        Ok(())
    }

    fn shrink_if_needed(&mut self) {
        let capacity = self.capacity();
        if self.len() > capacity / SHRINK_THRESHOLD {
            return;
        }

        let high_water = self.high_water.to_usize();
        // Too little headroom left to be worth a reallocation
        // 剩余余量太小，不值得重新分配
        if capacity - high_water < capacity / MIN_SHRINK_FACTOR {
            return;
        }

        let new_capacity = (high_water * GROWTH_FACTOR - self.free.len()).max(MIN_CAPACITY);
        if new_capacity >= capacity {
            return;
        }

        log::debug!(
            "slot store shrinking {} -> {} slots ({} live)",
            capacity,
            new_capacity,
            self.len()
        );
        self.relocate(Self::allocate_block(new_capacity));
    }

    /// Assert every structural invariant of the store
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        let high_water = self.high_water.to_usize();
        assert!(high_water < self.capacity(), "high-water mark out of block");
        assert!(!self.slots[0].is_live(), "sentinel slot holds a value");
        assert!(self.generation.is_live());

        for index in self.free.iter() {
            assert!(index != I::ZERO && index.to_usize() < high_water);
            assert_eq!(self.slots[index.to_usize()].generation(), Generation::DELETED);
        }

        let mut live = 0;
        for (index, slot) in self.slots.iter().enumerate().skip(1) {
            if slot.is_live() {
                assert!(index <= high_water, "live slot above high-water mark");
                assert!(slot.generation() <= self.generation);
                live += 1;
            } else if index <= high_water {
                assert!(self.free.contains(I::from_usize(index)), "hole missing from free list");
            }
        }
        assert_eq!(live, self.len());
        if high_water > 0 {
            assert!(self.slots[high_water].is_live(), "trailing slot is free");
        }
    }

    #[cfg(test)]
    pub(crate) fn high_water(&self) -> I {
        self.high_water
    }

    #[cfg(test)]
    pub(crate) fn current_generation(&self) -> Generation<G> {
        self.generation
    }
}

impl<T: Clone, const TAG: u32, I: SlotIndex, G: GenerationWord> Clone for SlotStore<T, TAG, I, G> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            high_water: self.high_water,
            generation: self.generation,
            free: self.free.clone(),
            #[cfg(debug_assertions)]
            store_id: NEXT_STORE_ID.fetch_add(1, Ordering::Relaxed),
        }
    }
}

impl<T, const TAG: u32, I: SlotIndex, G: GenerationWord> Default for SlotStore<T, TAG, I, G> {
    #[inline]
    fn default() -> Self {
        Self::new_tagged()
    }
}

impl<T, const TAG: u32, I: SlotIndex, G: GenerationWord> HandleSource for SlotStore<T, TAG, I, G> {
    type Value = T;
    type Handle = Handle<T, TAG, I, G>;
}

impl<T: fmt::Debug, const TAG: u32, I: SlotIndex, G: GenerationWord> fmt::Debug
    for SlotStore<T, TAG, I, G>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let occupied = &self.slots[..=self.high_water.to_usize()];
        f.debug_struct("SlotStore")
            .field("tag", &TAG)
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("high_water", &self.high_water)
            .field("generation", &self.generation.get())
            .field("slots", &occupied)
            .finish()
    }
}
