use crate::Generation;
use crate::width::GenerationWord;
use std::fmt;
use std::mem::MaybeUninit;

/// Slot stores a value together with its generation stamp
///
/// The value is initialised if and only if the generation is live
/// (greater than `Generation::DELETED`). Never-filled slots are stamped
/// `Generation::INVALID`, emptied slots `Generation::DELETED`.
///
/// Slot 存储值及其代数标记
///
/// 当且仅当代数为存活状态（大于 `Generation::DELETED`）时值已初始化。
/// 从未填充的 slot 标记为 `Generation::INVALID`，被清空的 slot 标记为 `Generation::DELETED`。
pub(crate) struct Slot<T, G: GenerationWord = u64> {
    value: MaybeUninit<T>,
    generation: Generation<G>,
}

impl<T, G: GenerationWord> Slot<T, G> {
    #[inline(always)]
    pub(crate) fn vacant() -> Self {
        Self {
            value: MaybeUninit::uninit(),
            generation: Generation::INVALID,
        }
    }

    #[inline(always)]
    pub(crate) fn generation(&self) -> Generation<G> {
        self.generation
    }

    /// Check if slot holds a value
    ///
    /// 检查 slot 是否持有值
    #[inline(always)]
    pub(crate) fn is_live(&self) -> bool {
        self.generation.is_live()
    }

    /// Write a value into an empty slot
    ///
    /// 向空 slot 写入值
    #[inline]
    pub(crate) fn fill(&mut self, value: T, generation: Generation<G>) {
        debug_assert!(!self.is_live(), "Slot already occupied");
        debug_assert!(generation.is_live(), "Cannot stamp a reserved generation");
        self.value.write(value);
        self.generation = generation;
    }

    /// Move the value out and stamp the slot as deleted
    ///
    /// 取出值并将 slot 标记为已删除
    #[inline]
    pub(crate) fn take(&mut self) -> Option<T> {
        if !self.is_live() {
            return None;
        }
        self.generation = Generation::DELETED;
        // SAFETY: the slot was live, so the value is initialised. The stamp
        // is already DELETED, so it will not be read or dropped again.
        Some(unsafe { self.value.assume_init_read() })
    }

    #[inline(always)]
    pub(crate) fn get(&self) -> Option<&T> {
        if self.is_live() {
            // SAFETY: live slots hold an initialised value
            Some(unsafe { self.value.assume_init_ref() })
        } else {
            None
        }
    }

    #[inline(always)]
    pub(crate) fn get_mut(&mut self) -> Option<&mut T> {
        if self.is_live() {
            // SAFETY: live slots hold an initialised value
            Some(unsafe { self.value.assume_init_mut() })
        } else {
            None
        }
    }

    /// Relocate this slot into `target`, keeping the generation stamp
    ///
    /// The source keeps a non-live stamp afterwards, so dropping the old
    /// block does not drop the moved value a second time.
    ///
    /// 将此 slot 迁移到 `target`，保留代数标记
    ///
    /// 迁移后源 slot 为非存活状态，因此释放旧块时不会再次 drop 已移动的值。
    #[inline]
    pub(crate) fn move_into(&mut self, target: &mut Slot<T, G>) {
        let generation = self.generation;
        match self.take() {
            Some(value) => target.fill(value, generation),
            None => target.generation = generation,
        }
    }
}

impl<T, G: GenerationWord> Drop for Slot<T, G> {
    #[inline]
    fn drop(&mut self) {
        if std::mem::needs_drop::<T>() && self.is_live() {
            // Only drop value when live
            // 只有在存活状态时才 drop 值
            unsafe {
                self.value.assume_init_drop();
            }
        }
    }
}

impl<T: Clone, G: GenerationWord> Clone for Slot<T, G> {
    #[inline]
    fn clone(&self) -> Self {
        let mut slot = Self::vacant();
        match self.get() {
            Some(value) => slot.fill(value.clone(), self.generation),
            None => slot.generation = self.generation,
        }
        slot
    }
}

impl<T: fmt::Debug, G: GenerationWord> fmt::Debug for Slot<T, G> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let mut builder = fmt.debug_struct("Slot");
        builder.field("generation", &self.generation.get());
        match self.get() {
            Some(value) => builder.field("value", value).finish(),
            None => builder.finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_take_stamps_deleted() {
        let mut slot: Slot<i32> = Slot::vacant();
        assert_eq!(slot.generation(), Generation::INVALID);
        assert!(slot.take().is_none());

        slot.fill(7, Generation::FIRST);
        assert!(slot.is_live());
        assert_eq!(slot.get(), Some(&7));

        assert_eq!(slot.take(), Some(7));
        assert_eq!(slot.generation(), Generation::DELETED);
        assert_eq!(slot.get(), None);
    }

    #[test]
    fn test_move_into_keeps_generation_and_drops_once() {
        let tracker = Rc::new(());
        let mut source: Slot<Rc<()>> = Slot::vacant();
        source.fill(Rc::clone(&tracker), Generation::FIRST.next());

        let mut target = Slot::vacant();
        source.move_into(&mut target);

        assert!(!source.is_live());
        assert_eq!(target.generation(), Generation::FIRST.next());
        assert_eq!(Rc::strong_count(&tracker), 2);

        drop(source);
        assert_eq!(Rc::strong_count(&tracker), 2);
        drop(target);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn test_move_into_copies_deleted_stamp() {
        let mut source: Slot<String, u16> = Slot::vacant();
        source.fill("x".to_string(), Generation::FIRST);
        source.take();

        let mut target = Slot::vacant();
        source.move_into(&mut target);
        assert_eq!(target.generation(), Generation::DELETED);
        assert!(!target.is_live());
    }

    #[test]
    fn test_narrow_generation_slot() {
        let mut slot: Slot<char, u8> = Slot::vacant();
        slot.fill('z', Generation::FIRST);
        assert_eq!(slot.generation().get(), 2u8);
        assert_eq!(slot.take(), Some('z'));
        assert_eq!(slot.generation(), Generation::DELETED);
    }

    #[test]
    fn test_clone_live_slot() {
        let mut slot: Slot<String> = Slot::vacant();
        slot.fill(String::from("hello"), Generation::FIRST);

        let cloned = slot.clone();
        assert_eq!(cloned.get().map(String::as_str), Some("hello"));
        assert_eq!(cloned.generation(), Generation::FIRST);
    }
}
