// Insertion and index reuse tests
// 插入和索引复用测试

use crate::{Generation, SlotStore};

#[test]
fn test_sequential_indices_start_at_one() {
    let mut store = SlotStore::new();

    let handles: Vec<_> = (0..5).map(|i| store.insert(i)).collect();
    let indices: Vec<u32> = handles.iter().map(|h| h.index()).collect();

    assert_eq!(indices, vec![1, 2, 3, 4, 5]);
    assert_eq!(store.len(), 5);
    store.check_invariants();
}

#[test]
fn test_handle_valid_immediately_after_insert() {
    let mut store = SlotStore::new();

    for i in 0..20 {
        let h = store.insert(i);
        assert!(store.is_valid(h));
        assert_eq!(store.get(h), Some(&i));
    }
}

#[test]
fn test_insert_does_not_advance_generation() {
    let mut store = SlotStore::new();

    let a = store.insert(1);
    let b = store.insert(2);
    let c = store.insert(3);

    // Every insert before any removal shares the first generation
    // 在任何删除之前，所有插入共享第一个代数
    assert_eq!(a.generation(), Generation::FIRST);
    assert_eq!(b.generation(), Generation::FIRST);
    assert_eq!(c.generation(), Generation::FIRST);
    assert_eq!(store.current_generation(), Generation::FIRST);
}

#[test]
fn test_reuse_takes_smallest_free_index() {
    let mut store = SlotStore::new();
    let handles: Vec<_> = (0..6).map(|i| store.insert(i)).collect();

    // Free indices 4, 2 and 3 (none of them trailing)
    // 释放索引 4、2 和 3（都不是末尾）
    assert!(store.destruct(handles[3]));
    assert!(store.destruct(handles[1]));
    assert!(store.destruct(handles[2]));

    assert_eq!(store.insert(100).index(), 2);
    assert_eq!(store.insert(101).index(), 3);
    assert_eq!(store.insert(102).index(), 4);
    // Free list exhausted, append past the high-water mark
    // 空闲列表耗尽，追加到高水位线之后
    assert_eq!(store.insert(103).index(), 7);
    store.check_invariants();
}

#[test]
fn test_reused_slot_stamped_with_current_generation() {
    let mut store = SlotStore::new();
    let a = store.insert('a');
    let _b = store.insert('b');
    let c = store.insert('c');

    store.destruct(a);
    store.destruct(c);
    let current = store.current_generation();

    let d = store.insert('d');
    assert_eq!(d.index(), 1);
    assert_eq!(d.generation(), current);
}

#[test]
fn test_try_insert_matches_insert() {
    let mut store = SlotStore::new();

    let h1 = store.try_insert("one").unwrap();
    let h2 = store.insert("two");

    assert_eq!(h1.index() + 1, h2.index());
    assert_eq!(store.get(h1), Some(&"one"));
    assert_eq!(store.get(h2), Some(&"two"));
}

#[test]
fn test_insert_owned_values() {
    let mut store = SlotStore::new();

    let h = store.insert(vec![String::from("a"), String::from("b")]);
    store.get_mut(h).unwrap().push(String::from("c"));

    assert_eq!(store.get(h).map(Vec::len), Some(3));
}

#[test]
fn test_zero_sized_values() {
    let mut store = SlotStore::new();

    let handles: Vec<_> = (0..100).map(|_| store.insert(())).collect();
    assert_eq!(store.len(), 100);
    assert!(handles.iter().all(|&h| store.get(h) == Some(&())));
    store.check_invariants();
}
