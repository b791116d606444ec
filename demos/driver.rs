use slot_store::slot_store;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    // 1. Create a tagged store
    // 1. 创建一个带标签的存储
    let mut store = slot_store!(usize);
    let h1 = store.insert(1);
    let h2 = store.insert(2);

    // 2. Fill it past several growth steps
    // 2. 填充到经过多次扩容
    let handles: Vec<_> = (0..1000).map(|i| store.insert(i)).collect();
    assert_eq!(store.len(), 1002);
    assert!(store.is_valid(h1));
    assert!(store.is_valid(h2));
    assert_eq!(store.get(h1), Some(&1));
    assert_eq!(store.get(h2), Some(&2));

    // 3. Destruct one value; its handle stops validating
    // 3. 销毁一个值；其 handle 不再有效
    assert!(store.destruct(h2));
    assert!(!store.is_valid(h2));
    assert_eq!(store.len(), 1001);

    // 4. Modify through a handle
    // 4. 通过 handle 修改值
    if let Some(value) = store.get_mut(h1) {
        *value = 55;
    }
    assert_eq!(store.get(h1), Some(&55));
    println!("capacity: {}", store.capacity());

    // 5. Destruct the bulk; the trailing removal shrinks the block
    // 5. 销毁大部分值；末尾删除触发收缩
    let probe = handles[55];
    for &handle in &handles {
        store.destruct(handle);
    }
    println!("capacity: {}", store.capacity());

    // 6. Refill; old handles never come back to life
    // 6. 重新填充；旧 handle 永远不会复活
    let refilled: Vec<_> = (0..1000).map(|i| store.insert(i)).collect();
    assert_eq!(store.len(), 1001);
    assert!(!store.is_valid(probe));
    assert!(refilled.iter().all(|&h| store.is_valid(h)));

    println!("tag: {:#010x}", store.tag());
    println!("all checks passed");
}
