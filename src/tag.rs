//! Compile-time call-site tags.
//!
//! [`slot_store!`](crate::slot_store) hashes the source location of its
//! invocation into a `u32` and uses it as the `TAG` const parameter of the
//! store it creates. Handles carry the same parameter, so handles from two
//! different invocation sites have different types.
//!
//! 编译期调用点标签。
//!
//! [`slot_store!`](crate::slot_store) 将调用位置哈希为 `u32`，
//! 并作为所创建存储的 `TAG` 常量参数。handle 携带相同的参数，
//! 因此来自不同调用点的 handle 类型不同。

const MIX_TABLE: [u32; 16] = [
    0xdf15236c, 0x16d16793, 0x3a697614, 0xe0fe08e4, 0xa3a53275, 0xccc10ff9, 0xb92fae55,
    0xecf491de, 0x36e86773, 0x0ed24a6a, 0xd7153d80, 0x84adf386, 0x17110e76, 0x6d411a6a,
    0xcbd41fed, 0x4b1d6b30,
];

#[inline(always)]
const fn mix(input: u32) -> u32 {
    let mut out = input ^ MIX_TABLE[(input & 0xF) as usize];
    out ^= input.rotate_left(16) ^ MIX_TABLE[((input >> 8) & 0xF) as usize];
    out ^= input.rotate_left(8) ^ MIX_TABLE[((input >> 16) & 0xF) as usize];
    out ^= input.rotate_right(8) ^ MIX_TABLE[((input >> 24) & 0xF) as usize];
    out
}

const fn mix_str(text: &str) -> u32 {
    let bytes = text.as_bytes();
    let mut folded = 0u32;
    let mut i = 0;
    while i < bytes.len() {
        folded ^= (bytes[i] as u32) << (i % 4 * 8);
        i += 1;
    }
    mix(folded)
}

/// Deterministic tag for a source location
///
/// Usable in const context; this is what `slot_store!` feeds to the `TAG`
/// parameter.
///
/// 源码位置的确定性标签
///
/// 可在常量上下文中使用；`slot_store!` 用它作为 `TAG` 参数。
///
/// # Examples (示例)
///
/// ```
/// use slot_store::call_site_tag;
///
/// const A: u32 = call_site_tag("src/main.rs", 10, 5);
/// assert_eq!(A, call_site_tag("src/main.rs", 10, 5));
/// assert_ne!(A, call_site_tag("src/main.rs", 11, 5));
/// ```
pub const fn call_site_tag(file: &str, line: u32, column: u32) -> u32 {
    mix(mix_str(file) ^ mix(line) ^ mix(column))
}

/// Create a `SlotStore` whose handle type is unique to this call site
///
/// `slot_store!(T)` uses the default capacity, `slot_store!(T, capacity)`
/// pre-allocates `capacity` slots. `slot_store!(T, Index, Generation)` and
/// `slot_store!(T, Index, Generation, capacity)` also pick the index and
/// generation widths.
///
/// 创建一个 handle 类型对该调用点唯一的 `SlotStore`
///
/// `slot_store!(T)` 使用默认容量，`slot_store!(T, capacity)` 预分配 `capacity` 个 slot。
/// `slot_store!(T, Index, Generation)` 和 `slot_store!(T, Index, Generation, capacity)`
/// 还会选择索引和代数宽度。
///
/// # Examples (示例)
///
/// ```
/// use slot_store::slot_store;
///
/// let mut names = slot_store!(&str);
/// let mut scores = slot_store!(&str, 32);
///
/// let alice = names.insert("Alice");
/// let top = scores.insert("A+");
/// assert_eq!(names.get(alice), Some(&"Alice"));
/// assert_eq!(scores.get(top), Some(&"A+"));
/// assert_ne!(names.tag(), scores.tag());
///
/// let mut compact = slot_store!(u64, u16, u32, 16);
/// let id = compact.insert(7);
/// assert_eq!(id.index(), 1u16);
/// assert_eq!(compact.capacity(), 16);
/// ```
#[macro_export]
macro_rules! slot_store {
    ($t:ty) => {
        $crate::SlotStore::<
            $t,
            { $crate::call_site_tag(::core::file!(), ::core::line!(), ::core::column!()) },
        >::new_tagged()
    };
    ($t:ty, $capacity:expr) => {
        $crate::SlotStore::<
            $t,
            { $crate::call_site_tag(::core::file!(), ::core::line!(), ::core::column!()) },
        >::with_capacity_tagged($capacity)
    };
    ($t:ty, $index:ty, $generation:ty) => {
        $crate::SlotStore::<
            $t,
            { $crate::call_site_tag(::core::file!(), ::core::line!(), ::core::column!()) },
            $index,
            $generation,
        >::new_tagged()
    };
    ($t:ty, $index:ty, $generation:ty, $capacity:expr) => {
        $crate::SlotStore::<
            $t,
            { $crate::call_site_tag(::core::file!(), ::core::line!(), ::core::column!()) },
            $index,
            $generation,
        >::with_capacity_tagged($capacity)
    };
}
