use std::collections::TryReserveError;
use std::fmt;

/// Error type for fallible SlotStore operations
///
/// Stale or foreign handles are not errors: lookups return `None` and
/// removals return `false`. Only resource exhaustion is reported here.
///
/// SlotStore 可失败操作的错误类型
///
/// 过期或无效的 handle 不属于错误：查找返回 `None`，删除返回 `false`。
/// 这里只报告资源耗尽。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotStoreError {
    /// Every index of the store's index width is already in use
    ///
    /// 存储索引宽度内的所有索引都已被使用
    IndexSpaceExhausted,

    /// The doubled capacity does not fit in `usize`
    ///
    /// 翻倍后的容量超出 `usize` 范围
    CapacityOverflow,

    /// The allocator could not provide a block of the requested capacity
    ///
    /// 分配器无法提供所请求容量的内存块
    AllocationFailed {
        /// Number of slots requested
        ///
        /// 请求的 slot 数量
        capacity: usize,
        /// Underlying reservation error
        ///
        /// 底层预留错误
        source: TryReserveError,
    },
}

impl fmt::Display for SlotStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotStoreError::IndexSpaceExhausted => write!(f, "Slot index space exhausted"),
            SlotStoreError::CapacityOverflow => write!(f, "Slot capacity overflow"),
            SlotStoreError::AllocationFailed { capacity, source } => {
                write!(f, "Failed to allocate {capacity} slots: {source}")
            }
        }
    }
}

impl std::error::Error for SlotStoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SlotStoreError::AllocationFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}
