//! Branch weighting for the handle checks on the lookup and removal paths.
//!
//! Stale handles and block growth are the rare side of each check.
//!
//! 查找和删除路径上 handle 检查的分支权重。

#[cold]
#[inline(always)]
fn rare_path() {}

/// `condition`, expected to hold
///
/// `condition`，预期为真
#[inline(always)]
pub(crate) fn likely(condition: bool) -> bool {
    if !condition {
        rare_path();
    }
    condition
}

/// `condition`, expected not to hold
///
/// `condition`，预期为假
#[inline(always)]
pub(crate) fn unlikely(condition: bool) -> bool {
    if condition {
        rare_path();
    }
    condition
}
