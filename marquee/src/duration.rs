//! Pure duration math.
//!
//! Two forms exist in the wild:
//! - the per-item form (`time_per_item * original_count`) used when applying speeds, and
//! - the ratio form (`base * actual / base_count`) exposed for external callers.
//!
//! Both are total functions: the per-item form saturates, the ratio form returns `None`
//! instead of dividing by zero.

/// Total animation duration for a region: `time_per_item_ms * original_count`.
///
/// Monotonic in `original_count`; zero items yields zero, which callers must treat as
/// "no animation needed".
pub fn compute_duration_ms(time_per_item_ms: u64, original_count: usize) -> u64 {
    time_per_item_ms.saturating_mul(original_count as u64)
}

/// Ratio-form duration: `base_ms * actual_count / base_count`.
///
/// Returns `None` when `base_count` is zero (the unguarded edge case in the original
/// formula). The intermediate product is widened to `u128` and the result saturates
/// back to `u64`.
pub fn scale_duration_ms(base_ms: u64, base_count: usize, actual_count: usize) -> Option<u64> {
    if base_count == 0 {
        return None;
    }
    let scaled = base_ms as u128 * actual_count as u128 / base_count as u128;
    Some(u64::try_from(scaled).unwrap_or(u64::MAX))
}
