//! Integer rounding shared by every score and rate
//!
//! Ratios are rounded half-up (ties away from zero; all operands are
//! non-negative) in exact integer arithmetic, so `.5` boundaries never
//! depend on float representation.

/// Round `numerator / denominator` half-up
///
/// `denominator` must be non-zero.
#[inline]
pub(crate) fn round_half_up(numerator: u128, denominator: u128) -> u128 {
    debug_assert!(denominator > 0, "denominator must be non-zero");
    (2 * numerator + denominator) / (2 * denominator)
}

/// Percentage of `part` in `total`, rounded half-up
///
/// Returns 0 when `total` is 0. `part` is expected to be at most `total`;
/// larger values saturate at 100.
#[must_use]
pub fn percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let rate = round_half_up(100 * part as u128, total as u128);
    u8::try_from(rate.min(100)).unwrap_or(100)
}
