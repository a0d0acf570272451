//! Capacity policy: the power-of-two growth rule.
//!
//! Every path that allocates or grows buffer storage goes through
//! [`pow2_at_least`], so the power-of-two invariant lives in exactly one
//! place.

/// Capacity of a freshly constructed empty buffer.
pub(crate) const MIN_CAPACITY: usize = 4;

/// Largest power of two representable in a `usize`.
const MAX_POW2: usize = usize::MAX ^ (usize::MAX >> 1);

/// Smallest power of two greater than or equal to `required`.
///
/// `pow2_at_least(0)` is 1: a zero-length requirement still gets a
/// well-formed (if tiny) allocation.
///
/// # Panics
/// Panics if `required` exceeds the largest power of two a `usize` can
/// hold. Capacity-size overflow is fatal; a buffer cannot partially grow.
pub(crate) fn pow2_at_least(required: usize) -> usize {
    assert!(
        required <= MAX_POW2,
        "requested capacity {required} exceeds the largest representable power of two"
    );
    required.max(1).next_power_of_two()
}
