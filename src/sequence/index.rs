//! Index and slice resolution for [`FileSequence`](super::FileSequence)
//!
//! Two conventions coexist. Position addressing is zero-based with negative
//! values wrapping from the end. Frame addressing treats a non-negative value
//! as an absolute frame number and a negative value as a position from the
//! end, so `-1` is the last frame in both modes. The asymmetry is deliberate:
//! `at_frame(100)` on a sequence starting at 100 is its first member.
//!
//! Slice bounds are clamped to the valid interval; scalar lookups outside
//! it fail.

use std::ops::{Bound, RangeBounds};

use crate::FrameseqError;

type Result<T> = std::result::Result<T, FrameseqError>;

/// Resolve a position to a zero-based offset in `[0, len)`.
///
/// # Errors
/// Returns `IndexOutOfRange` when `index` falls outside the sequence after
/// wrapping.
pub fn position(index: i64, len: i64) -> Result<i64> {
    let offset = if index < 0 { index + len } else { index };
    if (0..len).contains(&offset) {
        Ok(offset)
    } else {
        Err(FrameseqError::IndexOutOfRange {
            index,
            lower: -len,
            upper: len - 1,
        })
    }
}

/// Resolve a frame lookup to an absolute frame in `[start, end]`.
///
/// # Errors
/// Returns `IndexOutOfRange` when the resolved frame lies outside the range.
pub fn frame(index: i64, start: i64, end: i64) -> Result<i64> {
    let resolved = wrap_frame(index, end);
    if (start..=end).contains(&resolved) {
        Ok(resolved)
    } else {
        Err(FrameseqError::IndexOutOfRange {
            index,
            lower: start,
            upper: end,
        })
    }
}

/// Resolve a position slice to a half-open offset range `[lo, hi)`.
///
/// # Errors
/// Returns `EmptyRange` if no member is selected.
pub fn position_slice(range: &impl RangeBounds<i64>, len: i64) -> Result<(i64, i64)> {
    let wrap = |i: i64| if i < 0 { i + len } else { i };
    let clamp = |i: i64| i.clamp(0, len);

    let lo = match range.start_bound() {
        Bound::Included(&i) => clamp(wrap(i)),
        Bound::Excluded(&i) => clamp(wrap(i).saturating_add(1)),
        Bound::Unbounded => 0,
    };
    let hi = match range.end_bound() {
        Bound::Included(&i) => clamp(wrap(i).saturating_add(1)),
        Bound::Excluded(&i) => clamp(wrap(i)),
        Bound::Unbounded => len,
    };
    non_empty(lo, hi)
}

/// Resolve a frame slice to an inclusive frame range `(first, last)`.
///
/// The upper bound of `a..b` is exclusive, so `150..176` selects frames
/// 150 through 175.
///
/// # Errors
/// Returns `EmptyRange` if no member is selected.
pub fn frame_slice(range: &impl RangeBounds<i64>, start: i64, end: i64) -> Result<(i64, i64)> {
    let wrap = |i: i64| wrap_frame(i, end);
    let clamp = |i: i64| i.clamp(start, end + 1);

    let lo = match range.start_bound() {
        Bound::Included(&i) => clamp(wrap(i)),
        Bound::Excluded(&i) => clamp(wrap(i).saturating_add(1)),
        Bound::Unbounded => start,
    };
    let hi = match range.end_bound() {
        Bound::Included(&i) => clamp(wrap(i).saturating_add(1)),
        Bound::Excluded(&i) => clamp(wrap(i)),
        Bound::Unbounded => end + 1,
    };
    let (lo, hi) = non_empty(lo, hi)?;
    Ok((lo, hi - 1))
}

const fn wrap_frame(index: i64, end: i64) -> i64 {
    if index < 0 { end.saturating_add(1) + index } else { index }
}

fn non_empty(lo: i64, hi: i64) -> Result<(i64, i64)> {
    if lo < hi { Ok((lo, hi)) } else { Err(FrameseqError::EmptyRange) }
}
