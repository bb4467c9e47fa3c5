//! Descriptive statistics over generic number slices.
//!
//! All functions borrow their input and never modify it. Empty input is
//! reported as `None` rather than a sentinel value.
//!
//! # Overflow
//!
//! [`mean`] accumulates in `T` itself, so summing large integers can
//! overflow (a panic in debug builds, wrap-around in release). Callers
//! with such data should widen the element type first. [`median`] and
//! [`nearest`] are written to stay in range for any input.

use std::cmp::Ordering;

use crate::numbers::{self, to_f64, Number};

/// Computes the arithmetic mean of `nums`.
///
/// The sum is accumulated in `T` and divided by the count in `f64`.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Panics
/// Integer sums that overflow `T` panic in debug builds and wrap in
/// release builds.
///
/// # Returns
/// - `None` if `nums` is empty.
///
/// # Examples
/// ```
/// use stalw::stats::mean;
/// assert_eq!(mean(&[1, 2, 3, 4]), Some(2.5));
/// assert_eq!(mean::<f64>(&[]), None);
/// ```
pub fn mean<T: Number>(nums: &[T]) -> Option<f64> {
    if nums.is_empty() {
        return None;
    }
    let sum = nums.iter().fold(T::zero(), |acc, &x| acc + x);
    Some(to_f64(sum) / nums.len() as f64)
}

/// Computes the median of `nums` without mutating the input.
///
/// Sorts a private copy, then returns the middle element, or for even
/// lengths the mean of the two central elements computed as
/// `a/2 + b/2` so that large magnitudes do not overflow.
///
/// NaN values sort before every other value, so a NaN-bearing input
/// yields NaN only when the NaNs reach the central position.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Returns
/// - `None` if `nums` is empty.
///
/// # Examples
/// ```
/// use stalw::stats::median;
/// assert_eq!(median(&[3, 1, 2]), Some(2.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
/// ```
pub fn median<T: Number>(nums: &[T]) -> Option<f64> {
    if nums.is_empty() {
        return None;
    }
    let mut sorted = nums.to_vec();
    sorted.sort_unstable_by(nan_first);
    let n = sorted.len();
    let upper = to_f64(sorted[n / 2]);
    if n % 2 == 1 {
        Some(upper)
    } else {
        Some(upper / 2.0 + to_f64(sorted[n / 2 - 1]) / 2.0)
    }
}

/// Finds the element of `nums` equal or closest to `target`.
///
/// Distance is measured as `max(a, b) − min(a, b)`, which cannot
/// underflow for unsigned types and does not depend on the signs of the
/// operands. When several elements are equally close, the one with the
/// lowest index wins.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// - `Some((value, index))` of the closest element.
/// - `None` if `nums` is empty.
///
/// # Examples
/// ```
/// use stalw::stats::nearest;
/// assert_eq!(nearest(&[5, 1, 9], 6), Some((5, 0)));
/// assert_eq!(nearest(&[4_u32, 8], 6), Some((4, 0)));
/// assert_eq!(nearest::<i32>(&[], 6), None);
/// ```
pub fn nearest<T: Number>(nums: &[T], target: T) -> Option<(T, usize)> {
    let (&first, rest) = nums.split_first()?;
    let mut best = (first, 0);
    let mut best_distance = distance(first, target);

    for (i, &x) in rest.iter().enumerate() {
        let d = distance(x, target);
        if d < best_distance {
            best_distance = d;
            best = (x, i + 1);
        }
    }

    Some(best)
}

/// Total order over `T`: the usual order for comparable values, with
/// incomparable values (`x != x`, i.e. NaN) placed before everything else.
#[allow(clippy::eq_op)]
fn nan_first<T: Number>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or_else(|| (a == a).cmp(&(b == b)))
}

#[inline]
fn distance<T: Number>(a: T, b: T) -> T {
    let pair = [a, b];
    match (numbers::max(&pair), numbers::min(&pair)) {
        (Some(hi), Some(lo)) => hi - lo,
        _ => T::zero(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
