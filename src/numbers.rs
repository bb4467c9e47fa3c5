//! Generic numeric primitives.
//!
//! Every function here is generic over [`Number`], which covers all
//! primitive integer and floating-point types. Comparisons use
//! `PartialOrd`, so floats follow IEEE semantics: a NaN never compares
//! less or greater than anything.
//!
//! Range arithmetic ([`map_range`], [`linear_xy`], [`round_multiple`]) is
//! carried out in `f64` regardless of `T`.

use num_traits::{Num, NumCast, ToPrimitive};

/// Any primitive integer or floating-point type.
///
/// Blanket-implemented; there is nothing to implement by hand.
pub trait Number: Copy + PartialOrd + Num + NumCast {}

impl<T> Number for T where T: Copy + PartialOrd + Num + NumCast {}

/// Widens `num` to `f64`, yielding NaN if the value has no `f64` form.
#[inline]
pub(crate) fn to_f64<T: Number>(num: T) -> f64 {
    num.to_f64().unwrap_or(f64::NAN)
}

/// Returns the absolute value of `num`.
///
/// Unsigned values are returned unchanged.
///
/// # Panics
/// Negating the most negative value of a signed integer type overflows,
/// which panics in debug builds.
///
/// # Examples
/// ```
/// use stalw::numbers::abs;
/// assert_eq!(abs(-3), 3);
/// assert_eq!(abs(2.5), 2.5);
/// assert_eq!(abs(7_u8), 7);
/// ```
pub fn abs<T: Number>(num: T) -> T {
    if num >= T::zero() {
        num
    } else {
        T::zero() - num
    }
}

/// Returns the smallest value in `nums`.
///
/// The first element seeds the scan, so a leading NaN is returned as is.
///
/// # Returns
/// - `None` if `nums` is empty.
///
/// # Examples
/// ```
/// use stalw::numbers::min;
/// assert_eq!(min(&[3, 1, 4, 1, 5]), Some(1));
/// assert_eq!(min::<i32>(&[]), None);
/// ```
pub fn min<T: Number>(nums: &[T]) -> Option<T> {
    let (&first, rest) = nums.split_first()?;
    Some(rest.iter().fold(first, |acc, &x| if x < acc { x } else { acc }))
}

/// Returns the largest value in `nums`.
///
/// # Returns
/// - `None` if `nums` is empty.
///
/// # Examples
/// ```
/// use stalw::numbers::max;
/// assert_eq!(max(&[3.0, 1.0, 4.0]), Some(4.0));
/// ```
pub fn max<T: Number>(nums: &[T]) -> Option<T> {
    let (&first, rest) = nums.split_first()?;
    Some(rest.iter().fold(first, |acc, &x| if x > acc { x } else { acc }))
}

/// Constrains `num` to the range `[min, max]`.
///
/// The bounds are not validated. With `min > max` the lower bound check
/// runs first, so any `num < min` yields `min` and everything else
/// yields `max`.
///
/// # Examples
/// ```
/// use stalw::numbers::clamp;
/// assert_eq!(clamp(15, 0, 10), 10);
/// assert_eq!(clamp(-2, 0, 10), 0);
/// assert_eq!(clamp(4, 0, 10), 4);
/// ```
pub fn clamp<T: Number>(num: T, min: T, max: T) -> T {
    if num < min {
        min
    } else if num > max {
        max
    } else {
        num
    }
}

/// Proportionally maps `num` from one range onto another.
///
/// Either range may have its boundaries inverted relative to the other;
/// the direction is preserved.
///
/// # Formula
/// ```text
/// relative = (from_end − num) / (from_end − from_start)
/// result   = to_end − relative × (to_end − to_start)
/// ```
///
/// A degenerate source range (`from_start == from_end`) divides by zero
/// and yields a non-finite result.
///
/// # Examples
/// ```
/// use stalw::numbers::map_range;
/// assert_eq!(map_range(6, 0, 10, 0, 20), 12.0);
/// assert_eq!(map_range(6, 0, 10, 20, 0), 8.0);
/// ```
pub fn map_range<T: Number>(num: T, from_start: T, from_end: T, to_start: T, to_end: T) -> f64 {
    let from_end = to_f64(from_end);
    let to_end = to_f64(to_end);
    let relative = (from_end - to_f64(num)) / (from_end - to_f64(from_start));
    to_end - relative * (to_end - to_f64(to_start))
}

/// Returns the Y coordinate at `x` on the line through `(x1, y1)` and
/// `(x2, y2)`.
///
/// # Examples
/// ```
/// use stalw::numbers::linear_xy;
/// assert_eq!(linear_xy(5, 0, 0, 10, 100), 50.0);
/// // extrapolates past the segment
/// assert_eq!(linear_xy(20, 0, 0, 10, 100), 200.0);
/// ```
pub fn linear_xy<T: Number>(x: T, x1: T, y1: T, x2: T, y2: T) -> f64 {
    map_range(x, x1, x2, y1, y2)
}

/// Rounds `num` to `digits` places after the decimal point.
///
/// Halfway cases round away from zero.
///
/// # Examples
/// ```
/// use stalw::numbers::round;
/// assert_eq!(round(3.14159, 2), 3.14);
/// assert_eq!(round(2.5, 0), 3.0);
/// ```
pub fn round(num: f64, digits: u32) -> f64 {
    let precision = (0..digits).fold(1.0_f64, |p, _| p * 10.0);
    (num * precision).round() / precision
}

/// Rounds `num` to the nearest multiple of `multiple`.
///
/// The quotient is rounded half away from zero, then scaled back and
/// converted to `T` (integers truncate).
///
/// # Returns
/// - `num` unchanged if `multiple` is zero, or if the rounded value does
///   not fit in `T`.
///
/// # Examples
/// ```
/// use stalw::numbers::round_multiple;
/// assert_eq!(round_multiple(7, 5), 5);
/// assert_eq!(round_multiple(8, 5), 10);
/// assert_eq!(round_multiple(8, 0), 8);
/// assert_eq!(round_multiple(0.26, 0.25), 0.25);
/// ```
pub fn round_multiple<T: Number>(num: T, multiple: T) -> T {
    if multiple == T::zero() {
        return num;
    }
    let mf = to_f64(multiple);
    let rounded = (to_f64(num) / mf).round() * mf;
    <T as NumCast>::from(rounded).unwrap_or(num)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
