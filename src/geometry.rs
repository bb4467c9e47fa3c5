//! Aspect-preserving fit of a size into a bounding box.

use num_traits::NumCast;

use crate::numbers::{self, to_f64, Number};

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub const fn new(width: T, height: T) -> Self {
        Self { width, height }
    }
}

impl<T: Number> Size<T> {
    /// Method form of [`fit_to`].
    pub fn fit_to(self, target: Size<T>) -> Option<Size<T>> {
        fit_to(self, target)
    }
}

impl<T> From<(T, T)> for Size<T> {
    fn from((width, height): (T, T)) -> Self {
        Self::new(width, height)
    }
}

/// Scales `input` to the largest size that fits inside `target` while
/// keeping the input's aspect ratio.
///
/// # Algorithm
/// ```text
/// scale = min(target.width / input.width, target.height / input.height)
/// out   = (input.width × scale, input.height × scale)
/// ```
/// The arithmetic is done in `f64`; each output dimension is then
/// converted back to `T`, truncating toward zero for integer types.
///
/// Negative dimensions are not rejected and follow the same arithmetic.
///
/// # Returns
/// - `None` if an input dimension is zero, the scale is not finite, or an
///   output dimension does not fit in `T`.
///
/// # Examples
/// ```
/// use stalw::geometry::{fit_to, Size};
/// let out = fit_to(Size::new(100, 50), Size::new(200, 60));
/// assert_eq!(out, Some(Size::new(120, 60)));
///
/// // shrinking works the same way
/// let out = fit_to(Size::new(1920, 1080), Size::new(640, 640));
/// assert_eq!(out, Some(Size::new(640, 360)));
/// ```
pub fn fit_to<T: Number>(input: Size<T>, target: Size<T>) -> Option<Size<T>> {
    if input.width == T::zero() || input.height == T::zero() {
        return None;
    }
    let (w, h) = (to_f64(input.width), to_f64(input.height));
    let scale = numbers::min(&[to_f64(target.width) / w, to_f64(target.height) / h])?;
    if !scale.is_finite() {
        return None;
    }
    Some(Size::new(
        <T as NumCast>::from(w * scale)?,
        <T as NumCast>::from(h * scale)?,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fit_to_grow_height_bound() {
        // min(2.0, 1.2) = 1.2
        let out = fit_to(Size::new(100, 50), Size::new(200, 60)).unwrap();
        assert_eq!(out, Size::new(120, 60));
    }

    #[test]
    fn test_fit_to_width_bound() {
        let out = fit_to(Size::new(100, 100), Size::new(50, 400)).unwrap();
        assert_eq!(out, Size::new(50, 50));
    }

    #[test]
    fn test_fit_to_same_aspect() {
        let out = fit_to(Size::new(4_u32, 3), Size::new(800, 600)).unwrap();
        assert_eq!(out, Size::new(800, 600));
    }

    #[test]
    fn test_fit_to_truncates() {
        // scale = min(10/3, 10/7) = 10/7; 3 × 10/7 = 4.28…
        let out = fit_to(Size::new(3, 7), Size::new(10, 10)).unwrap();
        assert_eq!(out, Size::new(4, 10));
    }

    #[test]
    fn test_fit_to_float() {
        let out = fit_to(Size::new(3.0, 7.0), Size::new(10.0, 10.0)).unwrap();
        assert_relative_eq!(out.width, 30.0 / 7.0);
        assert_relative_eq!(out.height, 10.0);
    }

    #[test]
    fn test_fit_to_zero_input() {
        assert_eq!(fit_to(Size::new(0, 10), Size::new(10, 10)), None);
        assert_eq!(fit_to(Size::new(10.0, 0.0), Size::new(10.0, 10.0)), None);
    }

    #[test]
    fn test_fit_to_zero_target() {
        let out = fit_to(Size::new(10, 20), Size::new(0, 100)).unwrap();
        assert_eq!(out, Size::new(0, 0));
    }

    #[test]
    fn test_fit_to_negative_input() {
        // scale = min(30 / -10, 30 / 20) = -3
        let out = fit_to(Size::new(-10, 20), Size::new(30, 30)).unwrap();
        assert_eq!(out, Size::new(30, -60));
    }

    #[test]
    fn test_fit_to_unrepresentable() {
        // scale = min(127 / -4, 100 / 100) = -31.75, height -3175 overflows i8
        assert_eq!(fit_to(Size::new(-4_i8, 100), Size::new(127, 100)), None);
    }

    #[test]
    fn test_fit_to_method_and_from_tuple() {
        let out = Size::from((100, 50)).fit_to((200, 60).into());
        assert_eq!(out, Some(Size::new(120, 60)));
    }
}
