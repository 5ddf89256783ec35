//! Numeric weight types usable as matrix entries and tour lengths.

use std::fmt::{Debug, Display};

use num_traits::Zero;

/// Element type of a [`DistanceMatrix`](crate::DistanceMatrix).
///
/// Both integer and floating point weights are supported. Every weight type
/// has an *unreachable* sentinel that denotes "no direct edge": positive
/// infinity for floats, `MAX` for integers. Sums saturate at that sentinel,
/// so a tour crossing a missing edge reports an unreachable length instead
/// of overflowing.
///
/// # Examples
///
/// ```
/// use tourforge_core::Distance;
///
/// assert!(f64::unreachable().is_unreachable());
/// assert_eq!(u32::MAX.saturating_add(5), u32::unreachable());
/// assert!(!7i64.is_negative());
/// ```
pub trait Distance:
    Copy + Debug + Display + PartialOrd + Zero + Send + Sync + 'static
{
    /// Returns the "no direct edge" sentinel.
    fn unreachable() -> Self;

    /// Returns true if this weight is the unreachable sentinel.
    fn is_unreachable(&self) -> bool;

    /// Returns true if this weight is below zero.
    fn is_negative(&self) -> bool;

    /// Returns true if this weight is not a number.
    fn is_nan(&self) -> bool {
        false
    }

    /// Adds two weights, clamping at the unreachable sentinel.
    fn saturating_add(self, other: Self) -> Self;
}

macro_rules! impl_float_distance {
    ($($t:ty),+) => {
        $(
            impl Distance for $t {
                #[inline]
                fn unreachable() -> Self {
                    <$t>::INFINITY
                }

                #[inline]
                fn is_unreachable(&self) -> bool {
                    *self == <$t>::INFINITY
                }

                #[inline]
                fn is_negative(&self) -> bool {
                    *self < 0.0
                }

                #[inline]
                fn is_nan(&self) -> bool {
                    <$t>::is_nan(*self)
                }

                #[inline]
                fn saturating_add(self, other: Self) -> Self {
                    self + other
                }
            }
        )+
    };
}

macro_rules! impl_integer_distance {
    ($($t:ty),+) => {
        $(
            impl Distance for $t {
                #[inline]
                fn unreachable() -> Self {
                    <$t>::MAX
                }

                #[inline]
                fn is_unreachable(&self) -> bool {
                    *self == <$t>::MAX
                }

                #[inline]
                #[allow(unused_comparisons)]
                fn is_negative(&self) -> bool {
                    *self < 0
                }

                #[inline]
                fn saturating_add(self, other: Self) -> Self {
                    <$t>::saturating_add(self, other)
                }
            }
        )+
    };
}

impl_float_distance!(f32, f64);
impl_integer_distance!(i32, i64, u32, u64);
