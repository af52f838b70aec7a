// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use num_traits::{Signed, ToPrimitive};
use std::fmt::{Debug, Display};

/// A numeric type usable as an interval endpoint.
///
/// Positions are counted inclusively, so the unit step (`+1`/`-1`) is part of
/// the domain even for floating point types. The checked helpers return `None`
/// when the step leaves the representable range of the type.
///
/// # Examples
///
/// ```rust
/// # use seq_interval::num::coordinate::Coordinate;
/// assert_eq!(5_i32.successor(), Some(6));
/// assert_eq!(i8::MAX.successor(), None);
/// assert_eq!(1_i64.checked_span(10), Some(10));
/// assert_eq!(2.5_f64.predecessor(), Some(1.5));
/// ```
pub trait Coordinate: Copy + PartialOrd + Signed + ToPrimitive + Debug + Display {
    /// Returns `self + 1`, or `None` on overflow.
    fn successor(self) -> Option<Self>;

    /// Returns `self - 1`, or `None` on underflow.
    fn predecessor(self) -> Option<Self>;

    /// Returns the inclusive position count `|other - self| + 1`, or `None`
    /// if it does not fit in `Self`.
    fn checked_span(self, other: Self) -> Option<Self>;
}

macro_rules! impl_coordinate_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Coordinate for $t {
                #[inline(always)]
                fn successor(self) -> Option<Self> {
                    <$t>::checked_add(self, 1)
                }

                #[inline(always)]
                fn predecessor(self) -> Option<Self> {
                    <$t>::checked_sub(self, 1)
                }

                #[inline(always)]
                fn checked_span(self, other: Self) -> Option<Self> {
                    let (low, high) = if self <= other { (self, other) } else { (other, self) };
                    high.checked_sub(low)?.checked_add(1)
                }
            }
        )*
    };
}

macro_rules! impl_coordinate_for_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Coordinate for $t {
                #[inline(always)]
                fn successor(self) -> Option<Self> {
                    let next = self + 1.0;
                    next.is_finite().then_some(next)
                }

                #[inline(always)]
                fn predecessor(self) -> Option<Self> {
                    let prev = self - 1.0;
                    prev.is_finite().then_some(prev)
                }

                #[inline(always)]
                fn checked_span(self, other: Self) -> Option<Self> {
                    let span = (other - self).abs() + 1.0;
                    span.is_finite().then_some(span)
                }
            }
        )*
    };
}

impl_coordinate_for_int!(i8, i16, i32, i64, i128, isize);
impl_coordinate_for_float!(f32, f64);
