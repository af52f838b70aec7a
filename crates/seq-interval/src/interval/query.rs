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

use crate::{interval::directed::DirectedInterval, num::coordinate::Coordinate};

/// The argument of a membership test: a single position or a whole interval.
///
/// Scalars of the interval's own coordinate type and intervals convert into a
/// `Query` implicitly, so `DirectedInterval::contains` accepts either.
///
/// # Examples
///
/// ```rust
/// # use seq_interval::interval::{directed::DirectedInterval, query::Query};
/// let iv = DirectedInterval::new(1, 10);
/// assert!(iv.contains(Query::Scalar(5)));
/// assert!(iv.contains(5));
/// assert!(iv.contains(DirectedInterval::new(8, 3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Query<T>
where
    T: Coordinate,
{
    /// A single position.
    Scalar(T),
    /// Another interval; tested on its canonical span.
    Range(DirectedInterval<T>),
}

impl<T> Query<T>
where
    T: Coordinate,
{
    /// Returns `true` if the query lies within `container`.
    #[inline]
    pub fn is_within(&self, container: &DirectedInterval<T>) -> bool {
        match self {
            Self::Scalar(value) => container.contains_point(*value),
            Self::Range(interval) => interval.is_in(container),
        }
    }
}

impl<T> From<DirectedInterval<T>> for Query<T>
where
    T: Coordinate,
{
    #[inline]
    fn from(interval: DirectedInterval<T>) -> Self {
        Self::Range(interval)
    }
}

impl<T> From<&DirectedInterval<T>> for Query<T>
where
    T: Coordinate,
{
    #[inline]
    fn from(interval: &DirectedInterval<T>) -> Self {
        Self::Range(*interval)
    }
}

macro_rules! impl_scalar_query_from {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Query<$t> {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::Scalar(value)
                }
            }
        )*
    };
}

impl_scalar_query_from!(i8, i16, i32, i64, i128, isize, f32, f64);
