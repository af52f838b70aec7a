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

use crate::{
    error::IntervalError,
    interval::{direction::Direction, query::Query},
    num::coordinate::Coordinate,
};
use std::{
    any::Any,
    hash::{Hash, Hasher},
    ops::{Add, BitAnd, Bound, Not, RangeBounds, RangeInclusive, Sub},
};

/// An interval with an orientation.
///
/// The interval covers every position between `start` and `end`, both
/// inclusive, and points from `start` towards `end`. Its direction is derived
/// at construction: `Forward` when `start <= end`, `Backward` otherwise.
///
/// Ordering and overlap queries work on the canonical bounds
/// `low = min(start, end)` and `high = max(start, end)`, so orientation never
/// flips their logic. Equality and the combinators (`union`, `subtract`,
/// `intersect`) respect orientation.
///
/// # Invariants
/// `low <= high`, and `direction`, `low`, `high` are always the ones derived
/// from the current `start` and `end`.
///
/// # Examples
///
/// ```rust
/// # use seq_interval::interval::{directed::DirectedInterval, direction::Direction};
/// let iv = DirectedInterval::new(10, 1);
/// assert_eq!(iv.direction(), Direction::Backward);
/// assert_eq!((iv.low(), iv.high()), (1, 10));
/// assert_eq!(iv.length(), 10);
/// assert_eq!(iv.to_string(), "1 <-----| 10");
/// ```
#[derive(Clone, Copy)]
pub struct DirectedInterval<T>
where
    T: Coordinate,
{
    start: T,
    end: T,
    direction: Direction,
    low: T,
    high: T,
}

impl<T> DirectedInterval<T>
where
    T: Coordinate,
{
    /// Creates a new `DirectedInterval` from `start` to `end`.
    ///
    /// Any pair is accepted. `start == end` is a single-position `Forward`
    /// interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seq_interval::interval::directed::DirectedInterval;
    /// let iv = DirectedInterval::new(3, 8);
    /// assert!(iv.is_forward());
    /// assert_eq!(iv.length(), 6);
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        let direction = Direction::of(&start, &end);
        let (low, high) = match direction {
            Direction::Forward => (start, end),
            Direction::Backward => (end, start),
        };
        Self {
            start,
            end,
            direction,
            low,
            high,
        }
    }

    /// Builds the interval spanning `[low, high]` oriented along `direction`.
    #[inline]
    fn oriented(low: T, high: T, direction: Direction) -> Self {
        match direction {
            Direction::Forward => Self::new(low, high),
            Direction::Backward => Self::new(high, low),
        }
    }

    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the smaller endpoint, regardless of direction.
    #[inline]
    pub const fn low(&self) -> T {
        self.low
    }

    /// Returns the larger endpoint, regardless of direction.
    #[inline]
    pub const fn high(&self) -> T {
        self.high
    }

    #[inline]
    pub const fn is_forward(&self) -> bool {
        self.direction.is_forward()
    }

    #[inline]
    pub const fn is_backward(&self) -> bool {
        self.direction.is_backward()
    }

    /// Returns the number of positions covered, `|end - start| + 1`.
    ///
    /// The `+1` is applied for floating point domains as well.
    ///
    /// # Panics
    ///
    /// Follows the overflow behaviour of `T`'s arithmetic. Use
    /// [`checked_length`](Self::checked_length) near the limits of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seq_interval::interval::directed::DirectedInterval;
    /// assert_eq!(DirectedInterval::new(1, 10).length(), 10);
    /// assert_eq!(DirectedInterval::new(10, 1).length(), 10);
    /// assert_eq!(DirectedInterval::new(1.0, 2.5).length(), 2.5);
    /// ```
    #[inline]
    pub fn length(&self) -> T {
        (self.end - self.start).abs() + T::one()
    }

    /// Returns the number of positions covered, or `None` if it does not fit in `T`.
    #[inline]
    pub fn checked_length(&self) -> Option<T> {
        self.start.checked_span(self.end)
    }

    /// Returns `true` if `self` lies strictly to the right of `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seq_interval::interval::directed::DirectedInterval;
    /// let a = DirectedInterval::new(11, 20);
    /// assert!(a.completely_greater_than(&DirectedInterval::new(10, 1)));
    /// assert!(!a.completely_greater_than(&DirectedInterval::new(5, 15)));
    /// ```
    #[inline]
    pub fn completely_greater_than(&self, other: &Self) -> bool {
        self.low > other.high
    }

    /// Returns `true` if `self` starts no earlier than `other`.
    ///
    /// Overlap is allowed. Together with
    /// [`less_or_overlaps`](Self::less_or_overlaps) this is not a total order.
    #[inline]
    pub fn greater_or_overlaps(&self, other: &Self) -> bool {
        self.low >= other.low
    }

    /// Returns `true` if `self` lies strictly to the left of `other`.
    #[inline]
    pub fn completely_less_than(&self, other: &Self) -> bool {
        self.high < other.low
    }

    /// Returns `true` if `self` ends no later than `other`.
    #[inline]
    pub fn less_or_overlaps(&self, other: &Self) -> bool {
        self.high <= other.high
    }

    /// Returns `true` if the two intervals share at least one position.
    ///
    /// Direction is ignored, so an interval intersects its own reverse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seq_interval::interval::directed::DirectedInterval;
    /// let a = DirectedInterval::new(1, 10);
    /// assert!(a.is_intersect_with(&DirectedInterval::new(15, 5)));
    /// assert!(a.is_intersect_with(&DirectedInterval::new(10, 1)));
    /// assert!(!a.is_intersect_with(&DirectedInterval::new(11, 20)));
    /// ```
    #[inline]
    pub fn is_intersect_with(&self, other: &Self) -> bool {
        !(self.completely_greater_than(other) || self.completely_less_than(other))
    }

    /// Returns `true` if the canonical bounds abut: one interval ends exactly
    /// one unit before the other begins.
    ///
    /// Only meaningful for integral domains. For floating point endpoints it
    /// holds only when the gap is exactly `1.0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seq_interval::interval::directed::DirectedInterval;
    /// let a = DirectedInterval::new(1, 10);
    /// assert!(a.is_adjacent_with(&DirectedInterval::new(20, 11)));
    /// assert!(!a.is_adjacent_with(&DirectedInterval::new(5, 15)));
    /// ```
    #[inline]
    pub fn is_adjacent_with(&self, other: &Self) -> bool {
        self.high.successor() == Some(other.low) || other.high.successor() == Some(self.low)
    }

    /// Returns `true` if the canonical span of `self` lies within that of `other`.
    #[inline]
    pub fn is_in(&self, other: &Self) -> bool {
        self.low >= other.low && self.high <= other.high
    }

    /// Returns `true` if `value` lies within `[low, high]`.
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.low <= value && value <= self.high
    }

    /// Returns `true` if `other` lies within `self`. Equivalent to `other.is_in(self)`.
    #[inline]
    pub fn contains_interval(&self, other: &Self) -> bool {
        other.is_in(self)
    }

    /// Membership test for a position or an interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seq_interval::interval::directed::DirectedInterval;
    /// let iv = DirectedInterval::new(1, 10);
    /// assert!(iv.contains(5));
    /// assert!(!iv.contains(12));
    /// assert!(iv.contains(DirectedInterval::new(3, 8)));
    /// assert!(!iv.contains(DirectedInterval::new(11, 20)));
    /// ```
    #[inline]
    pub fn contains<Q>(&self, query: Q) -> bool
    where
        Q: Into<Query<T>>,
    {
        query.into().is_within(self)
    }

    /// Membership test for a value of arbitrary type.
    ///
    /// Accepts `T`, `DirectedInterval<T>`, or any primitive number (compared
    /// through `f64`). Anything else is rejected with
    /// [`IntervalError::TypeMismatch`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seq_interval::{error::IntervalError, interval::directed::DirectedInterval};
    /// let iv = DirectedInterval::new(1, 10);
    /// assert_eq!(iv.contains_value(&5.0_f64), Ok(true));
    /// assert_eq!(iv.contains_value(&12_u64), Ok(false));
    /// assert!(matches!(
    ///     iv.contains_value(&"test"),
    ///     Err(IntervalError::TypeMismatch { .. })
    /// ));
    /// ```
    pub fn contains_value<V>(&self, value: &V) -> Result<bool, IntervalError>
    where
        T: 'static,
        V: Any,
    {
        let value: &dyn Any = value;
        if let Some(point) = value.downcast_ref::<T>() {
            return Ok(self.contains_point(*point));
        }
        if let Some(interval) = value.downcast_ref::<Self>() {
            return Ok(self.contains_interval(interval));
        }
        if let Some(x) = primitive_as_f64(value) {
            return Ok(match (self.low.to_f64(), self.high.to_f64()) {
                (Some(low), Some(high)) => low <= x && x <= high,
                _ => false,
            });
        }

        let err = IntervalError::TypeMismatch {
            type_name: std::any::type_name::<V>(),
        };
        tracing::trace!(interval = %self, error = %err, "membership test rejected");
        Err(err)
    }

    /// Joins two overlapping or adjacent intervals of the same direction.
    ///
    /// The result keeps the shared direction.
    ///
    /// # Errors
    ///
    /// - [`IntervalError::DirectionMismatch`] if the directions differ.
    /// - [`IntervalError::NoIntersection`] if the intervals neither overlap nor abut.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seq_interval::interval::directed::DirectedInterval;
    /// let a = DirectedInterval::new(1, 10);
    /// assert_eq!(a.union(&DirectedInterval::new(5, 15)), Ok(DirectedInterval::new(1, 15)));
    /// assert_eq!(a.union(&DirectedInterval::new(11, 20)), Ok(DirectedInterval::new(1, 20)));
    ///
    /// let b = DirectedInterval::new(10, 1);
    /// assert_eq!(b.union(&DirectedInterval::new(15, 5)), Ok(DirectedInterval::new(15, 1)));
    /// ```
    pub fn union(&self, other: &Self) -> Result<Self, IntervalError> {
        self.ensure_same_direction(other, "union")?;
        if !(self.is_intersect_with(other) || self.is_adjacent_with(other)) {
            return Err(self.rejected(other, "union", IntervalError::NoIntersection));
        }

        let low = partial_min(self.low, other.low);
        let high = partial_max(self.high, other.high);
        Ok(Self::oriented(low, high, self.direction))
    }

    /// Removes the part of `self` covered by `other`.
    ///
    /// Only single-sided differences are defined: `other` must clip one end of
    /// `self`. Returns `Ok(None)` when the operands are equal.
    ///
    /// # Errors
    ///
    /// - [`IntervalError::DirectionMismatch`] if the directions differ.
    /// - [`IntervalError::NoIntersection`] if the intervals do not overlap.
    /// - [`IntervalError::UndefinedRemainder`] if either interval lies strictly
    ///   inside the other, if `other` covers `self` without being equal to it,
    ///   or if the remainder has no unit-step representation (fractional
    ///   bounds closer than one unit).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seq_interval::{error::IntervalError, interval::directed::DirectedInterval};
    /// let a = DirectedInterval::new(1, 10);
    /// assert_eq!(a.subtract(&DirectedInterval::new(5, 15)), Ok(Some(DirectedInterval::new(1, 4))));
    /// assert_eq!(a.subtract(&a), Ok(None));
    /// assert_eq!(
    ///     a.subtract(&DirectedInterval::new(3, 8)),
    ///     Err(IntervalError::UndefinedRemainder)
    /// );
    ///
    /// let b = DirectedInterval::new(15, 5);
    /// assert_eq!(b.subtract(&DirectedInterval::new(10, 1)), Ok(Some(DirectedInterval::new(15, 11))));
    /// ```
    pub fn subtract(&self, other: &Self) -> Result<Option<Self>, IntervalError> {
        self.ensure_same_direction(other, "subtract")?;
        if !self.is_intersect_with(other) {
            return Err(self.rejected(other, "subtract", IntervalError::NoIntersection));
        }
        if self.strictly_encloses(other) || other.strictly_encloses(self) {
            return Err(self.rejected(other, "subtract", IntervalError::UndefinedRemainder));
        }
        if self == other {
            return Ok(None);
        }
        if self.is_in(other) {
            return Err(self.rejected(other, "subtract", IntervalError::UndefinedRemainder));
        }

        let (low, high) = if self.greater_or_overlaps(other) {
            let low = other
                .high
                .successor()
                .ok_or_else(|| self.rejected(other, "subtract", IntervalError::Overflow))?;
            (low, self.high)
        } else {
            let high = other
                .low
                .predecessor()
                .ok_or_else(|| self.rejected(other, "subtract", IntervalError::Overflow))?;
            (self.low, high)
        };
        // A unit step past a fractional bound can overshoot the surviving side.
        if low > high {
            return Err(self.rejected(other, "subtract", IntervalError::UndefinedRemainder));
        }
        Ok(Some(Self::oriented(low, high, self.direction)))
    }

    /// Returns the part shared by `self` and `other`.
    ///
    /// Disjoint intervals yield `Ok(None)`. If one interval contains the other,
    /// the contained one is returned unchanged, whatever its direction.
    /// Otherwise the result equals `self - (self - other)` and keeps the
    /// shared direction.
    ///
    /// # Errors
    ///
    /// [`IntervalError::DirectionMismatch`] if the intervals partially overlap
    /// and their directions differ.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seq_interval::interval::directed::DirectedInterval;
    /// let a = DirectedInterval::new(1, 10);
    /// assert_eq!(a.intersect(&DirectedInterval::new(5, 15)), Ok(Some(DirectedInterval::new(5, 10))));
    /// assert_eq!(a.intersect(&DirectedInterval::new(8, 3)), Ok(Some(DirectedInterval::new(8, 3))));
    /// assert_eq!(a.intersect(&DirectedInterval::new(11, 20)), Ok(None));
    /// ```
    pub fn intersect(&self, other: &Self) -> Result<Option<Self>, IntervalError> {
        if !self.is_intersect_with(other) {
            return Ok(None);
        }
        if self.is_in(other) {
            return Ok(Some(*self));
        }
        if other.is_in(self) {
            return Ok(Some(*other));
        }

        // Partial overlap: the double difference reduces to the overlap of the
        // canonical spans, oriented like `self`.
        self.ensure_same_direction(other, "intersect")?;
        let low = partial_max(self.low, other.low);
        let high = partial_min(self.high, other.high);
        Ok(Some(Self::oriented(low, high, self.direction)))
    }

    /// Flips the interval in place: swaps `start` and `end` and inverts the
    /// direction. The canonical bounds stay the same.
    ///
    /// A single-position interval `(x, x)` stays `Forward`, since direction
    /// is always derived from the endpoints.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seq_interval::interval::directed::DirectedInterval;
    /// let mut iv = DirectedInterval::new(1, 10);
    /// iv.reverse();
    /// assert_eq!(iv, DirectedInterval::new(10, 1));
    /// ```
    #[inline]
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.start, &mut self.end);
        self.direction = Direction::of(&self.start, &self.end);
    }

    /// Returns a reversed copy, leaving `self` untouched.
    #[inline]
    pub fn reversed(&self) -> Self {
        let mut copy = *self;
        copy.reverse();
        copy
    }

    /// `other` lies inside `self` with a gap on both sides.
    #[inline]
    fn strictly_encloses(&self, other: &Self) -> bool {
        self.low < other.low && other.high < self.high
    }

    #[inline]
    fn ensure_same_direction(
        &self,
        other: &Self,
        operation: &'static str,
    ) -> Result<(), IntervalError> {
        if self.direction == other.direction {
            Ok(())
        } else {
            Err(self.rejected(
                other,
                operation,
                IntervalError::DirectionMismatch {
                    left: self.direction,
                    right: other.direction,
                },
            ))
        }
    }

    #[cold]
    fn rejected(
        &self,
        other: &Self,
        operation: &'static str,
        err: IntervalError,
    ) -> IntervalError {
        tracing::trace!(
            operation,
            left = %self,
            right = %other,
            error = %err,
            "interval operation rejected"
        );
        err
    }
}

#[inline]
fn partial_min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

#[inline]
fn partial_max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

macro_rules! downcast_primitive {
    ($value:expr; $($t:ty),* $(,)?) => {
        $(
            if let Some(x) = $value.downcast_ref::<$t>() {
                return num_traits::ToPrimitive::to_f64(x);
            }
        )*
    };
}

fn primitive_as_f64(value: &dyn Any) -> Option<f64> {
    downcast_primitive!(
        value;
        i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
    );
    None
}

impl<T> PartialEq for DirectedInterval<T>
where
    T: Coordinate,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl<T> Eq for DirectedInterval<T> where T: Coordinate + Eq {}

impl<T> Hash for DirectedInterval<T>
where
    T: Coordinate + Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl<T> Add for DirectedInterval<T>
where
    T: Coordinate,
{
    type Output = Result<Self, IntervalError>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.union(&rhs)
    }
}

impl<T> Sub for DirectedInterval<T>
where
    T: Coordinate,
{
    type Output = Result<Option<Self>, IntervalError>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(&rhs)
    }
}

impl<T> BitAnd for DirectedInterval<T>
where
    T: Coordinate,
{
    type Output = Result<Option<Self>, IntervalError>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersect(&rhs)
    }
}

impl<T> Not for DirectedInterval<T>
where
    T: Coordinate,
{
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        self.reversed()
    }
}

impl<T> std::fmt::Debug for DirectedInterval<T>
where
    T: Coordinate,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectedInterval")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("direction", &self.direction)
            .finish()
    }
}

impl<T> std::fmt::Display for DirectedInterval<T>
where
    T: Coordinate,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.direction {
            Direction::Forward => write!(f, "{} |-----> {}", self.start, self.end),
            Direction::Backward => write!(f, "{} <-----| {}", self.end, self.start),
        }
    }
}

impl<T> RangeBounds<T> for DirectedInterval<T>
where
    T: Coordinate,
{
    fn start_bound(&self) -> Bound<&T> {
        Bound::Included(&self.low)
    }

    fn end_bound(&self) -> Bound<&T> {
        Bound::Included(&self.high)
    }
}

/// Maps `start..=end` to `start` and `end` verbatim, so `10..=1` is `Backward`.
impl<T> From<RangeInclusive<T>> for DirectedInterval<T>
where
    T: Coordinate,
{
    #[inline]
    fn from(range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

impl<T> From<(T, T)> for DirectedInterval<T>
where
    T: Coordinate,
{
    #[inline]
    fn from((start, end): (T, T)) -> Self {
        Self::new(start, end)
    }
}
