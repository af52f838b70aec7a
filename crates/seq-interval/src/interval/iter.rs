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
    interval::{directed::DirectedInterval, direction::Direction},
    num::coordinate::Coordinate,
};
use num_traits::PrimInt;
use std::iter::FusedIterator;

/// An iterator over the positions of an integral `DirectedInterval`, walking
/// from `start` to `end` in the interval's direction.
///
/// # Examples
///
/// ```rust
/// # use seq_interval::interval::directed::DirectedInterval;
/// let forward: Vec<_> = DirectedInterval::new(1, 4).iter().collect();
/// assert_eq!(forward, vec![1, 2, 3, 4]);
///
/// let backward: Vec<_> = DirectedInterval::new(4, 1).iter().collect();
/// assert_eq!(backward, vec![4, 3, 2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct DirectedIntervalIterator<T>
where
    T: PrimInt + Coordinate,
{
    front: T,
    back: T,
    direction: Direction,
    exhausted: bool,
}

impl<T> DirectedIntervalIterator<T>
where
    T: PrimInt + Coordinate,
{
    #[inline]
    fn step(&self, value: T) -> T {
        match self.direction {
            Direction::Forward => value + T::one(),
            Direction::Backward => value - T::one(),
        }
    }

    #[inline]
    fn step_back(&self, value: T) -> T {
        match self.direction {
            Direction::Forward => value - T::one(),
            Direction::Backward => value + T::one(),
        }
    }
}

impl<T> Iterator for DirectedIntervalIterator<T>
where
    T: PrimInt + Coordinate,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.front;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.front = self.step(self.front);
        }
        Some(result)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for DirectedIntervalIterator<T>
where
    T: PrimInt + Coordinate,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.back;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.back = self.step_back(self.back);
        }
        Some(result)
    }
}

impl<T> ExactSizeIterator for DirectedIntervalIterator<T>
where
    T: PrimInt + Coordinate,
{
    fn len(&self) -> usize {
        if self.exhausted {
            return 0;
        }
        let dist = if self.front <= self.back {
            self.back - self.front
        } else {
            self.front - self.back
        };
        dist.to_usize()
            .and_then(|d| d.checked_add(1))
            .expect("DirectedIntervalIterator: remaining length exceeds usize::MAX")
    }
}

impl<T> FusedIterator for DirectedIntervalIterator<T> where T: PrimInt + Coordinate {}

impl<T> DirectedInterval<T>
where
    T: PrimInt + Coordinate,
{
    /// Creates an iterator over the positions of the interval, in direction order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seq_interval::interval::directed::DirectedInterval;
    /// let iv = DirectedInterval::new(3, 1);
    /// let mut it = iv.iter();
    /// assert_eq!(it.len(), 3);
    /// assert_eq!(it.next(), Some(3));
    /// assert_eq!(it.next_back(), Some(1));
    /// ```
    #[inline]
    pub fn iter(&self) -> DirectedIntervalIterator<T> {
        DirectedIntervalIterator {
            front: self.start(),
            back: self.end(),
            direction: self.direction(),
            exhausted: false,
        }
    }
}

impl<T> IntoIterator for DirectedInterval<T>
where
    T: PrimInt + Coordinate,
{
    type Item = T;
    type IntoIter = DirectedIntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &DirectedInterval<T>
where
    T: PrimInt + Coordinate,
{
    type Item = T;
    type IntoIter = DirectedIntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
