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

use std::fmt::Display;

/// The orientation of a directed interval.
///
/// `Forward` when `start <= end`, `Backward` otherwise. Displays as `+`/`-`,
/// the strand notation used for sequence coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Derives the direction of the pair `(start, end)`.
    ///
    /// Ties are `Forward`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seq_interval::interval::direction::Direction;
    /// assert_eq!(Direction::of(&1, &10), Direction::Forward);
    /// assert_eq!(Direction::of(&4, &4), Direction::Forward);
    /// assert_eq!(Direction::of(&10, &1), Direction::Backward);
    /// ```
    #[inline]
    pub fn of<T: PartialOrd>(start: &T, end: &T) -> Self {
        if start <= end {
            Self::Forward
        } else {
            Self::Backward
        }
    }

    /// Returns the opposite direction.
    #[inline]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    #[inline]
    pub const fn is_forward(self) -> bool {
        matches!(self, Self::Forward)
    }

    #[inline]
    pub const fn is_backward(self) -> bool {
        matches!(self, Self::Backward)
    }
}

impl std::ops::Not for Direction {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        self.reversed()
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = match self {
            Self::Forward => "+",
            Self::Backward => "-",
        };
        write!(f, "{sign}")
    }
}
