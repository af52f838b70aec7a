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

use crate::interval::direction::Direction;
use std::fmt::Display;

/// The error type for operations on a `DirectedInterval`.
///
/// Every variant describes a rejected call. The operands of the failed call
/// are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalError {
    /// A membership test received a value that is neither numeric nor an interval.
    TypeMismatch {
        /// The name of the rejected type.
        type_name: &'static str,
    },
    /// The operands of a combinator point in different directions.
    DirectionMismatch {
        /// Direction of the left-hand operand.
        left: Direction,
        /// Direction of the right-hand operand.
        right: Direction,
    },
    /// The operands neither overlap nor (where allowed) abut.
    NoIntersection,
    /// One operand lies strictly inside the other, so the difference would be
    /// two disjoint pieces.
    UndefinedRemainder,
    /// A result endpoint is not representable in the coordinate type.
    Overflow,
}

impl Display for IntervalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { type_name } => write!(
                f,
                "Type mismatch: expected a numeric value or an interval, got {type_name}"
            ),
            Self::DirectionMismatch { left, right } => write!(
                f,
                "Direction mismatch: intervals must share a direction ({left} vs {right})"
            ),
            Self::NoIntersection => write!(f, "Intervals have no intersection"),
            Self::UndefinedRemainder => write!(
                f,
                "Difference is undefined: one interval lies strictly inside the other"
            ),
            Self::Overflow => write!(f, "Interval endpoint overflows the coordinate type"),
        }
    }
}

impl std::error::Error for IntervalError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = IntervalError::DirectionMismatch {
            left: Direction::Forward,
            right: Direction::Backward,
        };
        assert_eq!(
            err.to_string(),
            "Direction mismatch: intervals must share a direction (+ vs -)"
        );

        let err = IntervalError::TypeMismatch { type_name: "&str" };
        assert!(err.to_string().ends_with("got &str"));
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&IntervalError::NoIntersection);
    }
}
