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

//! # Seq Interval
//!
//! Directed intervals over signed integer and floating point coordinates.
//! A `DirectedInterval` spans every position between its two endpoints and
//! points from `start` towards `end`; the direction is derived, never stored
//! independently.
//!
//! ## Modules
//!
//! - `interval`: The `DirectedInterval` value type, its `Direction`, the
//!   membership `Query`, and position iteration.
//! - `num`: The `Coordinate` trait describing admissible endpoint types.
//! - `error`: `IntervalError`, returned by combinators and typed membership
//!   tests.
//!
//! ## Usage
//!
//! ```rust
//! use seq_interval::DirectedInterval;
//!
//! let gene = DirectedInterval::new(1, 10);
//! let read = DirectedInterval::new(5, 15);
//!
//! assert_eq!(gene + read, Ok(DirectedInterval::new(1, 15)));
//! assert_eq!(gene - read, Ok(Some(DirectedInterval::new(1, 4))));
//! assert_eq!(gene & read, Ok(Some(DirectedInterval::new(5, 10))));
//!
//! let mut minus = gene;
//! minus.reverse();
//! assert_eq!(minus.to_string(), "1 <-----| 10");
//! ```
//!
//! Rejected operations emit `tracing` events at `TRACE` level; the crate
//! installs no subscriber.

pub mod error;
pub mod interval;
pub mod num;

pub use error::IntervalError;
pub use interval::{directed::DirectedInterval, direction::Direction, query::Query};
