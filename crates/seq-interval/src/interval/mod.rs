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

//! # Directed Intervals
//!
//! An interval over an ordered numeric domain that also carries an
//! orientation, such as a feature on the forward or reverse strand of a
//! sequence, or a signed span.
//!
//! ```text
//!     |------------>        direction: +
//!     start        end
//!
//!     <------------|        direction: -
//!     end          start
//! ```
//!
//! ## Submodules
//!
//! - `direction`: The `Direction` (`Forward`/`Backward`) derived from the endpoints.
//! - `directed`: `DirectedInterval<T>`, its predicates (ordering, intersection,
//!   adjacency, containment), combinators (`union`, `subtract`, `intersect`)
//!   and the in-place `reverse`.
//! - `query`: The `Query<T>` argument of membership tests.
//! - `iter`: Position iteration in direction order for integral domains.
//!
//! Ordering and overlap predicates only look at the canonical span
//! `[min(start, end), max(start, end)]`. Equality and the combinators also
//! compare orientation.

pub mod directed;
pub mod direction;
pub mod iter;
pub mod query;
