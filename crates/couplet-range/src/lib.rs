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

//! # Couplet Range
//!
//! An inclusive ordered-range container `[start, end]` with set
//! operations and stepped numeric generation.
//!
//! ## Modules
//!
//! - `range`: `OrderedRange<T>`, a bounds-carrying container over a
//!   `BTreeSet` with membership and bounds queries, subtract/unite set
//!   operations, and ascending iteration.
//! - `step`: The `RangeStep` trait that defines the lattice of points a
//!   range materializes — unit steps for the primitive integers, tenth
//!   steps for `f32`/`f64`.
//! - `total`: `TotalFloat<T>`, a transparent wrapper giving floats the
//!   total order the backing `BTreeSet` requires.
//!
//! ## Design
//!
//! Whether a range can be generated is a property of the element type,
//! so generation is gated by a trait bound rather than inspected at
//! runtime: a non-steppable element type simply has no `generate`.

pub mod range;
pub mod step;
pub mod total;
