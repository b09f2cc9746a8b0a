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

//! Step lattices for range generation.
//!
//! `RangeStep` defines which points an `OrderedRange` materializes
//! between its bounds. Integers step by one. Floats step by a tenth,
//! walking an integer lattice of tenths so repeated float addition
//! cannot accumulate drift; the start bound is first rounded to the
//! nearest tenth so the walk begins on the lattice.

use couplet_core::num::constants::PlusOne;

/// Element types whose ranges can be materialized point by point.
pub trait RangeStep: Sized {
    /// Returns every lattice point from `start` to `end`, inclusive, in
    /// ascending order. An empty `Vec` when `start > end`.
    fn step_points(start: Self, end: Self) -> Vec<Self>;
}

macro_rules! impl_range_step_for_int {
    ($t:ty) => {
        impl RangeStep for $t {
            fn step_points(start: Self, end: Self) -> Vec<Self> {
                let mut points = Vec::new();
                let mut current = start;
                while current <= end {
                    points.push(current);
                    // Stop before overflowing at the type's maximum.
                    if current == end {
                        break;
                    }
                    current += Self::PLUS_ONE;
                }
                points
            }
        }
    };
}

impl_range_step_for_int!(i8);
impl_range_step_for_int!(u8);
impl_range_step_for_int!(i16);
impl_range_step_for_int!(u16);
impl_range_step_for_int!(i32);
impl_range_step_for_int!(u32);
impl_range_step_for_int!(i64);
impl_range_step_for_int!(u64);
impl_range_step_for_int!(i128);
impl_range_step_for_int!(u128);
impl_range_step_for_int!(isize);
impl_range_step_for_int!(usize);

macro_rules! impl_range_step_for_float {
    ($t:ty) => {
        impl RangeStep for $t {
            fn step_points(start: Self, end: Self) -> Vec<Self> {
                // Snap the start to the nearest tenth, then walk whole
                // tenths.
                let mut tenths = (start * 10.0).round() as i64;
                let mut points = Vec::new();
                loop {
                    let value = tenths as $t / 10.0;
                    if value > end {
                        break;
                    }
                    points.push(value);
                    tenths += 1;
                }
                points
            }
        }
    };
}

impl_range_step_for_float!(f32);
impl_range_step_for_float!(f64);
