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

//! Totally ordered float wrapper.
//!
//! `OrderedRange` stores its elements in a `BTreeSet`, which requires
//! `Ord`. IEEE floats only provide a partial order, so float ranges go
//! through `TotalFloat<T>`, a transparent wrapper that orders by
//! `total_cmp`. NaN sorts after every number under that order; range
//! bounds are expected to be ordinary finite values.

use crate::step::RangeStep;
use std::cmp::Ordering;

/// Float primitives that expose IEEE 754 `totalOrder`.
pub trait TotalOrder: Copy {
    fn total_cmp(&self, other: &Self) -> Ordering;
}

impl TotalOrder for f32 {
    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        f32::total_cmp(self, other)
    }
}

impl TotalOrder for f64 {
    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }
}

/// A transparent float wrapper with a total order.
///
/// # Examples
///
/// ```rust
/// # use couplet_range::total::TotalFloat;
///
/// let a = TotalFloat::new(1.1f64);
/// let b = TotalFloat::new(2.2f64);
/// assert!(a < b);
/// assert_eq!(a.get(), 1.1);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct TotalFloat<T>(T);

impl<T> TotalFloat<T>
where
    T: TotalOrder,
{
    /// Wraps a float value.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Returns the wrapped float value.
    #[inline]
    pub const fn get(&self) -> T {
        self.0
    }
}

impl<T> PartialEq for TotalFloat<T>
where
    T: TotalOrder,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl<T> Eq for TotalFloat<T> where T: TotalOrder {}

impl<T> PartialOrd for TotalFloat<T>
where
    T: TotalOrder,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TotalFloat<T>
where
    T: TotalOrder,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl<T> From<T> for TotalFloat<T>
where
    T: TotalOrder,
{
    #[inline]
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> std::fmt::Debug for TotalFloat<T>
where
    T: TotalOrder + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TotalFloat({:?})", self.0)
    }
}

impl<T> std::fmt::Display for TotalFloat<T>
where
    T: TotalOrder + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<T> RangeStep for TotalFloat<T>
where
    T: TotalOrder + RangeStep,
{
    fn step_points(start: Self, end: Self) -> Vec<Self> {
        T::step_points(start.0, end.0)
            .into_iter()
            .map(Self)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_order() {
        assert!(TotalFloat::new(1.0f64) < TotalFloat::new(2.0));
        assert_eq!(TotalFloat::new(1.5f32), TotalFloat::new(1.5));
    }

    #[test]
    fn test_nan_sorts_last() {
        let nan = TotalFloat::new(f64::NAN);
        let big = TotalFloat::new(f64::MAX);
        assert!(big < nan);
        assert_eq!(nan, nan);
    }

    #[test]
    fn test_step_points_delegate() {
        let points = TotalFloat::step_points(TotalFloat::new(1.1f64), TotalFloat::new(1.3));
        let raw: Vec<f64> = points.into_iter().map(|p| p.get()).collect();
        assert_eq!(raw, vec![1.1, 1.2, 1.3]);
    }

    #[test]
    fn test_display() {
        assert_eq!(TotalFloat::new(1.25f64).to_string(), "1.25");
    }
}
