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

use crate::step::RangeStep;
use std::collections::BTreeSet;

/// An inclusive ordered range `[start, end]` with materialized elements.
///
/// The range carries its bounds separately from the elements it has
/// materialized: a freshly constructed range knows its span but holds
/// nothing, [`OrderedRange::generate`] fills it with the element type's
/// step lattice, and individual elements can be inserted or removed
/// afterwards as long as they stay within the bounds. Elements are kept
/// in a `BTreeSet`, so iteration is always ascending and membership
/// checks are logarithmic.
///
/// # Invariants
/// `start` must always be less than or equal to `end`.
///
/// # Examples
///
/// ```rust
/// # use couplet_range::range::OrderedRange;
///
/// let mut r = OrderedRange::new(1i32, 5);
/// r.generate();
/// assert_eq!(r.len(), 5);
/// assert!(r.contains(&3));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct OrderedRange<T>
where
    T: Ord,
{
    elements: BTreeSet<T>,
    start: T,
    end: T,
}

impl<T> OrderedRange<T>
where
    T: Ord + Clone,
{
    /// Creates a new range with the given bounds and no materialized
    /// elements.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub fn new(start: T, end: T) -> Self {
        assert!(
            start <= end,
            "Invalid range: start must be less than or equal to end"
        );
        Self {
            elements: BTreeSet::new(),
            start,
            end,
        }
    }

    /// Creates a new range if the bounds are ordered.
    ///
    /// Returns `None` if `start > end`.
    pub fn try_new(start: T, end: T) -> Option<Self> {
        if start <= end {
            Some(Self {
                elements: BTreeSet::new(),
                start,
                end,
            })
        } else {
            None
        }
    }

    /// Creates a range from arbitrary elements, deriving the bounds from
    /// the extrema.
    ///
    /// Returns `None` if the iterator yields nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use couplet_range::range::OrderedRange;
    ///
    /// let r = OrderedRange::from_elements(vec![4, 1, 3]).unwrap();
    /// assert_eq!((r.start(), r.end()), (&1, &4));
    /// assert_eq!(r.len(), 3);
    /// ```
    pub fn from_elements<I>(elements: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let elements: BTreeSet<T> = elements.into_iter().collect();
        let start = elements.first()?.clone();
        let end = elements.last()?.clone();
        Some(Self {
            elements,
            start,
            end,
        })
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub fn start(&self) -> &T {
        &self.start
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub fn end(&self) -> &T {
        &self.end
    }

    /// Returns `true` if `element` has been materialized in this range.
    #[inline]
    pub fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    /// Returns `true` if `element` lies within the bounds, materialized
    /// or not.
    #[inline]
    pub fn is_between(&self, element: &T) -> bool {
        *element >= self.start && *element <= self.end
    }

    /// Returns `true` if `element` lies below the lower bound.
    #[inline]
    pub fn is_before(&self, element: &T) -> bool {
        *element < self.start
    }

    /// Returns `true` if `element` lies above the upper bound.
    #[inline]
    pub fn is_after(&self, element: &T) -> bool {
        *element > self.end
    }

    /// Returns `true` if more than the two bounds have been materialized.
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.len() > 2
    }

    /// Returns the number of materialized elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if no elements have been materialized.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Inserts an element if it lies within the bounds.
    ///
    /// Returns `true` if the element was in bounds and not present
    /// before; an out-of-bounds element is refused so the materialized
    /// elements can never escape `[start, end]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use couplet_range::range::OrderedRange;
    ///
    /// let mut r = OrderedRange::new(1i32, 5);
    /// assert!(r.insert(3));
    /// assert!(!r.insert(100));
    /// ```
    #[inline]
    pub fn insert(&mut self, element: T) -> bool {
        if !self.is_between(&element) {
            return false;
        }
        self.elements.insert(element)
    }

    /// Removes an element. Returns `true` if it was present.
    #[inline]
    pub fn remove(&mut self, element: &T) -> bool {
        self.elements.remove(element)
    }

    /// Materializes every element of `iter` into this range, provided
    /// all of them lie within the bounds.
    ///
    /// Returns `true` if the elements were added. A single out-of-bounds
    /// element refuses the whole batch and leaves the range untouched.
    pub fn extend_from<I>(&mut self, iter: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let incoming: Vec<T> = iter.into_iter().collect();
        if !incoming.iter().all(|e| self.is_between(e)) {
            return false;
        }
        self.elements.extend(incoming);
        true
    }

    /// Returns a new range containing the elements of `self` that are
    /// not in `other`, with bounds tightened to the surviving extrema.
    ///
    /// When nothing survives, the receiver is returned unchanged instead
    /// of an empty range, so the result always has valid bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use couplet_range::range::OrderedRange;
    ///
    /// let mut a = OrderedRange::new(1i32, 5);
    /// a.generate();
    /// let mut b = OrderedRange::new(3i32, 7);
    /// b.generate();
    ///
    /// let diff = a.subtract(&b);
    /// assert_eq!((diff.start(), diff.end()), (&1, &2));
    /// ```
    pub fn subtract(&self, other: &Self) -> Self {
        let surviving: BTreeSet<T> = self
            .elements
            .iter()
            .filter(|e| !other.contains(e))
            .cloned()
            .collect();

        match (surviving.first(), surviving.last()) {
            (Some(first), Some(last)) => {
                let start = first.clone();
                let end = last.clone();
                Self {
                    elements: surviving,
                    start,
                    end,
                }
            }
            _ => self.clone(),
        }
    }

    /// Returns a new range containing the elements of both ranges, with
    /// bounds spanning the combined extrema.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use couplet_range::range::OrderedRange;
    ///
    /// let mut a = OrderedRange::new(1i32, 3);
    /// a.generate();
    /// let mut b = OrderedRange::new(5i32, 7);
    /// b.generate();
    ///
    /// let union = a.unite(&b);
    /// assert_eq!((union.start(), union.end()), (&1, &7));
    /// assert_eq!(union.len(), 6);
    /// ```
    pub fn unite(&self, other: &Self) -> Self {
        let mut united = self.elements.clone();
        united.extend(other.elements.iter().cloned());

        debug_assert!(
            !united.is_empty() || (self.is_empty() && other.is_empty()),
            "united element set lost elements"
        );

        match (united.first(), united.last()) {
            (Some(first), Some(last)) => {
                let start = first.clone();
                let end = last.clone();
                Self {
                    elements: united,
                    start,
                    end,
                }
            }
            // Both sides unmaterialized: keep the spanning bounds.
            _ => {
                let start = if self.start <= other.start {
                    self.start.clone()
                } else {
                    other.start.clone()
                };
                let end = if self.end >= other.end {
                    self.end.clone()
                } else {
                    other.end.clone()
                };
                Self {
                    elements: united,
                    start,
                    end,
                }
            }
        }
    }

    /// Returns an iterator over the materialized elements in ascending
    /// order.
    #[inline]
    pub fn iter(&self) -> std::collections::btree_set::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T> OrderedRange<T>
where
    T: Ord + Clone + RangeStep,
{
    /// Materializes every step-lattice point between the bounds.
    ///
    /// Replaces any previously materialized elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use couplet_range::{range::OrderedRange, total::TotalFloat};
    ///
    /// let mut r = OrderedRange::new(TotalFloat::new(1.1f64), TotalFloat::new(1.4));
    /// r.generate();
    /// assert_eq!(r.len(), 4);
    /// assert!(r.contains(&TotalFloat::new(1.3)));
    /// ```
    pub fn generate(&mut self) {
        self.elements = T::step_points(self.start.clone(), self.end.clone())
            .into_iter()
            .collect();
    }
}

impl<'a, T> IntoIterator for &'a OrderedRange<T>
where
    T: Ord,
{
    type Item = &'a T;
    type IntoIter = std::collections::btree_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T> IntoIterator for OrderedRange<T>
where
    T: Ord,
{
    type Item = T;
    type IntoIter = std::collections::btree_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<T> std::fmt::Debug for OrderedRange<T>
where
    T: Ord + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderedRange")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("elements", &self.elements)
            .finish()
    }
}

impl<T> std::fmt::Display for OrderedRange<T>
where
    T: Ord + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for element in &self.elements {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{element}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::total::TotalFloat;

    fn tf(value: f32) -> TotalFloat<f32> {
        TotalFloat::new(value)
    }

    #[test]
    fn test_construction() {
        let r = OrderedRange::new(1i32, 5);
        assert_eq!((r.start(), r.end()), (&1, &5));
        assert!(r.is_empty());
        assert!(!r.is_filled());
    }

    #[test]
    #[should_panic(expected = "Invalid range")]
    fn test_new_panics_on_reversed_bounds() {
        OrderedRange::new(5i32, 1);
    }

    #[test]
    fn test_try_new() {
        assert!(OrderedRange::try_new(1i32, 5).is_some());
        assert!(OrderedRange::try_new(5i32, 5).is_some());
        assert!(OrderedRange::try_new(5i32, 1).is_none());
    }

    #[test]
    fn test_from_elements() {
        let r = OrderedRange::from_elements(vec![4, 1, 3, 1]).unwrap();
        assert_eq!((r.start(), r.end()), (&1, &4));
        assert_eq!(r.len(), 3); // duplicates collapse
        assert!(r.is_filled());
    }

    #[test]
    fn test_from_elements_empty() {
        assert!(OrderedRange::<i32>::from_elements(vec![]).is_none());
    }

    #[test]
    fn test_generate_integers() {
        let mut r = OrderedRange::new(1i32, 5);
        r.generate();
        let collected: Vec<i32> = r.iter().copied().collect();
        assert_eq!(collected, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_generate_floats() {
        let mut r = OrderedRange::new(TotalFloat::new(1.1f64), TotalFloat::new(1.5));
        r.generate();
        let collected: Vec<f64> = r.iter().map(|e| e.get()).collect();
        assert_eq!(collected, vec![1.1, 1.2, 1.3, 1.4, 1.5]);
    }

    #[test]
    fn test_bounds_queries() {
        let r = OrderedRange::new(2i32, 8);
        assert!(r.is_between(&2));
        assert!(r.is_between(&5));
        assert!(r.is_between(&8));
        assert!(r.is_before(&1));
        assert!(r.is_after(&9));
        assert!(!r.is_before(&2));
        assert!(!r.is_after(&8));
    }

    #[test]
    fn test_contains_is_membership_not_bounds() {
        let mut r = OrderedRange::new(1i32, 5);
        assert!(!r.contains(&3)); // in bounds, not materialized
        r.generate();
        assert!(r.contains(&3));
    }

    #[test]
    fn test_insert_and_remove() {
        let mut r = OrderedRange::new(1i32, 10);
        assert!(r.insert(4));
        assert!(!r.insert(4));
        assert!(r.remove(&4));
        assert!(!r.remove(&4));
    }

    #[test]
    fn test_insert_refuses_out_of_bounds() {
        let mut r = OrderedRange::new(1i32, 5);
        assert!(!r.insert(100));
        assert!(!r.insert(0));
        assert!(r.is_empty());
        assert!(r.insert(5)); // bounds are inclusive
    }

    #[test]
    fn test_extend_from() {
        let mut r = OrderedRange::new(1i32, 10);
        assert!(r.extend_from(vec![2, 4, 6]));
        assert_eq!(r.len(), 3);
        assert!(r.contains(&4));
    }

    #[test]
    fn test_extend_from_refuses_whole_batch_on_out_of_bounds() {
        let mut r = OrderedRange::new(1i32, 10);
        assert!(!r.extend_from(vec![2, 4, 11]));
        assert!(r.is_empty());
    }

    #[test]
    fn test_subtract_overlapping() {
        let mut a = OrderedRange::new(1i32, 5);
        a.generate();
        let mut b = OrderedRange::new(3i32, 7);
        b.generate();

        let diff = a.subtract(&b);
        let collected: Vec<i32> = diff.iter().copied().collect();
        assert_eq!(collected, vec![1, 2]);
        assert_eq!((diff.start(), diff.end()), (&1, &2));
    }

    #[test]
    fn test_subtract_everything_returns_receiver() {
        let mut a = OrderedRange::new(1i32, 3);
        a.generate();
        let mut b = OrderedRange::new(1i32, 5);
        b.generate();

        let diff = a.subtract(&b);
        assert_eq!(diff, a);
    }

    #[test]
    fn test_unite() {
        let mut a = OrderedRange::new(1i32, 3);
        a.generate();
        let mut b = OrderedRange::new(3i32, 5);
        b.generate();

        let union = a.unite(&b);
        let collected: Vec<i32> = union.iter().copied().collect();
        assert_eq!(collected, vec![1, 2, 3, 4, 5]);
        assert_eq!((union.start(), union.end()), (&1, &5));
    }

    #[test]
    fn test_unite_unmaterialized_keeps_spanning_bounds() {
        let a = OrderedRange::new(1i32, 3);
        let b = OrderedRange::new(5i32, 9);
        let union = a.unite(&b);
        assert!(union.is_empty());
        assert_eq!((union.start(), union.end()), (&1, &9));
    }

    #[test]
    fn test_float_scenario_overlapping_ranges() {
        let mut range1 = OrderedRange::new(tf(1.1), tf(5.9));
        range1.generate();
        let mut range2 = OrderedRange::new(tf(3.1), tf(7.9));
        range2.generate();

        assert_eq!(range1.len(), 49); // 1.1, 1.2, ..., 5.9
        assert_eq!(range2.len(), 49); // 3.1, ..., 7.9

        let subtracted = range1.subtract(&range2);
        assert_eq!((subtracted.start(), subtracted.end()), (&tf(1.1), &tf(3.0)));

        let united = range2.unite(&range1);
        assert_eq!((united.start(), united.end()), (&tf(1.1), &tf(7.9)));

        assert!(range1.is_between(&tf(4.1)));
        assert!(!range2.insert(tf(4.1))); // already materialized
    }

    #[test]
    fn test_iteration_is_ascending() {
        let r = OrderedRange::from_elements(vec![5, 1, 3]).unwrap();
        let collected: Vec<i32> = (&r).into_iter().copied().collect();
        assert_eq!(collected, vec![1, 3, 5]);
    }

    #[test]
    fn test_display() {
        let mut r = OrderedRange::new(1i32, 3);
        r.generate();
        assert_eq!(r.to_string(), "1,2,3");
    }

    #[test]
    fn test_display_empty() {
        let r = OrderedRange::new(1i32, 3);
        assert_eq!(r.to_string(), "");
    }
}
