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

//! The two-digit reading of an ordered pair of integers.
//!
//! Two consecutive sequence elements `(a, b)` are read as the value
//! `a * 10 + b`; read in reverse order they yield the mirror value
//! `b * 10 + a`. A pair mirrors another pair when its direct value
//! equals the other's mirror value, which makes the relation directional:
//! `(a, b)` mirrors `(b, a)`, not itself.
//!
//! The elements are not restricted to single decimal digits; the reading
//! is defined for any pair of integers the element type can multiply by
//! ten without overflow.

use num_traits::PrimInt;

#[inline]
fn ten<T: PrimInt>() -> T {
    T::from(10).expect("pair value arithmetic requires a type that can represent 10")
}

/// Returns the direct two-digit reading `first * 10 + second`.
///
/// # Examples
///
/// ```rust
/// # use couplet_core::num::digits::pair_value;
///
/// assert_eq!(pair_value(1, 2), 12);
/// assert_eq!(pair_value(4, 3), 43);
/// ```
#[inline]
pub fn pair_value<T: PrimInt>(first: T, second: T) -> T {
    first * ten() + second
}

/// Returns the reversed two-digit reading `second * 10 + first`.
///
/// # Examples
///
/// ```rust
/// # use couplet_core::num::digits::mirror_value;
///
/// assert_eq!(mirror_value(1, 2), 21);
/// assert_eq!(mirror_value(4, 3), 34);
/// ```
#[inline]
pub fn mirror_value<T: PrimInt>(first: T, second: T) -> T {
    second * ten() + first
}

/// An ordered pair of integers together with its two-digit readings.
///
/// # Examples
///
/// ```rust
/// # use couplet_core::num::digits::DigitPair;
///
/// let a = DigitPair::new(1, 2);
/// let b = DigitPair::new(2, 1);
/// assert_eq!(a.value(), 12);
/// assert_eq!(b.mirror_value(), 12);
/// assert!(a.mirrors(b));
/// assert!(!a.mirrors(a));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitPair<T> {
    first: T,
    second: T,
}

impl<T> DigitPair<T>
where
    T: PrimInt,
{
    /// Creates a new `DigitPair` from its two elements in sequence order.
    #[inline]
    pub fn new(first: T, second: T) -> Self {
        Self { first, second }
    }

    /// Returns the first element of the pair.
    #[inline]
    pub fn first(&self) -> T {
        self.first
    }

    /// Returns the second element of the pair.
    #[inline]
    pub fn second(&self) -> T {
        self.second
    }

    /// Returns the direct reading `first * 10 + second`.
    #[inline]
    pub fn value(&self) -> T {
        pair_value(self.first, self.second)
    }

    /// Returns the reversed reading `second * 10 + first`.
    #[inline]
    pub fn mirror_value(&self) -> T {
        mirror_value(self.first, self.second)
    }

    /// Returns the pair with its elements swapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use couplet_core::num::digits::DigitPair;
    ///
    /// assert_eq!(DigitPair::new(1, 2).mirror(), DigitPair::new(2, 1));
    /// ```
    #[inline]
    pub fn mirror(&self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }

    /// Returns `true` if `other`, read in reverse, equals this pair's
    /// direct reading.
    ///
    /// The relation is directional: `(a, b)` mirrors `(b, a)`, and a pair
    /// mirrors itself only when both elements are equal.
    #[inline]
    pub fn mirrors(&self, other: Self) -> bool {
        self.value() == other.mirror_value()
    }
}

impl<T> std::fmt::Debug for DigitPair<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DigitPair")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

impl<T> std::fmt::Display for DigitPair<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

impl<T> From<(T, T)> for DigitPair<T>
where
    T: PrimInt,
{
    #[inline]
    fn from((first, second): (T, T)) -> Self {
        Self::new(first, second)
    }
}
