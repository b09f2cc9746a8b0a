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

//! Validated input sequences for the pair matcher.
//!
//! `PairSequence` is the only input type the matcher accepts. Its
//! constructor enforces the sequence rules eagerly and in a fixed order
//! (length below two pairs, odd length, non-positive element), so the
//! first violated rule is the one reported and the matcher itself never
//! has an error path.

use crate::index::{slots_of, PairIndex, SlotIndex};
use couplet_core::num::digits::DigitPair;
use num_traits::PrimInt;
use std::fmt::{Debug, Display};

/// The minimum number of elements a valid sequence must have (two pairs).
pub const MIN_SEQUENCE_LEN: usize = 4;

/// The error type for sequence validation.
///
/// Checks run in declaration order and stop at the first failure, so a
/// three-element sequence containing a zero reports `OddLength`, not
/// `NonPositive`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError<T> {
    /// The sequence has fewer than [`MIN_SEQUENCE_LEN`] elements.
    TooShort {
        /// The offending sequence length.
        len: usize,
    },
    /// The sequence has an odd number of elements.
    OddLength {
        /// The offending sequence length.
        len: usize,
    },
    /// An element is smaller than 1.
    NonPositive {
        /// The slot holding the offending element.
        slot: SlotIndex,
        /// The offending element.
        value: T,
    },
}

impl<T> Display for ValidationError<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooShort { len } => write!(
                f,
                "The sequence must contain at least 2 pairs of numbers, but it has {len} element(s)"
            ),
            Self::OddLength { len } => write!(
                f,
                "The sequence contains an odd quantity of numbers ({len}); pairs require an even quantity"
            ),
            Self::NonPositive { slot, value } => write!(
                f,
                "Element {value} at {slot} is not a positive integer"
            ),
        }
    }
}

impl<T> std::error::Error for ValidationError<T> where T: Display + Debug {}

/// An ordered sequence of positive integers of even length >= 4.
///
/// The invariants hold for every constructed value, which is what allows
/// [`crate::matcher::match_pairs`] to take a `&PairSequence<T>` and skip
/// revalidation entirely.
///
/// # Examples
///
/// ```rust
/// # use couplet_match::sequence::PairSequence;
///
/// let seq = PairSequence::new(vec![1, 2, 2, 1]).unwrap();
/// assert_eq!(seq.num_pairs(), 2);
///
/// assert!(PairSequence::new(vec![1, 2, 3]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairSequence<T> {
    values: Vec<T>,
}

impl<T> PairSequence<T>
where
    T: PrimInt,
{
    /// Validates `values` and wraps them into a `PairSequence`.
    ///
    /// Checks, in order: length below two pairs, odd length, any element
    /// smaller than 1. The first failed check is returned.
    pub fn new(values: Vec<T>) -> Result<Self, ValidationError<T>> {
        let len = values.len();

        if len < MIN_SEQUENCE_LEN {
            return Err(ValidationError::TooShort { len });
        }
        if len % 2 != 0 {
            return Err(ValidationError::OddLength { len });
        }
        for (slot, &value) in values.iter().enumerate() {
            if value < T::one() {
                return Err(ValidationError::NonPositive {
                    slot: SlotIndex::new(slot),
                    value,
                });
            }
        }

        Ok(Self { values })
    }

    /// Returns the number of elements in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the sequence has no elements. Always `false`
    /// for validated sequences, which have at least four.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of consecutive pairs in the sequence.
    #[inline]
    pub fn num_pairs(&self) -> usize {
        self.values.len() / 2
    }

    /// Returns the elements as a slice, in original order.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns the element at the given slot.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of bounds.
    #[inline]
    pub fn get(&self, slot: SlotIndex) -> T {
        self.values[slot.get()]
    }

    /// Returns the pair at the given pair ordinal.
    ///
    /// # Panics
    ///
    /// Panics if `pair` is out of bounds.
    #[inline]
    pub fn pair(&self, pair: PairIndex) -> DigitPair<T> {
        debug_assert!(
            pair.get() < self.num_pairs(),
            "called `PairSequence::pair` with pair index out of bounds: the pair count is {} but the index is {}",
            self.num_pairs(),
            pair.get()
        );

        let (first, second) = slots_of(pair);
        DigitPair::new(self.get(first), self.get(second))
    }

    /// Consumes the sequence and returns the underlying values.
    #[inline]
    pub fn into_inner(self) -> Vec<T> {
        self.values
    }
}
