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

//! # Strongly Typed Indices (Zero-Cost)
//!
//! Phantom-typed wrappers around `usize` to prevent mixing indices from
//! different domains (e.g., element slots vs. pair ordinals).
//! `TypedIndex<T>` carries a tag type `T: TypedIndexTag` that encodes
//! intent at the type level while compiling down to a transparent
//! `usize`.
//!
//! Sequence matching walks two index spaces at once: the position of an
//! element in the sequence and the ordinal of the pair it belongs to.
//! The two are related by a factor of two, which is exactly the kind of
//! relationship a raw `usize` lets you get wrong silently.
//!
//! ## Usage
//!
//! ```rust
//! use couplet_core::index::{TypedIndex, TypedIndexTag};
//!
//! #[derive(Clone)]
//! struct SlotTag;
//! impl TypedIndexTag for SlotTag { const NAME: &'static str = "SlotIndex"; }
//!
//! type SlotIndex = TypedIndex<SlotTag>;
//! let s = SlotIndex::new(3);
//! assert_eq!(s.get(), 3);
//! assert_eq!(format!("{}", s), "SlotIndex(3)");
//! ```

/// A trait to tag typed indices with a name for debugging and display
/// purposes.
pub trait TypedIndexTag: Clone {
    const NAME: &'static str;
}

/// A strongly typed index associated with a specific tag type `T`.
///
/// Wraps a `usize` and uses a phantom type parameter to keep indices of
/// different domains apart at compile time.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedIndex<T> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T> TypedIndex<T> {
    /// Creates a new `TypedIndex` with the given `usize` index.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the underlying `usize` index.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }
}

impl<T> std::ops::Add<usize> for TypedIndex<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: usize) -> Self::Output {
        Self::new(self.index + rhs)
    }
}

impl<T> From<usize> for TypedIndex<T> {
    #[inline]
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl<T> From<TypedIndex<T>> for usize {
    #[inline]
    fn from(index: TypedIndex<T>) -> Self {
        index.get()
    }
}

impl<T> std::fmt::Display for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> std::fmt::Debug for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}
