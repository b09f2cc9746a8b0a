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

//! # Couplet Core
//!
//! Foundational numeric and indexing primitives for the Couplet
//! pair-matching ecosystem. This crate consolidates the small, reusable
//! building blocks that the domain crates (`couplet-match`,
//! `couplet-range`) are built on.
//!
//! ## Modules
//!
//! - `num`: Two-digit pair value arithmetic (`pair_value`,
//!   `mirror_value`, `DigitPair<T>`) generic over `num_traits::PrimInt`,
//!   and associated-constant traits (`PlusOne`) for stepping generic
//!   integer code without `FromPrimitive` detours.
//! - `index`: Phantom-tagged, strongly typed indices (`TypedIndex<T>`)
//!   that keep distinct index spaces (element slots vs. pair ordinals)
//!   from being mixed up at compile time.
//!
//! ## Purpose
//!
//! Sequence-matching code juggles two index spaces (slots and pairs) and
//! one small piece of arithmetic (the two-digit reading of a pair).
//! Centralizing both removes the classic off-by-one and index-mixing
//! bugs from the domain crates while keeping runtime overhead at zero.
//!
//! Refer to each module for detailed APIs and examples.

pub mod index;
pub mod num;
