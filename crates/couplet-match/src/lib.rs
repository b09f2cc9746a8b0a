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

//! # Couplet Match
//!
//! **Mirrored-pair matching over digit sequences.**
//!
//! A sequence of positive integers is read in consecutive pairs; the pair
//! `(a, b)` is read as the two-digit value `a * 10 + b`. Every pair must
//! have a distinct *mirror* elsewhere in the sequence: a later pair whose
//! reversed reading equals the current pair's direct reading. The matcher
//! reports either global success or the elements that belong to no
//! confirmed mirrored pair, in original order.
//!
//! ## Architecture
//!
//! The crate separates the boundary from the algorithm:
//!
//! * **`loading`**: Turns comma-separated text into a `Vec` of integers,
//!   surfacing absent input and malformed tokens as typed errors.
//! * **`sequence`**: `PairSequence`, the validated input type. Length and
//!   positivity rules are enforced at construction, so the matcher never
//!   sees an invalid sequence.
//! * **`index`**: Typed index aliases for the two index spaces in play
//!   (element slots and pair ordinals).
//! * **`matcher`**: The pairing algorithm itself, with per-call coverage
//!   marks that never escape the invocation.
//! * **`report`**: Textual rendering of a `MatchOutcome`.
//! * **`evaluate`**: End-to-end composition of the above for callers that
//!   start from raw text.
//!
//! ## Example
//!
//! ```rust
//! use couplet_match::evaluate::evaluate_str;
//!
//! let outcome = evaluate_str::<i64>("1,2,2,1").unwrap();
//! assert_eq!(outcome.to_string(), "Yes.");
//!
//! let outcome = evaluate_str::<i64>("1,2,3,4").unwrap();
//! assert_eq!(outcome.to_string(), "1,2,3,4");
//! ```

pub mod evaluate;
pub mod index;
pub mod loading;
pub mod matcher;
pub mod report;
pub mod sequence;
