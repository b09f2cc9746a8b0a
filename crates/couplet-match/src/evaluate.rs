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

//! End-to-end evaluation: text in, outcome out.
//!
//! Composes the loader, the validator, and the matcher for callers that
//! start from a raw comma-separated line. Both failure stages are folded
//! into one error type so a caller can report a single diagnostic and
//! stop, which is all the boundary ever does: no retry, no partial
//! result.

use crate::{
    loading::{SequenceLoader, SequenceLoaderError},
    matcher::{match_pairs, MatchOutcome},
    sequence::{PairSequence, ValidationError},
};
use num_traits::PrimInt;
use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

/// The error type for end-to-end evaluation.
#[derive(Debug)]
pub enum EvaluateError<T> {
    /// Loading the input failed before validation could run.
    Load(SequenceLoaderError),
    /// The loaded sequence violated a sequence rule.
    Invalid(ValidationError<T>),
}

impl<T> Display for EvaluateError<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load(e) => write!(f, "{e}"),
            Self::Invalid(e) => write!(f, "{e}"),
        }
    }
}

impl<T> std::error::Error for EvaluateError<T> where T: Display + Debug {}

impl<T> From<SequenceLoaderError> for EvaluateError<T> {
    fn from(e: SequenceLoaderError) -> Self {
        Self::Load(e)
    }
}

impl<T> From<ValidationError<T>> for EvaluateError<T> {
    fn from(e: ValidationError<T>) -> Self {
        Self::Invalid(e)
    }
}

/// Loads, validates, and matches a comma-separated sequence.
///
/// # Examples
///
/// ```rust
/// # use couplet_match::evaluate::evaluate_str;
///
/// assert_eq!(evaluate_str::<i64>("1,2,2,1").unwrap().to_string(), "Yes.");
/// assert!(evaluate_str::<i64>("1,2,x,4").is_err());
/// ```
pub fn evaluate_str<T>(input: &str) -> Result<MatchOutcome<T>, EvaluateError<T>>
where
    T: PrimInt + FromStr,
{
    let values = SequenceLoader::new().from_str(input)?;
    let sequence = PairSequence::new(values)?;
    Ok(match_pairs(&sequence))
}
