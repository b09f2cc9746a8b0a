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

//! Textual rendering of match outcomes.
//!
//! Success renders as the fixed literal [`ALL_MATCHED_LITERAL`];
//! unmatched elements render comma-separated in original order with no
//! trailing separator. An empty unmatched list renders as the empty
//! string.

use crate::matcher::MatchOutcome;
use std::fmt::{self, Display};

/// The fixed literal produced when every pair is covered.
pub const ALL_MATCHED_LITERAL: &str = "Yes.";

impl<T> Display for MatchOutcome<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllMatched => f.write_str(ALL_MATCHED_LITERAL),
            Self::Unmatched(values) => {
                let mut first = true;
                for value in values {
                    if !first {
                        f.write_str(",")?;
                    }
                    write!(f, "{value}")?;
                    first = false;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matched_literal() {
        let outcome: MatchOutcome<i64> = MatchOutcome::AllMatched;
        assert_eq!(outcome.to_string(), "Yes.");
    }

    #[test]
    fn test_unmatched_comma_separated() {
        let outcome = MatchOutcome::Unmatched(vec![1, 2, 3, 4]);
        assert_eq!(outcome.to_string(), "1,2,3,4");
    }

    #[test]
    fn test_no_trailing_separator() {
        let outcome = MatchOutcome::Unmatched(vec![5, 6]);
        assert_eq!(outcome.to_string(), "5,6");
    }

    #[test]
    fn test_single_element() {
        let outcome = MatchOutcome::Unmatched(vec![7]);
        assert_eq!(outcome.to_string(), "7");
    }

    #[test]
    fn test_empty_unmatched_renders_empty() {
        let outcome: MatchOutcome<i64> = MatchOutcome::Unmatched(vec![]);
        assert_eq!(outcome.to_string(), "");
    }
}
