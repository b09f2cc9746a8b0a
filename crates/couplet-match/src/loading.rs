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

//! Input loader for separator-delimited integer sequences.
//!
//! This module turns a comma-separated line of integers into a `Vec<T>`,
//! the raw material for a validated `PairSequence`. It deliberately does
//! *not* enforce sequence rules (length, positivity); those belong to the
//! validator. The loader's job is purely token-to-integer conversion,
//! with absent input and malformed tokens surfaced as typed errors
//! instead of exceptions-for-control-flow.
//!
//! The loader accepts string slices, raw readers, and buffered readers,
//! making it convenient for tests, tooling, and piped input alike.

use std::{
    fmt::Display,
    io::{BufRead, BufReader, Read},
    str::FromStr,
};

/// The error type for the sequence loading process.
#[derive(Debug)]
pub enum SequenceLoaderError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// The input contained no tokens at all.
    MissingInput,
    /// A token could not be parsed into the expected integer type.
    Parse(ParseTokenError),
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "i64").
    pub type_name: &'static str,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse token '{}' as type {}",
            self.token, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

impl Display for SequenceLoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::MissingInput => write!(f, "No input sequence was provided"),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SequenceLoaderError {}

impl From<std::io::Error> for SequenceLoaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseTokenError> for SequenceLoaderError {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

/// A configurable loader for separator-delimited integer sequences.
///
/// Tokens are split on the configured separator (`,` by default) and
/// trimmed before parsing, so `"1, 2 ,3"` and `"1,2,3"` load the same
/// sequence. An input consisting only of whitespace is reported as
/// [`SequenceLoaderError::MissingInput`].
///
/// # Examples
///
/// ```rust
/// # use couplet_match::loading::SequenceLoader;
///
/// let loader = SequenceLoader::new();
/// let values: Vec<i64> = loader.from_str("1, 2, 2, 1").unwrap();
/// assert_eq!(values, vec![1, 2, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceLoader {
    separator: char,
}

impl Default for SequenceLoader {
    fn default() -> Self {
        Self { separator: ',' }
    }
}

impl SequenceLoader {
    /// Creates a new `SequenceLoader` with the default `,` separator.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the token separator.
    #[inline]
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Loads a sequence from a string slice.
    pub fn from_str<T>(&self, s: &str) -> Result<Vec<T>, SequenceLoaderError>
    where
        T: FromStr,
    {
        if s.trim().is_empty() {
            return Err(SequenceLoaderError::MissingInput);
        }

        s.split(self.separator)
            .map(|raw| {
                let token = raw.trim();
                token.parse::<T>().map_err(|_| {
                    SequenceLoaderError::Parse(ParseTokenError {
                        token: token.to_owned(),
                        type_name: std::any::type_name::<T>(),
                    })
                })
            })
            .collect()
    }

    /// Loads a sequence from a type implementing `BufRead`.
    ///
    /// The entire stream is consumed; line breaks are treated as ordinary
    /// whitespace around tokens.
    pub fn from_bufread<T, R>(&self, mut rdr: R) -> Result<Vec<T>, SequenceLoaderError>
    where
        T: FromStr,
        R: BufRead,
    {
        let mut buf = String::new();
        rdr.read_to_string(&mut buf)?;
        self.from_str(&buf)
    }

    /// Loads a sequence from a generic reader.
    #[inline]
    pub fn from_reader<T, R>(&self, r: R) -> Result<Vec<T>, SequenceLoaderError>
    where
        T: FromStr,
        R: Read,
    {
        self.from_bufread(BufReader::new(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_comma_separated_integers() {
        let loader = SequenceLoader::new();
        let values: Vec<i64> = loader.from_str("1,2,2,1").expect("Failed to load");
        assert_eq!(values, vec![1, 2, 2, 1]);
    }

    #[test]
    fn test_tokens_are_trimmed() {
        let loader = SequenceLoader::new();
        let values: Vec<i64> = loader.from_str(" 1 , 2 ,\t3 , 4 ").expect("Failed to load");
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_missing_input() {
        let loader = SequenceLoader::new();
        let res: Result<Vec<i64>, _> = loader.from_str("   \t ");
        assert!(matches!(res, Err(SequenceLoaderError::MissingInput)));
    }

    #[test]
    fn test_parse_error_structure() {
        let loader = SequenceLoader::new();
        let res: Result<Vec<i64>, _> = loader.from_str("1,2,garbage,4");

        match res {
            Err(SequenceLoaderError::Parse(e)) => {
                assert_eq!(e.token, "garbage");
                assert!(e.type_name.contains("i64"));
            }
            _ => panic!("Expected Parse error with context"),
        }
    }

    #[test]
    fn test_empty_token_is_a_parse_error() {
        let loader = SequenceLoader::new();
        let res: Result<Vec<i64>, _> = loader.from_str("1,,3");

        match res {
            Err(SequenceLoaderError::Parse(e)) => assert_eq!(e.token, ""),
            _ => panic!("Expected Parse error for empty token"),
        }
    }

    #[test]
    fn test_custom_separator() {
        let loader = SequenceLoader::new().separator(';');
        let values: Vec<i32> = loader.from_str("1;2;3;4").expect("Failed to load");
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_from_reader() {
        let loader = SequenceLoader::new();
        let values: Vec<i64> = loader
            .from_reader("5,6,\n7,8".as_bytes())
            .expect("Failed to load");
        assert_eq!(values, vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_loader_does_not_enforce_sequence_rules() {
        // Negative and odd-count inputs are the validator's concern.
        let loader = SequenceLoader::new();
        let values: Vec<i64> = loader.from_str("-1,2,3").expect("Failed to load");
        assert_eq!(values, vec![-1, 2, 3]);
    }
}
