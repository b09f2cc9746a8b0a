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

//! The mirrored-pair matching algorithm.
//!
//! Each pair searches forward for the first later pair whose reversed
//! reading equals its own direct reading. A confirmed match marks all
//! four involved slots as covered and credits two covered pairs; the
//! inner search then stops (first match wins). Marked slots are never
//! unmarked, and candidates are *not* skipped once marked: re-marking is
//! idempotent, and a pair consumed as someone's mirror can still run its
//! own forward search later.
//!
//! Coverage marks live in a `FixedBitSet` allocated per call; nothing is
//! shared between invocations, so repeated calls on the same sequence
//! are trivially deterministic.
//!
//! The success accounting is deliberately literal: a match credits two
//! covered pairs even when one of them was already credited through an
//! earlier match. When every slot ends up covered but the credit
//! overshoots the pair count, the outcome is `Unmatched` with an empty
//! element list (see `test_double_credit_yields_empty_unmatched`).

use crate::{
    index::{slots_of, PairIndex},
    sequence::PairSequence,
};
use fixedbitset::FixedBitSet;
use num_traits::PrimInt;

/// The result of one matching evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome<T> {
    /// Every pair ended up covered, as a searcher or as a matched mirror.
    AllMatched,
    /// The elements not covered by any confirmed mirror match, in
    /// original order.
    Unmatched(Vec<T>),
}

impl<T> MatchOutcome<T> {
    /// Returns `true` if every pair was covered.
    #[inline]
    pub fn is_all_matched(&self) -> bool {
        matches!(self, Self::AllMatched)
    }

    /// Returns the unmatched elements, or `None` for `AllMatched`.
    #[inline]
    pub fn unmatched(&self) -> Option<&[T]> {
        match self {
            Self::AllMatched => None,
            Self::Unmatched(values) => Some(values),
        }
    }
}

/// Runs the mirrored-pair matching algorithm over a validated sequence.
///
/// # Examples
///
/// ```rust
/// # use couplet_match::{matcher::match_pairs, sequence::PairSequence};
///
/// let seq = PairSequence::new(vec![1, 2, 2, 1]).unwrap();
/// assert!(match_pairs(&seq).is_all_matched());
///
/// let seq = PairSequence::new(vec![1, 2, 3, 4]).unwrap();
/// assert_eq!(match_pairs(&seq).unmatched(), Some(&[1, 2, 3, 4][..]));
/// ```
pub fn match_pairs<T>(sequence: &PairSequence<T>) -> MatchOutcome<T>
where
    T: PrimInt,
{
    let len = sequence.len();
    let num_pairs = sequence.num_pairs();

    let mut covered = FixedBitSet::with_capacity(len);
    let mut credited_pairs = 0usize;

    for i in 0..num_pairs {
        let current = sequence.pair(PairIndex::new(i));

        for j in (i + 1)..num_pairs {
            let candidate = PairIndex::new(j);

            if current.mirrors(sequence.pair(candidate)) {
                let (a, b) = slots_of(PairIndex::new(i));
                let (c, d) = slots_of(candidate);
                covered.insert(a.get());
                covered.insert(b.get());
                covered.insert(c.get());
                covered.insert(d.get());
                credited_pairs += 2;
                break;
            }
        }
    }

    if credited_pairs == num_pairs {
        MatchOutcome::AllMatched
    } else {
        let unmatched = sequence
            .values()
            .iter()
            .enumerate()
            .filter(|(slot, _)| !covered.contains(*slot))
            .map(|(_, &value)| value)
            .collect();
        MatchOutcome::Unmatched(unmatched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(values: &[i64]) -> PairSequence<i64> {
        PairSequence::new(values.to_vec()).expect("test sequence should be valid")
    }

    #[test]
    fn test_two_mirrored_pairs() {
        // (1,2) reads 12; (2,1) reversed reads 12.
        assert!(match_pairs(&seq(&[1, 2, 2, 1])).is_all_matched());
    }

    #[test]
    fn test_no_mirrors_at_all() {
        // (1,2) reads 12; (3,4) reversed reads 43.
        let outcome = match_pairs(&seq(&[1, 2, 3, 4]));
        assert_eq!(outcome.unmatched(), Some(&[1, 2, 3, 4][..]));
    }

    #[test]
    fn test_partnerless_pair_in_six_elements() {
        // (1,2) and (2,1) mirror each other; (5,6) has no partner.
        let outcome = match_pairs(&seq(&[1, 2, 2, 1, 5, 6]));
        assert_eq!(outcome.unmatched(), Some(&[5, 6][..]));
    }

    #[test]
    fn test_mirror_is_directional() {
        // (1,2) next to (1,2): reversed reading is 21, not 12.
        let outcome = match_pairs(&seq(&[1, 2, 1, 2]));
        assert_eq!(outcome.unmatched(), Some(&[1, 2, 1, 2][..]));
    }

    #[test]
    fn test_equal_element_pairs_match() {
        // (3,3) reversed still reads 33.
        assert!(match_pairs(&seq(&[3, 3, 3, 3])).is_all_matched());
    }

    #[test]
    fn test_first_match_wins() {
        // (1,2) has two candidate mirrors; the first one at pair 1 is
        // taken, covering slots 2..4 and leaving the second mirror to be
        // found by nobody.
        let outcome = match_pairs(&seq(&[1, 2, 2, 1, 2, 1]));
        assert_eq!(outcome.unmatched(), Some(&[2, 1][..]));
    }

    #[test]
    fn test_passive_coverage_is_not_revisited() {
        // Pair 1 is consumed as pair 0's mirror; its own search then
        // still runs (finding nothing) but its slots stay covered.
        let outcome = match_pairs(&seq(&[1, 2, 2, 1, 7, 8, 8, 7]));
        assert!(outcome.is_all_matched());
    }

    #[test]
    fn test_multi_digit_elements() {
        // (12,34) reads 154; (34,12) reversed reads 12*10+34 = 154.
        assert!(match_pairs(&seq(&[12, 34, 34, 12])).is_all_matched());
    }

    #[test]
    fn test_unmatched_preserves_original_order() {
        let outcome = match_pairs(&seq(&[9, 1, 1, 9, 5, 6, 7, 8]));
        assert_eq!(outcome.unmatched(), Some(&[5, 6, 7, 8][..]));
    }

    #[test]
    fn test_double_credit_yields_empty_unmatched() {
        // Pairs (1,2), (1,2), (2,1): both leading pairs match the same
        // trailing mirror. Every slot ends up covered, but the credit (4)
        // overshoots the pair count (3), so the literal accounting
        // reports an empty unmatched list rather than success.
        let outcome = match_pairs(&seq(&[1, 2, 1, 2, 2, 1]));
        assert_eq!(outcome.unmatched(), Some(&[][..]));
    }

    #[test]
    fn test_idempotence() {
        let s = seq(&[1, 2, 2, 1, 5, 6]);
        assert_eq!(match_pairs(&s), match_pairs(&s));
    }

    #[test]
    fn test_outcome_accessors() {
        let all: MatchOutcome<i64> = MatchOutcome::AllMatched;
        assert!(all.is_all_matched());
        assert_eq!(all.unmatched(), None);

        let some = MatchOutcome::Unmatched(vec![5, 6]);
        assert!(!some.is_all_matched());
        assert_eq!(some.unmatched(), Some(&[5, 6][..]));
    }
}
