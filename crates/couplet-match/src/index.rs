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

use couplet_core::index::{TypedIndex, TypedIndexTag};

/// A tag type for element slot indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SlotIndexTag;

impl TypedIndexTag for SlotIndexTag {
    const NAME: &'static str = "SlotIndex";
}

/// A typed index for element positions within a sequence.
pub type SlotIndex = TypedIndex<SlotIndexTag>;

/// A tag type for pair ordinal indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct PairIndexTag;

impl TypedIndexTag for PairIndexTag {
    const NAME: &'static str = "PairIndex";
}

/// A typed index for pair ordinals (pair `k` spans slots `2k` and `2k+1`).
pub type PairIndex = TypedIndex<PairIndexTag>;

/// Returns the two slots spanned by the given pair.
#[inline]
pub fn slots_of(pair: PairIndex) -> (SlotIndex, SlotIndex) {
    let first = SlotIndex::new(pair.get() * 2);
    (first, first + 1)
}

/// Returns the pair that the given slot belongs to.
#[inline]
pub fn pair_of(slot: SlotIndex) -> PairIndex {
    PairIndex::new(slot.get() / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_of() {
        let (a, b) = slots_of(PairIndex::new(0));
        assert_eq!((a.get(), b.get()), (0, 1));

        let (a, b) = slots_of(PairIndex::new(3));
        assert_eq!((a.get(), b.get()), (6, 7));
    }

    #[test]
    fn test_pair_of() {
        assert_eq!(pair_of(SlotIndex::new(0)).get(), 0);
        assert_eq!(pair_of(SlotIndex::new(1)).get(), 0);
        assert_eq!(pair_of(SlotIndex::new(6)).get(), 3);
        assert_eq!(pair_of(SlotIndex::new(7)).get(), 3);
    }

    #[test]
    fn test_roundtrip() {
        for k in 0..8 {
            let pair = PairIndex::new(k);
            let (a, b) = slots_of(pair);
            assert_eq!(pair_of(a), pair);
            assert_eq!(pair_of(b), pair);
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(format!("{}", SlotIndex::new(2)), "SlotIndex(2)");
        assert_eq!(format!("{}", PairIndex::new(1)), "PairIndex(1)");
    }
}
