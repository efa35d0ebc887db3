use std::cmp::Ordering;

use quickcheck::{Arbitrary, Gen};

use crate::order::Compare;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Insert the K into the data structure
    Insert(K),
    /// Look the K up in the data structure
    Search(K),
    /// Compare iterators
    Iter,
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::Search(K::arbitrary(g)),
            2 => Op::Iter,
            _ => unreachable!(),
        }
    }
}

/// Orders integers from largest to smallest.
pub(crate) struct Reverse;

impl Compare<i32> for Reverse {
    fn compare(&self, a: &i32, b: &i32) -> Ordering {
        b.cmp(a)
    }
}
