#[cfg(feature = "bench")]
pub mod bench;

pub use packed_segment_tree::basic_data::*;
pub use packed_segment_tree::*;

use itertools::iproduct;
use proptest::prelude::*;
use rand::Rng;
use std::fmt::Debug;
use std::ops::Range;

/// A reference implementation that reduces every queried element one by one.
#[derive(Clone, Debug)]
pub struct Naive<T, R, M> {
    pub leaves: Vec<T>,
    reducer: R,
    mapper: M,
}

impl<T, R, M> Naive<T, R, M> {
    pub fn new(leaves: Vec<T>, reducer: R, mapper: M) -> Self {
        Naive {
            leaves,
            reducer,
            mapper,
        }
    }

    pub fn reduce_range<A>(&self, range: Range<usize>) -> Option<A>
    where
        R: Reducer<A>,
        M: Mapper<T, A>,
    {
        let mut mapped = self.leaves[range].iter().map(|x| self.mapper.map(x));
        let first = mapped.next()?;
        Some(mapped.fold(first, |acc, x| self.reducer.reduce(&acc, &x)))
    }
}

/// All of the ranges `first..last` with `first <= last <= len`.
pub fn all_ranges(len: usize) -> impl Iterator<Item = Range<usize>> {
    iproduct!(0..=len, 0..=len).filter_map(|(first, last)| {
        if first <= last {
            Some(first..last)
        } else {
            None
        }
    })
}

/// Compares every range of the tree against the reference.
pub fn assert_agrees<T, A, R, M, R2, M2>(tree: &SegmentTree<T, A, R, M>, naive: &Naive<T, R2, M2>)
where
    T: PartialEq + Debug,
    A: Default + Clone + PartialEq + Debug,
    R: Reducer<A>,
    M: Mapper<T, A>,
    R2: Reducer<A>,
    M2: Mapper<T, A>,
{
    assert_eq!(tree.as_slice(), &naive.leaves[..]);
    tree.assert_correctness();
    for range in all_ranges(tree.len()) {
        assert_eq!(
            tree.reduce_range(range.start, range.end),
            naive.reduce_range(range.clone()),
            "range {:?} of {:?}",
            range,
            naive.leaves
        );
    }
}

pub fn random_range(len: usize) -> Range<usize> {
    let mut rng = rand::thread_rng();
    let res = (rng.gen_range(0..len + 1), rng.gen_range(0..len + 1));
    if res.0 <= res.1 {
        res.0..res.1
    } else {
        res.1..res.0
    }
}

pub fn random_values(len: usize) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(-5..=5)).collect()
}

/// An affine function `x -> mul * x + add`, with wrapping arithmetic.
/// Composing these is associative but not commutative.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Affine {
    pub mul: i64,
    pub add: i64,
}

/// Reduces two affine functions into the function that applies `left` first and then `right`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct ThenApply;

impl Reducer<Affine> for ThenApply {
    fn reduce(&self, left: &Affine, right: &Affine) -> Affine {
        Affine {
            mul: right.mul.wrapping_mul(left.mul),
            add: right.mul.wrapping_mul(left.add).wrapping_add(right.add),
        }
    }
}

/// Something to perform in one round of tests
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum RoundAction<T> {
    Update { index: usize, value: T },
    /// Overwrite every element of the range with `value`, through `update_range`
    Overwrite { range: Range<usize>, value: T },
    Query { range: Range<usize> },
    Insert { index: usize, value: T },
    Remove { index: usize },
}

/// Fits the indices of a generated action to the current length, since the
/// length changes as elements are inserted and removed.
fn fit_range(range: &Range<usize>, len: usize) -> Range<usize> {
    let (a, b) = (range.start.min(len), range.end.min(len));
    if a <= b {
        a..b
    } else {
        b..a
    }
}

/// Runs the actions on a tree and on a reference, and checks that every query agrees.
/// At the end, checks every range.
pub fn check_consistency_proptest<T, A, R, M>(
    initial: &[T],
    actions: &[RoundAction<T>],
    reducer: R,
    mapper: M,
) -> Result<(), TestCaseError>
where
    T: Clone + PartialEq + Debug,
    A: Default + Clone + PartialEq + Debug,
    R: Reducer<A> + Clone,
    M: Mapper<T, A> + Clone,
{
    let mut tree: SegmentTree<T, A, R, M> =
        SegmentTree::with_policies(initial.to_vec(), reducer.clone(), mapper.clone());
    let mut naive = Naive::new(initial.to_vec(), reducer, mapper);

    for action in actions {
        let len = naive.leaves.len();
        match action.clone() {
            RoundAction::Update { index, value } => {
                if len > 0 {
                    let index = index % len;
                    tree.update(index, value.clone());
                    naive.leaves[index] = value;
                }
            }
            RoundAction::Overwrite { range, value } => {
                let range = fit_range(&range, len);
                tree.update_range(range.start, range.end, |values| {
                    for x in values.iter_mut() {
                        *x = value.clone();
                    }
                });
                for x in naive.leaves[range].iter_mut() {
                    *x = value.clone();
                }
            }
            RoundAction::Query { range } => {
                let range = fit_range(&range, len);
                prop_assert_eq!(
                    tree.reduce_range(range.start, range.end),
                    naive.reduce_range(range)
                );
            }
            RoundAction::Insert { index, value } => {
                let index = index % (len + 1);
                tree.insert(index, value.clone());
                naive.leaves.insert(index, value);
            }
            RoundAction::Remove { index } => {
                if len > 0 {
                    let index = index % len;
                    let removed = tree.remove(index);
                    prop_assert_eq!(removed, naive.leaves.remove(index));
                }
            }
        }
        prop_assert_eq!(tree.len(), naive.leaves.len());
    }

    tree.assert_correctness();
    for range in all_ranges(tree.len()) {
        prop_assert_eq!(
            tree.reduce_range(range.start, range.end),
            naive.reduce_range(range)
        );
    }
    Ok(())
}
