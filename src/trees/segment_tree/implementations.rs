//! Standard trait implementations for [`SegmentTree`].
//!
//! Comparisons and hashing only look at the elements, never at the internal nodes
//! or the policies.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::Index;

use super::SegmentTree;
use crate::data::*;

impl<T, A, R, M> Default for SegmentTree<T, A, R, M>
where
    A: Default + Clone,
    R: Reducer<A> + Default,
    M: Mapper<T, A> + Default,
{
    fn default() -> Self {
        Self::new(R::default(), M::default())
    }
}

impl<T, A, R, M> FromIterator<T> for SegmentTree<T, A, R, M>
where
    A: Default + Clone,
    R: Reducer<A> + Default,
    M: Mapper<T, A> + Default,
{
    /// Creates a tree from an iterator of elements.
    /// O(n).
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::with_policies(iter, R::default(), M::default())
    }
}

impl<T, A, R, M> From<Vec<T>> for SegmentTree<T, A, R, M>
where
    A: Default + Clone,
    R: Reducer<A> + Default,
    M: Mapper<T, A> + Default,
{
    fn from(leaves: Vec<T>) -> Self {
        leaves.into_iter().collect()
    }
}

impl<T, A, R, M> Extend<T> for SegmentTree<T, A, R, M>
where
    A: Default + Clone,
    R: Reducer<A>,
    M: Mapper<T, A>,
{
    /// Appends the elements and rebuilds once at the end.
    /// O(n + k).
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.edit(|leaves| leaves.extend(iter))
    }
}

impl<T, A, R, M> Index<usize> for SegmentTree<T, A, R, M> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        debug_assert!(
            index < self.len(),
            "Index {} is out of bounds of segment tree length {}",
            index,
            self.len()
        );
        &self.leaves[index]
    }
}

impl<T, A, R, M> AsRef<[T]> for SegmentTree<T, A, R, M> {
    fn as_ref(&self) -> &[T] {
        &self.leaves
    }
}

impl<T, A, R, M> IntoIterator for SegmentTree<T, A, R, M> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.leaves.into_iter()
    }
}

impl<'a, T, A, R, M> IntoIterator for &'a SegmentTree<T, A, R, M> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.leaves.iter()
    }
}

impl<T: fmt::Debug, A, R, M> fmt::Debug for SegmentTree<T, A, R, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentTree")
            .field("leaves", &self.leaves)
            .field("shift", &self.shift)
            .finish()
    }
}

impl<T: PartialEq, A, R, M> PartialEq for SegmentTree<T, A, R, M> {
    fn eq(&self, other: &Self) -> bool {
        self.leaves == other.leaves
    }
}

impl<T: Eq, A, R, M> Eq for SegmentTree<T, A, R, M> {}

impl<T: PartialOrd, A, R, M> PartialOrd for SegmentTree<T, A, R, M> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.leaves.partial_cmp(&other.leaves)
    }
}

impl<T: Ord, A, R, M> Ord for SegmentTree<T, A, R, M> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.leaves.cmp(&other.leaves)
    }
}

impl<T: Hash, A, R, M> Hash for SegmentTree<T, A, R, M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.leaves.hash(state)
    }
}

#[cfg(test)]
mod tests {
    use crate::basic_data::*;
    use crate::SegmentTree;

    #[test]
    fn equality_ignores_the_policies_state() {
        let a: SegmentTree<i32> = (0..5).collect();
        let mut b: SegmentTree<i32> = vec![0, 1, 9, 3, 4].into();
        assert_ne!(a, b);
        b.update(2, 2);
        assert_eq!(a, b);
        assert!(a <= b);

        b.update(4, 5);
        assert!(a < b);
    }

    #[test]
    fn extend_and_iterate() {
        let mut tree = SegmentTree::with_reducer(vec![1, 2], Sum);
        tree.extend(vec![3, 4, 5]);
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.query(0, 5), 15);
        assert_eq!((&tree).into_iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(tree[3], 4);
        assert_eq!(tree.into_iter().rev().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn debug_shows_the_elements() {
        let tree: SegmentTree<i32> = vec![3, 1].into();
        assert_eq!(format!("{:?}", tree), "SegmentTree { leaves: [3, 1], shift: 1 }");
    }
}
