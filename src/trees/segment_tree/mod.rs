//! The array-backed segment tree.
//!
//! See [`SegmentTree`].

mod guard;
mod implementations;
pub mod layout;

pub use guard::LeavesMut;
pub use layout::DEFAULT_REBUILD_THRESHOLD;

use guard::{Dirty, Resync};
use layout::Row;
use tracing::trace;

use crate::data::basic_data::{Identity, Min};
use crate::data::*;
use crate::error::{self, SegmentTreeError};

/// A segment tree stored in two flat arrays.
///
/// The tree stores a sequence of elements of type `T` (the leaves), and answers queries
/// of the form "combine all elements in `first..last`" in `O(log n)` time.
/// Each element is first turned into an element of the algebra `A` by the mapper `M`,
/// and the results are combined by the reducer `R`. By default the mapper is the identity
/// and the reducer is the minimum.
///
/// The internal nodes of the tree form an implicit binary heap over a possibly
/// non-power-of-two number of leaves; see the [`layout`] module. A node with two
/// populated children stores their reduction, and a node with only a left child
/// stores a copy of its child's value.
///
/// ```
/// use packed_segment_tree::SegmentTree;
///
/// let mut tree: SegmentTree<i32> = vec![0, 1, 2, 3, 4].into();
/// assert_eq!(tree.query(2, 5), 2);
/// tree.update(2, 5);
/// assert_eq!(tree.query(2, 5), 3);
/// ```
#[derive(Clone)]
pub struct SegmentTree<T, A = T, R = Min, M = Identity> {
    leaves: Vec<T>,
    nodes: Vec<A>,
    shift: usize,
    reducer: R,
    mapper: M,
    rebuild_threshold: usize,
}

/// Accumulates the values of a range query from both edges inwards,
/// so that the values are always combined in the order of the range.
struct Accumulator<'r, A, R> {
    reducer: &'r R,
    left: Option<A>,
    right: Option<A>,
}

impl<'r, A: Clone, R: Reducer<A>> Accumulator<'r, A, R> {
    fn new(reducer: &'r R) -> Self {
        Accumulator {
            reducer,
            left: None,
            right: None,
        }
    }

    /// Adds a value right after everything added to the left edge so far.
    fn push_left(&mut self, value: &A) {
        self.left = Some(match self.left.take() {
            Some(acc) => self.reducer.reduce(&acc, value),
            None => value.clone(),
        });
    }

    fn push_left_owned(&mut self, value: A) {
        self.left = Some(match self.left.take() {
            Some(acc) => self.reducer.reduce(&acc, &value),
            None => value,
        });
    }

    /// Adds a value right before everything added to the right edge so far.
    fn push_right(&mut self, value: &A) {
        self.right = Some(match self.right.take() {
            Some(acc) => self.reducer.reduce(value, &acc),
            None => value.clone(),
        });
    }

    fn push_right_owned(&mut self, value: A) {
        self.right = Some(match self.right.take() {
            Some(acc) => self.reducer.reduce(&value, &acc),
            None => value,
        });
    }

    fn finish(self) -> Option<A> {
        match (self.left, self.right) {
            (Some(left), Some(right)) => Some(self.reducer.reduce(&left, &right)),
            (left, None) => left,
            (None, right) => right,
        }
    }
}

/// Accessors that don't depend on the policies.
impl<T, A, R, M> SegmentTree<T, A, R, M> {
    /// The number of elements in the tree.
    /// O(1)
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// Checks if the tree has no elements.
    /// O(1)
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// The packed array index of the first leaf. See the [`layout`] module.
    pub fn shift(&self) -> usize {
        self.shift
    }

    /// The elements of the tree, in order.
    pub fn as_slice(&self) -> &[T] {
        &self.leaves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.leaves.iter()
    }

    /// Returns the element at `index`, or `None` if it is out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.leaves.get(index)
    }

    /// Returns the element at `index`.
    /// Fails with [`SegmentTreeError::IndexOutOfRange`] if it is out of bounds.
    pub fn at(&self, index: usize) -> Result<&T, SegmentTreeError> {
        error::check_index(index, self.len())?;
        Ok(&self.leaves[index])
    }

    pub fn first(&self) -> Option<&T> {
        self.leaves.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.leaves.last()
    }

    /// The stored internal nodes, indexed by their packed array index.
    ///
    /// Slots that cover no leaves hold `A::default()`.
    pub fn internal_nodes(&self) -> &[A] {
        &self.nodes
    }

    pub fn reducer(&self) -> &R {
        &self.reducer
    }

    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    /// Below this many elements, [`update_range`](SegmentTree::update_range)
    /// always resynchronizes the tree with a full rebuild.
    pub fn rebuild_threshold(&self) -> usize {
        self.rebuild_threshold
    }

    /// Sets the size below which range updates always rebuild the whole tree.
    ///
    /// `0` leaves only the `n < k * ln(n)` rule, and `usize::MAX` makes every
    /// range update a full rebuild.
    pub fn set_rebuild_threshold(&mut self, threshold: usize) {
        self.rebuild_threshold = threshold;
    }

    /// Consumes the tree and returns its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.leaves
    }
}

impl<T, A, R> SegmentTree<T, A, R, Identity>
where
    A: Default + Clone,
    R: Reducer<A>,
    Identity: Mapper<T, A>,
{
    /// Creates a tree that reduces the elements themselves with `reducer`.
    /// O(n)
    pub fn with_reducer<I: IntoIterator<Item = T>>(iter: I, reducer: R) -> Self {
        Self::with_policies(iter, reducer, Identity)
    }
}

impl<T, A, R, M> SegmentTree<T, A, R, M>
where
    A: Default + Clone,
    R: Reducer<A>,
    M: Mapper<T, A>,
{
    /// Creates an empty tree with the given policies.
    pub fn new(reducer: R, mapper: M) -> Self {
        SegmentTree {
            leaves: vec![],
            nodes: vec![],
            shift: 0,
            reducer,
            mapper,
            rebuild_threshold: DEFAULT_REBUILD_THRESHOLD,
        }
    }

    /// Creates a tree holding the elements of `iter`, with the given policies.
    /// O(n)
    pub fn with_policies<I: IntoIterator<Item = T>>(iter: I, reducer: R, mapper: M) -> Self {
        let mut tree = Self::new(reducer, mapper);
        tree.assign(iter);
        tree
    }

    /// Replaces the contents of the tree with the elements of `iter`.
    /// O(n)
    pub fn assign<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.leaves.clear();
        self.leaves.extend(iter);
        self.rebuild();
    }

    /// Replaces the contents of the tree with `count` copies of `value`.
    /// O(n)
    pub fn assign_elem(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        self.leaves.clear();
        self.leaves.resize(count, value);
        self.rebuild();
    }

    /// Removes all elements, and drops both buffers' contents.
    pub fn clear(&mut self) {
        self.leaves.clear();
        self.nodes.clear();
        self.shift = 0;
    }

    /// The value of the lowest row internal node at row-relative index `j`,
    /// computed from its leaves.
    fn combine_leaves(&self, j: usize) -> A {
        let left = self.mapper.map(&self.leaves[2 * j]);
        match self.leaves.get(2 * j + 1) {
            Some(right) => self.reducer.reduce(&left, &self.mapper.map(right)),
            // the last leaf is an only child
            None => left,
        }
    }

    /// The value of the node at row-relative index `j` in the row above `children`,
    /// computed from its children in `children`.
    fn combine_nodes(&self, children: Row, j: usize) -> A {
        let left = children.base + 2 * j;
        if children.is_populated(2 * j + 1) {
            self.reducer.reduce(&self.nodes[left], &self.nodes[left + 1])
        } else {
            self.nodes[left].clone()
        }
    }

    /// Recomputes all of the internal nodes from the leaves.
    /// Calling this twice in a row produces the same nodes.
    /// O(n)
    pub fn rebuild(&mut self) {
        let len = self.len();
        trace!(len = len, "rebuilding segment tree");

        self.shift = layout::shift_for(len);
        self.nodes.clear();
        if len < 2 {
            // a single leaf is its own root
            return;
        }
        self.nodes
            .resize_with(layout::internal_len(self.shift, len), Default::default);

        let mut row = Row::lowest(self.shift, len);
        for j in 0..row.width {
            self.nodes[row.base + j] = self.combine_leaves(j);
        }
        while !row.is_root() {
            let children = row;
            row = row.parent();
            for j in 0..row.width {
                self.nodes[row.base + j] = self.combine_nodes(children, j);
            }
        }
    }

    /// Recomputes the ancestors of the leaf at `index`, and nothing else.
    /// O(log n)
    fn repair(&mut self, index: usize) {
        let len = self.len();
        debug_assert!(index < len);
        if len < 2 {
            return;
        }

        let mut row = Row::lowest(self.shift, len);
        let mut j = index / 2;
        self.nodes[row.base + j] = self.combine_leaves(j);
        while !row.is_root() {
            let children = row;
            row = row.parent();
            j /= 2;
            self.nodes[row.base + j] = self.combine_nodes(children, j);
        }
    }

    /// Replaces the element at `index` with `value`, and recomputes its ancestors.
    /// O(log n)
    ///
    /// Panics if `index` is out of bounds.
    pub fn update(&mut self, index: usize, value: T) {
        debug_assert!(
            index < self.len(),
            "Index {} is out of bounds of segment tree length {}",
            index,
            self.len()
        );
        self.leaves[index] = value;
        self.repair(index);
    }

    /// Like [`update`](SegmentTree::update), but fails instead of panicking
    /// when `index` is out of bounds.
    pub fn try_update(&mut self, index: usize, value: T) -> Result<(), SegmentTreeError> {
        error::check_index(index, self.len())?;
        self.update(index, value);
        Ok(())
    }

    /// Brings the internal nodes up to date after the leaves in `first..last` changed.
    ///
    /// Picks between a full rebuild, `O(n)`, and repairing each changed leaf separately,
    /// `O(k log n)` where `k = last - first`. Small trees, and ranges with
    /// `n < k * ln(n)`, are rebuilt.
    fn resync_range(&mut self, first: usize, last: usize) {
        let len = self.len();
        let touched = last - first;
        if layout::prefers_rebuild(len, touched, self.rebuild_threshold) {
            trace!(len = len, touched = touched, "range resync by rebuild");
            self.rebuild();
        } else {
            trace!(len = len, touched = touched, "range resync by point repairs");
            for index in first..last {
                self.repair(index);
            }
        }
    }

    /// Gives `edit` mutable access to the elements in `first..last`,
    /// and then brings the tree up to date. Returns whatever `edit` returned.
    ///
    /// The tree is brought up to date even if `edit` panics.
    /// Depending on the size of the range, this either rebuilds the tree in `O(n)`
    /// or repairs the ancestors of each element in the range in `O(k log n)`.
    /// See [`set_rebuild_threshold`](SegmentTree::set_rebuild_threshold).
    ///
    /// Panics if the range is invalid.
    ///
    /// ```
    /// use packed_segment_tree::{basic_data::Sum, SegmentTree};
    ///
    /// let mut tree = SegmentTree::with_reducer(vec![1, 2, 3, 4], Sum);
    /// tree.update_range(1, 3, |values| {
    ///     for value in values.iter_mut() {
    ///         *value *= 10;
    ///     }
    /// });
    /// assert_eq!(tree.query(0, 4), 55);
    /// ```
    pub fn update_range<F, Out>(&mut self, first: usize, last: usize, edit: F) -> Out
    where
        F: FnOnce(&mut [T]) -> Out,
    {
        debug_assert!(
            first <= last,
            "start of range {} is bigger than end of range {}",
            first,
            last
        );
        debug_assert!(
            last <= self.len(),
            "end of range {} is out of bounds of segment tree length {}",
            last,
            self.len()
        );
        let slice_range = first..last;
        let mut guard = Resync::new(self, Dirty::Range(first..last));
        edit(&mut guard.tree.leaves[slice_range])
    }

    /// Like [`update_range`](SegmentTree::update_range), but fails instead of panicking
    /// when the range is invalid. In that case `edit` isn't called.
    pub fn try_update_range<F, Out>(
        &mut self,
        first: usize,
        last: usize,
        edit: F,
    ) -> Result<Out, SegmentTreeError>
    where
        F: FnOnce(&mut [T]) -> Out,
    {
        error::check_range(first, last, self.len())?;
        Ok(self.update_range(first, last, edit))
    }

    /// Gives `edit` the underlying vector of elements, and rebuilds the tree afterwards.
    /// This is how the tree supports arbitrary changes, such as inserting and removing
    /// elements. The tree is rebuilt even if `edit` panics.
    /// O(n)
    pub fn edit<F, Out>(&mut self, edit: F) -> Out
    where
        F: FnOnce(&mut Vec<T>) -> Out,
    {
        let mut guard = Resync::new(self, Dirty::All);
        edit(&mut guard.tree.leaves)
    }

    /// Mutable access to all of the elements. The tree is rebuilt when the returned
    /// guard is dropped.
    pub fn leaves_mut(&mut self) -> LeavesMut<'_, T, A, R, M> {
        LeavesMut::new(self)
    }

    /// Inserts `value` at `index`, shifting the later elements.
    /// O(n)
    pub fn insert(&mut self, index: usize, value: T) {
        self.edit(|leaves| leaves.insert(index, value))
    }

    /// Removes and returns the element at `index`.
    /// O(n)
    pub fn remove(&mut self, index: usize) -> T {
        self.edit(|leaves| leaves.remove(index))
    }

    /// O(n)
    pub fn push(&mut self, value: T) {
        self.edit(|leaves| leaves.push(value))
    }

    /// O(n)
    pub fn pop(&mut self) -> Option<T> {
        self.edit(|leaves| leaves.pop())
    }

    /// O(n)
    pub fn truncate(&mut self, len: usize) {
        self.edit(|leaves| leaves.truncate(len))
    }

    /// O(n)
    pub fn resize(&mut self, len: usize, value: T)
    where
        T: Clone,
    {
        self.edit(|leaves| leaves.resize(len, value))
    }

    /// O(n)
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) {
        self.edit(|leaves| leaves.retain(keep))
    }

    /// Reduces the elements in `first..last`. Returns `None` if the range is empty.
    /// O(log n)
    ///
    /// The reducer is only ever called on values inside the range.
    ///
    /// Panics if the range is invalid.
    pub fn reduce_range(&self, first: usize, last: usize) -> Option<A> {
        debug_assert!(
            first <= last,
            "start of range {} is bigger than end of range {}",
            first,
            last
        );
        debug_assert!(
            last <= self.len(),
            "end of range {} is out of bounds of segment tree length {}",
            last,
            self.len()
        );
        let (mut first, mut last) = (first, last);
        let mut acc = Accumulator::new(&self.reducer);

        // The leaf row. An odd index is a right child, whose sibling is outside the range.
        if first < last && first % 2 == 1 {
            acc.push_left_owned(self.mapper.map(&self.leaves[first]));
            first += 1;
        }
        if first < last && last % 2 == 1 {
            acc.push_right_owned(self.mapper.map(&self.leaves[last - 1]));
            last -= 1;
        }
        if first + 1 == last {
            acc.push_left_owned(self.mapper.map(&self.leaves[first]));
            return acc.finish();
        }

        // `first..last` is now made of whole pairs of leaves.
        let mut row = Row::lowest(self.shift, self.len());
        first /= 2;
        last /= 2;
        while first < last {
            if first % 2 == 1 {
                acc.push_left(&self.nodes[row.base + first]);
                first += 1;
            }
            if first < last && last % 2 == 1 {
                acc.push_right(&self.nodes[row.base + last - 1]);
                last -= 1;
            }
            if first + 1 == last {
                acc.push_left(&self.nodes[row.base + first]);
                break;
            }
            first /= 2;
            last /= 2;
            row = row.parent();
        }

        acc.finish()
    }

    /// Reduces the elements in `first..last`.
    /// Returns `A::default()` if the range is empty; the default value itself
    /// is never passed to the reducer.
    /// O(log n)
    ///
    /// Panics if the range is invalid.
    pub fn query(&self, first: usize, last: usize) -> A {
        self.reduce_range(first, last).unwrap_or_default()
    }

    /// Like [`query`](SegmentTree::query), but fails instead of panicking
    /// when the range is invalid.
    pub fn try_query(&self, first: usize, last: usize) -> Result<A, SegmentTreeError> {
        error::check_range(first, last, self.len())?;
        Ok(self.query(first, last))
    }

    /// Reduces all of the elements. `A::default()` for an empty tree.
    /// O(1)
    pub fn summary(&self) -> A {
        match self.len() {
            0 => A::default(),
            1 => self.mapper.map(&self.leaves[0]),
            _ => self.nodes[0].clone(),
        }
    }

    /// Checks that every internal node that covers any leaves holds the reduction of
    /// its children, that the layout matches the number of leaves, and panics otherwise.
    pub fn assert_correctness(&self)
    where
        A: PartialEq + std::fmt::Debug,
    {
        let len = self.len();
        assert_eq!(self.shift, layout::shift_for(len), "wrong shift for {} leaves", len);
        if len < 2 {
            assert!(self.nodes.is_empty(), "internal nodes exist for {} leaves", len);
            return;
        }
        assert_eq!(
            self.nodes.len(),
            layout::internal_len(self.shift, len),
            "wrong number of internal nodes for {} leaves",
            len
        );

        let mut row = Row::lowest(self.shift, len);
        for j in 0..row.width {
            assert_eq!(
                self.nodes[row.base + j],
                self.combine_leaves(j),
                "node {} is out of date",
                row.base + j
            );
        }
        while !row.is_root() {
            let children = row;
            row = row.parent();
            for j in 0..row.width {
                assert_eq!(
                    self.nodes[row.base + j],
                    self.combine_nodes(children, j),
                    "node {} is out of date",
                    row.base + j
                );
            }
        }
    }
}

/// Constructors for trees whose policies can be created from nothing.
impl<T, A, R, M> SegmentTree<T, A, R, M>
where
    A: Default + Clone,
    R: Reducer<A> + Default,
    M: Mapper<T, A> + Default,
{
    /// Creates a tree with `count` copies of `value`.
    /// O(n)
    pub fn from_elem(count: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut tree = Self::new(R::default(), M::default());
        tree.assign_elem(count, value);
        tree
    }
}
