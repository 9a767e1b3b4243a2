//! Scoped mutable access to the leaves.
//!
//! Whoever gets mutable access to the leaves goes through a guard, and the guard
//! resynchronizes the internal nodes when it is dropped. This also happens when the
//! code holding the guard panics, so the tree's invariants hold again
//! before the panic leaves the tree's methods.

use std::ops::{Deref, DerefMut, Range};

use super::SegmentTree;
use crate::data::*;

/// Which leaves might have been changed while the guard was alive.
pub(super) enum Dirty {
    /// Anything, including the number of leaves.
    All,
    /// Only the values inside this range.
    Range(Range<usize>),
}

pub(super) struct Resync<'a, T, A, R, M>
where
    A: Default + Clone,
    R: Reducer<A>,
    M: Mapper<T, A>,
{
    pub(super) tree: &'a mut SegmentTree<T, A, R, M>,
    dirty: Dirty,
}

impl<'a, T, A, R, M> Resync<'a, T, A, R, M>
where
    A: Default + Clone,
    R: Reducer<A>,
    M: Mapper<T, A>,
{
    pub(super) fn new(tree: &'a mut SegmentTree<T, A, R, M>, dirty: Dirty) -> Self {
        Resync { tree, dirty }
    }
}

impl<'a, T, A, R, M> Drop for Resync<'a, T, A, R, M>
where
    A: Default + Clone,
    R: Reducer<A>,
    M: Mapper<T, A>,
{
    fn drop(&mut self) {
        match &self.dirty {
            Dirty::All => self.tree.rebuild(),
            Dirty::Range(range) => self.tree.resync_range(range.start, range.end),
        }
    }
}

/// Mutable access to all of the leaves of a [`SegmentTree`], as a slice.
///
/// Returned by [`SegmentTree::leaves_mut`]. When this is dropped, the tree is rebuilt.
pub struct LeavesMut<'a, T, A, R, M>
where
    A: Default + Clone,
    R: Reducer<A>,
    M: Mapper<T, A>,
{
    guard: Resync<'a, T, A, R, M>,
}

impl<'a, T, A, R, M> LeavesMut<'a, T, A, R, M>
where
    A: Default + Clone,
    R: Reducer<A>,
    M: Mapper<T, A>,
{
    pub(super) fn new(tree: &'a mut SegmentTree<T, A, R, M>) -> Self {
        LeavesMut {
            guard: Resync::new(tree, Dirty::All),
        }
    }
}

impl<'a, T, A, R, M> Deref for LeavesMut<'a, T, A, R, M>
where
    A: Default + Clone,
    R: Reducer<A>,
    M: Mapper<T, A>,
{
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.guard.tree.leaves
    }
}

impl<'a, T, A, R, M> DerefMut for LeavesMut<'a, T, A, R, M>
where
    A: Default + Clone,
    R: Reducer<A>,
    M: Mapper<T, A>,
{
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.guard.tree.leaves
    }
}
