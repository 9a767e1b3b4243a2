//! Common reducers and mappers.
//!
//! All of these are zero-sized, so storing them inside a tree costs nothing.

use super::*;
use std::ops::{Add, Mul};

/// The minimum of two values. This is the default reducer.
///
/// On ties the left value is kept.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Min;

impl<A: Ord + Clone> Reducer<A> for Min {
    fn reduce(&self, left: &A, right: &A) -> A {
        if right < left {
            right.clone()
        } else {
            left.clone()
        }
    }
}

/// The maximum of two values.
///
/// On ties the right value is kept.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Max;

impl<A: Ord + Clone> Reducer<A> for Max {
    fn reduce(&self, left: &A, right: &A) -> A {
        if right < left {
            left.clone()
        } else {
            right.clone()
        }
    }
}

/// Addition.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Sum;

impl<A> Reducer<A> for Sum
where
    for<'a> &'a A: Add<&'a A, Output = A>,
{
    fn reduce(&self, left: &A, right: &A) -> A {
        left + right
    }
}

/// Multiplication.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Product;

impl<A> Reducer<A> for Product
where
    for<'a> &'a A: Mul<&'a A, Output = A>,
{
    fn reduce(&self, left: &A, right: &A) -> A {
        left * right
    }
}

/// Reduces pairs component-wise: the first reducer runs on the first components
/// and the second reducer on the second components.
///
/// ```
/// use packed_segment_tree::{basic_data::*, SegmentTree};
///
/// let tree = SegmentTree::with_policies(vec![0, 1, 2, 3, 4], Both(Sum, Product), Duplicate);
/// assert_eq!(tree.query(2, 5), (9, 24));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Both<R1, R2>(pub R1, pub R2);

impl<A, B, R1, R2> Reducer<(A, B)> for Both<R1, R2>
where
    R1: Reducer<A>,
    R2: Reducer<B>,
{
    fn reduce(&self, left: &(A, B), right: &(A, B)) -> (A, B) {
        (
            self.0.reduce(&left.0, &right.0),
            self.1.reduce(&left.1, &right.1),
        )
    }
}

/// The identity mapper. This is the default mapper, used when the stored elements
/// are already elements of the algebra.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Identity;

impl<T: Clone> Mapper<T, T> for Identity {
    fn map(&self, value: &T) -> T {
        value.clone()
    }
}

/// Maps every element into a pair of two copies of itself.
/// Meant to be used together with [`Both`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Duplicate;

impl<T: Clone> Mapper<T, (T, T)> for Duplicate {
    fn map(&self, value: &T) -> (T, T) {
        (value.clone(), value.clone())
    }
}
