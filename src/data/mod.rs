//! The policy traits that tell a [`SegmentTree`](crate::SegmentTree) how to combine its values.
//!
//! A segment tree stores elements of some type `T`, but it answers queries in some
//! algebra `A`. The [`Mapper`] turns one stored element into an element of the algebra,
//! and the [`Reducer`] combines two algebra elements into one.
//!
//! Closures of the right shape implement both traits, so
//! `|a: &i32, b: &i32| a + b` is a reducer and `|x: &i32| (*x, *x)` is a mapper.
//! The common policies are available as zero-sized types in [`basic_data`].

pub mod basic_data;

/// An associative binary operation over the algebra `A`.
///
/// The operation must be associative on every value that can be produced by
/// reducing mapped leaves: `reduce(reduce(a, b), c) == reduce(a, reduce(b, c))`.
/// It doesn't have to be commutative. The tree always combines values in the
/// order of the range being queried, so reducers like string concatenation
/// or matrix multiplication work.
///
/// Associativity is not checked. A reducer that isn't associative will
/// silently produce wrong query results.
pub trait Reducer<A> {
    /// Combines two values. `left` always comes before `right` in the sequence.
    fn reduce(&self, left: &A, right: &A) -> A;
}

impl<A, F> Reducer<A> for F
where
    F: Fn(&A, &A) -> A,
{
    fn reduce(&self, left: &A, right: &A) -> A {
        self(left, right)
    }
}

/// Transforms a stored element into an element of the algebra `A`.
///
/// The mapper is applied every time a leaf takes part in a combination,
/// so it should be cheap, and it must be defined for every stored value.
pub trait Mapper<T, A> {
    fn map(&self, value: &T) -> A;
}

impl<T, A, F> Mapper<T, A> for F
where
    F: Fn(&T) -> A,
{
    fn map(&self, value: &T) -> A {
        self(value)
    }
}
