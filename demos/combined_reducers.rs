//! Two reductions computed in one pass, by mapping every element to a pair.

use packed_segment_tree::basic_data::{Both, Duplicate, Max, Min, Product, Sum};
use packed_segment_tree::SegmentTree;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let values = vec![0, 1, 2, 3, 4];

    let tree = SegmentTree::with_policies(values.clone(), Both(Sum, Product), Duplicate);
    let (sum, product) = tree.query(2, 5);
    println!("(sum, product) of [2, 5) = ({}, {})", sum, product);

    // the same thing with closures
    let reducer = |a: &(i32, i32), b: &(i32, i32)| (a.0 + b.0, a.1 * b.1);
    let mapper = |x: &i32| (*x, *x);
    let tree = SegmentTree::with_policies(values.clone(), reducer, mapper);
    println!("(sum, product) of [2, 5) = {:?}", tree.query(2, 5));

    let mut bounds = SegmentTree::with_policies(values, Both(Min, Max), Duplicate);
    bounds.push(-3);
    let (low, high) = bounds.summary();
    println!("bounds of {:?} = [{}, {}]", bounds.as_slice(), low, high);
}
