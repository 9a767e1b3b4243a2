//! Sums, products and a closure reducer that is not commutative.

use packed_segment_tree::basic_data::{Product, Sum};
use packed_segment_tree::SegmentTree;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let values = vec![0, 1, 2, 3, 4];

    let mut sums = SegmentTree::with_reducer(values.clone(), Sum);
    println!("sum of [2, 5) = {}", sums.query(2, 5));
    sums.update(2, 5);
    println!("after setting element 2 to 5, sum of [2, 5) = {}", sums.query(2, 5));

    let products = SegmentTree::with_reducer(values, Product);
    println!("product of [2, 5) = {}", products.query(2, 5));

    // joining strings keeps the order of the elements
    let words: Vec<String> = "the quick brown fox jumps".split(' ').map(String::from).collect();
    let join = |a: &String, b: &String| format!("{} {}", a, b);
    let mut sentence = SegmentTree::with_reducer(words, join);
    println!("[1, 4) = {:?}", sentence.query(1, 4));
    sentence.update(2, "red".to_string());
    println!("[0, 5) = {:?}", sentence.summary());
}
