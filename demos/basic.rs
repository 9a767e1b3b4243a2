//! Minimum queries over a small sequence with the default policies.
//!
//! Run with `RUST_LOG=trace` to see when the tree rebuilds.

use packed_segment_tree::SegmentTree;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree: SegmentTree<i32> = vec![0, 1, 2, 3, 4].into();
    println!("elements: {:?}", tree.as_slice());
    println!("min of [2, 5) = {}", tree.query(2, 5));

    tree.update(2, 5);
    println!("after setting element 2 to 5: {:?}", tree.as_slice());
    println!("min of [2, 5) = {}", tree.query(2, 5));

    // a range update hands out the elements, and the tree catches up afterwards
    tree.update_range(0, 2, |values| {
        for value in values.iter_mut() {
            *value += 10;
        }
    });
    println!("after adding 10 to [0, 2): {:?}", tree.as_slice());
    println!("min of everything = {}", tree.summary());

    match tree.try_query(3, 9) {
        Ok(min) => println!("min of [3, 9) = {}", min),
        Err(err) => println!("error: {}", err),
    }
}
