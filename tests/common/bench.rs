use super::*;
extern crate test;
use test::Bencher;

const BENCH_SIZE: usize = 100_000;

fn bench_values() -> Vec<i64> {
    let mut rng = rand::thread_rng();
    (0..BENCH_SIZE).map(|_| rng.gen_range(-1000..1000)).collect()
}

#[bench]
fn bench_build(b: &mut Bencher) {
    let values = bench_values();
    b.iter(|| {
        let tree = SegmentTree::with_reducer(values.clone(), Sum);
        test::black_box(tree);
    });
}

#[bench]
fn bench_query(b: &mut Bencher) {
    let tree = SegmentTree::with_reducer(bench_values(), Sum);
    b.iter(|| {
        let range = random_range(BENCH_SIZE);
        test::black_box(tree.query(range.start, range.end));
    });
}

#[bench]
fn bench_update(b: &mut Bencher) {
    let mut rng = rand::thread_rng();
    let mut tree = SegmentTree::with_reducer(bench_values(), Sum);
    b.iter(|| {
        let index = rng.gen_range(0..BENCH_SIZE);
        tree.update(index, rng.gen_range(-1000..1000));
    });
}

/// Short ranges, which the heuristic resynchronizes with point repairs.
#[bench]
fn bench_update_short_range(b: &mut Bencher) {
    let mut rng = rand::thread_rng();
    let mut tree = SegmentTree::with_reducer(bench_values(), Sum);
    b.iter(|| {
        let first = rng.gen_range(0..BENCH_SIZE - 8);
        tree.update_range(first, first + 8, |values| {
            for value in values.iter_mut() {
                *value += 1;
            }
        });
    });
}

/// Long ranges, which the heuristic resynchronizes with a full rebuild.
#[bench]
fn bench_update_long_range(b: &mut Bencher) {
    let mut tree = SegmentTree::with_reducer(bench_values(), Sum);
    b.iter(|| {
        tree.update_range(0, BENCH_SIZE / 2, |values| {
            for value in values.iter_mut() {
                *value += 1;
            }
        });
    });
}
