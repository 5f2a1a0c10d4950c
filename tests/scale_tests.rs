use rand::Rng;
use sortlab::prelude::*;
use std::time::Instant;

#[test]
fn test_quicksort_ascending_stack_depth() {
    // Deep enough to overflow the test thread's stack if quicksort recursed into
    // both partitions.
    let count = 20_000u64;
    let mut data: Vec<u64> = (0..count).collect();

    let start = Instant::now();
    let counters = quicksort_counted(&mut data);
    println!("Sorted {} ascending elements in {:?}", count, start.elapsed());

    assert_eq!(counters.comparisons, count * (count - 1) / 2);
    assert!(data.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_quicksort_descending_stack_depth() {
    let count = 20_000u64;
    let mut data: Vec<u64> = (0..count).rev().collect();

    quicksort(&mut data);

    assert_eq!(data, (0..count).collect::<Vec<_>>());
}

#[test]
fn test_sort_1m() {
    let count = 1_000_000;
    println!("Generating {} random elements...", count);

    let mut rng = rand::rng();
    let input: Vec<u32> = (0..count).map(|_| rng.random()).collect();

    let mut expected = input.clone();
    expected.sort();

    let mut merged = input.clone();
    let start = Instant::now();
    let counters = merge_sort_counted(&mut merged);
    println!("Merge sorted 1M elements in {:?}", start.elapsed());
    assert_eq!(merged, expected);
    // At most n * ceil(log2 n) element writes.
    assert!(counters.swaps <= count as u64 * 20);

    let mut quick = input;
    let start = Instant::now();
    quicksort(&mut quick);
    println!("Quicksorted 1M elements in {:?}", start.elapsed());
    assert_eq!(quick, expected);
}

#[test]
#[ignore]
fn test_bubble_sort_100k() {
    // Quadratic: ~5 * 10^9 comparisons.
    let count = 100_000u64;
    let mut data: Vec<u64> = (0..count).rev().collect();

    let start = Instant::now();
    let counters = bubble_sort_counted(&mut data);
    println!("Bubble sorted {} elements in {:?}", count, start.elapsed());

    assert_eq!(counters.comparisons, count * (count - 1) / 2);
    assert_eq!(counters.swaps, count * (count - 1) / 2);
}
