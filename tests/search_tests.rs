use rand::Rng;
use sortlab::prelude::*;
use sortlab::{ensure_sorted, interpolation_search_checked, interpolation_seed};

#[test]
fn test_linear_search_first_occurrence() {
    let data = [4, 8, 15, 16, 8, 42];

    assert_eq!(linear_search(&data, &8), Some(1));
    assert_eq!(linear_search(&data, &42), Some(5));
    assert_eq!(linear_search(&data, &7), None);
    assert_eq!(linear_search(&[] as &[i32], &7), None);
}

#[test]
fn test_linear_search_counts() {
    let data = [4, 8, 15, 16, 23, 42];

    let (found, counters) = linear_search_counted(&data, &16);
    assert_eq!(found, Some(3));
    assert_eq!(counters.comparisons, 4);

    let (found, counters) = linear_search_counted(&data, &99);
    assert_eq!(found, None);
    assert_eq!(counters.comparisons, 6);
}

#[test]
fn test_binary_search_finds_every_element() {
    let mut rng = rand::rng();

    for _ in 0..200 {
        let len = rng.random_range(0..200);
        let mut data: Vec<i32> = (0..len).map(|_| rng.random_range(-500..500)).collect();
        data.sort();

        for x in &data {
            let index = binary_search(&data, x).expect("present element not found");
            assert_eq!(data[index], *x);

            let index = interpolation_search(&data, x).expect("present element not found");
            assert_eq!(data[index], *x);
        }
    }
}

#[test]
fn test_binary_search_reports_missing() {
    let mut rng = rand::rng();

    for _ in 0..200 {
        let len = rng.random_range(0..200);
        // Even values only, so every odd key is absent.
        let mut data: Vec<i32> = (0..len).map(|_| rng.random_range(-250..250) * 2).collect();
        data.sort();

        for key in [-1001, -3, 1, 77, 499, 1001] {
            assert_eq!(binary_search(&data, &key), None);
            assert_eq!(interpolation_search(&data, &key), None);
        }
    }
}

#[test]
fn test_binary_search_edges() {
    let empty: [u32; 0] = [];
    assert_eq!(binary_search(&empty, &1), None);
    assert_eq!(interpolation_search(&empty, &1), None);
    assert_eq!(interpolation_seed(&empty, &1), None);

    assert_eq!(binary_search(&[5], &5), Some(0));
    assert_eq!(binary_search(&[5], &4), None);
    assert_eq!(binary_search(&[5], &6), None);

    let data = [1u32, 2, 3, 4, 5, 6, 7];
    assert_eq!(binary_search(&data, &1), Some(0));
    assert_eq!(binary_search(&data, &7), Some(6));
    assert_eq!(binary_search(&data, &0), None);
}

#[test]
fn test_binary_search_probe_count() {
    let data: Vec<u32> = (0..1024).collect();

    // First probe is the floor midpoint.
    let (found, counters) = binary_search_counted(&data, &511);
    assert_eq!(found, Some(511));
    assert_eq!(counters.comparisons, 1);

    for key in [0, 1, 777, 1023, 5000] {
        let (_, counters) = binary_search_counted(&data, &key);
        assert!(counters.comparisons <= 11, "key {} took {:?}", key, counters);
    }
}

#[test]
fn test_interpolation_seed_uniform() {
    let data: Vec<u32> = (0..101).map(|i| i * 10).collect();

    assert_eq!(interpolation_seed(&data, &0), Some(0));
    assert_eq!(interpolation_seed(&data, &1000), Some(100));
    assert_eq!(interpolation_seed(&data, &500), Some(50));
    // ceil rounds a fractional position up.
    assert_eq!(interpolation_seed(&data, &501), Some(51));

    let (found, counters) = interpolation_search_counted(&data, &500);
    assert_eq!(found, Some(50));
    assert_eq!(counters.comparisons, 1);
}

#[test]
fn test_interpolation_seed_is_clamped() {
    let data = [10i64, 20, 30, 40];

    assert_eq!(interpolation_seed(&data, &-1000), Some(0));
    assert_eq!(interpolation_seed(&data, &1000), Some(3));
    assert_eq!(interpolation_search(&data, &-1000), None);
    assert_eq!(interpolation_search(&data, &1000), None);
}

#[test]
fn test_interpolation_all_equal() {
    let data = [7u8; 9];

    assert_eq!(interpolation_seed(&data, &7), Some(4));
    assert_eq!(interpolation_search(&data, &7), Some(4));
    assert_eq!(interpolation_search(&data, &6), None);
    assert_eq!(interpolation_search(&data, &8), None);

    assert_eq!(interpolation_search(&[3u8], &3), Some(0));
    assert_eq!(interpolation_search(&[3u8], &4), None);
}

#[test]
fn test_checked_rejects_unsorted() {
    let data = [1, 2, 9, 4, 5];

    assert_eq!(
        binary_search_checked(&data, &4),
        Err(SearchError::Unsorted { index: 2 })
    );
    assert_eq!(
        interpolation_search_checked(&data, &4),
        Err(SearchError::Unsorted { index: 2 })
    );
    assert_eq!(ensure_sorted(&data), Err(SearchError::Unsorted { index: 2 }));

    let sorted = [1, 2, 4, 4, 5];
    assert_eq!(ensure_sorted(&sorted), Ok(()));
    assert_eq!(binary_search_checked(&sorted, &5), Ok(Some(4)));
    assert_eq!(binary_search_checked(&sorted, &3), Ok(None));
    assert!(ensure_sorted::<i32>(&[]).is_ok());
}

#[test]
fn test_error_display() {
    let err = SearchError::Unsorted { index: 3 };
    assert_eq!(
        err.to_string(),
        "input is not sorted: element at index 3 is greater than its successor"
    );
}
