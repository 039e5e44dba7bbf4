//! Integration tests for sort correctness.
//!
//! These tests verify that insertion, merge and hybrid sort agree with the
//! standard library's stable sort across input sizes and hybrid thresholds,
//! using randomized testing.

use hybridsort::{hybrid_sort_by, insertion_sort_by, merge, merge_sort_by, Algorithm};
use rand::Rng;

/// Hybrid thresholds exercised at every scale
const THRESHOLDS: [usize; 7] = [0, 1, 2, 5, 16, 64, 100_000];

/// Number of iterations per configuration
const ITERATIONS: usize = 20;

#[test]
fn test_correctness_scale_10() {
    run_correctness_tests(1);
}

#[test]
fn test_correctness_scale_100() {
    run_correctness_tests(2);
}

#[test]
fn test_correctness_scale_1000() {
    run_correctness_tests(3);
}

fn run_correctness_tests(scale: u32) {
    let mut rng = rand::thread_rng();
    let size = 10_usize.pow(scale);

    for iter in 0..ITERATIONS {
        // Narrow value range forces plenty of duplicates
        let arr: Vec<i32> = (0..size).map(|_| rng.gen_range(0..size as i32 / 2 + 1)).collect();

        let mut expected = arr.clone();
        expected.sort();

        assert_eq!(
            insertion_sort_by(&arr, |a, b| a.cmp(b)),
            expected,
            "insertion mismatch at scale=10^{}, iteration={}",
            scale,
            iter
        );
        assert_eq!(
            merge_sort_by(&arr, |a, b| a.cmp(b)),
            expected,
            "merge mismatch at scale=10^{}, iteration={}",
            scale,
            iter
        );
        for &n0 in &THRESHOLDS {
            assert_eq!(
                hybrid_sort_by(&arr, n0, |a, b| a.cmp(b)),
                expected,
                "hybrid mismatch at scale=10^{}, n0={}, iteration={}",
                scale,
                n0,
                iter
            );
        }
    }
}

#[test]
fn test_stability_with_tagged_duplicates() {
    let mut rng = rand::thread_rng();

    for size in [5usize, 17, 100, 333] {
        // (key, original position); only the key is compared
        let arr: Vec<(u8, usize)> = (0..size).map(|i| (rng.gen_range(0..4), i)).collect();

        let mut expected = arr.clone();
        expected.sort_by_key(|&(key, _)| key);

        let by_key = |a: &(u8, usize), b: &(u8, usize)| a.0.cmp(&b.0);
        assert_eq!(insertion_sort_by(&arr, by_key), expected, "insertion, size {}", size);
        assert_eq!(merge_sort_by(&arr, by_key), expected, "merge, size {}", size);
        for &n0 in &THRESHOLDS {
            assert_eq!(
                hybrid_sort_by(&arr, n0, by_key),
                expected,
                "hybrid, size {}, n0 {}",
                size,
                n0
            );
        }
    }
}

#[test]
fn test_input_is_not_mutated() {
    let arr = vec![3, 1, 2];
    for algorithm in Algorithm::all(Some(2)).unwrap() {
        let sorted = algorithm.sort(&arr);
        assert_eq!(sorted, vec![1, 2, 3]);
        assert_eq!(arr, vec![3, 1, 2], "{} mutated its input", algorithm);
    }
}

#[test]
fn test_empty_and_single() {
    let empty: Vec<i32> = Vec::new();
    for algorithm in Algorithm::all(Some(4)).unwrap() {
        assert!(algorithm.sort(&empty).is_empty());
        assert_eq!(algorithm.sort(&[42]), vec![42]);
    }
}

#[test]
fn test_reverse_ordered_input() {
    let arr: Vec<i32> = (0..1000).rev().collect();
    let expected: Vec<i32> = (0..1000).collect();
    for algorithm in Algorithm::all(Some(24)).unwrap() {
        assert_eq!(algorithm.sort(&arr), expected, "{}", algorithm);
    }
}

#[test]
fn test_merge_properties() {
    let mut rng = rand::thread_rng();

    for _ in 0..ITERATIONS {
        let mut left: Vec<u32> = (0..rng.gen_range(0..50)).map(|_| rng.gen_range(0..20)).collect();
        let mut right: Vec<u32> = (0..rng.gen_range(0..50)).map(|_| rng.gen_range(0..20)).collect();
        left.sort();
        right.sort();

        let merged = merge(&left, &right);
        assert_eq!(merged.len(), left.len() + right.len());
        assert!(merged.windows(2).all(|w| w[0] <= w[1]));

        let mut expected = [left.as_slice(), right.as_slice()].concat();
        expected.sort();
        assert_eq!(merged, expected);
    }
}

#[test]
fn test_merge_with_empty_side() {
    assert_eq!(merge(&[], &[1, 2, 3]), vec![1, 2, 3]);
    assert_eq!(merge(&[1, 2, 3], &[]), vec![1, 2, 3]);
    assert_eq!(merge::<i32>(&[], &[]), Vec::<i32>::new());
}

#[test]
fn test_descending_comparator() {
    let arr = vec![1, 2, 3, 4, 5];
    assert_eq!(insertion_sort_by(&arr, |a, b| b.cmp(a)), vec![5, 4, 3, 2, 1]);
    assert_eq!(merge_sort_by(&arr, |a, b| b.cmp(a)), vec![5, 4, 3, 2, 1]);
    assert_eq!(hybrid_sort_by(&arr, 2, |a, b| b.cmp(a)), vec![5, 4, 3, 2, 1]);
}

#[test]
fn test_string_sorting() {
    let arr = vec!["banana", "apple", "cherry", "date"];
    let expected = vec!["apple", "banana", "cherry", "date"];
    for algorithm in Algorithm::all(Some(2)).unwrap() {
        assert_eq!(algorithm.sort(&arr), expected);
    }
}

#[test]
fn test_struct_with_complex_comparator() {
    #[derive(Clone, Debug, PartialEq, Eq)]
    struct Person {
        name: String,
        age: u32,
    }

    let people = vec![
        Person { name: "Alice".into(), age: 30 },
        Person { name: "Bob".into(), age: 25 },
        Person { name: "Charlie".into(), age: 30 },
        Person { name: "Diana".into(), age: 25 },
    ];

    // Sort by age ascending; equal ages keep their input order
    let sorted = hybrid_sort_by(&people, 2, |a, b| a.age.cmp(&b.age));
    let names: Vec<&str> = sorted.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Diana", "Alice", "Charlie"]);
}
