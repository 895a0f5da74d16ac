//! Expected-output derivation for the predict feature
//!
//! Everything here calls into `runners::canonical`, never a second copy of
//! the algorithm, so the prediction and the visualization cannot diverge.

use crate::catalog::AlgorithmInfo;
use crate::runners::{canonical, fmt_values, RunnerArgs};

fn fmt_nested(groups: &[Vec<i64>]) -> String {
    let items: Vec<String> = groups.iter().map(|g| fmt_values(g)).collect();
    format!("[{}]", items.join(", "))
}

/// Human-readable expected output for one algorithm on one input.
pub fn expected_output(info: &AlgorithmInfo, array: &[i64], args: &RunnerArgs) -> String {
    match info.name {
        "Bubble Sort" => fmt_values(&canonical::bubble_sort(array)),
        "Selection Sort" => fmt_values(&canonical::selection_sort(array)),
        "Insertion Sort" => fmt_values(&canonical::insertion_sort(array)),
        "Merge Sort" => fmt_values(&canonical::merge_sort(array)),

        "Linear Search" | "Binary Search" => {
            let target = args.target.unwrap_or(0);
            let result = if info.name == "Linear Search" {
                canonical::linear_search(array, target)
            } else {
                canonical::binary_search(array, target)
            };
            match result {
                Some(i) => format!("target {} found at index {}", target, i),
                None => format!("target {} not found (-1)", target),
            }
        }

        "Reverse Array" => fmt_values(&canonical::reverse_array(array)),
        "Two Sum (Sorted Array)" => {
            let target = args.target.unwrap_or(0);
            match canonical::two_sum_sorted(array, target) {
                Some((i, j)) => format!("indices ({}, {}) sum to {}", i, j, target),
                None => format!("no pair sums to {} (-1, -1)", target),
            }
        }
        "Remove Duplicates" => {
            let (arr, len) = canonical::remove_duplicates(array);
            format!("new length {}: {}", len, fmt_values(&arr[..len]))
        }
        "Container With Most Water" => {
            format!("maximum area {}", canonical::max_area(array))
        }

        "Move Zeros to End" => fmt_values(&canonical::move_zeros(array)),
        "Find Missing Number" => {
            format!("missing number {}", canonical::find_missing_number(array))
        }
        "Find Peak Element" => match canonical::find_peak_element(array) {
            Some(i) => format!("peak at index {} (value {})", i, array[i]),
            None => "no peak in an empty array".to_string(),
        },
        "Rotate Array" => {
            let k = args.k.unwrap_or(0);
            fmt_values(&canonical::rotate_array(array, k))
        }
        "Maximum Subarray Sum (Kadane)" => match canonical::max_subarray_sum(array) {
            Some(best) => format!("maximum subarray sum {}", best),
            None => "no subarray in an empty array".to_string(),
        },

        "Two Sum (Hash Map)" => {
            let target = args.target.unwrap_or(0);
            match canonical::two_sum_hash(array, target) {
                Some((i, j)) => format!("indices ({}, {}) sum to {}", i, j, target),
                None => format!("no pair sums to {} (-1, -1)", target),
            }
        }
        "Find Duplicate" => match canonical::find_duplicate(array) {
            Some(v) => format!("first duplicate {}", v),
            None => "no duplicate (-1)".to_string(),
        },
        "Frequency Counter" => {
            let pairs = canonical::frequency_counts(array);
            let items: Vec<String> =
                pairs.iter().map(|(v, c)| format!("{}x{}", v, c)).collect();
            items.join(", ")
        }

        "Maximum Sum Subarray of Size K" => {
            let k = args.k.unwrap_or(1);
            match canonical::max_sum_window(array, k) {
                Some(best) => format!("maximum sum {} for window size {}", best, k),
                None => format!("no window of size {} fits", k),
            }
        }
        "Minimum Size Subarray Sum" => {
            let target = args.target.unwrap_or(0);
            let len = canonical::min_subarray_len(array, target);
            if len == 0 {
                format!("no subarray reaches {}", target)
            } else {
                format!("minimum length {} for sum >= {}", len, target)
            }
        }
        "Longest Subarray with K Distinct" => {
            let k = args.k.unwrap_or(1);
            format!(
                "longest length {} with at most {} distinct",
                canonical::longest_k_distinct(array, k),
                k
            )
        }

        "Generate All Permutations" => {
            // Original behavior: only the first few are shown.
            let first = canonical::permutations(array, 5);
            format!("first {}: {}", first.len(), fmt_nested(&first))
        }
        "Generate All Subsets" => {
            let first = canonical::subsets(array, 8);
            format!("first {}: {}", first.len(), fmt_nested(&first))
        }
        "N-Queens Problem" => {
            let n = args.n.unwrap_or(4);
            let solutions = canonical::n_queens(n, 64);
            format!("{} solution(s) for {} queens", solutions.len(), n)
        }

        "Tree Traversal - Inorder" => fmt_values(&canonical::inorder_traversal(array)),
        "Tree Traversal - Preorder" => fmt_values(&canonical::preorder_traversal(array)),
        "Breadth First Search (BFS)" => fmt_values(&canonical::bfs_traversal(array)),
        "Depth First Search (DFS)" => fmt_values(&canonical::dfs_traversal(array)),

        "Fibonacci (DP)" => {
            let n = args.n.unwrap_or(0);
            format!("fibonacci({}) = {}", n, canonical::fibonacci(n))
        }
        "Longest Common Subsequence" => {
            let second = args.second.as_deref().unwrap_or(&[]);
            format!(
                "common subsequence length {}",
                canonical::lcs_length(array, second)
            )
        }

        _ => fmt_values(array),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category};

    #[test]
    fn sort_prediction_is_the_sorted_array() {
        let catalog = Catalog::standard();
        let info = catalog.get(Category::Sorting, "Bubble Sort").unwrap();
        let text = expected_output(info, &[5, 3, 1], &RunnerArgs::none());
        assert_eq!(text, "[1, 3, 5]");
    }

    #[test]
    fn search_prediction_names_the_index() {
        let catalog = Catalog::standard();
        let info = catalog.get(Category::Searching, "Binary Search").unwrap();
        let text = expected_output(info, &[1, 3, 5, 7, 9], &RunnerArgs::with_target(7));
        assert!(text.contains("index 3"));
    }

    #[test]
    fn every_entry_produces_a_prediction() {
        let catalog = Catalog::standard();
        let array = vec![3, 1, 4, 1, 5];
        for info in catalog.entries() {
            let args = RunnerArgs {
                target: Some(4),
                k: Some(2),
                n: Some(5),
                second: Some(vec![1, 4, 5]),
            };
            let text = expected_output(info, &array, &args);
            assert!(!text.is_empty(), "{} produced no prediction", info.name);
        }
    }
}
