//! Instrumented comparison sorts
//!
//! Each sort records a Compare (or Select) step for every pair examined and
//! a Swap/Shift/Insert step for every mutation, so the final step's snapshot
//! always equals the sorted array. Inputs of length 0 or 1 yield a single
//! well-defined step instead of an empty sequence.

use crate::step::{StepKind, StepRecorder};

use super::{RunnerArgs, RunnerError};
use crate::step::Step;

/// Single-step sequences for inputs too small to sort.
fn trivial_sort_steps(input: &[i64]) -> Option<Vec<Step>> {
    match input.len() {
        0 => Some(vec![Step::new(
            StepKind::Empty,
            input,
            Vec::new(),
            "Array is empty, nothing to sort".to_string(),
        )]),
        1 => Some(vec![Step::new(
            StepKind::Complete,
            input,
            Vec::new(),
            "A single element is already sorted".to_string(),
        )]),
        _ => None,
    }
}

pub fn bubble_sort(input: &[i64], _args: &RunnerArgs) -> Result<Vec<Step>, RunnerError> {
    if let Some(steps) = trivial_sort_steps(input) {
        return Ok(steps);
    }

    let mut arr = input.to_vec();
    let mut rec = StepRecorder::new();
    let n = arr.len();

    for i in 0..n - 1 {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            rec.push(
                StepKind::Compare,
                &arr,
                vec![j, j + 1],
                format!("Comparing elements at indices {} and {}", j, j + 1),
            );
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
                rec.push(
                    StepKind::Swap,
                    &arr,
                    vec![j, j + 1],
                    format!("Swapped elements at indices {} and {}", j, j + 1),
                );
            }
        }
        // A pass without swaps means the array is sorted; stop early.
        if !swapped {
            break;
        }
    }

    Ok(rec.finish(&arr))
}

pub fn selection_sort(input: &[i64], _args: &RunnerArgs) -> Result<Vec<Step>, RunnerError> {
    if let Some(steps) = trivial_sort_steps(input) {
        return Ok(steps);
    }

    let mut arr = input.to_vec();
    let mut rec = StepRecorder::new();
    let n = arr.len();

    for i in 0..n - 1 {
        let mut min_index = i;
        for j in i + 1..n {
            rec.push(
                StepKind::Compare,
                &arr,
                vec![min_index, j],
                format!(
                    "Comparing element at index {} with current minimum at index {}",
                    j, min_index
                ),
            );
            if arr[j] < arr[min_index] {
                min_index = j;
            }
        }
        if min_index != i {
            arr.swap(i, min_index);
            rec.push(
                StepKind::Swap,
                &arr,
                vec![i, min_index],
                format!("Swapped minimum element with element at index {}", i),
            );
        }
    }

    Ok(rec.finish(&arr))
}

pub fn insertion_sort(input: &[i64], _args: &RunnerArgs) -> Result<Vec<Step>, RunnerError> {
    if let Some(steps) = trivial_sort_steps(input) {
        return Ok(steps);
    }

    let mut arr = input.to_vec();
    let mut rec = StepRecorder::new();

    for i in 1..arr.len() {
        let key = arr[i];
        rec.push(
            StepKind::Select,
            &arr,
            vec![i],
            format!("Selecting element {} at index {} to insert", key, i),
        );

        let mut j = i;
        while j > 0 && arr[j - 1] > key {
            rec.push(
                StepKind::Shift,
                &arr,
                vec![j - 1, j],
                format!("Shifting element {} from index {} to {}", arr[j - 1], j - 1, j),
            );
            arr[j] = arr[j - 1];
            j -= 1;
        }

        arr[j] = key;
        rec.push(
            StepKind::Insert,
            &arr,
            vec![j],
            format!("Inserted {} at index {}", key, j),
        );
    }

    Ok(rec.finish(&arr))
}

pub fn merge_sort(input: &[i64], _args: &RunnerArgs) -> Result<Vec<Step>, RunnerError> {
    if let Some(steps) = trivial_sort_steps(input) {
        return Ok(steps);
    }

    let mut arr = input.to_vec();
    let mut rec = StepRecorder::new();
    let n = arr.len();

    rec.push(
        StepKind::Init,
        &arr,
        Vec::new(),
        format!("Sorting {} elements with merge sort", n),
    );
    sort_range(&mut arr, 0, n, &mut rec);
    rec.push(
        StepKind::Complete,
        &arr,
        Vec::new(),
        "Merge sort complete".to_string(),
    );

    Ok(rec.finish(&arr))
}

/// Recursive half of merge sort over `arr[lo..hi)`. The recorder is threaded
/// through the recursion so steps land in execution order.
fn sort_range(arr: &mut [i64], lo: usize, hi: usize, rec: &mut StepRecorder) {
    if hi - lo <= 1 || rec.is_full() {
        return;
    }
    let mid = lo + (hi - lo) / 2;

    rec.push_ranged(
        StepKind::Narrow,
        arr,
        Vec::new(),
        format!("Splitting range [{}, {}] at index {}", lo, hi - 1, mid),
        lo,
        hi - 1,
    );

    sort_range(arr, lo, mid, rec);
    sort_range(arr, mid, hi, rec);
    merge_range(arr, lo, mid, hi, rec);
}

fn merge_range(arr: &mut [i64], lo: usize, mid: usize, hi: usize, rec: &mut StepRecorder) {
    let left: Vec<i64> = arr[lo..mid].to_vec();
    let right: Vec<i64> = arr[mid..hi].to_vec();
    let (mut i, mut j) = (0, 0);

    for k in lo..hi {
        let take_left = if i < left.len() && j < right.len() {
            rec.push_ranged(
                StepKind::Compare,
                arr,
                vec![k],
                format!("Comparing {} and {} while merging", left[i], right[j]),
                lo,
                hi - 1,
            );
            left[i] <= right[j]
        } else {
            i < left.len()
        };

        let value = if take_left {
            i += 1;
            left[i - 1]
        } else {
            j += 1;
            right[j - 1]
        };
        arr[k] = value;
        rec.push_ranged(
            StepKind::Copy,
            arr,
            vec![k],
            format!("Placed {} at index {}", value, k),
            lo,
            hi - 1,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runners::canonical;

    #[test]
    fn bubble_example_from_three_elements() {
        let steps = bubble_sort(&[5, 3, 1], &RunnerArgs::none()).unwrap();
        assert_eq!(steps[0].kind, StepKind::Compare);
        assert_eq!(steps[0].snapshot, vec![5, 3, 1]);
        assert_eq!(steps[0].highlighted, vec![0, 1]);
        assert_eq!(steps[1].kind, StepKind::Swap);
        assert_eq!(steps[1].snapshot, vec![3, 5, 1]);
        assert_eq!(steps.last().unwrap().snapshot, vec![1, 3, 5]);
    }

    #[test]
    fn sorted_input_still_emits_compares() {
        let steps = bubble_sort(&[1, 2, 3, 4], &RunnerArgs::none()).unwrap();
        assert!(steps.iter().all(|s| s.kind == StepKind::Compare));
        // One pass over n-1 pairs, then early exit.
        assert_eq!(steps.len(), 3);
    }

    #[test]
    fn final_snapshots_match_canonical() {
        let input = vec![9, 4, 7, 1, 4, 8, 2];
        let expected = canonical::bubble_sort(&input);
        for runner in [bubble_sort, selection_sort, insertion_sort, merge_sort] {
            let steps = runner(&input, &RunnerArgs::none()).unwrap();
            assert_eq!(steps.last().unwrap().snapshot, expected);
        }
    }

    #[test]
    fn trivial_inputs_yield_one_step() {
        for runner in [bubble_sort, selection_sort, insertion_sort, merge_sort] {
            let empty = runner(&[], &RunnerArgs::none()).unwrap();
            assert_eq!(empty.len(), 1);
            assert_eq!(empty[0].kind, StepKind::Empty);

            let single = runner(&[7], &RunnerArgs::none()).unwrap();
            assert_eq!(single.len(), 1);
            assert_eq!(single[0].kind, StepKind::Complete);
            assert_eq!(single[0].snapshot, vec![7]);
        }
    }
}
