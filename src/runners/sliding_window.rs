//! Instrumented sliding-window algorithms
//!
//! Windows are shown through the step's `range` field (inclusive bounds)
//! with the edge elements highlighted. An Init step establishes the first
//! window; every slide or shrink records its own step.

use rustc_hash::FxHashMap;

use crate::step::{Step, StepKind, StepRecorder};

use super::{RunnerArgs, RunnerError};

pub fn max_sum_subarray(input: &[i64], args: &RunnerArgs) -> Result<Vec<Step>, RunnerError> {
    let k = args.require_k("Maximum Sum Subarray of Size K")?;
    let mut rec = StepRecorder::new();

    if input.is_empty() {
        rec.push(
            StepKind::Empty,
            input,
            Vec::new(),
            "Array is empty, no window exists".to_string(),
        );
        return Ok(rec.finish(input));
    }

    if k == 0 || k > input.len() {
        return Err(RunnerError::InvalidArgument {
            algorithm: "Maximum Sum Subarray of Size K",
            message: format!("window size {} not in 1..={}", k, input.len()),
        });
    }

    let mut window: i64 = input[..k].iter().sum();
    let mut best = window;

    rec.push_ranged(
        StepKind::Init,
        input,
        (0..k).collect(),
        format!("Sum of first window of size {}: {}", k, window),
        0,
        k - 1,
    );

    for i in k..input.len() {
        window = window - input[i - k] + input[i];
        let lo = i - k + 1;
        rec.push_ranged(
            StepKind::Sum,
            input,
            vec![lo, i],
            format!("Slid window to [{}, {}], sum: {}", lo, i, window),
            lo,
            i,
        );

        if window > best {
            best = window;
            rec.push_ranged(
                StepKind::Calculate,
                input,
                vec![lo, i],
                format!("New maximum window sum: {}", best),
                lo,
                i,
            );
        }
    }

    rec.push(
        StepKind::Complete,
        input,
        Vec::new(),
        format!("Maximum sum of a window of size {}: {}", k, best),
    );

    Ok(rec.finish(input))
}

pub fn min_size_subarray_sum(input: &[i64], args: &RunnerArgs) -> Result<Vec<Step>, RunnerError> {
    let target = args.require_target("Minimum Size Subarray Sum")?;
    let mut rec = StepRecorder::new();

    if input.is_empty() {
        rec.push_step(
            Step::new(
                StepKind::NotFound,
                input,
                Vec::new(),
                format!("Array is empty, no subarray can reach {}", target),
            )
            .with_found(false),
        );
        return Ok(rec.finish(input));
    }

    rec.push(
        StepKind::Init,
        input,
        vec![0],
        format!("Looking for the shortest subarray with sum >= {}", target),
    );

    let mut left = 0;
    let mut sum: i64 = 0;
    let mut best = usize::MAX;

    for right in 0..input.len() {
        sum += input[right];
        rec.push_ranged(
            StepKind::Sum,
            input,
            vec![right],
            format!("Extended window to index {}, sum: {}", right, sum),
            left,
            right,
        );

        while sum >= target {
            let len = right - left + 1;
            if len < best {
                best = len;
                rec.push_ranged(
                    StepKind::Calculate,
                    input,
                    vec![left, right],
                    format!(
                        "Window [{}, {}] reaches {} with length {}",
                        left, right, sum, len
                    ),
                    left,
                    right,
                );
            }
            sum -= input[left];
            left += 1;
            if left <= right {
                rec.push_ranged(
                    StepKind::MoveLeft,
                    input,
                    vec![left],
                    format!("Shrinking window from the left, sum: {}", sum),
                    left,
                    right,
                );
            }
        }
    }

    if best == usize::MAX {
        rec.push_step(
            Step::new(
                StepKind::NotFound,
                input,
                Vec::new(),
                format!("No subarray reaches a sum of {}", target),
            )
            .with_found(false),
        );
    } else {
        rec.push(
            StepKind::Complete,
            input,
            Vec::new(),
            format!("Minimum length of a subarray with sum >= {}: {}", target, best),
        );
    }

    Ok(rec.finish(input))
}

pub fn longest_k_distinct(input: &[i64], args: &RunnerArgs) -> Result<Vec<Step>, RunnerError> {
    let k = args.require_k("Longest Subarray with K Distinct")?;
    if k == 0 {
        return Err(RunnerError::InvalidArgument {
            algorithm: "Longest Subarray with K Distinct",
            message: "distinct-value threshold must be at least 1".to_string(),
        });
    }

    let mut rec = StepRecorder::new();

    if input.is_empty() {
        rec.push(
            StepKind::Empty,
            input,
            Vec::new(),
            "Array is empty, longest subarray has length 0".to_string(),
        );
        return Ok(rec.finish(input));
    }

    rec.push(
        StepKind::Init,
        input,
        vec![0],
        format!("Looking for the longest window with at most {} distinct values", k),
    );

    let mut counts: FxHashMap<i64, usize> = FxHashMap::default();
    let mut left = 0;
    let mut best = 0;

    for right in 0..input.len() {
        *counts.entry(input[right]).or_insert(0) += 1;
        rec.push_ranged(
            StepKind::Insert,
            input,
            vec![right],
            format!(
                "Added {} to the window, {} distinct value(s)",
                input[right],
                counts.len()
            ),
            left,
            right,
        );

        while counts.len() > k {
            let leftmost = input[left];
            let count = counts
                .get_mut(&leftmost)
                .expect("window bookkeeping out of sync");
            *count -= 1;
            if *count == 0 {
                counts.remove(&leftmost);
            }
            left += 1;
            rec.push_ranged(
                StepKind::MoveLeft,
                input,
                vec![left],
                format!(
                    "Too many distinct values, dropped {} from the left",
                    leftmost
                ),
                left,
                right,
            );
        }

        let len = right - left + 1;
        if len > best {
            best = len;
            rec.push_ranged(
                StepKind::Calculate,
                input,
                vec![left, right],
                format!("New longest window [{}, {}] of length {}", left, right, len),
                left,
                right,
            );
        }
    }

    rec.push(
        StepKind::Complete,
        input,
        Vec::new(),
        format!(
            "Longest window with at most {} distinct values: {}",
            k, best
        ),
    );

    Ok(rec.finish(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runners::canonical;

    #[test]
    fn max_sum_window_matches_canonical() {
        let input = vec![2, 1, 5, 1, 3, 2];
        let steps = max_sum_subarray(&input, &RunnerArgs::with_k(3)).unwrap();
        let best = canonical::max_sum_window(&input, 3).unwrap();
        assert_eq!(best, 9);
        assert!(steps.last().unwrap().description.contains("9"));
    }

    #[test]
    fn oversized_window_is_rejected() {
        let err = max_sum_subarray(&[1, 2], &RunnerArgs::with_k(5)).unwrap_err();
        assert!(matches!(err, RunnerError::InvalidArgument { .. }));
    }

    #[test]
    fn min_size_subarray_unreachable_target_ends_not_found() {
        let steps =
            min_size_subarray_sum(&[1, 1, 1], &RunnerArgs::with_target(100)).unwrap();
        assert_eq!(steps.last().unwrap().kind, StepKind::NotFound);
    }

    #[test]
    fn min_size_subarray_reports_canonical_length() {
        let input = vec![2, 3, 1, 2, 4, 3];
        let steps = min_size_subarray_sum(&input, &RunnerArgs::with_target(7)).unwrap();
        let best = canonical::min_subarray_len(&input, 7);
        assert_eq!(best, 2);
        assert!(steps.last().unwrap().description.ends_with(": 2"));
    }

    #[test]
    fn k_distinct_tracks_window_ranges() {
        let input = vec![1, 2, 1, 2, 3];
        let steps = longest_k_distinct(&input, &RunnerArgs::with_k(2)).unwrap();
        assert_eq!(canonical::longest_k_distinct(&input, 2), 4);
        assert!(steps.last().unwrap().description.ends_with(": 4"));
        assert!(steps.iter().any(|s| s.kind == StepKind::MoveLeft));
    }
}
