//! Instrumented two-pointer algorithms
//!
//! Every runner opens with an Init step establishing the starting pointers,
//! records one step per pointer comparison or move, and closes with a
//! terminal Complete/Found/NotFound step.

use crate::step::{Step, StepKind, StepRecorder};

use super::{RunnerArgs, RunnerError};

pub fn reverse_array(input: &[i64], _args: &RunnerArgs) -> Result<Vec<Step>, RunnerError> {
    let mut rec = StepRecorder::new();

    if input.is_empty() {
        rec.push(
            StepKind::Empty,
            input,
            Vec::new(),
            "Array is empty, nothing to reverse".to_string(),
        );
        return Ok(rec.finish(input));
    }

    let mut arr = input.to_vec();
    let mut left = 0;
    let mut right = arr.len() - 1;

    rec.push(
        StepKind::Init,
        &arr,
        vec![left, right],
        format!("Initializing two pointers: left={}, right={}", left, right),
    );

    while left < right {
        rec.push(
            StepKind::Compare,
            &arr,
            vec![left, right],
            format!("Comparing pointers: left={}, right={}", left, right),
        );

        arr.swap(left, right);
        rec.push(
            StepKind::Swap,
            &arr,
            vec![left, right],
            format!("Swapped elements at indices {} and {}", left, right),
        );

        left += 1;
        right -= 1;

        if left < right {
            rec.push(
                StepKind::Move,
                &arr,
                vec![left, right],
                format!("Moving pointers: left={}, right={}", left, right),
            );
        }
    }

    rec.push(
        StepKind::Complete,
        &arr,
        Vec::new(),
        "Array reversed successfully!".to_string(),
    );

    Ok(rec.finish(&arr))
}

pub fn two_sum_sorted(input: &[i64], args: &RunnerArgs) -> Result<Vec<Step>, RunnerError> {
    let target = args.require_target("Two Sum (Sorted Array)")?;
    let mut rec = StepRecorder::new();

    if input.is_empty() {
        rec.push_step(
            Step::new(
                StepKind::NotFound,
                input,
                Vec::new(),
                format!("Array is empty, no pair can sum to {}", target),
            )
            .with_found(false),
        );
        return Ok(rec.finish(input));
    }

    let mut left = 0;
    let mut right = input.len() - 1;

    rec.push(
        StepKind::Init,
        input,
        vec![left, right],
        format!("Looking for two numbers that sum to {}", target),
    );

    while left < right {
        let sum = input[left] + input[right];
        rec.push(
            StepKind::Check,
            input,
            vec![left, right],
            format!("Checking sum: {} + {} = {}", input[left], input[right], sum),
        );

        if sum == target {
            rec.push_step(
                Step::new(
                    StepKind::Found,
                    input,
                    vec![left, right],
                    format!("Found pair! {} + {} = {}", input[left], input[right], target),
                )
                .with_found(true),
            );
            return Ok(rec.finish(input));
        } else if sum < target {
            left += 1;
            rec.push(
                StepKind::MoveLeft,
                input,
                vec![left, right],
                format!("Sum {} < {}, moving left pointer to {}", sum, target, left),
            );
        } else {
            right -= 1;
            rec.push(
                StepKind::MoveRight,
                input,
                vec![left, right],
                format!("Sum {} > {}, moving right pointer to {}", sum, target, right),
            );
        }
    }

    rec.push_step(
        Step::new(
            StepKind::NotFound,
            input,
            Vec::new(),
            format!("No pair found that sums to {}", target),
        )
        .with_found(false),
    );

    Ok(rec.finish(input))
}

pub fn remove_duplicates(input: &[i64], _args: &RunnerArgs) -> Result<Vec<Step>, RunnerError> {
    let mut rec = StepRecorder::new();

    if input.is_empty() {
        rec.push(
            StepKind::Empty,
            input,
            Vec::new(),
            "Array is empty, no duplicates to remove".to_string(),
        );
        return Ok(rec.finish(input));
    }

    let mut arr = input.to_vec();
    let mut write = 1;

    let init_marks = if arr.len() > 1 { vec![0, 1] } else { vec![0] };
    rec.push(
        StepKind::Init,
        &arr,
        init_marks,
        format!("Starting with write index = {}", write),
    );

    for read in 1..arr.len() {
        rec.push(
            StepKind::Compare,
            &arr,
            vec![read - 1, read],
            format!("Comparing elements at indices {} and {}", read - 1, read),
        );

        if arr[read] != arr[read - 1] {
            let value = arr[read];
            arr[write] = value;
            write += 1;
            rec.push(
                StepKind::Copy,
                &arr,
                vec![read, write - 1],
                format!("Copied {} to position {}", value, write - 1),
            );
        } else {
            rec.push(
                StepKind::Skip,
                &arr,
                vec![read],
                format!("Skipping duplicate element {}", arr[read]),
            );
        }
    }

    rec.push(
        StepKind::Complete,
        &arr,
        Vec::new(),
        format!("Removed duplicates. New length: {}", write),
    );

    Ok(rec.finish(&arr))
}

pub fn max_area(input: &[i64], _args: &RunnerArgs) -> Result<Vec<Step>, RunnerError> {
    let mut rec = StepRecorder::new();

    if input.len() < 2 {
        rec.push(
            StepKind::Empty,
            input,
            Vec::new(),
            "Need at least two lines to hold water".to_string(),
        );
        return Ok(rec.finish(input));
    }

    let mut left = 0;
    let mut right = input.len() - 1;
    let mut best = 0;

    rec.push(
        StepKind::Init,
        input,
        vec![left, right],
        "Finding container with most water".to_string(),
    );

    while left < right {
        let width = (right - left) as i64;
        let height = input[left].min(input[right]);
        let area = width * height;
        best = best.max(area);

        rec.push(
            StepKind::Calculate,
            input,
            vec![left, right],
            format!("Width: {}, Height: {}, Area: {}", width, height, area),
        );

        if input[left] < input[right] {
            left += 1;
            rec.push(
                StepKind::MoveLeft,
                input,
                vec![left, right],
                format!("Moving left pointer to {} (shorter line)", left),
            );
        } else {
            right -= 1;
            rec.push(
                StepKind::MoveRight,
                input,
                vec![left, right],
                format!("Moving right pointer to {} (shorter line)", right),
            );
        }
    }

    rec.push(
        StepKind::Complete,
        input,
        Vec::new(),
        format!("Maximum area found: {}", best),
    );

    Ok(rec.finish(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runners::canonical;

    #[test]
    fn two_sum_sorted_worked_example() {
        let input = vec![1, 2, 4, 7, 11];
        let steps = two_sum_sorted(&input, &RunnerArgs::with_target(9)).unwrap();
        let last = steps.last().unwrap();
        assert_eq!(last.kind, StepKind::Found);
        assert_eq!(last.highlighted, vec![1, 3]);
        assert_eq!(
            canonical::two_sum_sorted(&input, 9),
            Some((1, 3)),
            "runner and canonical must agree"
        );
    }

    #[test]
    fn two_sum_absent_target_ends_not_found() {
        let steps = two_sum_sorted(&[1, 2, 3], &RunnerArgs::with_target(100)).unwrap();
        assert_eq!(steps.last().unwrap().kind, StepKind::NotFound);
        assert!(steps.last().unwrap().highlighted.is_empty());
    }

    #[test]
    fn reverse_ends_with_reversed_snapshot() {
        let steps = reverse_array(&[1, 2, 3, 4], &RunnerArgs::none()).unwrap();
        assert_eq!(steps[0].kind, StepKind::Init);
        assert_eq!(steps.last().unwrap().snapshot, vec![4, 3, 2, 1]);
        assert_eq!(steps.last().unwrap().kind, StepKind::Complete);
    }

    #[test]
    fn remove_duplicates_compacts_prefix() {
        let steps = remove_duplicates(&[1, 1, 2, 2, 3], &RunnerArgs::none()).unwrap();
        let (expected, len) = canonical::remove_duplicates(&[1, 1, 2, 2, 3]);
        assert_eq!(steps.last().unwrap().snapshot, expected);
        assert!(steps.last().unwrap().description.contains(&len.to_string()));
    }

    #[test]
    fn max_area_matches_canonical() {
        let input = vec![1, 8, 6, 2, 5, 4, 8, 3, 7];
        let steps = max_area(&input, &RunnerArgs::none()).unwrap();
        let best = canonical::max_area(&input);
        assert!(steps
            .last()
            .unwrap()
            .description
            .contains(&best.to_string()));
    }
}
