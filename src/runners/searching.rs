//! Instrumented searches
//!
//! Linear and binary search over the input array, plus peak finding (a
//! range-narrowing search catalogued with the array problems). Every probe
//! records a Check step; exactly one terminal Found or NotFound step is
//! appended after the loop regardless of outcome, so an empty input still
//! produces a one-step sequence.

use crate::step::{Step, StepKind, StepRecorder};

use super::{RunnerArgs, RunnerError};

pub fn linear_search(input: &[i64], args: &RunnerArgs) -> Result<Vec<Step>, RunnerError> {
    let target = args.require_target("Linear Search")?;
    let mut rec = StepRecorder::new();

    let mut found_at = None;
    for (i, &value) in input.iter().enumerate() {
        let hit = value == target;
        rec.push_step(
            Step::new(
                StepKind::Check,
                input,
                vec![i],
                format!("Checking element {} at index {}", value, i),
            )
            .with_found(hit),
        );
        if hit {
            found_at = Some(i);
            break;
        }
    }

    match found_at {
        Some(i) => rec.push_step(
            Step::new(
                StepKind::Found,
                input,
                vec![i],
                format!("Found target {} at index {}!", target, i),
            )
            .with_found(true),
        ),
        None => rec.push_step(
            Step::new(
                StepKind::NotFound,
                input,
                Vec::new(),
                format!("Target {} not found in array", target),
            )
            .with_found(false),
        ),
    }

    Ok(rec.finish(input))
}

pub fn binary_search(input: &[i64], args: &RunnerArgs) -> Result<Vec<Step>, RunnerError> {
    let target = args.require_target("Binary Search")?;
    let mut rec = StepRecorder::new();

    let mut left: i64 = 0;
    let mut right = input.len() as i64 - 1;
    let mut found_at = None;

    while left <= right {
        let mid = (left + right) / 2;
        let value = input[mid as usize];
        rec.push_ranged(
            StepKind::Check,
            input,
            vec![mid as usize],
            format!("Checking middle element {} at index {}", value, mid),
            left as usize,
            right as usize,
        );

        if value == target {
            found_at = Some(mid as usize);
            break;
        } else if value < target {
            left = mid + 1;
            if left <= right {
                rec.push_ranged(
                    StepKind::Narrow,
                    input,
                    vec![mid as usize],
                    format!("Target is greater than {}, searching right half", value),
                    left as usize,
                    right as usize,
                );
            }
        } else {
            right = mid - 1;
            if left <= right {
                rec.push_ranged(
                    StepKind::Narrow,
                    input,
                    vec![mid as usize],
                    format!("Target is less than {}, searching left half", value),
                    left as usize,
                    right as usize,
                );
            }
        }
    }

    match found_at {
        Some(i) => rec.push_step(
            Step::new(
                StepKind::Found,
                input,
                vec![i],
                format!("Found target {} at index {}!", target, i),
            )
            .with_found(true),
        ),
        None => rec.push_step(
            Step::new(
                StepKind::NotFound,
                input,
                Vec::new(),
                format!("Target {} not found in array", target),
            )
            .with_found(false),
        ),
    }

    Ok(rec.finish(input))
}

pub fn find_peak_element(input: &[i64], _args: &RunnerArgs) -> Result<Vec<Step>, RunnerError> {
    let mut rec = StepRecorder::new();

    if input.is_empty() {
        rec.push(
            StepKind::NotFound,
            input,
            Vec::new(),
            "Array is empty, no peak exists".to_string(),
        );
        return Ok(rec.finish(input));
    }

    let mut left = 0;
    let mut right = input.len() - 1;

    rec.push(
        StepKind::Init,
        input,
        vec![left, right],
        "Searching for peak element using binary search".to_string(),
    );

    while left < right {
        let mid = (left + right) / 2;
        rec.push(
            StepKind::Check,
            input,
            vec![mid, mid + 1],
            format!("Checking if {} > {}", input[mid], input[mid + 1]),
        );

        if input[mid] > input[mid + 1] {
            right = mid;
            rec.push(
                StepKind::MoveRight,
                input,
                vec![left, right],
                format!("Peak is in left half, moving right to {}", right),
            );
        } else {
            left = mid + 1;
            rec.push(
                StepKind::MoveLeft,
                input,
                vec![left, right],
                format!("Peak is in right half, moving left to {}", left),
            );
        }
    }

    rec.push_step(
        Step::new(
            StepKind::Found,
            input,
            vec![left],
            format!("Peak element found at index {}: {}", left, input[left]),
        )
        .with_found(true),
    );

    Ok(rec.finish(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_search_narrows_right_then_finds() {
        let input = vec![1, 3, 5, 7, 9];
        let steps = binary_search(&input, &RunnerArgs::with_target(7)).unwrap();

        assert_eq!(steps[0].kind, StepKind::Check);
        assert_eq!(steps[0].highlighted, vec![2]);
        assert_eq!(steps[0].range, Some((0, 4)));

        assert_eq!(steps[1].kind, StepKind::Narrow);
        assert_eq!(steps[1].range, Some((3, 4)));

        let last = steps.last().unwrap();
        assert_eq!(last.kind, StepKind::Found);
        assert_eq!(last.highlighted, vec![3]);
        assert_eq!(last.found, Some(true));
    }

    #[test]
    fn linear_search_empty_input_is_one_not_found_step() {
        let steps = linear_search(&[], &RunnerArgs::with_target(4)).unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].kind, StepKind::NotFound);
        assert!(steps[0].highlighted.is_empty());
    }

    #[test]
    fn searches_have_exactly_one_terminal_step() {
        let input = vec![2, 4, 6, 8];
        for target in [6, 5] {
            for runner in [linear_search, binary_search] {
                let steps = runner(&input, &RunnerArgs::with_target(target)).unwrap();
                let terminals = steps
                    .iter()
                    .filter(|s| matches!(s.kind, StepKind::Found | StepKind::NotFound))
                    .count();
                assert_eq!(terminals, 1);
            }
        }
    }

    #[test]
    fn missing_target_is_reported() {
        let err = linear_search(&[1, 2], &RunnerArgs::none()).unwrap_err();
        assert!(matches!(err, RunnerError::MissingArgument { .. }));
    }

    #[test]
    fn peak_on_single_element() {
        let steps = find_peak_element(&[42], &RunnerArgs::none()).unwrap();
        let last = steps.last().unwrap();
        assert_eq!(last.kind, StepKind::Found);
        assert_eq!(last.highlighted, vec![0]);
    }
}
