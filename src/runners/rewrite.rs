//! Instrumented array-rewrite problems
//!
//! Move zeros, find the missing number, rotation by reversal, and Kadane's
//! maximum subarray. One step per element visited, copied, or skipped; the
//! terminal Complete/Found step's snapshot is the final array.

use crate::step::{Step, StepKind, StepRecorder};

use super::{RunnerArgs, RunnerError};

pub fn move_zeros(input: &[i64], _args: &RunnerArgs) -> Result<Vec<Step>, RunnerError> {
    let mut rec = StepRecorder::new();

    if input.is_empty() {
        rec.push(
            StepKind::Empty,
            input,
            Vec::new(),
            "Array is empty, no zeros to move".to_string(),
        );
        return Ok(rec.finish(input));
    }

    let mut arr = input.to_vec();
    let mut write = 0;

    rec.push(
        StepKind::Init,
        &arr,
        vec![0],
        "Starting to move zeros to end".to_string(),
    );

    for read in 0..arr.len() {
        if arr[read] != 0 {
            let value = arr[read];
            arr[write] = value;
            rec.push(
                StepKind::Move,
                &arr,
                vec![read, write],
                format!("Moving {} from index {} to {}", value, read, write),
            );
            write += 1;
        } else {
            rec.push(
                StepKind::Skip,
                &arr,
                vec![read],
                format!("Skipping zero at index {}", read),
            );
        }
    }

    for i in write..arr.len() {
        arr[i] = 0;
        rec.push(
            StepKind::Fill,
            &arr,
            vec![i],
            format!("Filling index {} with zero", i),
        );
    }

    rec.push(
        StepKind::Complete,
        &arr,
        Vec::new(),
        "All zeros moved to end successfully!".to_string(),
    );

    Ok(rec.finish(&arr))
}

pub fn find_missing_number(input: &[i64], _args: &RunnerArgs) -> Result<Vec<Step>, RunnerError> {
    let mut rec = StepRecorder::new();

    if input.is_empty() {
        rec.push_step(
            Step::new(
                StepKind::Found,
                input,
                Vec::new(),
                "Array is empty; the missing number from 0..=0 is 0".to_string(),
            )
            .with_found(true),
        );
        return Ok(rec.finish(input));
    }

    let n = input.len() as i64;
    let expected = n * (n + 1) / 2;

    rec.push(
        StepKind::Init,
        input,
        Vec::new(),
        format!("Expected sum for 0 to {}: {}", n, expected),
    );

    let mut actual = 0i64;
    for (i, &value) in input.iter().enumerate() {
        actual += value;
        rec.push(
            StepKind::Sum,
            input,
            vec![i],
            format!("Adding {}, current sum: {}", value, actual),
        );
    }

    let missing = expected - actual;
    rec.push_step(
        Step::new(
            StepKind::Found,
            input,
            Vec::new(),
            format!("Missing number: {} - {} = {}", expected, actual, missing),
        )
        .with_found(true),
    );

    Ok(rec.finish(input))
}

pub fn rotate_array(input: &[i64], args: &RunnerArgs) -> Result<Vec<Step>, RunnerError> {
    let k = args.require_k("Rotate Array")?;
    let mut rec = StepRecorder::new();

    if input.is_empty() {
        rec.push(
            StepKind::Empty,
            input,
            Vec::new(),
            "Array is empty, nothing to rotate".to_string(),
        );
        return Ok(rec.finish(input));
    }

    let mut arr = input.to_vec();
    let n = arr.len();
    let k = k % n;

    rec.push(
        StepKind::Init,
        &arr,
        Vec::new(),
        format!("Rotating array by {} positions to the right", k),
    );

    if k == 0 {
        rec.push(
            StepKind::Complete,
            &arr,
            Vec::new(),
            "Rotation is a multiple of the length; array unchanged".to_string(),
        );
        return Ok(rec.finish(&arr));
    }

    record_reversal(
        &mut arr,
        0,
        n - 1,
        StepKind::ReverseAll,
        "Step 1: Reverse entire array",
        &mut rec,
    );
    record_reversal(
        &mut arr,
        0,
        k - 1,
        StepKind::ReverseFirst,
        &format!("Step 2: Reverse first {} elements", k),
        &mut rec,
    );
    record_reversal(
        &mut arr,
        k,
        n - 1,
        StepKind::ReverseRemaining,
        "Step 3: Reverse remaining elements",
        &mut rec,
    );

    rec.push(
        StepKind::Complete,
        &arr,
        Vec::new(),
        "Array rotated successfully!".to_string(),
    );

    Ok(rec.finish(&arr))
}

/// Mark a reversal phase, perform it, and record one Swap per exchange.
fn record_reversal(
    arr: &mut [i64],
    start: usize,
    end: usize,
    phase: StepKind,
    description: &str,
    rec: &mut StepRecorder,
) {
    rec.push_ranged(
        phase,
        arr,
        vec![start, end],
        description.to_string(),
        start,
        end,
    );

    let (mut lo, mut hi) = (start, end);
    while lo < hi {
        arr.swap(lo, hi);
        rec.push_ranged(
            StepKind::Swap,
            arr,
            vec![lo, hi],
            format!("Swapped elements at indices {} and {}", lo, hi),
            start,
            end,
        );
        lo += 1;
        hi -= 1;
    }
}

pub fn max_subarray_sum(input: &[i64], _args: &RunnerArgs) -> Result<Vec<Step>, RunnerError> {
    let mut rec = StepRecorder::new();

    if input.is_empty() {
        rec.push(
            StepKind::Empty,
            input,
            Vec::new(),
            "Array is empty, no subarray exists".to_string(),
        );
        return Ok(rec.finish(input));
    }

    let mut best = input[0];
    let mut ending_here = input[0];

    rec.push(
        StepKind::Init,
        input,
        vec![0],
        format!("Starting with first element {} as the best sum", input[0]),
    );

    for i in 1..input.len() {
        let value = input[i];
        let extended = ending_here + value;
        ending_here = value.max(extended);
        rec.push(
            StepKind::Calculate,
            input,
            vec![i],
            format!(
                "Best sum ending here: max({}, {}) = {}",
                value, extended, ending_here
            ),
        );

        if ending_here > best {
            best = ending_here;
            rec.push(
                StepKind::Sum,
                input,
                vec![i],
                format!("New best subarray sum: {}", best),
            );
        }
    }

    rec.push(
        StepKind::Complete,
        input,
        Vec::new(),
        format!("Maximum subarray sum: {}", best),
    );

    Ok(rec.finish(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runners::canonical;

    #[test]
    fn rotate_final_snapshot_is_rotated() {
        let input = vec![1, 2, 3, 4, 5, 6, 7];
        let steps = rotate_array(&input, &RunnerArgs::with_k(3)).unwrap();
        assert_eq!(
            steps.last().unwrap().snapshot,
            canonical::rotate_array(&input, 3)
        );
        assert!(steps.iter().any(|s| s.kind == StepKind::ReverseAll));
        assert!(steps.iter().any(|s| s.kind == StepKind::ReverseFirst));
        assert!(steps.iter().any(|s| s.kind == StepKind::ReverseRemaining));
    }

    #[test]
    fn rotate_by_multiple_of_length_is_identity() {
        let input = vec![4, 5, 6];
        let steps = rotate_array(&input, &RunnerArgs::with_k(6)).unwrap();
        assert_eq!(steps.last().unwrap().snapshot, input);
        assert_eq!(steps.len(), 2);
    }

    #[test]
    fn move_zeros_keeps_relative_order() {
        let input = vec![0, 1, 0, 3, 12];
        let steps = move_zeros(&input, &RunnerArgs::none()).unwrap();
        assert_eq!(steps.last().unwrap().snapshot, vec![1, 3, 12, 0, 0]);
    }

    #[test]
    fn missing_number_announced_in_terminal_step() {
        let input = vec![3, 0, 1];
        let steps = find_missing_number(&input, &RunnerArgs::none()).unwrap();
        let missing = canonical::find_missing_number(&input);
        assert_eq!(missing, 2);
        assert!(steps.last().unwrap().description.contains("= 2"));
    }

    #[test]
    fn kadane_handles_all_negative() {
        let input = vec![-3, -1, -2];
        let steps = max_subarray_sum(&input, &RunnerArgs::none()).unwrap();
        assert!(steps.last().unwrap().description.contains("-1"));
        assert_eq!(canonical::max_subarray_sum(&input), Some(-1));
    }
}
