//! Instrumented backtracking / exhaustive enumeration
//!
//! These are the exponential-family runners: permutations, subsets, and
//! N-Queens. All of them record through the capped [`StepRecorder`] and
//! poll `is_full` inside the recursion, so a large input yields a bounded
//! prefix ending in a truncation notice instead of blocking the event loop.

use crate::step::{Step, StepKind, StepRecorder};

use super::{fmt_values, RunnerArgs, RunnerError};

pub fn permutations(input: &[i64], _args: &RunnerArgs) -> Result<Vec<Step>, RunnerError> {
    let mut rec = StepRecorder::new();

    if input.is_empty() {
        rec.push(
            StepKind::Empty,
            input,
            Vec::new(),
            "Array is empty; the only permutation is the empty one".to_string(),
        );
        return Ok(rec.finish(input));
    }

    let mut arr = input.to_vec();
    rec.push(
        StepKind::Init,
        &arr,
        Vec::new(),
        format!("Generating permutations of {}", fmt_values(&arr)),
    );

    let mut count = 0usize;
    permute(&mut arr, 0, &mut count, &mut rec);

    rec.push(
        StepKind::Complete,
        &arr,
        Vec::new(),
        format!("Generated {} permutation(s)", count),
    );

    Ok(rec.finish(&arr))
}

fn permute(arr: &mut Vec<i64>, start: usize, count: &mut usize, rec: &mut StepRecorder) {
    if rec.is_full() {
        return;
    }
    if start == arr.len() {
        *count += 1;
        rec.push_step(
            Step::new(
                StepKind::Found,
                arr,
                (0..arr.len()).collect(),
                format!("Permutation {}: {}", count, fmt_values(arr)),
            )
            .with_found(true),
        );
        return;
    }

    for i in start..arr.len() {
        if rec.is_full() {
            return;
        }
        if i != start {
            arr.swap(start, i);
            rec.push(
                StepKind::Swap,
                arr,
                vec![start, i],
                format!("Swapped positions {} and {}", start, i),
            );
        }
        permute(arr, start + 1, count, rec);
        if i != start {
            arr.swap(start, i);
            rec.push(
                StepKind::Skip,
                arr,
                vec![start, i],
                format!("Backtracked: restored positions {} and {}", start, i),
            );
        }
    }
}

pub fn subsets(input: &[i64], _args: &RunnerArgs) -> Result<Vec<Step>, RunnerError> {
    let mut rec = StepRecorder::new();

    if input.is_empty() {
        rec.push(
            StepKind::Empty,
            input,
            Vec::new(),
            "Array is empty; the only subset is the empty set".to_string(),
        );
        return Ok(rec.finish(input));
    }

    let n = input.len().min(20);
    rec.push(
        StepKind::Init,
        input,
        Vec::new(),
        format!("Enumerating all {} subsets by bitmask", 1u64 << n),
    );

    let mut count = 0u64;
    for mask in 0u32..(1u32 << n) {
        if rec.is_full() {
            break;
        }
        let members: Vec<usize> = (0..n).filter(|&j| mask & (1 << j) != 0).collect();
        let values: Vec<i64> = members.iter().map(|&j| input[j]).collect();
        count += 1;
        rec.push(
            StepKind::Select,
            input,
            members,
            format!("Subset {}: {}", mask, fmt_values(&values)),
        );
    }

    rec.push(
        StepKind::Complete,
        input,
        Vec::new(),
        format!("Enumerated {} subset(s)", count),
    );

    Ok(rec.finish(input))
}

/// N-Queens over a board of size `n` (from the runner arguments, not the
/// array). Snapshots are the board state: one slot per row holding the
/// queen's column, -1 while the row is empty.
pub fn n_queens(_input: &[i64], args: &RunnerArgs) -> Result<Vec<Step>, RunnerError> {
    let n = args.require_n("N-Queens Problem")?;
    if n == 0 || n > 10 {
        return Err(RunnerError::InvalidArgument {
            algorithm: "N-Queens Problem",
            message: format!("board size {} not in 1..=10", n),
        });
    }

    let mut rec = StepRecorder::new();
    let mut columns: Vec<i64> = vec![-1; n];

    rec.push(
        StepKind::Init,
        &columns,
        Vec::new(),
        format!("Placing {} queens so none attack each other", n),
    );

    let mut solutions = 0usize;
    solve_queens(&mut columns, 0, n, &mut solutions, &mut rec);

    rec.push(
        StepKind::Complete,
        &columns,
        Vec::new(),
        format!("Found {} solution(s) for {} queens", solutions, n),
    );

    Ok(rec.finish(&columns))
}

fn solve_queens(
    columns: &mut Vec<i64>,
    row: usize,
    n: usize,
    solutions: &mut usize,
    rec: &mut StepRecorder,
) {
    if rec.is_full() {
        return;
    }
    if row == n {
        *solutions += 1;
        rec.push_step(
            Step::new(
                StepKind::Found,
                columns,
                (0..n).collect(),
                format!("Solution {}: columns {}", solutions, fmt_values(columns)),
            )
            .with_found(true),
        );
        return;
    }

    for col in 0..n {
        if rec.is_full() {
            return;
        }
        rec.push(
            StepKind::Check,
            columns,
            vec![row],
            format!("Trying column {} in row {}", col, row),
        );

        if super::canonical::queen_fits(columns, row, col) {
            columns[row] = col as i64;
            rec.push(
                StepKind::Insert,
                columns,
                vec![row],
                format!("Placed queen at row {}, column {}", row, col),
            );
            solve_queens(columns, row + 1, n, solutions, rec);
            columns[row] = -1;
            rec.push(
                StepKind::Skip,
                columns,
                vec![row],
                format!("Removed queen from row {}", row),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::MAX_STEPS;

    #[test]
    fn permutations_of_three_values() {
        let steps = permutations(&[1, 2, 3], &RunnerArgs::none()).unwrap();
        let found = steps.iter().filter(|s| s.kind == StepKind::Found).count();
        assert_eq!(found, 6);
        assert_eq!(steps.last().unwrap().kind, StepKind::Complete);
        // Backtracking restores the array before the final step.
        assert_eq!(steps.last().unwrap().snapshot, vec![1, 2, 3]);
    }

    #[test]
    fn large_permutation_input_is_truncated() {
        let input: Vec<i64> = (1..=8).collect();
        let steps = permutations(&input, &RunnerArgs::none()).unwrap();
        assert_eq!(steps.len(), MAX_STEPS);
        assert_eq!(steps.last().unwrap().kind, StepKind::Info);
        assert!(steps.last().unwrap().description.contains("limit"));
    }

    #[test]
    fn subsets_of_two_values() {
        let steps = subsets(&[7, 9], &RunnerArgs::none()).unwrap();
        let selects: Vec<&Step> = steps
            .iter()
            .filter(|s| s.kind == StepKind::Select)
            .collect();
        assert_eq!(selects.len(), 4);
        assert!(selects[0].highlighted.is_empty());
        assert_eq!(selects[3].highlighted, vec![0, 1]);
    }

    #[test]
    fn four_queens_finds_two_solutions() {
        let steps = n_queens(&[], &RunnerArgs::with_n(4)).unwrap();
        let found = steps.iter().filter(|s| s.kind == StepKind::Found).count();
        assert_eq!(found, 2);
        assert!(steps
            .last()
            .unwrap()
            .description
            .contains("2 solution(s)"));
    }

    #[test]
    fn queens_board_size_is_validated() {
        assert!(matches!(
            n_queens(&[], &RunnerArgs::with_n(0)),
            Err(RunnerError::InvalidArgument { .. })
        ));
    }
}
