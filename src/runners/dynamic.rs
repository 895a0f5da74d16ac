//! Instrumented dynamic programming
//!
//! Fibonacci fills a one-dimensional table; LCS fills its table row by row
//! against a second sequence. In both cases the snapshot is the DP table
//! (the current row for LCS), not the input array, so the fill is visible
//! cell by cell.

use crate::step::{Step, StepKind, StepRecorder};

use super::{fmt_values, RunnerArgs, RunnerError};

/// Largest index whose Fibonacci number still fits in an i64.
const MAX_FIB: usize = 90;

pub fn fibonacci(_input: &[i64], args: &RunnerArgs) -> Result<Vec<Step>, RunnerError> {
    let n = args.require_n("Fibonacci (DP)")?;
    if n > MAX_FIB {
        return Err(RunnerError::InvalidArgument {
            algorithm: "Fibonacci (DP)",
            message: format!("index {} exceeds the 64-bit limit of {}", n, MAX_FIB),
        });
    }

    let mut rec = StepRecorder::new();
    let mut dp = vec![0i64; n + 1];

    if n == 0 {
        rec.push(
            StepKind::Init,
            &dp,
            vec![0],
            "Base case: dp[0] = 0".to_string(),
        );
    } else {
        dp[1] = 1;
        rec.push(
            StepKind::Init,
            &dp,
            vec![0, 1],
            "Base cases: dp[0] = 0, dp[1] = 1".to_string(),
        );
    }

    for i in 2..=n {
        dp[i] = dp[i - 1] + dp[i - 2];
        rec.push(
            StepKind::Fill,
            &dp,
            vec![i],
            format!(
                "dp[{}] = dp[{}] + dp[{}] = {} + {} = {}",
                i,
                i - 1,
                i - 2,
                dp[i - 1],
                dp[i - 2],
                dp[i]
            ),
        );
    }

    rec.push_step(
        Step::new(
            StepKind::Found,
            &dp,
            vec![n],
            format!("Fibonacci number {} is {}", n, dp[n]),
        )
        .with_found(true),
    );

    Ok(rec.finish(&dp))
}

pub fn longest_common_subsequence(
    input: &[i64],
    args: &RunnerArgs,
) -> Result<Vec<Step>, RunnerError> {
    let second = args.require_second("Longest Common Subsequence")?;
    let mut rec = StepRecorder::new();

    if input.is_empty() || second.is_empty() {
        rec.push(
            StepKind::Empty,
            &[],
            Vec::new(),
            "One of the sequences is empty; the common subsequence has length 0".to_string(),
        );
        return Ok(rec.finish(&[]));
    }

    let m = second.len();
    let mut prev = vec![0i64; m + 1];
    let mut row = vec![0i64; m + 1];

    rec.push(
        StepKind::Init,
        &prev,
        Vec::new(),
        format!(
            "Comparing {} against {}; starting from a row of zeros",
            fmt_values(input),
            fmt_values(second)
        ),
    );

    for (i, &a) in input.iter().enumerate() {
        row[0] = 0;
        for (j, &b) in second.iter().enumerate() {
            if a == b {
                row[j + 1] = prev[j] + 1;
                rec.push(
                    StepKind::Fill,
                    &row,
                    vec![j + 1],
                    format!(
                        "Match {} at row {}, column {}: extend the diagonal to {}",
                        a,
                        i + 1,
                        j + 1,
                        row[j + 1]
                    ),
                );
            } else {
                row[j + 1] = prev[j + 1].max(row[j]);
                rec.push(
                    StepKind::Calculate,
                    &row,
                    vec![j + 1],
                    format!(
                        "No match at row {}, column {}: carry max({}, {}) = {}",
                        i + 1,
                        j + 1,
                        prev[j + 1],
                        row[j],
                        row[j + 1]
                    ),
                );
            }
            if rec.is_full() {
                break;
            }
        }
        std::mem::swap(&mut prev, &mut row);
        if rec.is_full() {
            break;
        }
    }

    let length = prev[m];
    rec.push_step(
        Step::new(
            StepKind::Found,
            &prev,
            vec![m],
            format!("Length of the longest common subsequence: {}", length),
        )
        .with_found(true),
    );

    Ok(rec.finish(&prev))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runners::canonical;

    #[test]
    fn fibonacci_table_fills_to_n() {
        let steps = fibonacci(&[], &RunnerArgs::with_n(10)).unwrap();
        let last = steps.last().unwrap();
        assert_eq!(last.kind, StepKind::Found);
        assert_eq!(last.snapshot[10], 55);
        assert_eq!(canonical::fibonacci(10), 55);
    }

    #[test]
    fn fibonacci_base_cases() {
        let zero = fibonacci(&[], &RunnerArgs::with_n(0)).unwrap();
        assert_eq!(zero.last().unwrap().snapshot, vec![0]);
        let one = fibonacci(&[], &RunnerArgs::with_n(1)).unwrap();
        assert_eq!(one.last().unwrap().snapshot, vec![0, 1]);
    }

    #[test]
    fn fibonacci_rejects_overflowing_index() {
        assert!(matches!(
            fibonacci(&[], &RunnerArgs::with_n(91)),
            Err(RunnerError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn lcs_terminal_step_carries_the_length() {
        let a = vec![1, 3, 4, 1, 2];
        let b = vec![3, 4, 1, 2, 1, 3];
        let steps =
            longest_common_subsequence(&a, &RunnerArgs::with_second(b.clone())).unwrap();
        let last = steps.last().unwrap();
        assert_eq!(last.kind, StepKind::Found);
        assert_eq!(last.snapshot[b.len()], canonical::lcs_length(&a, &b) as i64);
    }

    #[test]
    fn lcs_with_empty_side_is_a_single_step() {
        let steps =
            longest_common_subsequence(&[], &RunnerArgs::with_second(vec![1])).unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].kind, StepKind::Empty);
    }
}
