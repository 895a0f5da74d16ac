//! Instrumented hash map / hash set algorithms
//!
//! The working array never mutates here; steps highlight the probed
//! positions and narrate the map or set contents. Counts reported in
//! terminal steps are sorted by value so the narration is deterministic.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::step::{Step, StepKind, StepRecorder};

use super::{RunnerArgs, RunnerError};

pub fn two_sum_hash(input: &[i64], args: &RunnerArgs) -> Result<Vec<Step>, RunnerError> {
    let target = args.require_target("Two Sum (Hash Map)")?;
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

    rec.push(
        StepKind::Init,
        input,
        Vec::new(),
        format!("Looking for two numbers that sum to {} using a hash map", target),
    );

    let mut seen: FxHashMap<i64, usize> = FxHashMap::default();
    for (i, &value) in input.iter().enumerate() {
        let complement = target - value;
        rec.push(
            StepKind::Check,
            input,
            vec![i],
            format!("Looking up complement {} of {} in the map", complement, value),
        );

        if let Some(&j) = seen.get(&complement) {
            rec.push_step(
                Step::new(
                    StepKind::Found,
                    input,
                    vec![j, i],
                    format!("Found pair! {} + {} = {}", input[j], value, target),
                )
                .with_found(true),
            );
            return Ok(rec.finish(input));
        }

        seen.insert(value, i);
        rec.push(
            StepKind::Insert,
            input,
            vec![i],
            format!("Stored {} -> index {} in the map", value, i),
        );
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

pub fn find_duplicate(input: &[i64], _args: &RunnerArgs) -> Result<Vec<Step>, RunnerError> {
    let mut rec = StepRecorder::new();

    if input.is_empty() {
        rec.push_step(
            Step::new(
                StepKind::NotFound,
                input,
                Vec::new(),
                "Array is empty, no duplicate exists".to_string(),
            )
            .with_found(false),
        );
        return Ok(rec.finish(input));
    }

    rec.push(
        StepKind::Init,
        input,
        Vec::new(),
        "Scanning for the first value seen twice".to_string(),
    );

    let mut seen: FxHashSet<i64> = FxHashSet::default();
    for (i, &value) in input.iter().enumerate() {
        rec.push(
            StepKind::Check,
            input,
            vec![i],
            format!("Checking whether {} was seen before", value),
        );

        if !seen.insert(value) {
            rec.push_step(
                Step::new(
                    StepKind::Found,
                    input,
                    vec![i],
                    format!("Found duplicate {} at index {}!", value, i),
                )
                .with_found(true),
            );
            return Ok(rec.finish(input));
        }

        rec.push(
            StepKind::Insert,
            input,
            vec![i],
            format!("Added {} to the seen set", value),
        );
    }

    rec.push_step(
        Step::new(
            StepKind::NotFound,
            input,
            Vec::new(),
            "No duplicate found in array".to_string(),
        )
        .with_found(false),
    );

    Ok(rec.finish(input))
}

pub fn frequency_counter(input: &[i64], _args: &RunnerArgs) -> Result<Vec<Step>, RunnerError> {
    let mut rec = StepRecorder::new();

    if input.is_empty() {
        rec.push(
            StepKind::Empty,
            input,
            Vec::new(),
            "Array is empty, nothing to count".to_string(),
        );
        return Ok(rec.finish(input));
    }

    rec.push(
        StepKind::Init,
        input,
        Vec::new(),
        "Counting occurrences of each value".to_string(),
    );

    let mut counts: FxHashMap<i64, usize> = FxHashMap::default();
    for (i, &value) in input.iter().enumerate() {
        let count = counts.entry(value).or_insert(0);
        *count += 1;
        let count = *count;
        rec.push(
            StepKind::Calculate,
            input,
            vec![i],
            format!("Count of {} is now {}", value, count),
        );
    }

    let mut pairs: Vec<(i64, usize)> = counts.into_iter().collect();
    pairs.sort_unstable();
    let summary: Vec<String> = pairs.iter().map(|(v, c)| format!("{}x{}", v, c)).collect();

    rec.push(
        StepKind::Complete,
        input,
        Vec::new(),
        format!(
            "Counted {} distinct values: {}",
            pairs.len(),
            summary.join(", ")
        ),
    );

    Ok(rec.finish(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runners::canonical;

    #[test]
    fn two_sum_hash_finds_earliest_pair() {
        let input = vec![3, 2, 4];
        let steps = two_sum_hash(&input, &RunnerArgs::with_target(6)).unwrap();
        let last = steps.last().unwrap();
        assert_eq!(last.kind, StepKind::Found);
        assert_eq!(last.highlighted, vec![1, 2]);
        assert_eq!(canonical::two_sum_hash(&input, 6), Some((1, 2)));
    }

    #[test]
    fn duplicate_found_at_second_occurrence() {
        let input = vec![5, 1, 5, 3];
        let steps = find_duplicate(&input, &RunnerArgs::none()).unwrap();
        let last = steps.last().unwrap();
        assert_eq!(last.kind, StepKind::Found);
        assert_eq!(last.highlighted, vec![2]);
    }

    #[test]
    fn frequency_summary_is_sorted_by_value() {
        let steps = frequency_counter(&[2, 1, 2], &RunnerArgs::none()).unwrap();
        let last = steps.last().unwrap();
        assert!(last.description.contains("1x1, 2x2"));
    }

    #[test]
    fn all_distinct_ends_not_found() {
        let steps = find_duplicate(&[1, 2, 3], &RunnerArgs::none()).unwrap();
        assert_eq!(steps.last().unwrap().kind, StepKind::NotFound);
    }
}
