// Integration tests for the instrumented runners

use algotty::catalog::{Catalog, Category, ParamKind};
use algotty::runners::{canonical, RunnerArgs};
use algotty::step::StepKind;

/// Deterministic arguments good enough to drive any catalog entry.
fn args_for(params: ParamKind, working: &[i64]) -> RunnerArgs {
    match params {
        ParamKind::None => RunnerArgs::none(),
        ParamKind::Target => RunnerArgs::with_target(*working.first().unwrap_or(&0)),
        ParamKind::TargetSum => RunnerArgs::with_target(6),
        ParamKind::WindowSize => RunnerArgs::with_k(2.min(working.len().max(1))),
        ParamKind::RotateCount => RunnerArgs::with_k(2),
        ParamKind::DistinctCount => RunnerArgs::with_k(2),
        ParamKind::BoardSize => RunnerArgs::with_n(5),
        ParamKind::FibIndex => RunnerArgs::with_n(8),
        ParamKind::SecondSequence => RunnerArgs::with_second(vec![1, 4, 5]),
    }
}

fn working_input(requires_sorted: bool) -> Vec<i64> {
    let mut arr = vec![3, 1, 4, 1, 5, 9, 2, 6];
    if requires_sorted {
        arr.sort_unstable();
    }
    arr
}

#[test]
fn every_catalog_entry_runs_and_produces_steps() {
    let catalog = Catalog::standard();
    for info in catalog.entries() {
        let working = working_input(info.requires_sorted);
        let args = args_for(info.params, &working);
        let steps = (info.runner)(&working, &args)
            .unwrap_or_else(|e| panic!("{} failed: {}", info.name, e));
        assert!(!steps.is_empty(), "{} produced no steps", info.name);
    }
}

#[test]
fn step_sequences_are_deterministic() {
    let catalog = Catalog::standard();
    for info in catalog.entries() {
        let working = working_input(info.requires_sorted);
        let args = args_for(info.params, &working);
        let first = (info.runner)(&working, &args).unwrap();
        let second = (info.runner)(&working, &args).unwrap();
        assert_eq!(first, second, "{} is not deterministic", info.name);
    }
}

#[test]
fn sort_runners_end_in_the_sorted_array() {
    let catalog = Catalog::standard();
    let inputs: Vec<Vec<i64>> = vec![
        vec![5, 3, 1],
        vec![1, 2, 3, 4],
        vec![9, 9, 1, 1, 5],
        vec![2, -7, 0, 2, 40, -3],
    ];
    for info in catalog.in_category(Category::Sorting) {
        for input in &inputs {
            let mut expected = input.clone();
            expected.sort_unstable();
            let steps = (info.runner)(input, &RunnerArgs::none()).unwrap();
            assert_eq!(
                steps.last().unwrap().snapshot,
                expected,
                "{} did not sort {:?}",
                info.name,
                input
            );
        }
    }
}

#[test]
fn search_runners_have_exactly_one_terminal_step() {
    let catalog = Catalog::standard();
    let input = vec![1, 3, 5, 7, 9, 11];
    for info in catalog.in_category(Category::Searching) {
        for target in [7, 8] {
            let steps = (info.runner)(&input, &RunnerArgs::with_target(target)).unwrap();
            let terminals: Vec<_> = steps
                .iter()
                .filter(|s| matches!(s.kind, StepKind::Found | StepKind::NotFound))
                .collect();
            assert_eq!(terminals.len(), 1, "{} target {}", info.name, target);

            let terminal = terminals[0];
            match canonical::linear_search(&input, target) {
                Some(i) => {
                    assert_eq!(terminal.kind, StepKind::Found);
                    assert_eq!(terminal.highlighted, vec![i]);
                }
                None => {
                    assert_eq!(terminal.kind, StepKind::NotFound);
                    assert!(terminal.highlighted.is_empty());
                }
            }
            assert!(std::ptr::eq(terminal, steps.last().unwrap()));
        }
    }
}

#[test]
fn bubble_sort_worked_example() {
    let catalog = Catalog::standard();
    let info = catalog.get(Category::Sorting, "Bubble Sort").unwrap();
    let steps = (info.runner)(&[5, 3, 1], &RunnerArgs::none()).unwrap();

    assert_eq!(steps[0].kind, StepKind::Compare);
    assert_eq!(steps[0].snapshot, vec![5, 3, 1]);
    assert_eq!(steps[0].highlighted, vec![0, 1]);
    assert_eq!(steps[1].kind, StepKind::Swap);
    assert_eq!(steps[1].snapshot, vec![3, 5, 1]);
    assert_eq!(steps.last().unwrap().snapshot, vec![1, 3, 5]);
}

#[test]
fn binary_search_worked_example() {
    let catalog = Catalog::standard();
    let info = catalog.get(Category::Searching, "Binary Search").unwrap();
    let steps = (info.runner)(&[1, 3, 5, 7, 9], &RunnerArgs::with_target(7)).unwrap();

    // First probe hits the middle with the full range attached.
    assert_eq!(steps[0].kind, StepKind::Check);
    assert_eq!(steps[0].highlighted, vec![2]);
    assert_eq!(steps[0].range, Some((0, 4)));

    let last = steps.last().unwrap();
    assert_eq!(last.kind, StepKind::Found);
    assert_eq!(last.highlighted, vec![3]);
}

#[test]
fn two_sum_sorted_worked_example() {
    let catalog = Catalog::standard();
    let info = catalog
        .get(Category::TwoPointer, "Two Sum (Sorted Array)")
        .unwrap();
    let steps = (info.runner)(&[1, 2, 4, 7, 11], &RunnerArgs::with_target(9)).unwrap();
    let last = steps.last().unwrap();
    assert_eq!(last.kind, StepKind::Found);
    assert_eq!(last.highlighted, vec![1, 3]);
}

#[test]
fn linear_search_on_empty_array() {
    let catalog = Catalog::standard();
    let info = catalog.get(Category::Searching, "Linear Search").unwrap();
    let steps = (info.runner)(&[], &RunnerArgs::with_target(3)).unwrap();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].kind, StepKind::NotFound);
    assert!(steps[0].highlighted.is_empty());
}

#[test]
fn empty_input_never_yields_an_empty_sequence() {
    let catalog = Catalog::standard();
    for info in catalog.entries() {
        let args = args_for(info.params, &[]);
        let steps = (info.runner)(&[], &args)
            .unwrap_or_else(|e| panic!("{} failed on empty input: {}", info.name, e));
        assert!(
            !steps.is_empty(),
            "{} returned zero steps for empty input",
            info.name
        );
    }
}

#[test]
fn single_element_input_is_handled_everywhere() {
    let catalog = Catalog::standard();
    for info in catalog.entries() {
        let working = vec![7];
        let args = args_for(info.params, &working);
        let steps = (info.runner)(&working, &args)
            .unwrap_or_else(|e| panic!("{} failed on single element: {}", info.name, e));
        assert!(!steps.is_empty(), "{}", info.name);
    }
}

#[test]
fn snapshots_are_full_copies_not_views() {
    // Earlier steps must keep their snapshot after later mutations: replay
    // the bubble sort log and check each swap applies to the previous
    // snapshot.
    let catalog = Catalog::standard();
    let info = catalog.get(Category::Sorting, "Bubble Sort").unwrap();
    let steps = (info.runner)(&[4, 2, 8, 1], &RunnerArgs::none()).unwrap();

    let mut replay = vec![4, 2, 8, 1];
    for step in &steps {
        if step.kind == StepKind::Swap {
            replay.swap(step.highlighted[0], step.highlighted[1]);
        }
        assert_eq!(step.snapshot, replay, "replay diverged");
    }
    assert_eq!(replay, vec![1, 2, 4, 8]);
}

#[test]
fn exponential_runners_are_truncated() {
    let catalog = Catalog::standard();
    let info = catalog
        .get(Category::Backtracking, "Generate All Permutations")
        .unwrap();
    let input: Vec<i64> = (1..=9).collect();
    let steps = (info.runner)(&input, &RunnerArgs::none()).unwrap();
    assert_eq!(steps.len(), algotty::step::MAX_STEPS);
    assert_eq!(steps.last().unwrap().kind, StepKind::Info);
}

#[test]
fn rotate_runner_agrees_with_canonical() {
    let catalog = Catalog::standard();
    let info = catalog.get(Category::ArrayProblems, "Rotate Array").unwrap();
    let input = vec![1, 2, 3, 4, 5, 6, 7];
    for k in 0..=9 {
        let steps = (info.runner)(&input, &RunnerArgs::with_k(k)).unwrap();
        assert_eq!(
            steps.last().unwrap().snapshot,
            canonical::rotate_array(&input, k),
            "k = {}",
            k
        );
    }
}

#[test]
fn descriptions_are_never_empty() {
    let catalog = Catalog::standard();
    for info in catalog.entries() {
        let working = working_input(info.requires_sorted);
        let args = args_for(info.params, &working);
        let steps = (info.runner)(&working, &args).unwrap();
        for (i, step) in steps.iter().enumerate() {
            assert!(
                !step.description.is_empty(),
                "{} step {} has no description",
                info.name,
                i
            );
        }
    }
}

#[test]
fn highlights_stay_inside_the_snapshot() {
    let catalog = Catalog::standard();
    for info in catalog.entries() {
        let working = working_input(info.requires_sorted);
        let args = args_for(info.params, &working);
        let steps = (info.runner)(&working, &args).unwrap();
        for (i, step) in steps.iter().enumerate() {
            for &pos in &step.highlighted {
                assert!(
                    pos < step.snapshot.len(),
                    "{} step {} highlights {} outside snapshot of {}",
                    info.name,
                    i,
                    pos,
                    step.snapshot.len()
                );
            }
            if let Some((low, high)) = step.range {
                assert!(low <= high, "{} step {} has an inverted range", info.name, i);
                assert!(
                    high < step.snapshot.len(),
                    "{} step {} range leaves the snapshot",
                    info.name,
                    i
                );
            }
        }
    }
}
