// Integration tests for the playback engine

use std::time::{Duration, Instant};

use algotty::catalog::{Catalog, Category};
use algotty::playback::{Player, DEFAULT_INTERVAL};
use algotty::runners::RunnerArgs;
use algotty::step::{Step, StepKind};

fn sequence(n: usize) -> Vec<Step> {
    (0..n)
        .map(|i| Step::new(StepKind::Check, &[i as i64], vec![], format!("step {i}")))
        .collect()
}

#[test]
fn default_interval_is_one_second() {
    assert_eq!(DEFAULT_INTERVAL, Duration::from_millis(1000));
    assert_eq!(Player::new().interval(), DEFAULT_INTERVAL);
}

#[test]
fn forward_at_the_end_and_backward_at_the_start_are_no_ops() {
    let mut player = Player::new();
    player.load(sequence(4));

    assert!(!player.step_backward());
    assert_eq!(player.position(), 0);

    player.jump_to_end();
    assert!(!player.step_forward());
    assert_eq!(player.position(), 3);
}

#[test]
fn load_replaces_the_sequence_and_cancels_autoplay() {
    let mut player = Player::with_interval(Duration::from_millis(10));
    player.load(sequence(8));
    player.play();
    assert!(player.is_playing());

    player.load(sequence(3));
    assert!(!player.is_playing());
    assert_eq!(player.position(), 0);
    assert_eq!(player.len(), 3);

    // No stray tick advances after the cancellation.
    let late = Instant::now() + Duration::from_secs(5);
    assert!(!player.tick_at(late));
    assert_eq!(player.position(), 0);
}

#[test]
fn autoplay_advances_exactly_len_minus_one_times() {
    let interval = Duration::from_millis(100);
    let mut player = Player::with_interval(interval);
    player.load(sequence(5));
    player.play();

    let start = Instant::now();
    let mut advances = 0;
    for i in 1u32..=20 {
        if player.tick_at(start + interval * i) {
            advances += 1;
        }
    }

    assert_eq!(advances, 4);
    assert!(player.at_end());
    assert!(!player.is_playing(), "auto-play must stop itself at the end");
}

#[test]
fn play_on_a_played_out_sequence_does_nothing() {
    let mut player = Player::new();
    player.load(sequence(2));
    player.jump_to_end();
    player.play();
    assert!(!player.is_playing());
}

#[test]
fn a_real_run_replays_through_the_engine() {
    let catalog = Catalog::standard();
    let info = catalog.get(Category::Sorting, "Insertion Sort").unwrap();
    let steps = (info.runner)(&[4, 1, 3], &RunnerArgs::none()).unwrap();
    let total = steps.len();

    let mut player = Player::new();
    player.load(steps);

    // Walk to the end, then all the way back; every position must render
    // the recorded snapshot unchanged.
    let mut forward_snapshots = Vec::new();
    forward_snapshots.push(player.current().unwrap().snapshot.clone());
    while player.step_forward() {
        forward_snapshots.push(player.current().unwrap().snapshot.clone());
    }
    assert_eq!(forward_snapshots.len(), total);
    assert_eq!(forward_snapshots.last().unwrap(), &vec![1, 3, 4]);

    let mut backward_snapshots = Vec::new();
    backward_snapshots.push(player.current().unwrap().snapshot.clone());
    while player.step_backward() {
        backward_snapshots.push(player.current().unwrap().snapshot.clone());
    }
    backward_snapshots.reverse();
    assert_eq!(forward_snapshots, backward_snapshots);
}
