//! Reveal animation state machine tests

use std::time::{Duration, Instant};

use folio::anim::{RevealSequence, RevealState, DESCRIPTION_DELAY, POINT_INTERVAL, TITLE_DELAY};
use folio::ui::hero;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_full_reveal_over_hero_points() {
    let total = hero::point_count();
    let mut seq = RevealSequence::new(total);
    let t0 = Instant::now();
    seq.start(t0);

    // One step per interval; the sequence needs total - 1 steps.
    let steps = (total - 1) as u32;
    seq.advance(t0 + POINT_INTERVAL * steps);

    assert!(seq.is_complete());
    assert_eq!(seq.phase(), total - 1);
    for index in 0..total {
        assert!(seq.is_visible(index));
    }
}

#[test]
fn test_partial_reveal_hides_the_tail() {
    let mut seq = RevealSequence::new(20);
    let t0 = Instant::now();
    seq.start(t0);
    seq.advance(t0 + POINT_INTERVAL * 5);

    assert_eq!(seq.state(), RevealState::Running);
    assert!(seq.is_visible(5));
    assert!(!seq.is_visible(6));
    assert!(seq.is_active(5));
    assert!(!seq.is_active(4));
}

#[test]
fn test_cadence_is_independent_of_frame_rate() {
    // Advancing in many small calls or one big call lands on the same phase.
    let t0 = Instant::now();

    let mut fine = RevealSequence::new(60);
    fine.start(t0);
    for i in 1..=100 {
        fine.advance(t0 + ms(i * 7));
    }

    let mut coarse = RevealSequence::new(60);
    coarse.start(t0);
    coarse.advance(t0 + ms(700));

    assert_eq!(fine.phase(), coarse.phase());
}

#[test]
fn test_restart_semantics() {
    let mut seq = RevealSequence::new(10);
    let t0 = Instant::now();
    seq.start(t0);
    seq.advance(t0 + ms(100_000));
    assert!(seq.is_complete());

    seq.reset();
    assert_eq!(seq.state(), RevealState::Idle);
    assert_eq!(seq.phase(), 0);

    let t1 = t0 + ms(200_000);
    seq.start(t1);
    seq.advance(t1 + POINT_INTERVAL * 3);
    assert_eq!(seq.phase(), 3);
}

#[test]
fn test_staging_delays() {
    let mut seq = RevealSequence::new(2);
    let t0 = Instant::now();
    seq.start(t0);
    seq.advance(t0 + POINT_INTERVAL);
    let done = t0 + POINT_INTERVAL;

    assert!(!seq.title_visible(done));
    assert!(seq.title_visible(done + TITLE_DELAY));
    assert!(!seq.description_visible(done + TITLE_DELAY));
    assert!(seq.description_visible(done + DESCRIPTION_DELAY));
}

#[test]
fn test_skip_intro_path() {
    let mut seq = RevealSequence::new(hero::point_count());
    let t0 = Instant::now();
    seq.skip_to_end(t0);

    assert!(seq.is_complete());
    assert!(seq.description_visible(t0 + DESCRIPTION_DELAY));
}
