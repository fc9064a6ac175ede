mod common;

use awardreel::carousel::Phase;
use awardreel::presenter::RenderInstruction;
use awardreel::scheduler::TimerHandle;
use common::{carousel, ms, Lcg, SETTLE};

#[test]
fn advance_five_times_loops_through_every_slide() {
    let mut c = carousel(5);
    let mut seen = Vec::new();
    for _ in 0..5 {
        c.advance();
        seen.push(c.current_index().expect("has slides"));
        c.settle();
    }
    assert_eq!(seen, vec![1, 2, 3, 4, 0]);
    assert_eq!(c.presenter().indices(), vec![1, 2, 3, 4, 0]);
}

#[test]
fn retreat_from_first_wraps_to_last() {
    let mut c = carousel(3);
    c.retreat();
    assert_eq!(c.current_index(), Some(2));
}

#[test]
fn index_stays_in_range_for_random_walks() {
    for n in 1..=7usize {
        let mut rng = Lcg::new(n as u64);
        let mut c = carousel(n);
        for _ in 0..200 {
            if rng.next_below(2) == 0 {
                c.advance();
            } else {
                c.retreat();
            }
            c.settle();
            let index = c.current_index().expect("has slides");
            assert!(index < n, "index {} out of range for {} slides", index, n);
        }
    }
}

#[test]
fn advance_then_retreat_is_identity() {
    for n in 2..=6usize {
        for start in 0..n {
            let mut c = carousel(n);
            c.go_to(start);
            c.settle();

            c.advance();
            c.settle();
            c.retreat();
            c.settle();
            assert_eq!(c.current_index(), Some(start));

            c.retreat();
            c.settle();
            c.advance();
            c.settle();
            assert_eq!(c.current_index(), Some(start));
        }
    }
}

#[test]
fn advancing_n_times_returns_to_start() {
    for n in 2..=8usize {
        let mut c = carousel(n);
        c.go_to(n / 2);
        c.settle();
        for _ in 0..n {
            c.advance();
            c.settle();
        }
        assert_eq!(c.current_index(), Some(n / 2));
    }
}

#[test]
fn requests_during_transition_are_dropped() {
    let mut c = carousel(5);
    c.advance();
    assert_eq!(c.state().phase(), Phase::Transitioning);
    let renders = c.presenter().renders.len();

    c.advance();
    c.retreat();
    c.go_to(3);

    assert_eq!(c.current_index(), Some(1));
    assert_eq!(c.presenter().renders.len(), renders);
}

#[test]
fn unknown_timer_handle_does_not_release_lock() {
    let mut c = carousel(5);
    c.advance();
    let renders = c.presenter().renders.len();

    c.on_timer(TimerHandle::from_raw(u64::MAX));
    c.advance();

    assert_eq!(c.state().phase(), Phase::Transitioning);
    assert_eq!(c.current_index(), Some(1));
    assert_eq!(c.presenter().renders.len(), renders);
}

#[test]
fn lock_releases_exactly_after_settle_duration() {
    let mut c = carousel(5);
    c.advance();

    c.run_for(SETTLE - ms(1));
    c.advance();
    assert_eq!(c.current_index(), Some(1), "still locked just before settle");

    c.run_for(ms(1));
    assert_eq!(c.state().phase(), Phase::Idle);
    c.advance();
    assert_eq!(c.current_index(), Some(2));
}

#[test]
fn goto_current_index_is_noop_even_when_idle() {
    let mut c = carousel(4);
    c.go_to(0);
    assert_eq!(c.state().phase(), Phase::Idle);
    assert!(c.presenter().renders.is_empty());
    assert_eq!(c.scheduler().pending(), 0);
}

#[test]
fn goto_out_of_range_is_noop() {
    let mut c = carousel(4);
    c.go_to(4);
    c.go_to(usize::MAX);
    assert_eq!(c.current_index(), Some(0));
    assert!(c.presenter().renders.is_empty());
}

#[test]
fn goto_jumps_and_locks() {
    let mut c = carousel(6);
    c.go_to(4);
    assert_eq!(c.current_index(), Some(4));
    assert_eq!(c.state().phase(), Phase::Transitioning);
    c.settle();
    c.go_to(1);
    assert_eq!(c.current_index(), Some(1));
}

#[test]
fn render_instruction_carries_offset_and_indicator() {
    let mut c = carousel(5);
    c.go_to(3);
    assert_eq!(
        c.presenter().last(),
        Some(RenderInstruction {
            index: 3,
            offset: -1110.0,
        })
    );
    assert_eq!(c.presenter().indicators, vec![3]);
}

#[test]
fn single_slide_always_resolves_to_zero() {
    let mut c = carousel(1);
    c.advance();
    c.retreat();
    c.advance();
    assert_eq!(c.current_index(), Some(0));
    assert!(c.presenter().renders.is_empty());
}

#[test]
fn empty_carousel_is_inert() {
    let mut c = carousel(0);
    c.advance();
    c.retreat();
    c.go_to(0);
    c.on_resize();
    c.on_visibility_change(true);
    c.start_autoplay();
    assert_eq!(c.current_index(), None);
    assert!(c.presenter().renders.is_empty());
    assert_eq!(c.scheduler().pending(), 0);
}

#[test]
fn resize_reemits_current_instruction() {
    let mut c = carousel(3);
    c.go_to(2);
    c.on_resize();
    assert_eq!(c.presenter().indices(), vec![2, 2]);
    assert_eq!(c.current_index(), Some(2));
}

#[test]
fn resize_during_transition_keeps_lock() {
    let mut c = carousel(3);
    c.advance();
    c.on_resize();
    assert_eq!(c.state().phase(), Phase::Transitioning);
    assert_eq!(c.presenter().indices(), vec![1, 1]);
}

#[test]
fn destroy_cancels_timers_and_ignores_later_calls() {
    let mut c = common::visible_carousel(3);
    c.advance();
    assert!(c.scheduler().pending() >= 2);

    c.destroy();
    assert!(c.state().is_destroyed());
    assert_eq!(c.scheduler().pending(), 0);
    assert!(!c.autoplay_scheduled());

    c.run_for(ms(10_000));
    c.advance();
    c.start_autoplay();
    assert_eq!(c.current_index(), Some(1));
    assert_eq!(c.scheduler().pending(), 0);
}
