mod common;

use common::{carousel, ms, visible_carousel, AUTOPLAY, SETTLE};

#[test]
fn autoplay_advances_every_interval() {
    let mut c = visible_carousel(3);
    assert!(c.autoplay_scheduled());

    c.run_for(AUTOPLAY);
    assert_eq!(c.current_index(), Some(1));
    c.run_for(AUTOPLAY);
    assert_eq!(c.current_index(), Some(2));
    c.run_for(AUTOPLAY);
    assert_eq!(c.current_index(), Some(0));
}

#[test]
fn autoplay_never_scheduled_for_single_slide() {
    let mut c = visible_carousel(1);
    c.start_autoplay();
    c.on_pointer_leave();
    assert!(!c.autoplay_scheduled());
    assert_eq!(c.scheduler().pending(), 0);
    c.run_for(ms(60_000));
    assert_eq!(c.current_index(), Some(0));
}

#[test]
fn autoplay_waits_for_visibility() {
    let mut c = carousel(3);
    c.start_autoplay();
    assert!(!c.autoplay_scheduled());
    c.run_for(AUTOPLAY * 3);
    assert_eq!(c.current_index(), Some(0));

    c.on_visibility_change(true);
    assert!(c.autoplay_scheduled());
}

#[test]
fn restart_replaces_the_timer_instead_of_stacking() {
    let mut c = visible_carousel(4);
    c.start_autoplay();
    c.start_autoplay();
    assert_eq!(c.scheduler().pending(), 1);

    c.run_for(AUTOPLAY);
    assert_eq!(c.current_index(), Some(1), "exactly one advance per interval");
}

#[test]
fn restart_resets_the_interval() {
    let mut c = visible_carousel(4);
    c.run_for(ms(3000));
    c.start_autoplay();
    c.run_for(ms(3000));
    assert_eq!(c.current_index(), Some(0));
    c.run_for(ms(1000));
    assert_eq!(c.current_index(), Some(1));
}

#[test]
fn stop_is_idempotent() {
    let mut c = visible_carousel(3);
    c.stop_autoplay();
    c.stop_autoplay();
    assert!(!c.autoplay_scheduled());
    assert_eq!(c.scheduler().pending(), 0);

    let mut idle = carousel(3);
    idle.stop_autoplay();
    assert_eq!(idle.scheduler().pending(), 0);
}

#[test]
fn hidden_carousel_gets_no_ticks() {
    let mut c = visible_carousel(3);
    c.on_visibility_change(false);
    assert!(!c.autoplay_scheduled());

    c.run_for(AUTOPLAY * 5);
    assert_eq!(c.current_index(), Some(0));

    c.on_visibility_change(true);
    c.run_for(AUTOPLAY);
    assert_eq!(c.current_index(), Some(1));
}

#[test]
fn hover_blocks_ticks_until_leave() {
    let mut c = visible_carousel(3);
    c.on_pointer_enter();
    c.start_autoplay();
    c.run_for(AUTOPLAY * 5);
    assert_eq!(c.current_index(), Some(0));

    c.on_pointer_leave();
    c.run_for(AUTOPLAY);
    assert_eq!(c.current_index(), Some(1));
}

#[test]
fn becoming_visible_does_not_override_hover_pause() {
    let mut c = visible_carousel(3);
    c.on_pointer_enter();
    c.on_visibility_change(false);
    c.on_visibility_change(true);
    assert!(!c.autoplay_scheduled());
    c.run_for(AUTOPLAY * 2);
    assert_eq!(c.current_index(), Some(0));
}

#[test]
fn leaving_while_hidden_does_not_start_autoplay() {
    let mut c = visible_carousel(3);
    c.on_pointer_enter();
    c.on_visibility_change(false);
    c.on_pointer_leave();
    assert!(!c.autoplay_scheduled());
    assert!(!c.state().autoplay_paused());
}

#[test]
fn tick_during_transition_is_dropped() {
    let mut c = visible_carousel(3);
    c.run_for(AUTOPLAY - ms(100));
    c.advance();
    assert_eq!(c.current_index(), Some(1));

    // Tick lands while the manual advance still holds the lock.
    c.run_for(ms(100));
    assert_eq!(c.current_index(), Some(1));

    c.run_for(SETTLE);
    c.run_for(AUTOPLAY);
    assert_eq!(c.current_index(), Some(2));
}

#[test]
fn autoplay_flag_matches_scheduled_timer() {
    let mut c = visible_carousel(3);
    let steps: [fn(&mut common::TestCarousel); 6] = [
        |c| c.on_pointer_enter(),
        |c| c.on_pointer_leave(),
        |c| c.on_visibility_change(false),
        |c| c.on_visibility_change(true),
        |c| c.stop_autoplay(),
        |c| c.start_autoplay(),
    ];
    for step in steps.iter().cycle().take(30) {
        step(&mut c);
        assert_eq!(c.state().autoplay_active(), c.autoplay_scheduled());
        if c.state().autoplay_paused() || !c.state().visible() {
            assert!(!c.autoplay_scheduled());
        }
    }
}
