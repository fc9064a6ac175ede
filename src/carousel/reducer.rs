//! Reducer for the carousel.

use crate::mvi::Reducer;

use super::gesture::{Gesture, GestureSource, SwipeDirection, SwipeTracker};
use super::intent::{CarouselIntent, NavKey};
use super::state::{CarouselState, Phase};

/// Reducer for carousel state transitions.
///
/// Pure function: timers and render output are derived by
/// [`CarouselController`](super::CarouselController) from the state diff.
pub struct CarouselReducer;

impl Reducer for CarouselReducer {
    type State = CarouselState;
    type Intent = CarouselIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        if state.is_destroyed() {
            return state;
        }
        if let CarouselIntent::Destroy = intent {
            return destroy(state);
        }
        if state.is_inert() {
            return state;
        }

        match intent {
            CarouselIntent::Advance => advance(state),
            CarouselIntent::Retreat => retreat(state),
            CarouselIntent::GoTo { index } => {
                if index >= state.slide_count {
                    return state;
                }
                navigate(state, index)
            }

            CarouselIntent::StartAutoplay => request_autoplay(state),
            CarouselIntent::StopAutoplay => stop_autoplay(state),

            CarouselIntent::PointerEnter => pause(state),
            CarouselIntent::PointerLeave => resume(state),

            CarouselIntent::TouchStart { x } => {
                let mut state = pause(state);
                state.gesture = Some(Gesture {
                    source: GestureSource::Touch,
                    tracker: SwipeTracker::begin(x),
                });
                state
            }
            CarouselIntent::TouchMove { x } => track(state, GestureSource::Touch, x),
            CarouselIntent::TouchEnd => {
                let state = finish_gesture(state, GestureSource::Touch);
                // Resume even when no swipe happened.
                resume(state)
            }

            CarouselIntent::PointerDown { x } => {
                let mut state = state;
                state.gesture = Some(Gesture {
                    source: GestureSource::Pointer,
                    tracker: SwipeTracker::begin(x),
                });
                state
            }
            CarouselIntent::PointerMove { x } => track(state, GestureSource::Pointer, x),
            CarouselIntent::PointerUp => finish_gesture(state, GestureSource::Pointer),

            CarouselIntent::VisibilityChanged { visible } => {
                let mut state = state;
                state.visible = visible;
                if visible {
                    request_autoplay(state)
                } else {
                    // Hidden beats the user pause: stop regardless.
                    stop_autoplay(state)
                }
            }

            CarouselIntent::Key(key) => {
                if !state.visible || state.is_transitioning() {
                    return state;
                }
                match key {
                    NavKey::Left => retreat(state),
                    NavKey::Right => advance(state),
                    NavKey::Other => state,
                }
            }

            CarouselIntent::Resize => {
                let mut state = state;
                state.render_seq += 1;
                state
            }

            CarouselIntent::SettleElapsed => {
                let mut state = state;
                if state.phase == Phase::Transitioning {
                    state.phase = Phase::Idle;
                }
                state
            }

            CarouselIntent::AutoplayTick => {
                if !state.autoplay_active || !state.visible {
                    return state;
                }
                advance(state)
            }

            CarouselIntent::Destroy => state,
        }
    }
}

fn advance(state: CarouselState) -> CarouselState {
    if state.slide_count <= 1 {
        return state;
    }
    let target = (state.current_index + 1) % state.slide_count;
    navigate(state, target)
}

fn retreat(state: CarouselState) -> CarouselState {
    if state.slide_count <= 1 {
        return state;
    }
    let target = (state.current_index + state.slide_count - 1) % state.slide_count;
    navigate(state, target)
}

/// Guarded entry point shared by every navigation source.
fn navigate(mut state: CarouselState, target: usize) -> CarouselState {
    if state.phase != Phase::Idle || target == state.current_index {
        return state;
    }
    state.current_index = target;
    state.phase = Phase::Transitioning;
    state.render_seq += 1;
    state
}

fn request_autoplay(mut state: CarouselState) -> CarouselState {
    if state.autoplay_paused || !state.visible || !state.can_autoplay() {
        return state;
    }
    // Restart, never stack: the epoch bump makes the controller cancel first.
    state.autoplay_active = true;
    state.autoplay_epoch += 1;
    state
}

fn stop_autoplay(mut state: CarouselState) -> CarouselState {
    state.autoplay_active = false;
    state
}

fn pause(mut state: CarouselState) -> CarouselState {
    state.autoplay_paused = true;
    stop_autoplay(state)
}

fn resume(mut state: CarouselState) -> CarouselState {
    state.autoplay_paused = false;
    request_autoplay(state)
}

fn track(mut state: CarouselState, source: GestureSource, x: f32) -> CarouselState {
    if let Some(gesture) = state.gesture.as_mut().filter(|g| g.source == source) {
        gesture.tracker.track(x);
    }
    state
}

fn finish_gesture(mut state: CarouselState, source: GestureSource) -> CarouselState {
    let gesture = match state.gesture {
        Some(gesture) if gesture.source == source => gesture,
        _ => return state,
    };
    state.gesture = None;
    match gesture.tracker.classify(state.tuning.swipe_threshold_px) {
        Some(SwipeDirection::Forward) => advance(state),
        Some(SwipeDirection::Backward) => retreat(state),
        None => state,
    }
}

fn destroy(mut state: CarouselState) -> CarouselState {
    state.phase = Phase::Destroyed;
    state.autoplay_active = false;
    state.gesture = None;
    state
}

/// Why an explicit navigation request leaves the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    Destroyed,
    Empty,
    NotVisible,
    OutOfRange,
    SingleSlide,
    Locked,
    SameIndex,
}

/// The guard that will reject `intent`, checked in the same order as
/// [`CarouselReducer::reduce`]. `None` for intents that are not explicit
/// navigation requests, and for requests that will go through.
pub(crate) fn rejection(state: &CarouselState, intent: &CarouselIntent) -> Option<DropReason> {
    if !intent.is_navigation() {
        return None;
    }
    if state.is_destroyed() {
        return Some(DropReason::Destroyed);
    }
    if state.is_inert() {
        return Some(DropReason::Empty);
    }
    if matches!(intent, CarouselIntent::Key(_)) && !state.visible {
        return Some(DropReason::NotVisible);
    }
    match *intent {
        CarouselIntent::GoTo { index } if index >= state.slide_count => {
            Some(DropReason::OutOfRange)
        }
        _ if state.phase != Phase::Idle => Some(DropReason::Locked),
        CarouselIntent::GoTo { index } if index == state.current_index => {
            Some(DropReason::SameIndex)
        }
        CarouselIntent::GoTo { .. } => None,
        _ if state.slide_count <= 1 => Some(DropReason::SingleSlide),
        _ => None,
    }
}
