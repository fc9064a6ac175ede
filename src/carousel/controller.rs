use std::time::Duration;

use crate::config::CarouselTuning;
use crate::mvi::Reducer;
use crate::presenter::{Presenter, RenderInstruction};
use crate::scheduler::{Scheduler, TimerHandle, VirtualClock};

use super::intent::{CarouselIntent, NavKey};
use super::reducer::{rejection, CarouselReducer};
use super::state::{CarouselState, Phase};

/// Owns one carousel: its state, its timers and its presenter.
///
/// Every public method feeds one intent through the reducer. Timer intents
/// only enter through [`CarouselController::on_timer`], so the transition
/// lock cannot be released early from outside. After each reduction the controller compares the new state with the old
/// one and performs the side effects the difference implies:
///
/// - `render_seq` changed: emit the render instruction and indicator update
/// - `Idle -> Transitioning`: schedule the settle timer
/// - autoplay became active or its epoch changed: cancel, then schedule the
///   repeating autoplay timer
/// - autoplay became inactive: cancel the autoplay timer
pub struct CarouselController<S: Scheduler, P: Presenter> {
    state: CarouselState,
    scheduler: S,
    presenter: P,
    settle_timer: Option<TimerHandle>,
    autoplay_timer: Option<TimerHandle>,
}

impl<S: Scheduler, P: Presenter> CarouselController<S, P> {
    pub fn new(slide_count: usize, tuning: CarouselTuning, scheduler: S, presenter: P) -> Self {
        tracing::debug!(
            slide_count,
            settle_ms = tuning.settle_duration_ms,
            autoplay_ms = tuning.autoplay_interval_ms,
            "Carousel created"
        );
        Self {
            state: CarouselState::new(slide_count, tuning),
            scheduler,
            presenter,
            settle_timer: None,
            autoplay_timer: None,
        }
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn current_index(&self) -> Option<usize> {
        self.state.current_index()
    }

    pub fn render_instruction(&self) -> Option<RenderInstruction> {
        self.state.render_instruction()
    }

    /// Whether the repeating autoplay timer is currently held.
    pub fn autoplay_scheduled(&self) -> bool {
        self.autoplay_timer.is_some()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn advance(&mut self) {
        self.dispatch(CarouselIntent::Advance);
    }

    pub fn retreat(&mut self) {
        self.dispatch(CarouselIntent::Retreat);
    }

    pub fn go_to(&mut self, index: usize) {
        self.dispatch(CarouselIntent::GoTo { index });
    }

    pub fn start_autoplay(&mut self) {
        self.dispatch(CarouselIntent::StartAutoplay);
    }

    pub fn stop_autoplay(&mut self) {
        self.dispatch(CarouselIntent::StopAutoplay);
    }

    pub fn on_pointer_enter(&mut self) {
        self.dispatch(CarouselIntent::PointerEnter);
    }

    pub fn on_pointer_leave(&mut self) {
        self.dispatch(CarouselIntent::PointerLeave);
    }

    pub fn on_touch_start(&mut self, x: f32) {
        self.dispatch(CarouselIntent::TouchStart { x });
    }

    pub fn on_touch_move(&mut self, x: f32) {
        self.dispatch(CarouselIntent::TouchMove { x });
    }

    pub fn on_touch_end(&mut self) {
        self.dispatch(CarouselIntent::TouchEnd);
    }

    pub fn on_pointer_down(&mut self, x: f32) {
        self.dispatch(CarouselIntent::PointerDown { x });
    }

    pub fn on_pointer_move(&mut self, x: f32) {
        self.dispatch(CarouselIntent::PointerMove { x });
    }

    pub fn on_pointer_up(&mut self) {
        self.dispatch(CarouselIntent::PointerUp);
    }

    pub fn on_visibility_change(&mut self, visible: bool) {
        self.dispatch(CarouselIntent::VisibilityChanged { visible });
    }

    pub fn on_key(&mut self, key: NavKey) {
        self.dispatch(CarouselIntent::Key(key));
    }

    pub fn on_resize(&mut self) {
        self.dispatch(CarouselIntent::Resize);
    }

    pub fn destroy(&mut self) {
        self.dispatch(CarouselIntent::Destroy);
    }

    /// Route a fired timer back into the state machine.
    ///
    /// Handles that no longer belong to this controller (cancelled or
    /// replaced before their event was delivered) are ignored.
    pub fn on_timer(&mut self, handle: TimerHandle) {
        if self.settle_timer == Some(handle) {
            self.settle_timer = None;
            self.scheduler.cancel(handle);
            self.dispatch(CarouselIntent::SettleElapsed);
        } else if self.autoplay_timer == Some(handle) {
            self.dispatch(CarouselIntent::AutoplayTick);
        } else {
            tracing::trace!(timer = handle.raw(), "Ignoring stale timer");
        }
    }

    /// Run the reducer and apply the resulting side effects.
    fn dispatch(&mut self, intent: CarouselIntent) {
        if let Some(reason) = rejection(&self.state, &intent) {
            tracing::trace!(
                ?intent,
                ?reason,
                index = ?self.state.current_index(),
                "Navigation request dropped"
            );
        }

        let before = self.state.clone();
        self.state = CarouselReducer::reduce(std::mem::take(&mut self.state), intent);

        self.reconcile(&before);
    }

    fn reconcile(&mut self, before: &CarouselState) {
        if self.state.render_seq() != before.render_seq() {
            if let Some(instruction) = self.state.render_instruction() {
                tracing::debug!(
                    from = ?before.current_index(),
                    to = instruction.index,
                    offset = instruction.offset,
                    "Render instruction emitted"
                );
                self.presenter.render(instruction);
                self.presenter.indicate(instruction.index);
            }
        }

        match (before.phase(), self.state.phase()) {
            (Phase::Idle, Phase::Transitioning) => {
                self.cancel_settle();
                let delay = self.state.tuning().settle_duration();
                self.settle_timer = Some(self.scheduler.schedule_once(delay));
            }
            (previous, Phase::Destroyed) if previous != Phase::Destroyed => {
                self.cancel_settle();
                tracing::info!(index = ?self.state.current_index(), "Carousel destroyed");
            }
            _ => {}
        }

        if self.state.autoplay_active() {
            let restarted = !before.autoplay_active()
                || before.autoplay_epoch() != self.state.autoplay_epoch();
            if restarted || self.autoplay_timer.is_none() {
                self.cancel_autoplay();
                let period = self.state.tuning().autoplay_interval();
                self.autoplay_timer = Some(self.scheduler.schedule_every(period));
                tracing::debug!(period_ms = period.as_millis() as u64, "Autoplay scheduled");
            }
        } else if self.autoplay_timer.is_some() {
            self.cancel_autoplay();
            tracing::debug!("Autoplay stopped");
        }
    }

    fn cancel_settle(&mut self) {
        if let Some(handle) = self.settle_timer.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn cancel_autoplay(&mut self) {
        if let Some(handle) = self.autoplay_timer.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl<P: Presenter> CarouselController<VirtualClock, P> {
    /// Let `elapsed` of virtual time pass, firing every timer that comes due.
    pub fn run_for(&mut self, elapsed: Duration) {
        let until = self.scheduler.now() + elapsed;
        while let Some(handle) = self.scheduler.pop_due(until) {
            self.on_timer(handle);
        }
        self.scheduler.advance_to(until);
    }

    /// Let the transition lock release.
    pub fn settle(&mut self) {
        let settle = self.state.tuning().settle_duration();
        self.run_for(settle);
    }
}

impl<S: Scheduler, P: Presenter> Drop for CarouselController<S, P> {
    fn drop(&mut self) {
        self.cancel_settle();
        self.cancel_autoplay();
    }
}
