//! Presentation layer for the terminal host.

use std::time::{Duration, Instant};

use crate::presenter::{Presenter, RenderInstruction};

/// Animates the card strip towards the last render instruction.
///
/// The controller's settle timer and this animation share one duration; the
/// controller does not wait for the animation to finish.
#[derive(Debug)]
pub struct StripPresenter {
    from_offset: f32,
    to_offset: f32,
    started: Option<Instant>,
    duration: Duration,
    active: usize,
}

impl StripPresenter {
    pub fn new(duration: Duration) -> Self {
        Self {
            from_offset: 0.0,
            to_offset: 0.0,
            started: None,
            duration,
            active: 0,
        }
    }

    /// Dot to highlight.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Strip offset at `now`, eased out.
    pub fn offset_at(&self, now: Instant) -> f32 {
        let progress = self.progress(now);
        let eased = 1.0 - (1.0 - progress).powi(3);
        self.from_offset + (self.to_offset - self.from_offset) * eased
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }

    fn progress(&self, now: Instant) -> f32 {
        match self.started {
            Some(started) if !self.duration.is_zero() => {
                let elapsed = now.saturating_duration_since(started);
                (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
            }
            _ => 1.0,
        }
    }

    fn retarget(&mut self, offset: f32, now: Instant) {
        self.from_offset = self.offset_at(now);
        self.to_offset = offset;
        self.started = Some(now);
    }
}

impl Presenter for StripPresenter {
    fn render(&mut self, instruction: RenderInstruction) {
        self.retarget(instruction.offset, Instant::now());
    }

    fn indicate(&mut self, active_index: usize) {
        self.active = active_index;
    }
}
