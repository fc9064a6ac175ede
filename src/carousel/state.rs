//! State for the carousel.

use crate::carousel::gesture::Gesture;
use crate::config::CarouselTuning;
use crate::mvi::UiState;
use crate::presenter::RenderInstruction;

/// Transition lock of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Ready to accept a navigation.
    #[default]
    Idle,
    /// A navigation is in flight; further navigation is dropped.
    Transitioning,
    /// Torn down; every intent is ignored.
    Destroyed,
}

/// Complete carousel state.
///
/// `render_seq` and `autoplay_epoch` are counters the controller diffs to
/// derive side effects: a changed `render_seq` means "emit the current render
/// instruction", a changed `autoplay_epoch` while active means "reschedule the
/// autoplay timer".
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    pub(crate) slide_count: usize,
    pub(crate) current_index: usize,
    pub(crate) phase: Phase,
    pub(crate) autoplay_active: bool,
    pub(crate) autoplay_paused: bool,
    pub(crate) visible: bool,
    pub(crate) gesture: Option<Gesture>,
    pub(crate) tuning: CarouselTuning,
    pub(crate) render_seq: u64,
    pub(crate) autoplay_epoch: u64,
}

impl Default for CarouselState {
    /// The inert zero-slide carousel.
    fn default() -> Self {
        Self::new(0, CarouselTuning::default())
    }
}

impl UiState for CarouselState {}

impl CarouselState {
    pub fn new(slide_count: usize, tuning: CarouselTuning) -> Self {
        Self {
            slide_count,
            current_index: 0,
            phase: Phase::Idle,
            autoplay_active: false,
            autoplay_paused: false,
            visible: false,
            gesture: None,
            tuning,
            render_seq: 0,
            autoplay_epoch: 0,
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Current slide, or `None` for an empty carousel.
    pub fn current_index(&self) -> Option<usize> {
        (self.slide_count > 0).then_some(self.current_index)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase == Phase::Transitioning
    }

    pub fn is_destroyed(&self) -> bool {
        self.phase == Phase::Destroyed
    }

    /// No slides: every operation is a no-op.
    pub fn is_inert(&self) -> bool {
        self.slide_count == 0
    }

    /// Autoplay can never run with fewer than two slides.
    pub fn can_autoplay(&self) -> bool {
        self.slide_count > 1
    }

    pub fn autoplay_active(&self) -> bool {
        self.autoplay_active
    }

    pub fn autoplay_paused(&self) -> bool {
        self.autoplay_paused
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    pub fn tuning(&self) -> &CarouselTuning {
        &self.tuning
    }

    pub fn render_seq(&self) -> u64 {
        self.render_seq
    }

    pub fn autoplay_epoch(&self) -> u64 {
        self.autoplay_epoch
    }

    /// Horizontal strip offset for `index`.
    pub fn offset_for(&self, index: usize) -> f32 {
        -(index as f32) * self.tuning.slide_pitch_px
    }

    /// Instruction describing the current slide.
    pub fn render_instruction(&self) -> Option<RenderInstruction> {
        self.current_index().map(|index| RenderInstruction {
            index,
            offset: self.offset_for(index),
        })
    }
}
