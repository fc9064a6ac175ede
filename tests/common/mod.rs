//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::time::Duration;

use awardreel::carousel::CarouselController;
use awardreel::config::CarouselTuning;
use awardreel::presenter::RecordingPresenter;
use awardreel::scheduler::VirtualClock;

pub type TestCarousel = CarouselController<VirtualClock, RecordingPresenter>;

pub const SETTLE: Duration = Duration::from_millis(500);
pub const AUTOPLAY: Duration = Duration::from_millis(4000);

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Carousel with default tuning, not yet visible.
pub fn carousel(slide_count: usize) -> TestCarousel {
    CarouselController::new(
        slide_count,
        CarouselTuning::default(),
        VirtualClock::new(),
        RecordingPresenter::new(),
    )
}

/// Carousel that has been reported visible (autoplay running when N > 1).
pub fn visible_carousel(slide_count: usize) -> TestCarousel {
    let mut carousel = carousel(slide_count);
    carousel.on_visibility_change(true);
    carousel
}

/// Tiny deterministic generator for property-style loops.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_below(&mut self, bound: u64) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) % bound
    }
}
