//! Swipe interpretation shared by touch and pointer drags.

/// Navigation implied by a finished drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Content dragged leftward: show the next slide.
    Forward,
    /// Content dragged rightward: show the previous slide.
    Backward,
}

/// Horizontal drag from an origin to the last tracked position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    origin: f32,
    last: f32,
}

impl SwipeTracker {
    pub fn begin(x: f32) -> Self {
        Self { origin: x, last: x }
    }

    /// Record the current position. Non-finite positions are ignored.
    pub fn track(&mut self, x: f32) {
        if x.is_finite() {
            self.last = x;
        }
    }

    pub fn origin(&self) -> f32 {
        self.origin
    }

    /// `origin - last`: positive when the drag went left.
    pub fn displacement(&self) -> f32 {
        self.origin - self.last
    }

    /// Classify the drag. Distances at or below `threshold` are not swipes.
    pub fn classify(&self, threshold: f32) -> Option<SwipeDirection> {
        let displacement = self.displacement();
        if !displacement.is_finite() || displacement.abs() <= threshold {
            return None;
        }
        if displacement > 0.0 {
            Some(SwipeDirection::Forward)
        } else {
            Some(SwipeDirection::Backward)
        }
    }
}

/// Input device that started a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureSource {
    Touch,
    Pointer,
}

/// A drag in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gesture {
    pub source: GestureSource,
    pub tracker: SwipeTracker,
}
