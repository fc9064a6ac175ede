//! Intents for the carousel.

use crate::mvi::Intent;

/// Direction keys the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
    /// Any other key; always ignored.
    Other,
}

impl NavKey {
    /// Map a DOM-style key name (`"ArrowLeft"`, `"ArrowRight"`).
    pub fn from_code(code: &str) -> Self {
        match code {
            "ArrowLeft" => NavKey::Left,
            "ArrowRight" => NavKey::Right,
            _ => NavKey::Other,
        }
    }
}

/// Intents that can be dispatched to the carousel reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselIntent {
    /// Move to the next slide, wrapping at the end.
    Advance,
    /// Move to the previous slide, wrapping at the start.
    Retreat,
    /// Jump straight to a slide.
    GoTo { index: usize },

    /// (Re)start the autoplay timer if nothing blocks it.
    StartAutoplay,
    StopAutoplay,

    /// Pointer hovers the carousel: pause autoplay.
    PointerEnter,
    /// Pointer left the carousel: clear the pause and restart autoplay.
    PointerLeave,

    /// Touch drag began at horizontal position `x`. Pauses autoplay.
    TouchStart { x: f32 },
    TouchMove { x: f32 },
    /// Touch released: maybe navigate, then resume autoplay.
    TouchEnd,

    /// Pointer button pressed at `x`; starts a drag without touching autoplay.
    PointerDown { x: f32 },
    PointerMove { x: f32 },
    PointerUp,

    /// Viewport intersection of the carousel changed.
    VisibilityChanged { visible: bool },

    Key(NavKey),

    /// Layout changed; re-emit the current render instruction.
    Resize,

    /// The settle timer fired: release the transition lock.
    SettleElapsed,
    /// The autoplay timer fired.
    AutoplayTick,

    /// Tear down. Every later intent is ignored.
    Destroy,
}

impl CarouselIntent {
    /// Whether this intent is an explicit request for a slide change.
    ///
    /// Gesture ends and autoplay ticks only sometimes navigate, so they are
    /// not counted.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            CarouselIntent::Advance
                | CarouselIntent::Retreat
                | CarouselIntent::GoTo { .. }
                | CarouselIntent::Key(NavKey::Left | NavKey::Right)
        )
    }
}

impl Intent for CarouselIntent {}
