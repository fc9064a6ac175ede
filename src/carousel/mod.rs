//! Looping carousel for the awards section.
//!
//! Manages slide position, the transition lock, autoplay timing, swipe
//! interpretation and visibility-aware pausing. Rendering is somebody
//! else's job: the controller only emits [`RenderInstruction`]s.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Slide index, lock phase, autoplay flags
//! - `intent.rs` - Navigation, gestures, visibility, timers
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `controller.rs` - Owns the state and turns state diffs into timers and renders
//!
//! [`RenderInstruction`]: crate::presenter::RenderInstruction

mod controller;
mod gesture;
mod intent;
mod reducer;
mod state;

pub use controller::CarouselController;
pub use gesture::{Gesture, GestureSource, SwipeDirection, SwipeTracker};
pub use intent::{CarouselIntent, NavKey};
pub use reducer::{CarouselReducer, DropReason};
pub use state::{CarouselState, Phase};
