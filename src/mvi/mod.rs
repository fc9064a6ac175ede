//! Model-View-Intent (MVI) primitives.
//!
//! The carousel is built as a unidirectional data flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Presenter
//!    ↑                                │
//!    └──── input / timers ────────────┘
//! ```
//!
//! - **State**: plain data describing the carousel at one instant
//! - **Intent**: user input, visibility signals or fired timers
//! - **Reducer**: pure function that transforms state based on intents
//!
//! Side effects (scheduling timers, emitting render instructions) are derived
//! by the owner of the state after each reduction, never inside the reducer.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
