use super::intent::Intent;
use super::state::UiState;

/// Folds one intent into the current state.
///
/// Implementations never touch timers or output. Whoever owns the state
/// compares the value before and after `reduce` and acts on the difference,
/// which keeps every transition replayable in tests without a clock.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Takes the old state by value and returns its successor.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
