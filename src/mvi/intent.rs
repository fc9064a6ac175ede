/// Something that happened to a view: a key, a gesture, a fired timer.
///
/// Intents are plain values so they can cross from the input thread and
/// timer tasks into the loop that owns the state.
pub trait Intent: Send + 'static {}
