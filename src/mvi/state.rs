/// Snapshot of a view at one instant.
///
/// `Clone` and `PartialEq` let the owner keep the pre-reduction value and
/// diff it against the new one. `Default` is the placeholder left behind
/// while the state is moved through the reducer.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
