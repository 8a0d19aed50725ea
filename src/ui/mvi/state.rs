/// Marker trait for state snapshots.
///
/// Snapshots are cloned out to observers and compared to skip redundant
/// redraws, and `Default` gives the state before the first event.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
