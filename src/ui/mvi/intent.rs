/// Marker trait for anything a reducer can fold: user actions as well as
/// store results that arrive later on the event queue.
pub trait Intent: Send + 'static {}
