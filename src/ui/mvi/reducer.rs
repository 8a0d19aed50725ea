use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Fold one intent into the state. Must not perform side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Run `R` over the state held in `slot`, replacing it with the result.
pub fn dispatch<R: Reducer>(slot: &mut R::State, intent: R::Intent) {
    *slot = R::reduce(std::mem::take(slot), intent);
}
