use crate::articles::event::ArticlesEvent;
use crate::articles::state::{ArticlesState, ArticlesStatus};
use crate::ui::mvi::Reducer;

pub struct ArticlesReducer;

impl Reducer for ArticlesReducer {
    type State = ArticlesState;
    type Intent = ArticlesEvent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ArticlesEvent::LoadRequested
            | ArticlesEvent::RetryRequested
            | ArticlesEvent::ResetRequested => ArticlesState {
                status: ArticlesStatus::Loading,
                ..state
            },
            ArticlesEvent::LoadSucceeded(records) => ArticlesState {
                records,
                status: ArticlesStatus::Success,
                ..state
            },
            ArticlesEvent::LoadFailed(error) => ArticlesState {
                status: ArticlesStatus::Error,
                error: Some(error),
                ..state
            },
            ArticlesEvent::DeleteRequested(_) => state,
            ArticlesEvent::DeleteSucceeded(deleted) => {
                let ArticlesState { records, error, .. } = state;
                ArticlesState {
                    records: records.into_iter().filter(|a| a.id != deleted.id).collect(),
                    status: ArticlesStatus::Success,
                    error,
                }
            }
            ArticlesEvent::DeleteFailed(error) => ArticlesState {
                status: ArticlesStatus::ErrorDeleting,
                error: Some(error),
                ..state
            },
        }
    }
}
