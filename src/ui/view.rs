//! Render model derived from a state snapshot plus local UI state.
//!
//! Kept free of ratatui types so the mapping can be tested directly.

use crate::api::ArticleId;
use crate::articles::{ArticlesState, ArticlesStatus};

/// Label on a row's delete affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLabel {
    Idle,
    Deleting,
    Retry,
}

impl RowLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowLabel::Idle => "x",
            RowLabel::Deleting => "...",
            RowLabel::Retry => "Retry...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: ArticleId,
    pub title: String,
    pub label: RowLabel,
    pub selected: bool,
    /// The last delete of this row failed and is awaiting retry.
    pub failed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Loading,
    LoadFailed { message: String },
    DeleteFailed { id: ArticleId, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlesView {
    pub status: ArticlesStatus,
    pub banner: Option<Banner>,
    pub rows: Vec<RowView>,
    /// Rows are the last known list but a load failed since.
    pub stale: bool,
}

impl ArticlesView {
    pub fn row(&self, id: ArticleId) -> Option<&RowView> {
        self.rows.iter().find(|row| row.id == id)
    }
}

/// `deleting` is the row whose delete (or retry) the user started and that
/// has not failed yet.
pub fn build(state: &ArticlesState, selected: usize, deleting: Option<ArticleId>) -> ArticlesView {
    let failed_id = state.failed_delete_id();

    let banner = match state.status {
        ArticlesStatus::Loading => Some(Banner::Loading),
        ArticlesStatus::Success => None,
        ArticlesStatus::Error => Some(Banner::LoadFailed {
            message: message_of(state),
        }),
        ArticlesStatus::ErrorDeleting => failed_id.map(|id| Banner::DeleteFailed {
            id,
            message: message_of(state),
        }),
    };

    let rows = state
        .records
        .iter()
        .enumerate()
        .map(|(index, article)| {
            let failed = failed_id == Some(article.id);
            let label = if deleting == Some(article.id) {
                RowLabel::Deleting
            } else if failed {
                RowLabel::Retry
            } else {
                RowLabel::Idle
            };
            RowView {
                id: article.id,
                title: article.title.clone(),
                label,
                selected: index == selected,
                failed,
            }
        })
        .collect();

    ArticlesView {
        status: state.status,
        banner,
        rows,
        stale: state.status == ArticlesStatus::Error,
    }
}

fn message_of(state: &ArticlesState) -> String {
    state
        .visible_error()
        .map(|e| e.message.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{default_fixture, ErrorPayload};

    fn loaded() -> ArticlesState {
        ArticlesState {
            records: default_fixture(),
            status: ArticlesStatus::Success,
            error: None,
        }
    }

    #[test]
    fn success_has_no_banner_and_idle_rows() {
        let view = build(&loaded(), 0, None);
        assert!(view.banner.is_none());
        assert_eq!(view.rows.len(), 10);
        assert!(view.rows.iter().all(|r| r.label == RowLabel::Idle));
        assert!(view.rows[0].selected);
        assert!(!view.stale);
    }

    #[test]
    fn deleting_row_shows_ellipsis() {
        let view = build(&loaded(), 0, Some(3));
        assert_eq!(view.row(3).unwrap().label, RowLabel::Deleting);
        assert_eq!(view.row(3).unwrap().label.as_str(), "...");
        assert_eq!(view.row(4).unwrap().label, RowLabel::Idle);
    }

    #[test]
    fn failed_delete_row_offers_retry() {
        let mut state = loaded();
        state.status = ArticlesStatus::ErrorDeleting;
        state.error = Some(ErrorPayload {
            id: Some(5),
            message: "Error 400 | Bad request".to_string(),
        });
        let view = build(&state, 0, None);
        let row = view.row(5).unwrap();
        assert!(row.failed);
        assert_eq!(row.label.as_str(), "Retry...");
        assert_eq!(
            view.banner,
            Some(Banner::DeleteFailed {
                id: 5,
                message: "Error 400 | Bad request".to_string()
            })
        );
        assert!(!view.stale);
    }

    #[test]
    fn load_error_marks_rows_stale() {
        let mut state = loaded();
        state.status = ArticlesStatus::Error;
        state.error = Some(ErrorPayload {
            id: None,
            message: "down".to_string(),
        });
        let view = build(&state, 0, None);
        assert!(view.stale);
        assert_eq!(
            view.banner,
            Some(Banner::LoadFailed {
                message: "down".to_string()
            })
        );
        assert_eq!(view.rows.len(), 10);
    }

    #[test]
    fn stale_delete_error_is_not_shown_after_success() {
        let mut state = loaded();
        state.error = Some(ErrorPayload {
            id: Some(5),
            message: "old".to_string(),
        });
        let view = build(&state, 0, None);
        assert!(!view.row(5).unwrap().failed);
        assert!(view.banner.is_none());
    }
}
