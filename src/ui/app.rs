use crate::api::ArticleId;
use crate::articles::{ArticlesHandle, ArticlesState, ArticlesStatus};
use crate::ui::view::{self, ArticlesView};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Presentation state: the last published snapshot plus selection and the
/// transient "deleting" marker. Holds no business logic; every action is
/// forwarded to the synchronizer as an intent.
pub struct App {
    should_quit: bool,
    handle: ArticlesHandle,
    state: ArticlesState,
    selected: usize,
    deleting: Option<ArticleId>,
    /// Settled-delete count when `deleting` was set.
    deleting_since: u64,
    ticks: usize,
}

impl App {
    pub fn new(handle: ArticlesHandle) -> Self {
        let state = handle.snapshot();
        Self {
            should_quit: false,
            handle,
            state,
            selected: 0,
            deleting: None,
            deleting_since: 0,
            ticks: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn state(&self) -> &ArticlesState {
        &self.state
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn deleting(&self) -> Option<ArticleId> {
        self.deleting
    }

    pub fn view(&self) -> ArticlesView {
        view::build(&self.state, self.selected, self.deleting)
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER[self.ticks % SPINNER.len()]
    }

    pub fn on_tick(&mut self) {
        if self.state.status == ArticlesStatus::Loading || self.deleting.is_some() {
            self.ticks = self.ticks.wrapping_add(1);
        }
    }

    /// Take a new snapshot from the synchronizer.
    pub fn on_state(&mut self, next: ArticlesState) {
        if let Some(id) = self.deleting {
            let settled = self.handle.deletes_settled() > self.deleting_since;
            if settled || !next.contains(id) {
                self.deleting = None;
            }
        }
        self.state = next;
        self.clamp_selection();
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.state.records.len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let current = self.selected as isize;
        self.selected = (current + delta).rem_euclid(len as isize) as usize;
    }

    fn clamp_selection(&mut self) {
        let len = self.state.records.len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    pub fn selected_id(&self) -> Option<ArticleId> {
        self.state.records.get(self.selected).map(|a| a.id)
    }

    /// Delete the selected row. On a row whose delete failed this is its
    /// retry: a fresh delete of the same id.
    pub fn activate_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        self.mark_deleting(id);
        self.handle.delete(id);
    }

    pub fn retry(&mut self) {
        if let Some(id) = self.state.failed_delete_id() {
            self.mark_deleting(id);
        }
        self.handle.retry();
    }

    fn mark_deleting(&mut self, id: ArticleId) {
        self.deleting = Some(id);
        self.deleting_since = self.handle.deletes_settled();
    }

    pub fn reset(&mut self) {
        self.handle.reset();
    }
}
