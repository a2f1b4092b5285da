use tracing::debug;

use crate::validate::{self, Verdict};

use super::{
    actions::ListAction,
    entry::{Entry, EntryId, IdAllocator},
    focus::PendingFocus,
    list::{EntryList, MAX_ENTRIES},
    reducers::apply,
};

/// Mutable shell around the immutable list snapshots. Owns the id allocator,
/// the pending-focus slot and the cursor the TUI navigates with; every list
/// change goes through [`apply`].
#[derive(Debug, Clone)]
pub struct FormState {
    list: EntryList,
    ids: IdAllocator,
    focus: PendingFocus,
    cursor: usize,
}

impl FormState {
    pub fn new() -> Self {
        let mut ids = IdAllocator::default();
        let list = EntryList::seeded(ids.allocate());
        Self {
            list,
            ids,
            focus: PendingFocus::default(),
            cursor: 0,
        }
    }

    pub fn list(&self) -> &EntryList {
        &self.list
    }

    pub fn can_insert(&self) -> bool {
        self.list.len() < MAX_ENTRIES
    }

    pub fn can_remove(&self) -> bool {
        self.list.len() > 1
    }

    /// Append a blank entry and record it as the pending focus target.
    /// Returns `None` without side effects when the list is full.
    pub fn insert_entry(&mut self) -> Option<EntryId> {
        if !self.can_insert() {
            debug!(count = self.list.len(), "insert ignored, list is full");
            return None;
        }
        let id = self.ids.allocate();
        self.list = apply(&self.list, ListAction::Insert { id });
        self.focus.request(id);
        debug!(%id, count = self.list.len(), "entry inserted");
        Some(id)
    }

    pub fn remove_entry(&mut self, id: EntryId) {
        let before = self.list.len();
        self.list = apply(&self.list, ListAction::Remove { id });
        if self.list.len() != before {
            debug!(%id, count = self.list.len(), "entry removed");
        }
        self.clamp_cursor();
    }

    pub fn update_entry(&mut self, id: EntryId, value: impl Into<String>) {
        self.list = apply(
            &self.list,
            ListAction::Update {
                id,
                value: value.into(),
            },
        );
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn focused_entry(&self) -> Option<&Entry> {
        self.list.get(self.cursor).map(|entry| entry.as_ref())
    }

    pub fn focus_next(&mut self) {
        self.cursor = (self.cursor + 1) % self.list.len();
    }

    pub fn focus_prev(&mut self) {
        if self.cursor == 0 {
            self.cursor = self.list.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// Consume the pending focus directive, moving the cursor onto the entry
    /// that was just inserted. Returns the focused index when the directive
    /// resolved; a directive whose entry is gone resolves to nothing.
    pub fn sync_pending_focus(&mut self) -> Option<usize> {
        let index = self.focus.resolve(&self.list)?;
        self.cursor = index;
        Some(index)
    }

    pub fn pending_focus_target(&self) -> Option<EntryId> {
        self.focus.target()
    }

    pub fn entry_verdict(&self, entry: &Entry) -> Verdict {
        validate::verdict(&entry.url, entry.touched)
    }

    /// Aggregate gate: true once every entry holds a pattern-matching URL.
    /// A blank untouched entry shows no error yet still blocks submission.
    pub fn submission_ready(&self) -> bool {
        validate::submission_ready(&self.list)
    }

    /// Entries currently blocking submission (blank or failing the pattern).
    pub fn blocking_count(&self) -> usize {
        self.list
            .iter()
            .filter(|entry| !validate::accepts(&entry.url))
            .count()
    }

    /// Entries with a visible error message.
    pub fn error_count(&self) -> usize {
        self.list
            .iter()
            .filter(|entry| self.entry_verdict(entry) == Verdict::Invalid)
            .count()
    }

    pub fn is_dirty(&self) -> bool {
        self.list.len() > 1 || self.list.iter().any(|entry| entry.touched)
    }

    fn clamp_cursor(&mut self) {
        if self.cursor >= self.list.len() {
            self.cursor = self.list.len() - 1;
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
