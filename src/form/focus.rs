use super::{entry::EntryId, list::EntryList};

/// One-shot focus directive, recorded when an entry is inserted and consumed
/// by the presentation layer on its next draw. Remove and update actions
/// never write to this slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingFocus {
    target: Option<EntryId>,
}

impl PendingFocus {
    pub fn request(&mut self, id: EntryId) {
        self.target = Some(id);
    }

    pub fn target(&self) -> Option<EntryId> {
        self.target
    }

    /// Consume the directive, returning the index of the entry that should
    /// receive focus. A target that was removed before the directive ran
    /// resolves to `None`; the slot is cleared either way.
    pub fn resolve(&mut self, list: &EntryList) -> Option<usize> {
        let id = self.target.take()?;
        list.index_of(id)
    }
}
