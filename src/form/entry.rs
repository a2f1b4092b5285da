use std::fmt;

/// Stable identity of one URL slot. Ids are handed out sequentially and
/// never reused, even after the slot is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "url-{}", self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn allocate(&mut self) -> EntryId {
        let id = EntryId(self.next);
        self.next += 1;
        id
    }
}

/// One URL slot in the request list.
#[derive(Debug, Clone)]
pub struct Entry {
    pub id: EntryId,
    pub url: String,
    /// Set by the first update targeting this entry and never cleared again.
    /// A blank entry only surfaces an error once it has been touched.
    pub touched: bool,
}

impl Entry {
    pub fn blank(id: EntryId) -> Self {
        Self {
            id,
            url: String::new(),
            touched: false,
        }
    }

    pub(crate) fn with_url(&self, url: String) -> Self {
        Self {
            id: self.id,
            url,
            touched: true,
        }
    }
}
