use super::entry::EntryId;

/// User intents the list reducer understands.
#[derive(Debug, Clone)]
pub enum ListAction {
    Insert { id: EntryId },
    Remove { id: EntryId },
    Update { id: EntryId, value: String },
}
