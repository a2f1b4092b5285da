use std::sync::Arc;

use super::{
    actions::ListAction,
    entry::Entry,
    list::{EntryList, MAX_ENTRIES},
};

/// Apply one action to a snapshot, producing the next snapshot.
///
/// Total over its domain: an unknown id, an insert past the ceiling and the
/// removal of the last remaining entry are all silent no-ops, never errors.
/// The caller supplies a fresh id for `Insert`; collisions are not detected
/// here.
pub fn apply(list: &EntryList, action: ListAction) -> EntryList {
    match action {
        ListAction::Insert { id } => {
            if list.len() >= MAX_ENTRIES {
                return list.clone();
            }
            let mut entries = list.entries().to_vec();
            entries.push(Arc::new(Entry::blank(id)));
            EntryList::from_entries(entries)
        }
        ListAction::Remove { id } => {
            if list.len() <= 1 || list.index_of(id).is_none() {
                return list.clone();
            }
            let entries = list
                .iter()
                .filter(|entry| entry.id != id)
                .cloned()
                .collect();
            EntryList::from_entries(entries)
        }
        ListAction::Update { id, value } => {
            let Some(index) = list.index_of(id) else {
                return list.clone();
            };
            let mut entries = list.entries().to_vec();
            entries[index] = Arc::new(entries[index].with_url(value));
            EntryList::from_entries(entries)
        }
    }
}
