use crate::form::{EntryList, FormState, IdAllocator, ListAction, PendingFocus, apply};

#[test]
fn resolve_returns_the_index_of_the_requested_entry() {
    let mut ids = IdAllocator::default();
    let first = ids.allocate();
    let mut list = EntryList::seeded(first);
    let second = ids.allocate();
    list = apply(&list, ListAction::Insert { id: second });

    let mut focus = PendingFocus::default();
    focus.request(second);
    assert_eq!(focus.resolve(&list), Some(1));
}

#[test]
fn resolve_consumes_the_directive() {
    let mut ids = IdAllocator::default();
    let first = ids.allocate();
    let list = EntryList::seeded(first);

    let mut focus = PendingFocus::default();
    focus.request(first);
    assert_eq!(focus.resolve(&list), Some(0));
    assert_eq!(focus.resolve(&list), None);
    assert_eq!(focus.target(), None);
}

#[test]
fn removed_target_resolves_to_none_without_panicking() {
    let mut form = FormState::new();
    let inserted = form.insert_entry().unwrap();
    form.remove_entry(inserted);
    assert_eq!(form.sync_pending_focus(), None);
    assert_eq!(form.pending_focus_target(), None);
}

#[test]
fn update_and_remove_never_request_focus() {
    let mut form = FormState::new();
    let second = form.insert_entry().unwrap();
    form.sync_pending_focus();

    let first = form.list().get(0).unwrap().id;
    form.update_entry(first, "http://drive.google.com/a");
    assert_eq!(form.pending_focus_target(), None);

    form.remove_entry(second);
    assert_eq!(form.pending_focus_target(), None);
}
