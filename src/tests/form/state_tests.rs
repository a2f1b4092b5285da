use crate::form::{FormState, MAX_ENTRIES};

fn first_id(form: &FormState) -> crate::form::EntryId {
    form.list().get(0).unwrap().id
}

#[test]
fn seeds_with_a_single_blank_entry() {
    let form = FormState::new();
    assert_eq!(form.list().len(), 1);
    let entry = form.list().get(0).unwrap();
    assert_eq!(entry.url, "");
    assert!(!entry.touched);
    assert!(!form.is_dirty());
}

#[test]
fn insert_records_the_new_entry_as_focus_target() {
    let mut form = FormState::new();
    let id = form.insert_entry().expect("room for a second entry");
    assert_eq!(form.pending_focus_target(), Some(id));
    assert_eq!(form.sync_pending_focus(), Some(1));
    assert_eq!(form.cursor(), 1);
    assert_eq!(form.pending_focus_target(), None);
}

#[test]
fn insert_refused_once_full() {
    let mut form = FormState::new();
    for _ in 1..MAX_ENTRIES {
        assert!(form.insert_entry().is_some());
    }
    assert_eq!(form.list().len(), MAX_ENTRIES);
    assert!(!form.can_insert());
    form.sync_pending_focus();
    assert!(form.insert_entry().is_none());
    assert_eq!(form.list().len(), MAX_ENTRIES);
    assert_eq!(
        form.pending_focus_target(),
        None,
        "a refused insert must not request focus"
    );
}

#[test]
fn ids_are_not_reused_after_removal() {
    let mut form = FormState::new();
    let removed = form.insert_entry().unwrap();
    form.remove_entry(removed);
    let replacement = form.insert_entry().unwrap();
    assert_ne!(removed, replacement);
}

#[test]
fn cursor_stays_in_bounds_when_the_focused_entry_is_removed() {
    let mut form = FormState::new();
    form.insert_entry();
    let last = form.insert_entry().unwrap();
    form.sync_pending_focus();
    assert_eq!(form.cursor(), 2);
    form.remove_entry(last);
    assert_eq!(form.cursor(), 1);
    assert!(form.focused_entry().is_some());
}

#[test]
fn focus_navigation_wraps_both_ways() {
    let mut form = FormState::new();
    form.insert_entry();
    form.insert_entry();
    form.sync_pending_focus();
    assert_eq!(form.cursor(), 2);
    form.focus_next();
    assert_eq!(form.cursor(), 0);
    form.focus_prev();
    assert_eq!(form.cursor(), 2);
}

#[test]
fn submission_gate_requires_every_entry_to_be_valid() {
    let mut form = FormState::new();
    let first = first_id(&form);
    form.update_entry(first, "http://drive.google.com/a");
    assert!(form.submission_ready());

    let second = form.insert_entry().unwrap();
    assert!(
        !form.submission_ready(),
        "a blank untouched entry still blocks submission"
    );
    assert_eq!(form.blocking_count(), 1);
    assert_eq!(
        form.error_count(),
        0,
        "the blank untouched entry shows no error"
    );

    form.update_entry(second, "http://drive.google.com/b");
    assert!(form.submission_ready());
    assert_eq!(form.blocking_count(), 0);
}

#[test]
fn update_makes_the_form_dirty() {
    let mut form = FormState::new();
    let first = first_id(&form);
    assert!(!form.is_dirty());
    form.update_entry(first, "h");
    assert!(form.is_dirty());
}
