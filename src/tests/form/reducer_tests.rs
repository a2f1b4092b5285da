use std::collections::HashSet;
use std::sync::Arc;

use crate::form::{EntryId, EntryList, IdAllocator, ListAction, MAX_ENTRIES, apply};

fn seeded() -> (EntryList, IdAllocator, EntryId) {
    let mut ids = IdAllocator::default();
    let first = ids.allocate();
    (EntryList::seeded(first), ids, first)
}

fn filled_to_capacity() -> (EntryList, IdAllocator) {
    let (mut list, mut ids, _) = seeded();
    while list.len() < MAX_ENTRIES {
        let id = ids.allocate();
        list = apply(&list, ListAction::Insert { id });
    }
    (list, ids)
}

#[test]
fn insert_appends_blank_entry_at_end() {
    let (list, mut ids, first) = seeded();
    let second = ids.allocate();
    let next = apply(&list, ListAction::Insert { id: second });
    assert_eq!(next.len(), 2);
    assert_eq!(next.get(0).unwrap().id, first);
    let appended = next.get(1).unwrap();
    assert_eq!(appended.id, second);
    assert_eq!(appended.url, "");
    assert!(!appended.touched);
}

#[test]
fn insert_at_ceiling_is_a_noop() {
    let (list, mut ids) = filled_to_capacity();
    let overflow = ids.allocate();
    let next = apply(&list, ListAction::Insert { id: overflow });
    assert_eq!(next.len(), MAX_ENTRIES);
    assert!(next.index_of(overflow).is_none());
}

#[test]
fn remove_last_remaining_entry_is_a_noop() {
    let (list, _, first) = seeded();
    let survivor = list.get(0).unwrap().clone();
    let next = apply(&list, ListAction::Remove { id: first });
    assert_eq!(next.len(), 1);
    assert!(Arc::ptr_eq(&survivor, next.get(0).unwrap()));
}

#[test]
fn remove_unknown_id_is_a_noop() {
    let (mut list, mut ids, _) = seeded();
    list = apply(
        &list,
        ListAction::Insert {
            id: ids.allocate(),
        },
    );
    let stranger = ids.allocate();
    let next = apply(&list, ListAction::Remove { id: stranger });
    assert_eq!(next.len(), 2);
}

#[test]
fn update_unknown_id_is_a_noop() {
    let (list, mut ids, first) = seeded();
    let stranger = ids.allocate();
    let next = apply(
        &list,
        ListAction::Update {
            id: stranger,
            value: "http://drive.google.com/x".to_string(),
        },
    );
    assert_eq!(next.get(0).unwrap().url, "");
    assert_eq!(next.get(0).unwrap().id, first);
}

#[test]
fn update_replaces_only_the_target_entry() {
    let (mut list, mut ids, first) = seeded();
    let second = ids.allocate();
    let third = ids.allocate();
    list = apply(&list, ListAction::Insert { id: second });
    list = apply(&list, ListAction::Insert { id: third });

    let before: Vec<_> = list.iter().cloned().collect();
    let next = apply(
        &list,
        ListAction::Update {
            id: second,
            value: "http://drive.google.com/mid".to_string(),
        },
    );

    assert_eq!(next.len(), 3);
    assert_eq!(
        next.iter().map(|entry| entry.id).collect::<Vec<_>>(),
        vec![first, second, third]
    );
    assert!(Arc::ptr_eq(&before[0], next.get(0).unwrap()));
    assert!(!Arc::ptr_eq(&before[1], next.get(1).unwrap()));
    assert!(Arc::ptr_eq(&before[2], next.get(2).unwrap()));
    assert_eq!(next.get(1).unwrap().url, "http://drive.google.com/mid");
    assert!(next.get(1).unwrap().touched);
}

#[test]
fn update_marks_touched_even_when_value_stays_empty() {
    let (list, _, first) = seeded();
    let next = apply(
        &list,
        ListAction::Update {
            id: first,
            value: String::new(),
        },
    );
    assert_eq!(next.get(0).unwrap().url, "");
    assert!(next.get(0).unwrap().touched);
}

#[test]
fn previous_snapshot_is_left_untouched() {
    let (list, mut ids, first) = seeded();
    let _ = apply(
        &list,
        ListAction::Update {
            id: first,
            value: "http://drive.google.com/a".to_string(),
        },
    );
    let _ = apply(
        &list,
        ListAction::Insert {
            id: ids.allocate(),
        },
    );
    assert_eq!(list.len(), 1);
    assert_eq!(list.get(0).unwrap().url, "");
    assert!(!list.get(0).unwrap().touched);
}

#[test]
fn insert_insert_remove_first_keeps_relative_order() {
    let (mut list, mut ids, first) = seeded();
    let second = ids.allocate();
    let third = ids.allocate();
    list = apply(&list, ListAction::Insert { id: second });
    list = apply(&list, ListAction::Insert { id: third });
    assert_eq!(list.len(), 3);

    list = apply(&list, ListAction::Remove { id: first });
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(0).unwrap().id, second);
    assert_eq!(list.get(1).unwrap().id, third);

    list = apply(&list, ListAction::Remove { id: second });
    assert_eq!(list.len(), 1);
    list = apply(&list, ListAction::Remove { id: third });
    assert_eq!(list.len(), 1, "sole entry must survive removal");
    assert_eq!(list.get(0).unwrap().id, third);
}

#[test]
fn action_storm_keeps_count_bounded_and_ids_distinct() {
    let (mut list, mut ids, _) = seeded();
    for step in 0u32..200 {
        match step % 5 {
            0 | 1 | 2 => {
                let id = ids.allocate();
                list = apply(&list, ListAction::Insert { id });
            }
            3 => {
                let victim = list.get(0).unwrap().id;
                list = apply(&list, ListAction::Remove { id: victim });
            }
            _ => {
                let target = list.get(list.len() / 2).unwrap().id;
                list = apply(
                    &list,
                    ListAction::Update {
                        id: target,
                        value: format!("http://drive.google.com/v{step}"),
                    },
                );
            }
        }
        assert!((1..=MAX_ENTRIES).contains(&list.len()));
        let unique: HashSet<_> = list.iter().map(|entry| entry.id).collect();
        assert_eq!(unique.len(), list.len(), "ids must stay pairwise distinct");
    }
}
