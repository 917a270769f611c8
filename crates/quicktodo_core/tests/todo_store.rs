use quicktodo_core::db::open_db_in_memory;
use quicktodo_core::{RenameOutcome, SqliteSlotStorage, TodoStorage, TodoStore};
use rusqlite::Connection;
use uuid::Uuid;

fn store(conn: &Connection) -> TodoStore<SqliteSlotStorage<'_>> {
    TodoStore::load(SqliteSlotStorage::try_new(conn).unwrap()).unwrap()
}

fn titles<S: TodoStorage>(store: &TodoStore<S>) -> Vec<&str> {
    store.items().iter().map(|item| item.title.as_str()).collect()
}

fn stamp_slot(conn: &Connection, value: i64) {
    conn.execute("UPDATE slots SET updated_at = ?1;", [value])
        .unwrap();
}

fn slot_stamp(conn: &Connection) -> i64 {
    conn.query_row("SELECT updated_at FROM slots;", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn add_appends_to_the_bottom_in_order() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    store.add("buy milk").unwrap().unwrap();
    store.add("write report").unwrap().unwrap();

    assert_eq!(titles(&store), vec!["buy milk", "write report"]);
    assert_eq!(store.active_count(), 2);
}

#[test]
fn add_trims_outer_whitespace() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    store.add("   text with space   ").unwrap().unwrap();

    assert_eq!(titles(&store), vec!["text with space"]);
}

#[test]
fn blank_add_creates_nothing_and_writes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    assert_eq!(store.add("   ").unwrap(), None);
    assert_eq!(store.add("").unwrap(), None);

    assert!(store.is_empty());
    // No mutation happened, so the slot was never written at all.
    let slot_rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM slots;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(slot_rows, 0);
}

#[test]
fn add_permits_duplicate_titles_as_distinct_items() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    let first = store.add("buy milk").unwrap().unwrap();
    let second = store.add("buy milk").unwrap().unwrap();

    assert_eq!(store.len(), 2);
    assert_ne!(first, second);
    assert_eq!(titles(&store), vec!["buy milk", "buy milk"]);
}

#[test]
fn add_has_no_title_length_limit() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    let long_title = "review the quarterly report and ".repeat(20);
    store.add(&long_title).unwrap().unwrap();

    assert_eq!(store.items()[0].title, long_title.trim());
}

#[test]
fn add_accepts_special_characters() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    let title = r#"~!@#$%^&*()_+|}{":?><][';/.=-1234567890"#;
    store.add(title).unwrap().unwrap();

    assert_eq!(titles(&store), vec![title]);
}

#[test]
fn add_accepts_single_character_title() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    store.add("a").unwrap().unwrap();

    assert_eq!(titles(&store), vec!["a"]);
}

#[test]
fn new_items_start_active() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    store.add("buy milk").unwrap().unwrap();
    store.add("write report").unwrap().unwrap();

    assert!(!store.has_completed());
    assert!(store.items().iter().all(|item| item.is_active()));
}

#[test]
fn fifty_items_append_and_persist() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    for i in 0..50 {
        store.add(&format!("task {i}")).unwrap().unwrap();
    }
    assert_eq!(store.len(), 50);
    assert_eq!(store.items()[49].title, "task 49");

    let rehydrated = TodoStore::load(SqliteSlotStorage::try_new(&conn).unwrap()).unwrap();
    assert_eq!(rehydrated.len(), 50);
    assert_eq!(rehydrated.items(), store.items());
}

#[test]
fn set_completed_marks_exactly_one_item() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    store.add("buy milk").unwrap().unwrap();
    let target = store.add("write report").unwrap().unwrap();
    store.add("pay rent").unwrap().unwrap();

    assert!(store.set_completed(target, true).unwrap());

    assert_eq!(store.active_count(), 2);
    assert!(store.has_completed());
    assert!(store.get(target).unwrap().completed);
    assert!(store.items()[0].is_active());
    assert!(store.items()[2].is_active());
}

#[test]
fn set_completed_can_revert_to_active() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    let id = store.add("buy milk").unwrap().unwrap();
    store.set_completed(id, true).unwrap();
    store.set_completed(id, false).unwrap();

    assert!(!store.has_completed());
    assert_eq!(store.active_count(), 1);
}

#[test]
fn set_completed_unknown_id_is_a_no_op() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    store.add("buy milk").unwrap().unwrap();
    stamp_slot(&conn, 777);

    assert!(!store.set_completed(Uuid::new_v4(), true).unwrap());

    assert_eq!(store.active_count(), 1);
    assert_eq!(slot_stamp(&conn), 777);
}

#[test]
fn set_all_completed_covers_every_item() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    for title in ["buy milk", "write report", "pay rent"] {
        store.add(title).unwrap().unwrap();
    }

    store.set_all_completed(true).unwrap();
    assert_eq!(store.active_count(), 0);
    assert!(store.items().iter().all(|item| item.completed));

    store.set_all_completed(false).unwrap();
    assert_eq!(store.active_count(), 3);
    assert!(!store.has_completed());
}

#[test]
fn remove_deletes_a_single_item() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    store.add("buy milk").unwrap().unwrap();
    let second = store.add("write report").unwrap().unwrap();

    assert!(store.remove(second).unwrap());

    assert_eq!(titles(&store), vec!["buy milk"]);
}

#[test]
fn remove_works_on_completed_items() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    store.add("buy milk").unwrap().unwrap();
    let second = store.add("write report").unwrap().unwrap();
    store.set_completed(second, true).unwrap();

    assert!(store.remove(second).unwrap());

    assert_eq!(titles(&store), vec!["buy milk"]);
    assert!(!store.has_completed());
}

#[test]
fn remove_unknown_id_is_a_no_op() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    store.add("buy milk").unwrap().unwrap();
    stamp_slot(&conn, 888);

    assert!(!store.remove(Uuid::new_v4()).unwrap());

    assert_eq!(store.len(), 1);
    assert_eq!(slot_stamp(&conn), 888);
}

#[test]
fn clear_completed_removes_exactly_the_completed_subset() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    store.add("buy milk").unwrap().unwrap();
    let second = store.add("write report").unwrap().unwrap();
    store.add("pay rent").unwrap().unwrap();
    let fourth = store.add("call the bank").unwrap().unwrap();

    store.set_completed(second, true).unwrap();
    store.set_completed(fourth, true).unwrap();

    assert_eq!(store.clear_completed().unwrap(), 2);

    assert_eq!(titles(&store), vec!["buy milk", "pay rent"]);
    assert!(!store.has_completed());
}

#[test]
fn clear_completed_empties_a_fully_completed_list() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    let id = store.add("buy milk").unwrap().unwrap();
    store.set_completed(id, true).unwrap();

    assert_eq!(store.clear_completed().unwrap(), 1);
    assert!(store.is_empty());
}

#[test]
fn clear_completed_without_completed_items_writes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    store.add("buy milk").unwrap().unwrap();
    stamp_slot(&conn, 999);

    assert_eq!(store.clear_completed().unwrap(), 0);

    assert_eq!(store.len(), 1);
    assert_eq!(slot_stamp(&conn), 999);
}

#[test]
fn rename_replaces_title_and_preserves_completed() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    let id = store.add("buy milk").unwrap().unwrap();
    store.set_completed(id, true).unwrap();

    assert_eq!(
        store.rename(id, "buy oat milk").unwrap(),
        RenameOutcome::Renamed
    );

    let item = store.get(id).unwrap();
    assert_eq!(item.title, "buy oat milk");
    assert!(item.completed);
}

#[test]
fn rename_trims_replacement_text() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    let id = store.add("buy milk").unwrap().unwrap();
    store.rename(id, "     buy oat milk     ").unwrap();

    assert_eq!(store.get(id).unwrap().title, "buy oat milk");
}

#[test]
fn rename_to_blank_removes_the_item() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    let id = store.add("buy milk").unwrap().unwrap();

    assert_eq!(store.rename(id, "   ").unwrap(), RenameOutcome::Removed);

    assert!(store.is_empty());
    assert_eq!(store.get(id), None);
}

#[test]
fn rename_unknown_id_reports_not_found() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    store.add("buy milk").unwrap().unwrap();

    assert_eq!(
        store.rename(Uuid::new_v4(), "anything").unwrap(),
        RenameOutcome::NotFound
    );
    assert_eq!(titles(&store), vec!["buy milk"]);
}

#[test]
fn active_count_tracks_mixed_states() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    let mut ids = Vec::new();
    for title in ["buy milk", "write report", "pay rent", "call the bank"] {
        ids.push(store.add(title).unwrap().unwrap());
    }
    assert_eq!(store.active_count(), 4);

    store.set_completed(ids[0], true).unwrap();
    store.set_completed(ids[2], true).unwrap();
    assert_eq!(store.active_count(), 2);

    store.set_completed(ids[0], false).unwrap();
    assert_eq!(store.active_count(), 3);
}
