use docstore_session::inmemory::InMemorySessionTable;
use docstore_session::{SessionHandler, SessionId, SessionStore};

fn sid(raw: &str) -> SessionId {
    SessionId::try_from(raw).expect("session id")
}

#[test]
fn write_read_overwrite_destroy_flow() {
    let store = SessionStore::new(InMemorySessionTable::new());
    let id = sid("abc123");

    assert!(store.write(&id, "foo=bar").expect("first write"));
    assert_eq!(store.read(&id).expect("read"), "foo=bar");

    assert!(store.write(&id, "foo=baz").expect("second write"));
    assert_eq!(store.read(&id).expect("read after overwrite"), "foo=baz");
    assert_eq!(store.table().len(), 1, "upsert must not duplicate records");

    assert!(store.destroy(&id).expect("destroy"));
    assert_eq!(store.read(&id).expect("read after destroy"), "");
}

#[test]
fn unknown_session_reads_empty() {
    let store = SessionStore::new(InMemorySessionTable::new());
    assert_eq!(store.read(&sid("never-written")).expect("read"), "");
}

#[test]
fn destroy_reports_whether_anything_was_removed() {
    let store = SessionStore::new(InMemorySessionTable::new());
    let id = sid("destroy-me");
    assert!(!store.destroy(&id).expect("destroy missing"));

    store.write(&id, "a=1").expect("write");
    assert!(store.destroy(&id).expect("destroy existing"));
    assert!(!store.destroy(&id).expect("destroy twice"));
}

#[test]
fn empty_payload_is_stored() {
    let store = SessionStore::new(InMemorySessionTable::new());
    let id = sid("blank");
    assert!(store.write(&id, "").expect("write empty"));
    assert_eq!(store.table().len(), 1);
    assert_eq!(store.read(&id).expect("read"), "");
}

#[test]
fn sessions_are_isolated_by_id() {
    let store = SessionStore::new(InMemorySessionTable::new());
    store.write(&sid("one"), "n=1").expect("write one");
    store.write(&sid("two"), "n=2").expect("write two");
    store.destroy(&sid("one")).expect("destroy one");
    assert_eq!(store.read(&sid("two")).expect("read two"), "n=2");
}
