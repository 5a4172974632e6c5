use docstore_session::inmemory::InMemorySessionTable;
use docstore_session::{SessionHandler, SessionId, SessionStore};
use proptest::prelude::*;

proptest! {
    #[test]
    fn written_payload_reads_back(id in "\\PC+", data in "\\PC*") {
        let store = SessionStore::new(InMemorySessionTable::new());
        let id = SessionId::try_from(id).expect("non-empty id");
        prop_assert!(store.write(&id, &data).expect("write"));
        prop_assert_eq!(store.read(&id).expect("read"), data);
    }

    #[test]
    fn latest_write_wins(id in "\\PC+", first in "\\PC*", second in "\\PC*") {
        let store = SessionStore::new(InMemorySessionTable::new());
        let id = SessionId::try_from(id).expect("non-empty id");
        store.write(&id, &first).expect("first write");
        store.write(&id, &second).expect("second write");
        prop_assert_eq!(store.table().len(), 1);
        prop_assert_eq!(store.read(&id).expect("read"), second);
    }

    #[test]
    fn never_written_session_reads_empty(id in "\\PC+") {
        let store = SessionStore::new(InMemorySessionTable::new());
        let id = SessionId::try_from(id).expect("non-empty id");
        prop_assert_eq!(store.read(&id).expect("read"), "");
    }

    #[test]
    fn destroy_of_missing_session_is_false(id in "\\PC+") {
        let store = SessionStore::new(InMemorySessionTable::new());
        let id = SessionId::try_from(id).expect("non-empty id");
        prop_assert!(!store.destroy(&id).expect("destroy"));
    }

    #[test]
    fn destroyed_session_reads_empty(id in "\\PC+", data in "\\PC*") {
        let store = SessionStore::new(InMemorySessionTable::new());
        let id = SessionId::try_from(id).expect("non-empty id");
        store.write(&id, &data).expect("write");
        prop_assert!(store.destroy(&id).expect("destroy"));
        prop_assert_eq!(store.read(&id).expect("read"), "");
    }
}
