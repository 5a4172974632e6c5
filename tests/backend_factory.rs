use docstore_session::{
    create_session_store, create_session_store_from, SessionBackendConfig, SessionHandler,
    SessionId, StoreConfig,
};

#[test]
fn factory_returns_inmemory_store() {
    let store = create_session_store(SessionBackendConfig::InMemory)
        .expect("factory should build in-memory store");
    let id = SessionId::try_from("factory-1").expect("id");

    assert!(store.write(&id, "a=b").expect("write succeeds"));
    assert_eq!(store.read(&id).expect("read succeeds"), "a=b");
}

#[test]
fn factory_accepts_parsed_config() {
    let config: StoreConfig =
        serde_json::from_str(r#"{"backend":"in_memory","table":"php_sessions"}"#)
            .expect("parse config");
    let store = create_session_store_from(&config).expect("build store");
    assert!(store.gc(60).expect("gc"));
}
