use docstore_session::{
    create_session_store, SessionBackendConfig, SessionHandler, SessionId, SessionResult,
    SessionScope,
};

fn run_inmemory_demo() -> SessionResult<()> {
    println!("== In-memory session demo ==");
    let store = create_session_store(SessionBackendConfig::InMemory)?;
    let id = SessionId::try_from("demo-session")?;

    {
        let mut scope = SessionScope::begin(&store, "", "SESSID", id.clone())?;
        println!("Loaded payload: {:?}", scope.data());
        scope.set_data("user|s:5:\"alice\";");
        scope.finalize()?;
    }
    println!("Stored payload: {}", store.read(&id)?);

    store.write(&id, "user|s:3:\"bob\";")?;
    println!("Updated payload: {}", store.read(&id)?);

    store.gc(1440)?;
    println!("Destroyed: {}", store.destroy(&id)?);
    Ok(())
}

fn main() -> SessionResult<()> {
    run_inmemory_demo()
}
