use crate::error::SessionResult;
use crate::inmemory::InMemorySessionTable;
use crate::store::SessionStore;
use crate::table::SessionTable;
use serde::{Deserialize, Serialize};

/// Table name used when the configuration does not name one.
pub const DEFAULT_TABLE: &str = "sessions";

/// Which database the session table lives in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum SessionBackendConfig {
    InMemory,
    #[cfg(feature = "redis")]
    RedisUrl(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct StoreConfig {
    pub backend: SessionBackendConfig,
    #[serde(default = "default_table")]
    pub table: String,
}

impl StoreConfig {
    pub fn new(backend: SessionBackendConfig) -> Self {
        Self {
            backend,
            table: default_table(),
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

/// Builds a store for `backend` using the default table name.
pub fn create_session_store(
    backend: SessionBackendConfig,
) -> SessionResult<SessionStore<Box<dyn SessionTable>>> {
    create_session_store_from(&StoreConfig::new(backend))
}

/// Builds a store from a full configuration, connecting to the backend.
pub fn create_session_store_from(
    config: &StoreConfig,
) -> SessionResult<SessionStore<Box<dyn SessionTable>>> {
    let table: Box<dyn SessionTable> = match &config.backend {
        SessionBackendConfig::InMemory => Box::new(InMemorySessionTable::new()),
        #[cfg(feature = "redis")]
        SessionBackendConfig::RedisUrl(url) => Box::new(
            crate::redis_store::RedisSessionTable::from_url_with_namespace(url, &config.table)?,
        ),
    };
    tracing::debug!(table = %config.table, "session store configured");
    Ok(SessionStore::new(table))
}
