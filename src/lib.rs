#![forbid(unsafe_code)]

pub mod clock;
pub mod config;
pub mod error;
pub mod handler;
pub mod inmemory;
pub mod model;
#[cfg(feature = "redis")]
pub mod redis_store;
pub mod scope;
pub mod store;
pub mod table;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{
    create_session_store, create_session_store_from, SessionBackendConfig, StoreConfig,
};
pub use error::{ErrorCode, SessionError, SessionResult};
pub use handler::SessionHandler;
pub use model::{SessionId, SessionRecord, UpsertReport};
pub use scope::SessionScope;
pub use store::SessionStore;
pub use table::SessionTable;
