use crate::clock::{Clock, SystemClock};
use crate::error::SessionResult;
use crate::handler::SessionHandler;
use crate::model::{SessionId, SessionRecord};
use crate::table::SessionTable;
use tracing::{debug, warn};

/// Session save handler persisting every session as one document in a table.
///
/// Constructing the store is the initialization step: it takes the already
/// connected table handle and keeps it for its whole lifetime.
pub struct SessionStore<T, C = SystemClock> {
    table: T,
    clock: C,
}

impl<T: SessionTable> SessionStore<T> {
    pub fn new(table: T) -> Self {
        Self::with_clock(table, SystemClock)
    }
}

impl<T: SessionTable, C: Clock> SessionStore<T, C> {
    pub fn with_clock(table: T, clock: C) -> Self {
        Self { table, clock }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    /// Gives the table handle back, ending the store's use of the connection.
    pub fn into_table(self) -> T {
        self.table
    }
}

impl<T: SessionTable, C: Clock> SessionHandler for SessionStore<T, C> {
    fn open(&self, _save_path: &str, _name: &str) -> SessionResult<bool> {
        Ok(true)
    }

    fn close(&self) -> SessionResult<bool> {
        Ok(true)
    }

    fn read(&self, session_id: &SessionId) -> SessionResult<String> {
        let record = self.table.get(session_id)?;
        debug!(session_id = %session_id, found = record.is_some(), "session read");
        Ok(record.map(|record| record.session_data).unwrap_or_default())
    }

    fn write(&self, session_id: &SessionId, session_data: &str) -> SessionResult<bool> {
        let record = SessionRecord::new(session_id.clone(), self.clock.now(), session_data);
        let report = self.table.upsert(record)?;
        debug!(
            session_id = %session_id,
            inserted = report.inserted,
            replaced = report.replaced,
            "session written"
        );
        if report.affected() == 0 {
            warn!(session_id = %session_id, "session write persisted no document");
            return Ok(false);
        }
        Ok(true)
    }

    fn destroy(&self, session_id: &SessionId) -> SessionResult<bool> {
        let deleted = self.table.delete(session_id)?;
        debug!(session_id = %session_id, deleted, "session destroyed");
        Ok(deleted > 0)
    }

    fn gc(&self, maxlifetime: i64) -> SessionResult<bool> {
        let cutoff = self.clock.now().saturating_sub(maxlifetime);
        let removed = self.table.delete_updated_before(cutoff)?;
        debug!(maxlifetime, cutoff, removed, "session gc sweep");
        Ok(true)
    }
}
