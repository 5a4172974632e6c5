use crate::error::SessionResult;
use crate::model::{SessionId, SessionRecord, UpsertReport};

/// Handle to the table/collection holding session documents.
///
/// Each method is a single request against the database. Implementations rely
/// on the database's per-document atomicity and add no locking of their own
/// beyond what is needed to share the connection.
pub trait SessionTable: Send + Sync {
    /// Point read by primary key; `None` when no document exists.
    fn get(&self, id: &SessionId) -> SessionResult<Option<SessionRecord>>;

    /// Inserts the record, or replaces the document with the same id.
    fn upsert(&self, record: SessionRecord) -> SessionResult<UpsertReport>;

    /// Deletes by primary key and returns the number of documents removed.
    fn delete(&self, id: &SessionId) -> SessionResult<u64>;

    /// Deletes every document whose `updated` is strictly below `cutoff`.
    /// The returned count is informational.
    fn delete_updated_before(&self, cutoff: i64) -> SessionResult<u64>;
}

impl<T: SessionTable + ?Sized> SessionTable for Box<T> {
    fn get(&self, id: &SessionId) -> SessionResult<Option<SessionRecord>> {
        (**self).get(id)
    }

    fn upsert(&self, record: SessionRecord) -> SessionResult<UpsertReport> {
        (**self).upsert(record)
    }

    fn delete(&self, id: &SessionId) -> SessionResult<u64> {
        (**self).delete(id)
    }

    fn delete_updated_before(&self, cutoff: i64) -> SessionResult<u64> {
        (**self).delete_updated_before(cutoff)
    }
}
