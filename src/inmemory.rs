use crate::error::SessionResult;
use crate::model::{SessionId, SessionRecord, UpsertReport};
use crate::table::SessionTable;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// In-memory table backed by a concurrent hash map. Nothing expires on its
/// own; stale records stay until a gc sweep removes them.
#[derive(Default)]
pub struct InMemorySessionTable {
    records: DashMap<SessionId, SessionRecord>,
}

impl InMemorySessionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SessionTable for InMemorySessionTable {
    fn get(&self, id: &SessionId) -> SessionResult<Option<SessionRecord>> {
        Ok(self.records.get(id).map(|entry| entry.value().clone()))
    }

    fn upsert(&self, record: SessionRecord) -> SessionResult<UpsertReport> {
        match self.records.entry(record.id.clone()) {
            Entry::Occupied(mut occ) => {
                occ.insert(record);
                Ok(UpsertReport::replaced())
            }
            Entry::Vacant(vac) => {
                vac.insert(record);
                Ok(UpsertReport::inserted())
            }
        }
    }

    fn delete(&self, id: &SessionId) -> SessionResult<u64> {
        Ok(u64::from(self.records.remove(id).is_some()))
    }

    fn delete_updated_before(&self, cutoff: i64) -> SessionResult<u64> {
        let before = self.records.len();
        self.records.retain(|_, record| !record.is_stale(cutoff));
        Ok(before.saturating_sub(self.records.len()) as u64)
    }
}
