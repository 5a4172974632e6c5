use crate::config::DEFAULT_TABLE;
use crate::error::{redis_error, serde_error, SessionResult};
use crate::model::{SessionId, SessionRecord, UpsertReport};
use crate::table::SessionTable;
use parking_lot::Mutex;
use redis::{Client, Commands, Connection, Script};

// KEYS[1] = expiry index, ARGV[1] = cutoff, ARGV[2] = document key prefix.
const GC_SCRIPT: &str = r"
local stale = redis.call('ZRANGEBYSCORE', KEYS[1], '-inf', '(' .. ARGV[1])
for _, id in ipairs(stale) do
  redis.call('DEL', ARGV[2] .. id)
end
redis.call('ZREMRANGEBYSCORE', KEYS[1], '-inf', '(' .. ARGV[1])
return #stale
";

/// Redis-backed session table.
///
/// Each session is a JSON document at `{table}:session:{id}`; the sorted set
/// `{table}:updated` scores ids by their `updated` stamp so gc can sweep by
/// range. Upserts rely on `SET ... GET`, which needs Redis 6.2 or newer.
/// The gc script derives document keys from a prefix instead of declaring
/// them in `KEYS`, so it only runs against standalone Redis, not Redis Cluster.
pub struct RedisSessionTable {
    conn: Mutex<Connection>,
    namespace: String,
    gc_script: Script,
}

impl RedisSessionTable {
    /// Wraps an established connection using the default table name.
    pub fn new(conn: Connection) -> Self {
        Self::with_namespace(conn, DEFAULT_TABLE)
    }

    /// Wraps an established connection, storing documents under `namespace`.
    pub fn with_namespace(conn: Connection, namespace: impl Into<String>) -> Self {
        Self {
            conn: Mutex::new(conn),
            namespace: namespace.into(),
            gc_script: Script::new(GC_SCRIPT),
        }
    }

    /// Opens a connection from a Redis URL and uses the default table name.
    pub fn from_url(url: impl AsRef<str>) -> SessionResult<Self> {
        Self::from_url_with_namespace(url, DEFAULT_TABLE)
    }

    /// Opens a connection from a Redis URL and stores documents under `namespace`.
    pub fn from_url_with_namespace(
        url: impl AsRef<str>,
        namespace: impl Into<String>,
    ) -> SessionResult<Self> {
        let client = Client::open(url.as_ref()).map_err(redis_error)?;
        let conn = client.get_connection().map_err(redis_error)?;
        Ok(Self::with_namespace(conn, namespace))
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn document_prefix(&self) -> String {
        format!("{}:session:", self.namespace)
    }

    fn document_key(&self, id: &SessionId) -> String {
        format!("{}{}", self.document_prefix(), id.as_str())
    }

    fn expiry_index_key(&self) -> String {
        format!("{}:updated", self.namespace)
    }

    fn serialize(record: &SessionRecord) -> SessionResult<String> {
        serde_json::to_string(record).map_err(serde_error)
    }

    fn deserialize(payload: String) -> SessionResult<SessionRecord> {
        serde_json::from_str(&payload).map_err(serde_error)
    }
}

impl SessionTable for RedisSessionTable {
    fn get(&self, id: &SessionId) -> SessionResult<Option<SessionRecord>> {
        let mut conn = self.conn.lock();
        let payload: Option<String> = conn.get(self.document_key(id)).map_err(redis_error)?;
        payload.map(Self::deserialize).transpose()
    }

    fn upsert(&self, record: SessionRecord) -> SessionResult<UpsertReport> {
        let key = self.document_key(&record.id);
        let payload = Self::serialize(&record)?;
        let mut conn = self.conn.lock();
        let (previous,): (Option<String>,) = redis::pipe()
            .atomic()
            .cmd("SET")
            .arg(&key)
            .arg(payload)
            .arg("GET")
            .cmd("ZADD")
            .arg(self.expiry_index_key())
            .arg(record.updated)
            .arg(record.id.as_str())
            .ignore()
            .query(&mut *conn)
            .map_err(redis_error)?;
        Ok(match previous {
            Some(_) => UpsertReport::replaced(),
            None => UpsertReport::inserted(),
        })
    }

    fn delete(&self, id: &SessionId) -> SessionResult<u64> {
        let mut conn = self.conn.lock();
        let (deleted,): (u64,) = redis::pipe()
            .atomic()
            .del(self.document_key(id))
            .zrem(self.expiry_index_key(), id.as_str())
            .ignore()
            .query(&mut *conn)
            .map_err(redis_error)?;
        Ok(deleted)
    }

    fn delete_updated_before(&self, cutoff: i64) -> SessionResult<u64> {
        let mut conn = self.conn.lock();
        self.gc_script
            .key(self.expiry_index_key())
            .arg(cutoff)
            .arg(self.document_prefix())
            .invoke(&mut *conn)
            .map_err(redis_error)
    }
}
