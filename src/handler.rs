use crate::error::SessionResult;
use crate::model::SessionId;

/// Save-handler contract a host runtime drives once per request.
///
/// Soft outcomes are reported through the boolean results: a `false` from
/// `write` or `destroy` is a warning for the host, not an error. Only storage
/// faults surface as `Err`.
pub trait SessionHandler: Send + Sync {
    /// Called when the host starts a session. `save_path` and `name` are the
    /// host's storage hints.
    fn open(&self, save_path: &str, name: &str) -> SessionResult<bool>;

    /// Called when the host is done with the session for this request.
    fn close(&self) -> SessionResult<bool>;

    /// Returns the stored payload, or an empty string when the session has
    /// never been written.
    fn read(&self, session_id: &SessionId) -> SessionResult<String>;

    /// Persists the payload and refreshes the session's last-write stamp.
    fn write(&self, session_id: &SessionId, session_data: &str) -> SessionResult<bool>;

    /// Removes the session; `false` when there was nothing to remove.
    fn destroy(&self, session_id: &SessionId) -> SessionResult<bool>;

    /// Removes every session not written during the last `maxlifetime` seconds.
    fn gc(&self, maxlifetime: i64) -> SessionResult<bool>;
}
