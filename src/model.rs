use crate::error::{invalid_argument, SessionError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Session identifier handed over by the host runtime. Opaque apart from
/// being non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionId(String);

impl SessionId {
    /// Borrows the underlying identifier as `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SessionId {
    type Error = SessionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(invalid_argument("session id must not be empty"));
        }
        Ok(Self(value))
    }
}

impl TryFrom<&str> for SessionId {
    type Error = SessionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_owned())
    }
}

impl From<SessionId> for String {
    fn from(id: SessionId) -> Self {
        id.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One persisted session document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct SessionRecord {
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub id: SessionId,
    /// Unix seconds of the last write.
    pub updated: i64,
    /// Serialized session variables, never interpreted here.
    pub session_data: String,
}

impl SessionRecord {
    pub fn new(id: SessionId, updated: i64, session_data: impl Into<String>) -> Self {
        Self {
            id,
            updated,
            session_data: session_data.into(),
        }
    }

    /// Whether a gc sweep with the given cutoff removes this record.
    pub fn is_stale(&self, cutoff: i64) -> bool {
        self.updated < cutoff
    }
}

/// Counts reported by an upsert, mirroring document stores that split
/// inserted and replaced documents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpsertReport {
    pub inserted: u64,
    pub replaced: u64,
}

impl UpsertReport {
    pub const fn inserted() -> Self {
        Self {
            inserted: 1,
            replaced: 0,
        }
    }

    pub const fn replaced() -> Self {
        Self {
            inserted: 0,
            replaced: 1,
        }
    }

    /// Total documents written by the upsert.
    pub const fn affected(self) -> u64 {
        self.inserted + self.replaced
    }
}
