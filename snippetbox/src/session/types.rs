use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::session::errors::SessionError;
use crate::storage::CacheData;

/// Server-side session state, serialized as JSON into the cache store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub(super) struct StoredSession {
    /// One-shot message shown on the next rendered page
    #[serde(default)]
    pub(super) flash: Option<String>,
    #[serde(default)]
    pub(super) user_id: Option<i64>,
    pub(super) expires_at: DateTime<Utc>,
    pub(super) ttl: u64,
}

impl StoredSession {
    pub(super) fn new(ttl: u64) -> Result<Self, SessionError> {
        let expires_at = i64::try_from(ttl)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
            .ok_or(SessionError::InvalidLifetime(ttl))?;

        Ok(Self {
            flash: None,
            user_id: None,
            expires_at,
            ttl,
        })
    }

    pub(super) fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }

    /// Seconds left before expiry, never less than one
    pub(super) fn remaining_secs(&self) -> usize {
        let secs = (self.expires_at - Utc::now()).num_seconds().max(1);
        usize::try_from(secs).unwrap_or(usize::MAX)
    }
}

impl TryFrom<&StoredSession> for CacheData {
    type Error = SessionError;

    fn try_from(data: &StoredSession) -> Result<Self, Self::Error> {
        Ok(Self {
            value: serde_json::to_string(data).map_err(|e| SessionError::Storage(e.to_string()))?,
        })
    }
}

impl TryFrom<CacheData> for StoredSession {
    type Error = SessionError;

    fn try_from(data: CacheData) -> Result<Self, Self::Error> {
        serde_json::from_str(&data.value).map_err(|e| SessionError::Storage(e.to_string()))
    }
}
