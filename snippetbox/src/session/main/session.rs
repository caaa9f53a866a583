use http::header::{COOKIE, HeaderMap};

use crate::session::config::{SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME, SESSION_COOKIE_SECURE};
use crate::session::errors::SessionError;
use crate::session::types::StoredSession;
use crate::storage::{CacheData, GENERIC_CACHE_STORE};
use crate::utils::{gen_random_string, header_set_cookie};

const SESSION_PREFIX: &str = "session";

pub(super) fn get_session_id_from_headers(
    headers: &HeaderMap,
) -> Result<Option<&str>, SessionError> {
    let Some(cookie_header) = headers.get(COOKIE) else {
        tracing::trace!("No cookie header found");
        return Ok(None);
    };

    let cookie_str = cookie_header.to_str().map_err(|e| {
        tracing::error!("Invalid cookie header: {}", e);
        SessionError::HeaderError("Invalid cookie header".to_string())
    })?;

    let cookie_name = SESSION_COOKIE_NAME.as_str();

    let session_id = cookie_str.split(';').map(|s| s.trim()).find_map(|s| {
        let mut parts = s.splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(k), Some(v)) if k == cookie_name && !v.is_empty() => Some(v),
            _ => None,
        }
    });

    if session_id.is_none() {
        tracing::trace!("No session cookie '{}' found in cookies", cookie_name);
    }

    Ok(session_id)
}

/// Load a live session. Unknown and expired ids are both `None`.
pub(super) async fn load_session(session_id: &str) -> Result<Option<StoredSession>, SessionError> {
    let cached = GENERIC_CACHE_STORE
        .lock()
        .await
        .get(SESSION_PREFIX, session_id)
        .await
        .map_err(|e| SessionError::Storage(e.to_string()))?;

    let Some(cached) = cached else {
        return Ok(None);
    };

    let stored: StoredSession = cached.try_into()?;
    if stored.is_expired() {
        tracing::debug!("Session expired");
        return Ok(None);
    }

    Ok(Some(stored))
}

/// The session named by the request cookie, if it is still live.
pub(super) async fn load_session_from_headers(
    headers: &HeaderMap,
) -> Result<Option<(String, StoredSession)>, SessionError> {
    let Some(session_id) = get_session_id_from_headers(headers)? else {
        return Ok(None);
    };

    Ok(load_session(session_id)
        .await?
        .map(|stored| (session_id.to_string(), stored)))
}

/// Write `stored` back under `session_id`, keeping its original expiry.
pub(super) async fn save_session(
    session_id: &str,
    stored: &StoredSession,
) -> Result<(), SessionError> {
    let data = CacheData::try_from(stored)?;

    GENERIC_CACHE_STORE
        .lock()
        .await
        .put_with_ttl(SESSION_PREFIX, session_id, data, stored.remaining_secs())
        .await
        .map_err(|e| SessionError::Storage(e.to_string()))
}

/// Store `stored` under a freshly generated id and return the `Set-Cookie`
/// headers that hand the id to the client.
pub(super) async fn create_session(stored: &StoredSession) -> Result<HeaderMap, SessionError> {
    let session_id = gen_random_string(32)?;
    save_session(&session_id, stored).await?;

    let max_age =
        i64::try_from(stored.ttl).map_err(|_| SessionError::InvalidLifetime(stored.ttl))?;

    let mut headers = HeaderMap::new();
    header_set_cookie(
        &mut headers,
        SESSION_COOKIE_NAME.as_str(),
        &session_id,
        max_age,
        *SESSION_COOKIE_SECURE,
    )?;

    tracing::debug!("New session created");
    Ok(headers)
}

pub(super) async fn delete_session(session_id: &str) -> Result<(), SessionError> {
    GENERIC_CACHE_STORE
        .lock()
        .await
        .remove(SESSION_PREFIX, session_id)
        .await
        .map_err(|e| SessionError::Storage(e.to_string()))
}

pub(super) fn new_stored_session() -> Result<StoredSession, SessionError> {
    StoredSession::new(*SESSION_COOKIE_MAX_AGE)
}
