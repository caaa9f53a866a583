use http::header::HeaderMap;

use crate::session::errors::SessionError;

use super::session::{
    create_session, delete_session, load_session_from_headers, new_stored_session, save_session,
};

/// Start an authenticated session for `user_id`.
///
/// Any session the request already carries is discarded and a new id is
/// issued, so a pre-login id never becomes an authenticated one.
#[tracing::instrument(skip(headers))]
pub async fn login_session(headers: &HeaderMap, user_id: i64) -> Result<HeaderMap, SessionError> {
    if let Some((old_id, _)) = load_session_from_headers(headers).await? {
        delete_session(&old_id).await?;
    }

    let mut stored = new_stored_session()?;
    stored.user_id = Some(user_id);
    let response_headers = create_session(&stored).await?;

    tracing::info!("User logged in");
    Ok(response_headers)
}

/// Drop the authenticated user from the session. The session itself
/// survives so a flash message can still be attached to it.
pub async fn logout_session(headers: &HeaderMap) -> Result<(), SessionError> {
    if let Some((session_id, mut stored)) = load_session_from_headers(headers).await? {
        if let Some(user_id) = stored.user_id.take() {
            save_session(&session_id, &stored).await?;
            tracing::info!(user_id, "User logged out");
        }
    }
    Ok(())
}

pub async fn get_authenticated_user_id(headers: &HeaderMap) -> Result<Option<i64>, SessionError> {
    Ok(load_session_from_headers(headers)
        .await?
        .and_then(|(_, stored)| stored.user_id))
}
