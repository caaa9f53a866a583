use http::header::HeaderMap;

use crate::session::errors::SessionError;

use super::session::{create_session, load_session_from_headers, new_stored_session, save_session};

/// Attach a one-shot message to the visitor's session.
///
/// A live session is updated in place and the returned headers are empty.
/// Otherwise a new session is started and the returned headers carry its
/// cookie.
pub async fn put_flash(headers: &HeaderMap, message: &str) -> Result<HeaderMap, SessionError> {
    match load_session_from_headers(headers).await? {
        Some((session_id, mut stored)) => {
            stored.flash = Some(message.to_string());
            save_session(&session_id, &stored).await?;
            Ok(HeaderMap::new())
        }
        None => {
            let mut stored = new_stored_session()?;
            stored.flash = Some(message.to_string());
            create_session(&stored).await
        }
    }
}

/// Take the flash message out of the session, if there is one.
pub async fn pop_flash(headers: &HeaderMap) -> Result<Option<String>, SessionError> {
    let Some((session_id, mut stored)) = load_session_from_headers(headers).await? else {
        return Ok(None);
    };

    let Some(flash) = stored.flash.take() else {
        return Ok(None);
    };

    save_session(&session_id, &stored).await?;
    Ok(Some(flash))
}
