use axum::{
    extract::FromRequestParts,
    response::{IntoResponse, Redirect, Response},
};
use http::{StatusCode, request::Parts};
use snippetbox::{UserStore, get_authenticated_user_id};

use crate::error::server_error;

pub(crate) const LOGIN_URL: &str = "/user/login";

/// Rejection of [`AuthUser`]: anonymous visitors are sent to the login page,
/// store failures become a 500.
pub enum AuthRejection {
    Redirect,
    Error((StatusCode, String)),
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Redirect => {
                tracing::debug!("Redirecting to {}", LOGIN_URL);
                Redirect::to(LOGIN_URL).into_response()
            }
            AuthRejection::Error(e) => e.into_response(),
        }
    }
}

/// The logged-in user, available as an Axum extractor
///
/// The session must name a user that still exists; otherwise the request is
/// redirected to the login page.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: i64,
    pub name: String,
    pub email: String,
}

async fn load_auth_user(parts: &Parts) -> Result<Option<AuthUser>, (StatusCode, String)> {
    let Some(user_id) = get_authenticated_user_id(&parts.headers)
        .await
        .map_err(server_error)?
    else {
        return Ok(None);
    };

    let user = UserStore::get(user_id).await.map_err(server_error)?;
    if user.is_none() {
        tracing::warn!(user_id, "Session refers to a missing user");
    }

    Ok(user.map(|u| AuthUser {
        id: u.id,
        name: u.name,
        email: u.email,
    }))
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        load_auth_user(parts)
            .await
            .map_err(AuthRejection::Error)?
            .ok_or(AuthRejection::Redirect)
    }
}
