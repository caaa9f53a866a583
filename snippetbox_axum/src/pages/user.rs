use std::collections::HashMap;

use axum::{
    Form as FormData,
    response::{IntoResponse, Redirect, Response},
};
use http::{HeaderMap, StatusCode};
use snippetbox::{Form, UserError, UserStore, login_session, logout_session, put_flash};

use crate::error::{IntoResponseError, server_error};
use crate::render::{TemplateData, render};
use crate::session::{AuthUser, LOGIN_URL};

pub(crate) async fn signup_form(headers: HeaderMap) -> Result<Response, (StatusCode, String)> {
    render(&headers, "signup.page.html", TemplateData::default()).await
}

pub(crate) async fn signup(
    headers: HeaderMap,
    FormData(values): FormData<HashMap<String, String>>,
) -> Result<Response, (StatusCode, String)> {
    let mut form = Form::new(values);
    form.required(&["name", "email", "password"]);
    form.max_length("name", 255);
    form.max_length("email", 255);
    form.matches_email("email");
    form.min_length("password", 10);

    if !form.valid() {
        return render(&headers, "signup.page.html", TemplateData::with_form(form)).await;
    }

    let result = UserStore::insert(form.get("name"), form.get("email"), form.get("password")).await;
    match result {
        Ok(_) => {}
        Err(UserError::DuplicateEmail) => {
            form.errors.add("email", "Address is already in use");
            return render(&headers, "signup.page.html", TemplateData::with_form(form)).await;
        }
        Err(e) => return Err(server_error(e)),
    }

    let cookie_headers = put_flash(&headers, "Your signup was successful. Please log in.")
        .await
        .into_response_error()?;

    Ok((cookie_headers, Redirect::to(LOGIN_URL)).into_response())
}

pub(crate) async fn login_form(headers: HeaderMap) -> Result<Response, (StatusCode, String)> {
    render(&headers, "login.page.html", TemplateData::default()).await
}

pub(crate) async fn login(
    headers: HeaderMap,
    FormData(values): FormData<HashMap<String, String>>,
) -> Result<Response, (StatusCode, String)> {
    let mut form = Form::new(values);

    let result = UserStore::authenticate(form.get("email"), form.get("password")).await;
    let user_id = match result {
        Ok(id) => id,
        Err(UserError::InvalidCredentials) => {
            form.errors.add("generic", "Email or Password is incorrect");
            return render(&headers, "login.page.html", TemplateData::with_form(form)).await;
        }
        Err(e) => return Err(server_error(e)),
    };

    let cookie_headers = login_session(&headers, user_id)
        .await
        .into_response_error()?;

    Ok((cookie_headers, Redirect::to("/")).into_response())
}

pub(crate) async fn logout(
    user: AuthUser,
    headers: HeaderMap,
) -> Result<Response, (StatusCode, String)> {
    tracing::debug!(user_id = user.id, "Logging out");

    logout_session(&headers).await.into_response_error()?;
    let cookie_headers = put_flash(&headers, "You've been logged out successfully!")
        .await
        .into_response_error()?;

    Ok((cookie_headers, Redirect::to("/")).into_response())
}
