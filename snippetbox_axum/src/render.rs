//! Page rendering backed by a fixed table of compiled templates

use std::collections::HashMap;
use std::sync::LazyLock;

use askama::Template;
use axum::response::{Html, IntoResponse, Response};
use chrono::{Datelike, Utc};
use http::{HeaderMap, StatusCode};
use snippetbox::{Form, get_authenticated_user_id, pop_flash};
use thiserror::Error;

use crate::error::{IntoResponseError, server_error};

/// Values available to every page template
#[derive(Debug, Default)]
pub(crate) struct TemplateData {
    pub(crate) current_year: i32,
    /// One-shot message popped from the session; empty when there is none
    pub(crate) flash: String,
    pub(crate) is_authenticated: bool,
    pub(crate) form: Form,
}

impl TemplateData {
    pub(crate) fn with_form(form: Form) -> Self {
        Self {
            form,
            ..Default::default()
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum RenderError {
    #[error("template {0} does not exist")]
    Missing(String),

    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

#[derive(Template)]
#[template(path = "home.page.html")]
struct HomePage<'a> {
    data: &'a TemplateData,
}

#[derive(Template)]
#[template(path = "signup.page.html")]
struct SignupPage<'a> {
    data: &'a TemplateData,
}

#[derive(Template)]
#[template(path = "login.page.html")]
struct LoginPage<'a> {
    data: &'a TemplateData,
}

type RenderFn = fn(&TemplateData) -> askama::Result<String>;

/// Page name to compiled template. Built on first use and read-only after.
static TEMPLATE_CACHE: LazyLock<HashMap<&'static str, RenderFn>> = LazyLock::new(|| {
    let mut cache: HashMap<&'static str, RenderFn> = HashMap::new();
    cache.insert("home.page.html", |data| HomePage { data }.render());
    cache.insert("signup.page.html", |data| SignupPage { data }.render());
    cache.insert("login.page.html", |data| LoginPage { data }.render());
    cache
});

fn lookup_template(name: &str) -> Result<RenderFn, RenderError> {
    TEMPLATE_CACHE
        .get(name)
        .copied()
        .ok_or_else(|| RenderError::Missing(name.to_string()))
}

async fn add_default_data(
    headers: &HeaderMap,
    mut data: TemplateData,
) -> Result<TemplateData, (StatusCode, String)> {
    data.current_year = Utc::now().year();
    data.flash = pop_flash(headers)
        .await
        .into_response_error()?
        .unwrap_or_default();
    data.is_authenticated = get_authenticated_user_id(headers)
        .await
        .into_response_error()?
        .is_some();
    Ok(data)
}

/// Render the page `name` for the request carrying `headers`.
///
/// A missing template or a failing render is logged and answered with a
/// bare 500. The page is rendered into a string first, so nothing partial
/// reaches the client. An unknown `name` leaves the session untouched.
pub(crate) async fn render(
    headers: &HeaderMap,
    name: &str,
    data: TemplateData,
) -> Result<Response, (StatusCode, String)> {
    let render_page = lookup_template(name).map_err(server_error)?;
    let data = add_default_data(headers, data).await?;
    let html = render_page(&data).map_err(|e| server_error(RenderError::from(e)))?;
    Ok(Html(html).into_response())
}
