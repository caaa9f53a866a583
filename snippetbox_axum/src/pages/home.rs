use axum::response::Response;
use http::{HeaderMap, StatusCode};

use crate::render::{TemplateData, render};

pub(crate) async fn home(headers: HeaderMap) -> Result<Response, (StatusCode, String)> {
    render(&headers, "home.page.html", TemplateData::default()).await
}
