//! HTTP request handlers (page views)

pub mod auth;
pub mod health;
pub mod posts;

use actix_web::http::header::{self, ContentType};
use actix_web::HttpResponse;
use askama::Template;

use crate::error::Result;
use crate::security::MaybeUser;
use crate::templates::NotFoundTemplate;

/// Render a template to a 200 HTML response.
pub(crate) fn render<T: Template>(tpl: &T) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(tpl.render()?))
}

/// 302 redirect to a local path.
pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}

/// Default service: every unmatched route gets the 404 page.
pub async fn not_found(user: MaybeUser) -> Result<HttpResponse> {
    let body = NotFoundTemplate {
        current_username: user.username(),
    }
    .render()?;

    Ok(HttpResponse::NotFound()
        .content_type(ContentType::html())
        .body(body))
}
