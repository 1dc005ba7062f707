/// Account views: signup, login, logout
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use super::render;
use crate::config::Config;
use crate::db::user_repo;
use crate::error::Result;
use crate::forms::{LoginForm, SignupForm};
use crate::security::{password, session, MaybeUser};
use crate::templates::{LoginTemplate, SignupTemplate};

#[derive(Debug, Deserialize)]
pub struct NextQuery {
    pub next: Option<String>,
}

/// Only ever redirect to a local path after login; anything else falls back
/// to the index page.
fn sanitize_next(next: Option<String>) -> String {
    match next {
        Some(n) if n.starts_with('/') && !n.starts_with("//") => n,
        _ => "/".to_string(),
    }
}

/// `GET /auth/login/`
pub async fn login_page(query: web::Query<NextQuery>, user: MaybeUser) -> Result<HttpResponse> {
    render(&LoginTemplate {
        current_username: user.username(),
        next: sanitize_next(query.into_inner().next),
        username: String::new(),
        errors: Vec::new(),
    })
}

/// `POST /auth/login/`
pub async fn login(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse> {
    let form = form.into_inner();
    let next = sanitize_next(form.next.clone());

    if let Some(user) = user_repo::find_user_by_username(&pool, &form.username).await? {
        if password::verify_password(&form.password, &user.password_hash)? {
            let token = session::issue_token(&config.auth, &user)?;
            tracing::info!(username = %user.username, "login");
            return Ok(HttpResponse::Found()
                .insert_header((actix_web::http::header::LOCATION, next))
                .cookie(session::session_cookie(&config.auth, token))
                .finish());
        }
    }

    // Same message for unknown user and wrong password.
    render(&LoginTemplate {
        current_username: None,
        next,
        username: form.username,
        errors: vec!["Please enter a correct username and password.".to_string()],
    })
}

/// `GET /auth/signup/`
pub async fn signup_page(user: MaybeUser) -> Result<HttpResponse> {
    render(&SignupTemplate {
        current_username: user.username(),
        username: String::new(),
        email: String::new(),
        errors: Vec::new(),
    })
}

/// `POST /auth/signup/` — create the account and log the new user in
pub async fn signup(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    form: web::Form<SignupForm>,
) -> Result<HttpResponse> {
    let form = form.into_inner();
    let errors = form.clean();

    if !errors.is_empty() {
        return render(&SignupTemplate {
            current_username: None,
            username: form.username,
            email: form.email,
            errors,
        });
    }

    let password_hash = password::hash_password(&form.password1)?;

    let user = match user_repo::create_user(&pool, &form.username, &form.email, &password_hash)
        .await
    {
        Ok(user) => user,
        Err(e) if user_repo::is_unique_violation(&e) => {
            return render(&SignupTemplate {
                current_username: None,
                username: form.username,
                email: form.email,
                errors: vec!["A user with that username already exists.".to_string()],
            });
        }
        Err(e) => return Err(e.into()),
    };

    let token = session::issue_token(&config.auth, &user)?;
    tracing::info!(username = %user.username, "signup");

    Ok(HttpResponse::Found()
        .insert_header((actix_web::http::header::LOCATION, "/"))
        .cookie(session::session_cookie(&config.auth, token))
        .finish())
}

/// `GET /auth/logout/` — clear the session cookie
pub async fn logout() -> Result<HttpResponse> {
    Ok(HttpResponse::Found()
        .insert_header((actix_web::http::header::LOCATION, "/"))
        .cookie(session::clear_session_cookie())
        .finish())
}
