//! Request extractors for the logged-in user
//!
//! `MaybeUser` never fails: a missing, expired or tampered cookie simply
//! means an anonymous request. `CurrentUser` guards the write views and
//! turns an anonymous request into the login redirect, carrying the
//! originally requested path in `next`.

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use std::future::{ready, Ready};

use crate::config::Config;
use crate::error::AppError;
use crate::security::session::{self, SESSION_COOKIE};

/// Identity decoded from the session cookie.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
}

/// Optional identity for public pages (navigation state).
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<SessionUser>);

impl MaybeUser {
    pub fn username(&self) -> Option<String> {
        self.0.as_ref().map(|u| u.username.clone())
    }

    pub fn id(&self) -> Option<i64> {
        self.0.as_ref().map(|u| u.id)
    }
}

/// Required identity for the authenticated views.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub SessionUser);

fn session_user(req: &HttpRequest) -> Option<SessionUser> {
    let config = req.app_data::<web::Data<Config>>()?;
    let cookie = req.cookie(SESSION_COOKIE)?;
    let claims = session::decode_token(&config.auth, cookie.value()).ok()?;
    let id = claims.sub.parse().ok()?;
    Some(SessionUser {
        id,
        username: claims.username,
    })
}

/// Rebuild the requested path for the login `next` parameter. The path
/// itself is already URL-safe; only an attached query string needs
/// percent-encoding to survive as a parameter value.
fn login_next(req: &HttpRequest) -> String {
    let query = req.query_string();
    if query.is_empty() {
        req.path().to_string()
    } else {
        format!(
            "{}{}",
            req.path(),
            urlencoding::encode(&format!("?{}", query))
        )
    }
}

impl FromRequest for MaybeUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(MaybeUser(session_user(req))))
    }
}

impl FromRequest for CurrentUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(match session_user(req) {
            Some(user) => Ok(CurrentUser(user)),
            None => Err(AppError::LoginRequired {
                next: login_next(req),
            }
            .into()),
        })
    }
}
