//! Session tokens and the session cookie
//!
//! Logged-in state is a signed JWT carried in an HttpOnly cookie. Claims are
//! small enough that rendering the navigation needs no database round-trip.

use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::Result;
use crate::models::User;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "yatube_session";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub username: String,
    /// Token id
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issue a signed session token for a user.
pub fn issue_token(auth: &AuthConfig, user: &User) -> Result<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user.id.to_string(),
        username: user.username.clone(),
        jti: Uuid::new_v4().to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::hours(auth.session_ttl_hours)).timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(auth.session_secret.as_bytes()),
    )?;

    Ok(token)
}

/// Decode and validate a session token. Expiry is checked; any failure means
/// the request is treated as anonymous.
pub fn decode_token(
    auth: &AuthConfig,
    token: &str,
) -> std::result::Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(auth.session_secret.as_bytes()),
        &Validation::default(),
    )?;

    Ok(data.claims)
}

/// Build the session cookie carrying a freshly issued token.
pub fn session_cookie(auth: &AuthConfig, token: String) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(CookieDuration::hours(auth.session_ttl_hours))
        .finish()
}

/// Build a removal cookie that clears the session on the client.
pub fn clear_session_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();
    cookie.make_removal();
    cookie
}
