//! The `admin_session` cookie.
//!
//! Browser navigation to the dashboard page cannot attach an
//! `Authorization` header, so login also hands the access token back as an
//! `HttpOnly` cookie scoped to the whole site.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Name of the cookie carrying the access token.
pub const SESSION_COOKIE: &str = "admin_session";

/// Build the session cookie storing `token` for `max_age_secs` seconds.
pub fn session_cookie(token: String, max_age_secs: i64, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .max_age(Duration::seconds(max_age_secs))
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(secure)
        .build()
}

/// Build a cookie that overwrites the session cookie and expires it at once.
pub fn clear_session_cookie(secure: bool) -> Cookie<'static> {
    session_cookie(String::new(), 0, secure)
}

/// The access token carried by the session cookie, if any.
pub fn session_token(jar: &CookieJar) -> Option<&str> {
    jar.get(SESSION_COOKIE)
        .map(|cookie| cookie.value())
        .filter(|value| !value.is_empty())
}
