//! Carries the session token in an HTTP-only cookie.

use axum::http::HeaderMap;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::time::Duration;

pub const SESSION_COOKIE: &str = "token";

fn session_cookie(value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .build()
}

/// Adds the session cookie, living exactly as long as the token.
pub fn attach(jar: CookieJar, token: String, max_age: Duration, secure: bool) -> CookieJar {
    let mut cookie = session_cookie(token, secure);
    cookie.set_max_age(time::Duration::seconds(max_age.as_secs() as i64));
    jar.add(cookie)
}

/// Overwrites the session cookie with an empty, already-expired one.
///
/// The token itself stays valid until its own expiry.
pub fn clear(jar: CookieJar, secure: bool) -> CookieJar {
    let mut cookie = session_cookie(String::new(), secure);
    cookie.make_removal();
    jar.add(cookie)
}

/// Raw token from the request, if any. Absence is not an error.
pub fn extract(headers: &HeaderMap) -> Option<String> {
    CookieJar::from_headers(headers)
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_owned())
        .filter(|v| !v.is_empty())
}
