use axum::http::{header, HeaderMap, HeaderValue};
use tower_sessions::cookie::{Cookie, SameSite};

use crate::server::error::Error;

/// Name of the cookie carrying the signed token
pub static JWT_COOKIE: &str = "jwt";

/// `Set-Cookie` value storing `token` for `max_age_secs`
pub fn token_cookie(token: &str, max_age_secs: i64, secure: bool) -> Result<HeaderValue, Error> {
    let cookie = Cookie::build((JWT_COOKIE, token.to_string()))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(max_age_secs))
        .build();

    HeaderValue::from_str(&cookie.to_string())
        .map_err(|e| Error::InternalError(format!("Invalid Set-Cookie value: {}", e)))
}

/// `Set-Cookie` value expiring the token cookie immediately
pub fn cleared_cookie(secure: bool) -> Result<HeaderValue, Error> {
    token_cookie("", 0, secure)
}

/// Token from `Authorization: Bearer`, falling back to the `jwt` cookie
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers.get(header::AUTHORIZATION) {
        if let Some(token) = value
            .to_str()
            .ok()
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
        {
            return Some(token.to_string());
        }
    }

    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == JWT_COOKIE && !cookie.value().is_empty())
        .map(|cookie| cookie.value().to_string())
}
