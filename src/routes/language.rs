use axum::{
    extract::Path,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::language::{is_supported, LANGUAGE_COOKIE};

const LANGUAGE_TTL_DAYS: i64 = 365;

/// POST /language/{locale} - remember the visitor's choice and go back
/// to the page the switcher was on.
pub async fn switch(
    jar: CookieJar,
    headers: HeaderMap,
    Path(locale): Path<String>,
) -> impl IntoResponse {
    if !is_supported(&locale) {
        return StatusCode::NOT_FOUND.into_response();
    }

    let cookie = Cookie::build((LANGUAGE_COOKIE, locale))
        .path("/")
        .max_age(time::Duration::days(LANGUAGE_TTL_DAYS))
        .same_site(SameSite::Lax)
        .build();

    let back = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("/");

    (jar.add(cookie), Redirect::to(back)).into_response()
}
