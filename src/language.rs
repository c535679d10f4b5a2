use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use std::convert::Infallible;

pub const SUPPORTED_LOCALES: &[&str] = &["en", "ku"];
pub const DEFAULT_LOCALE: &str = "en";
pub const LANGUAGE_COOKIE: &str = "preferred_language";

/// Languages the visitor asked for, most preferred first. The explicit
/// cookie choice wins over `Accept-Language`; entries outside
/// [`SUPPORTED_LOCALES`] are dropped.
pub struct UserLanguage {
    languages: Vec<String>,
}

impl UserLanguage {
    pub fn preferred_languages(&self) -> &[String] {
        &self.languages
    }

    pub fn preferred(&self) -> &str {
        self.languages
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_LOCALE)
    }
}

pub fn is_supported(locale: &str) -> bool {
    SUPPORTED_LOCALES.contains(&locale)
}

fn cookie_locale(parts: &Parts) -> Option<String> {
    let raw = parts.headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == LANGUAGE_COOKIE && is_supported(value)).then(|| value.to_owned())
    })
}

fn accept_language_locales(parts: &Parts) -> Vec<(String, f32)> {
    let Some(raw) = parts
        .headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
    else {
        return Vec::new();
    };

    raw.split(',')
        .filter_map(|entry| {
            let mut parts = entry.trim().split(';');
            let tag = parts.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }

            let quality = parts
                .find_map(|param| param.trim().strip_prefix("q="))
                .and_then(|q| q.parse::<f32>().ok())
                .unwrap_or(1.0);

            // "en-GB" counts as "en".
            let base = tag.split('-').next().unwrap_or(tag).to_lowercase();
            is_supported(&base).then_some((base, quality))
        })
        .collect()
}

impl<S: Send + Sync> FromRequestParts<S> for UserLanguage {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let mut languages = Vec::new();

        if let Some(locale) = cookie_locale(parts) {
            languages.push(locale);
        }

        let mut accepted = accept_language_locales(parts);
        accepted.sort_by(|a, b| b.1.total_cmp(&a.1));
        for (locale, _) in accepted {
            if !languages.contains(&locale) {
                languages.push(locale);
            }
        }

        if languages.is_empty() {
            languages.push(DEFAULT_LOCALE.to_owned());
        }

        Ok(UserLanguage { languages })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(cookie: Option<&str>, accept: Option<&str>) -> UserLanguage {
        let mut builder = Request::builder().uri("/");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        if let Some(accept) = accept {
            builder = builder.header(header::ACCEPT_LANGUAGE, accept);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        UserLanguage::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn defaults_to_english() {
        let language = extract(None, None).await;
        assert_eq!(language.preferred(), "en");
    }

    #[tokio::test]
    async fn accept_language_is_ordered_by_quality() {
        let language = extract(None, Some("en;q=0.5, ku;q=0.9")).await;
        assert_eq!(language.preferred(), "ku");
    }

    #[tokio::test]
    async fn cookie_wins_over_header() {
        let language = extract(Some("preferred_language=ku"), Some("en")).await;
        assert_eq!(language.preferred(), "ku");
    }

    #[tokio::test]
    async fn unsupported_values_are_dropped() {
        let language = extract(Some("preferred_language=fr"), Some("de, en-GB;q=0.7")).await;
        assert_eq!(language.preferred(), "en");
    }
}
