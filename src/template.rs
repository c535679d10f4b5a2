use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    RequestPartsExt,
    extract::FromRequestParts,
    http::request::Parts,
};
use std::{collections::HashMap, convert::Infallible};

use crate::language::UserLanguage;

/// Site identity shared by every page template (header, footer, JSON-LD).
#[derive(Debug, Clone)]
pub struct SiteMeta {
    pub name: String,
    pub base_url: String,
    pub phone: String,
    pub street_address: String,
    pub contact_address: String,
    pub order_url: String,
    pub reservation_url: String,
}

impl From<&crate::config::SiteConfig> for SiteMeta {
    fn from(site: &crate::config::SiteConfig) -> Self {
        Self {
            name: site.name.clone(),
            base_url: site.base_url.clone(),
            phone: site.phone.clone(),
            street_address: site.street_address.clone(),
            contact_address: site.contact_address.clone(),
            order_url: site.order_url.clone(),
            reservation_url: site.reservation_url.clone(),
        }
    }
}

pub(crate) mod filters {
    #[askama::filter_fn]
    pub fn t(value: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let preferred_language = askama::get_value::<String>(values, "preferred_language")
            .expect("Unable to get preferred_language from askama::get_value");

        Ok(rust_i18n::t!(value, locale = preferred_language).to_string())
    }

    #[askama::filter_fn]
    pub fn price(value: &f64, _values: &dyn askama::Values) -> askama::Result<String> {
        Ok(format!("€{value:.2}"))
    }

    #[askama::filter_fn]
    pub fn spice(level: &u8, _values: &dyn askama::Values) -> askama::Result<String> {
        Ok("🌶".repeat(usize::from(*level)))
    }

    #[askama::filter_fn]
    pub fn calories(value: &u32, _values: &dyn askama::Values) -> askama::Result<String> {
        Ok(format!("{value} kcal"))
    }
}

pub struct Template {
    preferred_language: String,
}

impl Template {
    pub fn locale(&self) -> &str {
        &self.preferred_language
    }

    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert(
            "preferred_language",
            Box::new(self.preferred_language.to_owned()),
        );

        template.render_with_values(&values)
    }

    pub fn to_string<T: askama::Template>(&self, template: T) -> String {
        match self.render_with_values(template) {
            Ok(html) => html,
            Err(err) => format!("Failed to render template. Error: {err}"),
        }
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("Failed to render template: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_language = parts
            .extract::<UserLanguage>()
            .await
            .expect("Unable to extract user languages");

        Ok(Template {
            preferred_language: user_language.preferred().to_owned(),
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate;

#[derive(askama::Template)]
#[template(path = "partials/toast-success.html")]
pub struct ToastSuccessTemplate<'a> {
    pub message: &'a str,
}

#[derive(askama::Template)]
#[template(path = "partials/toast-error.html")]
pub struct ToastErrorTemplate<'a> {
    pub message: &'a str,
}

#[macro_export]
macro_rules! try_page_response {
    (sync: $result:expr, $template:expr) => {
        match $result {
            Ok(r) => r,
            Err(err) => {
                tracing::error!("{err}");

                return axum::response::IntoResponse::into_response(
                    (
                        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                        $template.render($crate::template::ServerTemplate),
                    ),
                );
            }
        }
    };

    (opt: $result:expr, $template:expr) => {
        match $result {
            Some(r) => r,
            _ => {
                return axum::response::IntoResponse::into_response((
                    axum::http::StatusCode::NOT_FOUND,
                    $template.render($crate::template::NotFoundTemplate),
                ));
            }
        }
    };
}
