use axum::{extract::State, response::IntoResponse};

use crate::routes::AppState;
use crate::template::{filters, SiteMeta, Template};

#[derive(askama::Template)]
#[template(path = "order.html")]
pub struct OrderTemplate {
    pub current_path: &'static str,
    pub site: SiteMeta,
    pub locale: String,
}

/// Online ordering is an outbound link; no payment or order state lives
/// here.
pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    template.render(OrderTemplate {
        current_path: "order",
        site: SiteMeta::from(&app.config.site),
        locale: template.locale().to_owned(),
    })
}
