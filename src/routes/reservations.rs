use axum::{extract::State, response::IntoResponse};

use crate::routes::AppState;
use crate::template::{filters, SiteMeta, Template};

#[derive(askama::Template)]
#[template(path = "reservations.html")]
pub struct ReservationsTemplate {
    pub current_path: &'static str,
    pub site: SiteMeta,
    pub locale: String,
}

/// Reservations are handled by a third-party service; this page only
/// links out.
pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    template.render(ReservationsTemplate {
        current_path: "reservations",
        site: SiteMeta::from(&app.config.site),
        locale: template.locale().to_owned(),
    })
}
