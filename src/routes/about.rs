use axum::{extract::State, response::IntoResponse};

use crate::routes::AppState;
use crate::template::{filters, SiteMeta, Template};

#[derive(askama::Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub current_path: &'static str,
    pub site: SiteMeta,
    pub locale: String,
}

pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    template.render(AboutTemplate {
        current_path: "about",
        site: SiteMeta::from(&app.config.site),
        locale: template.locale().to_owned(),
    })
}
