use axum::{extract::State, response::IntoResponse};
use zagros_menu::MenuItem;

use crate::hours::{self, OpenStatus};
use crate::routes::AppState;
use crate::template::{filters, SiteMeta, Template};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub current_path: &'static str,
    pub site: SiteMeta,
    pub locale: String,
    pub is_open: bool,
    pub hours_label: String,
    pub featured: Vec<&'a MenuItem>,
    pub jsonld: String,
}

fn format_time(time: time::Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

#[tracing::instrument(skip_all)]
pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let locale = template.locale().to_owned();

    let now = hours::local_now(&app.config.site.timezone);
    let status = hours::status_at(now);
    let hours_label = match &status {
        OpenStatus::Open { until } => rust_i18n::t!(
            "open_until",
            locale = &locale,
            time = format_time(*until)
        )
        .to_string(),
        OpenStatus::Closed { opens_day, opens_at } => rust_i18n::t!(
            "closed_until",
            locale = &locale,
            day = rust_i18n::t!(opens_day.to_string(), locale = &locale),
            time = format_time(*opens_at)
        )
        .to_string(),
    };

    let jsonld = crate::seo::restaurant_jsonld(&app.config.site).to_string();

    template.render(IndexTemplate {
        current_path: "home",
        site: SiteMeta::from(&app.config.site),
        is_open: status.is_open(),
        hours_label,
        featured: app.catalog.featured(),
        locale,
        jsonld,
    })
}
