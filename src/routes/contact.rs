use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use serde::Deserialize;
use validator::Validate;

use crate::routes::AppState;
use crate::template::{filters, SiteMeta, Template, ToastErrorTemplate, ToastSuccessTemplate};

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub current_path: &'static str,
    pub site: SiteMeta,
    pub locale: String,
}

pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    template.render(ContactTemplate {
        current_path: "contact",
        site: SiteMeta::from(&app.config.site),
        locale: template.locale().to_owned(),
    })
}

#[derive(Deserialize, Validate)]
pub struct ActionInput {
    #[validate(length(min = 1, max = 80))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 120))]
    pub subject: String,
    #[validate(length(min = 10, max = 2000))]
    pub message: String,
}

/// POST /contact - validates and acknowledges. There is no mail
/// transport; the submission is logged for the restaurant staff.
#[tracing::instrument(skip_all)]
pub async fn action(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<ActionInput>,
) -> impl IntoResponse {
    if input.validate().is_err() {
        let message = rust_i18n::t!("contact_invalid", locale = template.locale()).to_string();
        return template.render(ToastErrorTemplate { message: &message });
    }

    tracing::info!(
        to = app.config.site.contact_address,
        from = input.email,
        subject = input.subject,
        "contact form submitted"
    );

    let message = rust_i18n::t!("contact_sent", locale = template.locale()).to_string();
    template.render(ToastSuccessTemplate { message: &message })
}
