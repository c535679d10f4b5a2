use axum::{extract::State, response::IntoResponse};

use crate::routes::AppState;
use crate::template::{filters, SiteMeta, Template};

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

const ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "faq_q_halal",
        answer: "faq_a_halal",
    },
    FaqEntry {
        question: "faq_q_vegetarian",
        answer: "faq_a_vegetarian",
    },
    FaqEntry {
        question: "faq_q_groups",
        answer: "faq_a_groups",
    },
    FaqEntry {
        question: "faq_q_delivery",
        answer: "faq_a_delivery",
    },
    FaqEntry {
        question: "faq_q_allergies",
        answer: "faq_a_allergies",
    },
];

#[derive(askama::Template)]
#[template(path = "faq.html")]
pub struct FaqTemplate {
    pub current_path: &'static str,
    pub site: SiteMeta,
    pub locale: String,
    pub entries: &'static [FaqEntry],
}

pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    template.render(FaqTemplate {
        current_path: "faq",
        site: SiteMeta::from(&app.config.site),
        locale: template.locale().to_owned(),
        entries: ENTRIES,
    })
}
