use axum::{response::IntoResponse, routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use zagros_menu::Catalog;

use crate::template::{NotFoundTemplate, Template};

mod about;
mod assets;
mod contact;
mod faq;
mod gallery;
mod health;
mod index;
mod language;
mod menu;
mod order;
mod reservations;
mod sitemap;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub catalog: Arc<Catalog>,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (
        axum::http::StatusCode::NOT_FOUND,
        template.render(NotFoundTemplate),
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Probes (no state beyond the catalog)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(index::page))
        .route("/menu", get(menu::page))
        .route("/menu/item/{id}", get(menu::item_detail))
        .route("/menu/view/{id}", post(menu::track_view))
        .route("/about", get(about::page))
        .route("/gallery", get(gallery::page))
        .route("/faq", get(faq::page))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/reservations", get(reservations::page))
        .route("/order", get(order::page))
        .route("/language/{locale}", post(language::switch))
        .route("/sitemap.xml", get(sitemap::sitemap))
        .route("/robots.txt", get(sitemap::robots))
        .fallback(fallback)
        .nest_service("/static", assets::AssetsService::new())
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
}
