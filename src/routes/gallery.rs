use axum::{extract::State, response::IntoResponse};

use crate::routes::AppState;
use crate::template::{filters, SiteMeta, Template};

pub struct GalleryImage {
    pub src: &'static str,
    pub alt_key: &'static str,
}

/// Static asset table; the files live under `static/images/`.
const IMAGES: &[GalleryImage] = &[
    GalleryImage {
        src: "/static/images/dining-room.svg",
        alt_key: "gallery_dining_room",
    },
    GalleryImage {
        src: "/static/images/grill.svg",
        alt_key: "gallery_grill",
    },
    GalleryImage {
        src: "/static/images/mezze.svg",
        alt_key: "gallery_mezze",
    },
    GalleryImage {
        src: "/static/images/tea-service.svg",
        alt_key: "gallery_tea",
    },
    GalleryImage {
        src: "/static/images/terrace.svg",
        alt_key: "gallery_terrace",
    },
    GalleryImage {
        src: "/static/images/baklava.svg",
        alt_key: "gallery_baklava",
    },
];

#[derive(askama::Template)]
#[template(path = "gallery.html")]
pub struct GalleryTemplate {
    pub current_path: &'static str,
    pub site: SiteMeta,
    pub locale: String,
    pub images: &'static [GalleryImage],
}

pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    template.render(GalleryTemplate {
        current_path: "gallery",
        site: SiteMeta::from(&app.config.site),
        locale: template.locale().to_owned(),
        images: IMAGES,
    })
}
