use axum::{extract::State, http::header, response::IntoResponse};

use crate::routes::AppState;

const PAGES: &[&str] = &[
    "/",
    "/menu",
    "/about",
    "/gallery",
    "/faq",
    "/contact",
    "/reservations",
    "/order",
];

/// GET /sitemap.xml
pub async fn sitemap(State(app): State<AppState>) -> impl IntoResponse {
    let base = app.config.site.base_url.trim_end_matches('/');

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for page in PAGES {
        xml.push_str(&format!("  <url><loc>{base}{page}</loc></url>\n"));
    }
    xml.push_str("</urlset>\n");

    ([(header::CONTENT_TYPE, "application/xml")], xml)
}

/// GET /robots.txt
pub async fn robots(State(app): State<AppState>) -> impl IntoResponse {
    let base = app.config.site.base_url.trim_end_matches('/');
    (
        [(header::CONTENT_TYPE, "text/plain")],
        format!("User-agent: *\nAllow: /\nSitemap: {base}/sitemap.xml\n"),
    )
}
